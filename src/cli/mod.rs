use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::SplitService;
use crate::domain::{format_cents, format_cents_rounded, BalanceStatus, Cents, MEMBER_COUNT};
use crate::storage::Store;

/// Roomsplit - Shared Expense Tracker
#[derive(Parser)]
#[command(name = "roomsplit")]
#[command(about = "A local-first expense tracker for a five-person household")]
#[command(version)]
pub struct Cli {
    /// Directory holding the ledger documents
    #[arg(short, long, default_value = ".")]
    pub data_dir: String,

    /// Currency prefix used when printing amounts
    #[arg(long, global = true, default_value = "QAR")]
    pub currency: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Member who paid (one of the five roster names)
        member: String,

        /// Amount paid (e.g., "50.00" or "50")
        amount: String,

        /// Spending category (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,

        /// Free-form note
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Member roster commands
    #[command(subcommand)]
    Members(MemberCommands),

    /// Show totals and the per-member settlement list
    Balance,

    /// List expenses, newest first
    Expenses {
        /// Maximum number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the expense log to CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List the roster in slot order
    List,

    /// Replace all five roster names at once
    Set {
        /// The five member names, in slot order
        #[arg(num_args = 5, value_name = "NAME")]
        names: Vec<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = Store::open(&self.data_dir);
        let (mut service, warnings) = SplitService::open(store)?;
        for warning in &warnings {
            eprintln!("warning: {}", warning);
        }

        match self.command {
            Commands::Add {
                member,
                amount,
                category,
                description,
            } => {
                let expense = service.add_expense(&member, &amount, category, description)?;
                println!(
                    "Recorded expense: {} paid by {} ({})",
                    fmt_amount(&self.currency, expense.amount_cents),
                    expense.member,
                    expense.id
                );
            }

            Commands::Members(member_cmd) => {
                run_members_command(&mut service, member_cmd)?;
            }

            Commands::Balance => {
                run_balance_command(&service, &self.currency);
            }

            Commands::Expenses { limit } => {
                run_expenses_command(&service, &self.currency, limit);
            }

            Commands::Export { output } => {
                run_export_command(&service, output.as_deref())?;
            }
        }

        Ok(())
    }
}

fn run_members_command(service: &mut SplitService, cmd: MemberCommands) -> Result<()> {
    match cmd {
        MemberCommands::List => {
            for (slot, name) in service.roster().iter().enumerate() {
                println!("{}. {}", slot + 1, name);
            }
        }

        MemberCommands::Set { names } => {
            service.rename_members(names)?;
            println!(
                "Updated {} members: {}",
                MEMBER_COUNT,
                service.roster().names().join(", ")
            );
        }
    }
    Ok(())
}

fn run_balance_command(service: &SplitService, currency: &str) {
    let totals = service.totals();

    println!("Total:      {}", fmt_amount(currency, totals.total));
    println!(
        "Per person: {}",
        fmt_amount_rounded(currency, totals.per_person_share())
    );
    println!();

    println!("{:<15} {:>12}  STATUS", "MEMBER", "PAID");
    println!("{}", "-".repeat(50));

    for balance in service.balances() {
        let status = match balance.status {
            BalanceStatus::Settled => "Settled".to_string(),
            BalanceStatus::ShouldReceive(cents) => {
                format!("Should receive {}", fmt_amount_rounded(currency, cents))
            }
            BalanceStatus::Owes(cents) => {
                format!("Owes {}", fmt_amount_rounded(currency, cents))
            }
        };

        println!(
            "{:<15} {:>12}  {}",
            truncate(&balance.member, 15),
            fmt_amount(currency, balance.paid),
            status
        );
    }
}

fn run_expenses_command(service: &SplitService, currency: &str, limit: Option<usize>) {
    let expenses = service.recent_expenses();

    if expenses.is_empty() {
        println!("No expenses recorded.");
        return;
    }

    println!(
        "{:<10} {:>12} {:<15} {:<12} DESCRIPTION",
        "DATE", "AMOUNT", "MEMBER", "CATEGORY"
    );
    println!("{}", "-".repeat(70));

    for expense in expenses.iter().take(limit.unwrap_or(usize::MAX)) {
        let date = expense.timestamp.format("%d %b %y");
        let description = expense.description.as_deref().unwrap_or("");

        println!(
            "{:<10} {:>12} {:<15} {:<12} {}",
            date,
            fmt_amount(currency, expense.amount_cents),
            truncate(&expense.member, 15),
            truncate(&expense.category, 12),
            truncate(description, 30)
        );
    }
}

fn run_export_command(service: &SplitService, output: Option<&str>) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;
    use std::io::{stdout, Write};

    let exporter = Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let count = exporter.export_expenses_csv(writer)?;
    if output.is_some() {
        eprintln!("Exported {} expenses", count);
    }

    Ok(())
}

fn fmt_amount(currency: &str, cents: Cents) -> String {
    format!("{} {}", currency, format_cents(cents))
}

fn fmt_amount_rounded(currency: &str, cents: f64) -> String {
    format!("{} {}", currency, format_cents_rounded(cents))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
