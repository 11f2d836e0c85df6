use chrono::Utc;

use crate::domain::{parse_cents, Expense, Ledger, MemberBalance, Roster, Totals};
use crate::storage::{LoadWarning, Store};

use super::AppError;

/// Application service providing high-level operations for the shared
/// ledger. This is the primary interface for any client (CLI, tests).
/// State is loaded once at startup and persisted in full after every
/// mutation.
pub struct SplitService {
    store: Store,
    ledger: Ledger,
}

impl SplitService {
    /// Load state from the store. Documents that fail to load fall back
    /// to their defaults; the returned warnings say what was reset.
    pub fn open(store: Store) -> Result<(Self, Vec<LoadWarning>), AppError> {
        let (roster, members_warning) = store.load_members()?;
        let (expenses, expenses_warning) = store.load_expenses()?;

        let warnings = members_warning
            .into_iter()
            .chain(expenses_warning)
            .collect();

        Ok((
            Self {
                store,
                ledger: Ledger::new(roster, expenses),
            },
            warnings,
        ))
    }

    // ========================
    // Expense operations
    // ========================

    /// Record a new expense. The amount is taken as entered and must
    /// parse to a positive number of cents; the member must be one of
    /// the five current roster names.
    pub fn add_expense(
        &mut self,
        member: &str,
        amount: &str,
        category: Option<String>,
        description: Option<String>,
    ) -> Result<Expense, AppError> {
        let member = member.trim();
        if member.is_empty() {
            return Err(AppError::EmptyMember);
        }
        if !self.ledger.roster().contains(member) {
            return Err(AppError::UnknownMember(member.to_string()));
        }

        let amount_cents =
            parse_cents(amount).map_err(|_| AppError::InvalidAmount(amount.to_string()))?;
        if amount_cents <= 0 {
            return Err(AppError::NonPositiveAmount);
        }

        let mut expense = Expense::new(member, amount_cents, Utc::now());
        if let Some(category) = category {
            expense = expense.with_category(category);
        }
        if let Some(description) = description {
            let description = description.trim().to_string();
            if !description.is_empty() {
                expense = expense.with_description(description);
            }
        }

        self.ledger.append(expense.clone());
        self.store.save_expenses(self.ledger.expenses())?;
        Ok(expense)
    }

    /// Expenses in display order, newest first.
    pub fn recent_expenses(&self) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.ledger.expenses().iter().collect();
        expenses.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        expenses
    }

    /// Expenses in recorded order.
    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    // ========================
    // Roster operations
    // ========================

    /// Replace all five roster names and remap existing expenses by
    /// slot. Validation failures leave both roster and expenses
    /// untouched.
    pub fn rename_members(&mut self, new_names: Vec<String>) -> Result<(), AppError> {
        let roster = Roster::parse(new_names)?;
        self.ledger.rename_members(roster);
        self.store.save_members(self.ledger.roster())?;
        self.store.save_expenses(self.ledger.expenses())?;
        Ok(())
    }

    pub fn roster(&self) -> &Roster {
        self.ledger.roster()
    }

    // ========================
    // Derived views
    // ========================

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn balances(&self) -> Vec<MemberBalance> {
        self.ledger.balances()
    }
}
