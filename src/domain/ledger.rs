use std::collections::HashMap;

use super::{Cents, Expense, Roster};

/// Derived totals for the full expense sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Sum of all expense amounts, including expenses attributed to
    /// names outside the current roster.
    pub total: Cents,
    pub member_count: usize,
    /// Amount paid per roster member, in slot order. Members with no
    /// expenses show 0.
    pub paid_by_member: Vec<(String, Cents)>,
}

impl Totals {
    /// Equal share of the total per member, in cents. The roster is
    /// always 5 in practice; an empty roster yields a zero share.
    pub fn per_person_share(&self) -> f64 {
        if self.member_count == 0 {
            0.0
        } else {
            self.total as f64 / self.member_count as f64
        }
    }
}

/// A member's position relative to the equal per-person share.
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceStatus {
    /// Within one cent of the share.
    Settled,
    /// Paid more than the share; amount in cents to get back.
    ShouldReceive(f64),
    /// Paid less than the share; amount in cents still owed.
    Owes(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberBalance {
    pub member: String,
    pub paid: Cents,
    pub status: BalanceStatus,
}

/// Classify one member's balance. The comparison is exact: the balance
/// scaled by the member count stays in integer cents, so no float
/// threshold is involved until the amount is reported.
pub fn classify_balance(paid: Cents, total: Cents, member_count: usize) -> BalanceStatus {
    if member_count == 0 {
        return BalanceStatus::Settled;
    }

    let n = member_count as i64;
    // balance * n in cents; |balance| < 1 cent <=> |scaled| < n
    let scaled = paid * n - total;

    if scaled.abs() < n {
        BalanceStatus::Settled
    } else if scaled > 0 {
        BalanceStatus::ShouldReceive(scaled as f64 / n as f64)
    } else {
        BalanceStatus::Owes((-scaled) as f64 / n as f64)
    }
}

/// The combined ledger state: the 5-slot roster plus the append-only
/// expense sequence. Owned by the application service - nothing ambient.
#[derive(Debug, Clone)]
pub struct Ledger {
    roster: Roster,
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new(roster: Roster, expenses: Vec<Expense>) -> Self {
        Self { roster, expenses }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Append a new expense to the sequence.
    pub fn append(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Replace the roster and remap every expense's member field by slot:
    /// an expense whose member matches the old roster at slot i takes the
    /// new name at slot i. Expenses whose member is not found in the old
    /// roster are left unchanged.
    pub fn rename_members(&mut self, new_roster: Roster) {
        let old_roster = std::mem::replace(&mut self.roster, new_roster);
        for expense in &mut self.expenses {
            if let Some(slot) = old_roster.position(&expense.member) {
                expense.member = self.roster.names()[slot].clone();
            }
        }
    }

    /// Compute totals over the current sequence. Recomputation without a
    /// mutation in between yields identical results.
    pub fn totals(&self) -> Totals {
        let total = self.expenses.iter().map(|e| e.amount_cents).sum();

        let mut paid: HashMap<&str, Cents> =
            self.roster.iter().map(|name| (name.as_str(), 0)).collect();
        for expense in &self.expenses {
            // Expenses attributed outside the roster count toward the
            // total only.
            if let Some(slot) = paid.get_mut(expense.member.as_str()) {
                *slot += expense.amount_cents;
            }
        }

        Totals {
            total,
            member_count: self.roster.len(),
            paid_by_member: self
                .roster
                .iter()
                .map(|name| (name.clone(), paid[name.as_str()]))
                .collect(),
        }
    }

    /// Per-member settlement list, in roster slot order.
    pub fn balances(&self) -> Vec<MemberBalance> {
        let totals = self.totals();
        totals
            .paid_by_member
            .iter()
            .map(|(member, paid)| MemberBalance {
                member: member.clone(),
                paid: *paid,
                status: classify_balance(*paid, totals.total, totals.member_count),
            })
            .collect()
    }
}
