use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::Cents;

pub type ExpenseId = Uuid;

/// Category assigned when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single paid expense attributed to one roster member.
/// Expenses are append-only - there is no edit or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    /// Display name of the member who paid. Matched against the roster
    /// by exact string comparison.
    pub member: String,
    /// Amount in cents (positive for every expense created through the
    /// service; stored values that fail to parse read back as 0).
    #[serde(default, deserialize_with = "cents_or_zero")]
    pub amount_cents: Cents,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    /// When the expense was recorded.
    pub timestamp: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A stored amount that is not a JSON number deserializes to 0 instead of
/// failing the whole document.
fn cents_or_zero<'de, D>(deserializer: D) -> Result<Cents, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match &value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    })
}

impl Expense {
    /// Create a new expense with a fresh id.
    pub fn new(member: impl Into<String>, amount_cents: Cents, timestamp: DateTime<Utc>) -> Self {
        assert!(amount_cents > 0, "Expense amount must be positive");
        Self {
            id: Uuid::new_v4(),
            member: member.into(),
            amount_cents,
            category: default_category(),
            description: None,
            timestamp,
        }
    }

    /// Set the category. An empty string keeps the default.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.is_empty() {
            self.category = category;
        }
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_expense() {
        let expense = Expense::new("Alice", 3000, Utc::now())
            .with_category("Groceries")
            .with_description("weekly shop");

        assert_eq!(expense.member, "Alice");
        assert_eq!(expense.amount_cents, 3000);
        assert_eq!(expense.category, "Groceries");
        assert_eq!(expense.description, Some("weekly shop".to_string()));
    }

    #[test]
    fn test_category_defaults_to_general() {
        let expense = Expense::new("Bob", 500, Utc::now());
        assert_eq!(expense.category, DEFAULT_CATEGORY);

        let expense = Expense::new("Bob", 500, Utc::now()).with_category("");
        assert_eq!(expense.category, DEFAULT_CATEGORY);
    }

    #[test]
    #[should_panic(expected = "Expense amount must be positive")]
    fn test_expense_requires_positive_amount() {
        Expense::new("Alice", 0, Utc::now());
    }

    #[test]
    fn test_non_numeric_amount_reads_as_zero() {
        let json = r#"{
            "id": "4f5a8f7e-3a39-4b65-9a3f-0f2b6f9f1c11",
            "member": "Alice",
            "amount_cents": "oops",
            "timestamp": "2026-01-02T03:04:05Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount_cents, 0);
        assert_eq!(expense.category, DEFAULT_CATEGORY);
        assert_eq!(expense.description, None);
    }

    #[test]
    fn test_missing_amount_reads_as_zero() {
        let json = r#"{
            "id": "4f5a8f7e-3a39-4b65-9a3f-0f2b6f9f1c11",
            "member": "Alice",
            "timestamp": "2026-01-02T03:04:05Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount_cents, 0);
    }

    #[test]
    fn test_fractional_amount_truncates_to_whole_cents() {
        let json = r#"{
            "id": "4f5a8f7e-3a39-4b65-9a3f-0f2b6f9f1c11",
            "member": "Alice",
            "amount_cents": 1250.75,
            "timestamp": "2026-01-02T03:04:05Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount_cents, 1250);
    }

    #[test]
    fn test_serde_roundtrip() {
        let expense = Expense::new("Eve", 1299, Utc::now()).with_description("taxi");
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, expense.id);
        assert_eq!(back.member, expense.member);
        assert_eq!(back.amount_cents, expense.amount_cents);
        assert_eq!(back.description, expense.description);
    }
}
