use anyhow::Result;
use roomsplit::application::AppError;

mod common;
use common::{reopen, test_service};

#[test]
fn test_add_expense_appends_and_returns_record() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    assert_eq!(service.expenses().len(), 0);
    let expense = service.add_expense("Alice", "30", None, None)?;

    assert_eq!(service.expenses().len(), 1);
    assert_eq!(expense.member, "Alice");
    assert_eq!(expense.amount_cents, 3000);
    assert_eq!(service.expenses()[0].id, expense.id);

    Ok(())
}

#[test]
fn test_add_expense_defaults_category_to_general() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    let expense = service.add_expense("Bob", "12.50", None, None)?;
    assert_eq!(expense.category, "General");

    let expense = service.add_expense("Bob", "5", Some("Utilities".into()), None)?;
    assert_eq!(expense.category, "Utilities");

    Ok(())
}

#[test]
fn test_add_expense_trims_description() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    let expense = service.add_expense("Eve", "8", None, Some("  taxi home  ".into()))?;
    assert_eq!(expense.description, Some("taxi home".to_string()));

    let expense = service.add_expense("Eve", "8", None, Some("   ".into()))?;
    assert_eq!(expense.description, None);

    Ok(())
}

#[test]
fn test_add_expense_rejects_bad_amounts() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    for amount in ["-5", "", "abc", "0"] {
        let result = service.add_expense("Alice", amount, None, None);
        assert!(result.is_err(), "amount {:?} must be rejected", amount);
        assert_eq!(service.expenses().len(), 0, "sequence must stay unchanged");
    }

    assert!(matches!(
        service.add_expense("Alice", "abc", None, None),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(matches!(
        service.add_expense("Alice", "-5", None, None),
        Err(AppError::NonPositiveAmount)
    ));

    Ok(())
}

#[test]
fn test_add_expense_rejects_empty_member() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    assert!(matches!(
        service.add_expense("  ", "10", None, None),
        Err(AppError::EmptyMember)
    ));
    assert_eq!(service.expenses().len(), 0);

    Ok(())
}

#[test]
fn test_add_expense_rejects_unknown_member() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    assert!(matches!(
        service.add_expense("Zed", "10", None, None),
        Err(AppError::UnknownMember(_))
    ));
    // Roster match is exact, not case-insensitive
    assert!(matches!(
        service.add_expense("alice", "10", None, None),
        Err(AppError::UnknownMember(_))
    ));
    assert_eq!(service.expenses().len(), 0);

    Ok(())
}

#[test]
fn test_recent_expenses_are_newest_first() -> Result<()> {
    let (_service, temp) = test_service()?;

    // Backdated log written directly so the timestamps differ
    std::fs::write(
        temp.path().join("expenses.json"),
        r#"[
            {
                "id": "11111111-1111-4111-8111-111111111111",
                "member": "Alice",
                "amount_cents": 1000,
                "category": "General",
                "description": null,
                "timestamp": "2026-01-01T10:00:00Z"
            },
            {
                "id": "22222222-2222-4222-8222-222222222222",
                "member": "Bob",
                "amount_cents": 2000,
                "category": "General",
                "description": null,
                "timestamp": "2026-03-01T10:00:00Z"
            },
            {
                "id": "33333333-3333-4333-8333-333333333333",
                "member": "Eve",
                "amount_cents": 3000,
                "category": "General",
                "description": null,
                "timestamp": "2026-02-01T10:00:00Z"
            }
        ]"#,
    )?;

    let (service, warnings) = reopen(&temp)?;
    assert!(warnings.is_empty());

    let recent = service.recent_expenses();
    let order: Vec<&str> = recent.iter().map(|e| e.member.as_str()).collect();
    assert_eq!(order, vec!["Bob", "Eve", "Alice"]);

    // Recorded order is preserved separately
    assert_eq!(service.expenses()[0].member, "Alice");

    Ok(())
}
