mod common;

use common::disk_coordinator;
use money_notes_core::{
    coordinator::{CoordinatorError, ViewStateCoordinator},
    domain::{Category, TransactionKind},
    storage::JsonStorage,
};

#[test]
fn submissions_survive_reopening_the_journal() {
    let (mut coordinator, temp) = disk_coordinator();
    coordinator
        .submit(TransactionKind::Income, Category::Salary, 900.0, Some("pay"))
        .unwrap();
    coordinator
        .submit(TransactionKind::Expense, Category::Bills, 250.0, None)
        .unwrap();
    drop(coordinator);

    let storage = JsonStorage::new(temp.path().join("journal.json"));
    let reopened = ViewStateCoordinator::open(Box::new(storage)).expect("reopen");
    let view = reopened.view();
    assert_eq!(view.transactions.len(), 2);
    assert_eq!(view.summary.balance, 650.0);
    assert_eq!(view.expense_breakdown.len(), 1);
    assert_eq!(view.expense_breakdown[0].category, Category::Bills);
}

#[test]
fn delete_updates_persisted_state() {
    let (mut coordinator, temp) = disk_coordinator();
    let id = coordinator
        .submit(TransactionKind::Expense, Category::Shopping, 80.0, None)
        .unwrap();
    coordinator.delete(id).unwrap();
    drop(coordinator);

    let storage = JsonStorage::new(temp.path().join("journal.json"));
    let reopened = ViewStateCoordinator::open(Box::new(storage)).expect("reopen");
    assert!(reopened.view().transactions.is_empty());
    assert_eq!(reopened.view().summary.total_expense, 0.0);
}

#[test]
fn invalid_submission_leaves_disk_untouched() {
    let (mut coordinator, temp) = disk_coordinator();
    let err = coordinator
        .submit(TransactionKind::Expense, Category::Food, -1.0, None)
        .expect_err("negative amount must be rejected");
    assert!(matches!(err, CoordinatorError::InvalidAmount(_)));
    drop(coordinator);

    let storage = JsonStorage::new(temp.path().join("journal.json"));
    let reopened = ViewStateCoordinator::open(Box::new(storage)).expect("reopen");
    assert!(reopened.view().transactions.is_empty());
}

#[test]
fn breakdowns_cover_both_kinds_independently() {
    let (mut coordinator, _temp) = disk_coordinator();
    coordinator
        .submit(TransactionKind::Expense, Category::Food, 30.0, None)
        .unwrap();
    coordinator
        .submit(TransactionKind::Expense, Category::Transport, 70.0, None)
        .unwrap();
    coordinator
        .submit(TransactionKind::Income, Category::Gift, 10.0, None)
        .unwrap();

    let view = coordinator.view();
    assert_eq!(view.expense_breakdown.len(), 2);
    assert_eq!(view.expense_breakdown[0].category, Category::Transport);
    assert!((view.expense_breakdown[0].percentage - 70.0).abs() < 1e-9);
    assert_eq!(view.income_breakdown.len(), 1);
    assert!((view.income_breakdown[0].percentage - 100.0).abs() < 1e-9);
}
