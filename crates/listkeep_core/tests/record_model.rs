use chrono::NaiveDate;
use listkeep_core::{
    Expense, ExpenseDraft, ExpensePatch, ListRecord, RecordField, Task, TaskDraft, TaskPatch,
    Toggle, ValidationError,
};

#[test]
fn expense_from_draft_validates_fields_in_form_order() {
    let err = Expense::from_draft(1, &ExpenseDraft::new(" ", "", "0")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyText(RecordField::Name));

    let err = Expense::from_draft(1, &ExpenseDraft::new("x", "", "0")).unwrap_err();
    assert_eq!(err, ValidationError::MissingDate);

    let err = Expense::from_draft(1, &ExpenseDraft::new("x", "2025-10-01", "0")).unwrap_err();
    assert_eq!(err, ValidationError::NonPositiveAmount("0".to_string()));
}

#[test]
fn expense_serialization_uses_expected_wire_fields() {
    let expense = Expense {
        id: 1_761_600_000_000,
        name: "Lunch".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 10, 28).unwrap(),
        amount: 8.5,
    };

    let json = serde_json::to_value(&expense).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1_761_600_000_000_i64,
            "name": "Lunch",
            "date": "2025-10-28",
            "amount": 8.5
        })
    );

    let decoded: Expense = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, expense);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::from_draft(7, &TaskDraft::new("  water plants ")).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": 7, "text": "water plants", "done": false })
    );
}

#[test]
fn expense_patch_only_touches_present_fields() {
    let expense = Expense::from_draft(3, &ExpenseDraft::new("bus", "2025-11-02", "2.4")).unwrap();

    let patched = expense
        .patched(&ExpensePatch {
            date: Some("2025-11-03".to_string()),
            ..ExpensePatch::default()
        })
        .unwrap();

    assert_eq!(patched.id, 3);
    assert_eq!(patched.name, "bus");
    assert_eq!(patched.amount, 2.4);
    assert_eq!(patched.date, NaiveDate::from_ymd_opt(2025, 11, 3).unwrap());
}

#[test]
fn task_patch_rejects_blank_text() {
    let task = Task::from_draft(1, &TaskDraft::new("read")).unwrap();
    let err = task
        .patched(&TaskPatch {
            text: Some(" \n".to_string()),
        })
        .unwrap_err();
    assert_eq!(err, ValidationError::EmptyText(RecordField::Text));
}

#[test]
fn toggle_twice_restores_done() {
    let mut task = Task::from_draft(1, &TaskDraft::new("read")).unwrap();
    task.toggle();
    assert!(task.is_done());
    task.toggle();
    assert!(!task.is_done());
}
