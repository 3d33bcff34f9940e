use listkeep_core::{
    Expense, ExpenseDraft, ExpensePatch, IdGenerator, ListStore, MemoryKvStore, PersistencePort,
    RecordField, RemoveOutcome, StoreError, Task, TaskDraft, ValidationError,
};

const KEY: &str = "expenses-under-test";

fn expense_store() -> ListStore<Expense, MemoryKvStore> {
    ListStore::new(MemoryKvStore::new(), KEY)
}

#[test]
fn add_appends_trimmed_and_parsed_record() {
    let mut store = expense_store();
    store.load().unwrap();

    let created = store
        .add(&ExpenseDraft::new("  groceries ", "2025-10-01", " 12.40 "))
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.all()[0], created);
    assert_eq!(created.name, "groceries");
    assert_eq!(created.date.to_string(), "2025-10-01");
    assert_eq!(created.amount, 12.4);
}

#[test]
fn add_rejects_invalid_input_without_writing() {
    let mut store = expense_store();
    store
        .add(&ExpenseDraft::new("rent", "2025-10-01", "500"))
        .unwrap();
    let before = store.all().to_vec();

    let cases = [
        (ExpenseDraft::new("   ", "2025-10-01", "5"), RecordField::Name),
        (ExpenseDraft::new("tea", "", "5"), RecordField::Date),
        (ExpenseDraft::new("tea", "2025-10-01", "abc"), RecordField::Amount),
        (ExpenseDraft::new("tea", "2025-10-01", "0"), RecordField::Amount),
        (ExpenseDraft::new("tea", "2025-10-01", "-3"), RecordField::Amount),
    ];

    for (draft, field) in cases {
        match store.add(&draft) {
            Err(StoreError::Validation(err)) => assert_eq!(err.field(), field),
            other => panic!("expected validation error for {draft:?}, got {other:?}"),
        }
    }

    assert_eq!(store.all(), before.as_slice());
    assert_eq!(store.port().write_count(), 1);
}

#[test]
fn rapid_adds_get_distinct_increasing_ids_in_order() {
    let mut store: ListStore<Task, _> =
        ListStore::with_ids(MemoryKvStore::new(), "tasks", IdGenerator::with_clock(|| 42));

    let first = store.add(&TaskDraft::new("first")).unwrap();
    let second = store.add(&TaskDraft::new("second")).unwrap();

    assert!(second.id > first.id);
    let texts = store.all().iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, ["first", "second"]);
}

#[test]
fn edit_updates_in_place_and_keeps_position() {
    let mut store = expense_store();
    let a = store.add(&ExpenseDraft::new("a", "2025-10-01", "1")).unwrap();
    let b = store.add(&ExpenseDraft::new("b", "2025-10-02", "2")).unwrap();
    let c = store.add(&ExpenseDraft::new("c", "2025-10-03", "3")).unwrap();

    let patch = ExpensePatch {
        name: Some(" bread ".to_string()),
        amount: Some("2.75".to_string()),
        ..ExpensePatch::default()
    };
    let edited = store.edit(b.id, &patch).unwrap();

    assert_eq!(edited.id, b.id);
    assert_eq!(edited.name, "bread");
    assert_eq!(edited.amount, 2.75);
    assert_eq!(edited.date, b.date);
    let ids = store.all().iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids, [a.id, b.id, c.id]);
}

#[test]
fn edit_with_invalid_patch_leaves_record_unchanged() {
    let mut store = expense_store();
    let original = store.add(&ExpenseDraft::new("a", "2025-10-01", "9")).unwrap();

    let patch = ExpensePatch {
        name: Some("renamed".to_string()),
        amount: Some("nope".to_string()),
        ..ExpensePatch::default()
    };
    let err = store.edit(original.id, &patch).unwrap_err();

    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NonNumericAmount(_))
    ));
    assert_eq!(store.get(original.id), Some(&original));
}

#[test]
fn edit_missing_id_returns_not_found() {
    let mut store = expense_store();
    store.add(&ExpenseDraft::new("a", "2025-10-01", "9")).unwrap();
    let before = store.all().to_vec();

    let err = store.edit(-1, &ExpensePatch::default()).unwrap_err();

    assert!(matches!(err, StoreError::NotFound(-1)));
    assert_eq!(store.all(), before.as_slice());
}

#[test]
fn remove_is_idempotent() {
    let mut store = expense_store();
    let keep = store.add(&ExpenseDraft::new("keep", "2025-10-01", "1")).unwrap();
    let gone = store.add(&ExpenseDraft::new("drop", "2025-10-01", "2")).unwrap();

    assert!(store.remove(gone.id).unwrap());
    let after_once = store.all().to_vec();
    assert!(!store.remove(gone.id).unwrap());

    assert_eq!(store.all(), after_once.as_slice());
    assert_eq!(store.all(), [keep].as_slice());
}

#[test]
fn remove_confirmed_respects_callback() {
    let mut store = expense_store();
    let expense = store.add(&ExpenseDraft::new("gift", "2025-12-20", "40")).unwrap();
    let writes = store.port().write_count();

    let declined = store
        .remove_confirmed(expense.id, |candidate| {
            assert_eq!(candidate.name, "gift");
            false
        })
        .unwrap();
    assert_eq!(declined, RemoveOutcome::Declined);
    assert_eq!(store.len(), 1);
    assert_eq!(store.port().write_count(), writes);

    let removed = store.remove_confirmed(expense.id, |_| true).unwrap();
    assert_eq!(removed, RemoveOutcome::Removed);
    assert!(store.is_empty());

    let absent = store
        .remove_confirmed(expense.id, |_| panic!("confirmation must not run for absent ids"))
        .unwrap();
    assert_eq!(absent, RemoveOutcome::Absent);
}

#[test]
fn snapshot_round_trips_through_the_port() {
    let mut kv = MemoryKvStore::new();
    let original = {
        let mut store = ListStore::<Expense, _>::new(&mut kv, KEY);
        store.add(&ExpenseDraft::new("a", "2025-10-01", "20")).unwrap();
        store.add(&ExpenseDraft::new("b", "2025-11-05", "30.25")).unwrap();
        store.all().to_vec()
    };

    let mut reopened = ListStore::<Expense, _>::new(&mut kv, KEY);
    assert_eq!(reopened.load().unwrap(), 2);
    assert_eq!(reopened.all(), original.as_slice());
}

#[test]
fn load_is_idempotent_and_new_ids_exceed_loaded_ones() {
    let mut kv = MemoryKvStore::new();
    kv.save(
        KEY,
        r#"[{"id":9000000000000,"name":"future","date":"2025-10-01","amount":1.0}]"#,
    )
    .unwrap();

    let mut store = ListStore::<Expense, _>::with_ids(&mut kv, KEY, IdGenerator::with_clock(|| 5));
    assert_eq!(store.load().unwrap(), 1);
    assert_eq!(store.load().unwrap(), 1);

    let created = store.add(&ExpenseDraft::new("next", "2025-10-02", "2")).unwrap();
    assert_eq!(created.id, 9_000_000_000_001);
}

#[test]
fn reload_discards_changes_that_failed_to_persist() {
    let mut kv = MemoryKvStore::with_quota(64);
    let mut store = ListStore::<Task, _>::new(&mut kv, "tasks");
    store.add(&TaskDraft::new("fits")).unwrap();

    let err = store
        .add(&TaskDraft::new("this task text is far too long for the tiny quota"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(store.len(), 2);

    assert_eq!(store.reload().unwrap(), 1);
    assert_eq!(store.all()[0].text, "fits");
}
