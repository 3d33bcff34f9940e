use listkeep_core::db::open_db_in_memory;
use listkeep_core::{
    counts, group_by_month, group_by_period, month_key, total, Expense, ExpenseDraft,
    ExpenseService, ListRecord, MemoryKvStore, Toggle,
};

fn expense(id: i64, date: &str, amount: &str) -> Expense {
    Expense::from_draft(id, &ExpenseDraft::new(format!("e{id}"), date, amount)).unwrap()
}

#[test]
fn total_matches_documented_examples() {
    assert_eq!(total::<Expense>(&[]), 0.0);
    let expenses = [expense(1, "2025-10-01", "10"), expense(2, "2025-10-02", "5.5")];
    assert_eq!(total(&expenses), 15.5);
}

#[test]
fn groups_are_ordered_newest_month_first() {
    let expenses = [expense(1, "2025-10-01", "20"), expense(2, "2025-11-05", "30")];

    let groups = group_by_period(&expenses, |e| month_key(e.date));

    let keys = groups.iter().map(|g| g.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, ["2025-11", "2025-10"]);
    assert_eq!(groups[0].total, 30.0);
    assert_eq!(groups[1].total, 20.0);
    assert_eq!(groups[0].records, vec![&expenses[1]]);
}

#[test]
fn group_members_keep_snapshot_order_and_cross_years() {
    let expenses = [
        expense(1, "2024-12-31", "1"),
        expense(2, "2025-01-15", "2"),
        expense(3, "2024-12-01", "4"),
    ];

    let groups = group_by_month(&expenses);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, "2025-01");
    assert_eq!(groups[1].key, "2024-12");
    let ids = groups[1].records.iter().map(|e| e.id()).collect::<Vec<_>>();
    assert_eq!(ids, [1, 3]);
    assert_eq!(groups[1].total, 5.0);
}

#[test]
fn aggregation_does_not_mutate_snapshot() {
    let expenses = vec![expense(1, "2025-10-01", "20"), expense(2, "2025-11-05", "30")];
    let copy = expenses.clone();

    let first = group_by_month(&expenses);
    let second = group_by_month(&expenses);

    assert_eq!(first, second);
    assert_eq!(expenses, copy);
}

#[test]
fn counts_over_task_like_predicate() {
    struct Flag(bool);
    impl Toggle for Flag {
        fn is_done(&self) -> bool {
            self.0
        }
        fn toggle(&mut self) {
            self.0 = !self.0;
        }
    }

    let flags = [Flag(true), Flag(false), Flag(false)];
    let tally = counts(&flags, Flag::is_done);
    assert_eq!((tally.total, tally.done(), tally.pending()), (3, 1, 2));
    assert_eq!(counts::<Flag, _>(&[], Flag::is_done).total, 0);
}

#[test]
fn expense_service_summary_reflects_every_mutation() {
    let mut service = ExpenseService::new(MemoryKvStore::new());
    service.open().unwrap();
    let october = service.add_expense("rent", "2025-10-01", "20").unwrap();
    service.add_expense("books", "2025-11-05", "30").unwrap();

    let summary = service.summary();
    assert_eq!(summary.total, 50.0);
    assert_eq!(summary.months.len(), 2);

    service.delete_expense(october.id, |_| true).unwrap();
    let summary = service.summary();
    assert_eq!(summary.total, 30.0);
    assert_eq!(summary.months.len(), 1);
    assert_eq!(summary.months[0].key, "2025-11");
}

#[test]
fn expense_service_works_over_sqlite_port() {
    let conn = open_db_in_memory().unwrap();
    let port = listkeep_core::SqliteKvStore::try_new(&conn).unwrap();
    let mut service = ExpenseService::new(port);
    assert_eq!(service.open().unwrap(), 0);

    service.add_expense("coffee", "2025-10-03", "3.2").unwrap();

    let stored: String = conn
        .query_row(
            "SELECT value FROM kv_entries WHERE key = 'expenseTrackerData';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json[0]["name"], "coffee");
    assert_eq!(json[0]["amount"], 3.2);
}
