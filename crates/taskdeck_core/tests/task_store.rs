use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use std::collections::HashSet;
use taskdeck_core::db::{open_db, open_db_in_memory};
use taskdeck_core::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, Task, TaskId, TaskStore,
    TASKS_STORAGE_KEY,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Dates roughly eight centuries either side of 2000-01-01.
fn arb_wide_date() -> impl Strategy<Value = NaiveDate> {
    (-300_000i64..300_000).prop_map(|offset| {
        let base = date(2000, 1, 1);
        let days = Days::new(offset.unsigned_abs());
        if offset < 0 {
            base.checked_sub_days(days).unwrap()
        } else {
            base.checked_add_days(days).unwrap()
        }
    })
}

#[test]
fn load_without_prior_data_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::new(SqliteKeyValueStore::new(&conn));

    assert!(store.load().is_empty());
    assert!(store.is_loaded());
}

#[test]
fn adds_grow_list_with_unique_ids_in_insertion_order() {
    let storage = MemoryKeyValueStore::new();
    let mut store = TaskStore::open(&storage);

    for day in 1..=20 {
        store.add(format!("task {day}"), date(2024, 1, day));
    }

    let tasks = store.tasks();
    assert_eq!(tasks.len(), 20);
    let ids = tasks.iter().map(|t| t.id.clone()).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 20);
    assert_eq!(tasks[0].description, "task 1");
    assert_eq!(tasks[19].description, "task 20");
    assert!(tasks.iter().all(|t| !t.done));
}

#[test]
fn toggle_twice_restores_done_flag() {
    let storage = MemoryKeyValueStore::new();
    let mut store = TaskStore::open(&storage);
    let tasks = store.add("stretch", date(2024, 1, 1));
    let id = tasks[0].id.clone();

    assert!(store.toggle_done(&id)[0].done);
    assert!(!store.toggle_done(&id)[0].done);
}

#[test]
fn every_mutation_persists_full_sequence() {
    let storage = MemoryKeyValueStore::new();
    let mut store = TaskStore::open(&storage);

    store.add("a", date(2024, 1, 1));
    let tasks = store.add("b", date(2024, 1, 2));
    store.toggle_done(&tasks[1].id);

    assert_eq!(storage.write_count(), 3);
    let payload = storage.raw(TASKS_STORAGE_KEY).unwrap();
    let persisted: Vec<Task> = serde_json::from_str(&payload).unwrap();
    assert_eq!(persisted, store.tasks().to_vec());
    assert!(persisted[1].done);
}

#[test]
fn save_then_load_roundtrips_through_sqlite_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");

    let written = {
        let conn = open_db(&path).unwrap();
        let mut store = TaskStore::open(SqliteKeyValueStore::new(&conn));
        store.add("", date(2024, 1, 3));
        let tasks = store.add("ünïcode \"quoted\"", date(2023, 12, 31));
        let snapshot = store.toggle_done(&tasks[0].id);
        snapshot
    };

    let conn = open_db(&path).unwrap();
    let mut store = TaskStore::new(SqliteKeyValueStore::new(&conn));
    assert_eq!(&*store.load(), &*written);
}

#[test]
fn explicit_save_overwrites_previous_value() {
    let storage = MemoryKeyValueStore::new();
    let mut store = TaskStore::open(&storage);
    store.add("old", date(2024, 1, 1));

    let replacement = vec![Task::with_id("x", "new", date(2024, 2, 2)).unwrap()];
    store.save(&replacement);

    assert_eq!(&*store.load(), replacement.as_slice());
}

#[test]
fn malformed_payload_loads_as_empty() {
    for payload in ["not json", "{\"id\":\"a\"}", "[{\"id\":\"a\"}]", "[1,2]"] {
        let storage = MemoryKeyValueStore::with_item(TASKS_STORAGE_KEY, payload);
        let store = TaskStore::open(&storage);
        assert!(store.tasks().is_empty(), "payload {payload} should load empty");
        assert!(store.is_loaded());
    }
}

#[test]
fn read_failure_loads_as_empty() {
    let storage = MemoryKeyValueStore::with_item(TASKS_STORAGE_KEY, "[]");
    storage.set_fail_reads(true);

    let store = TaskStore::open(&storage);
    assert!(store.tasks().is_empty());
}

#[test]
fn write_failure_keeps_memory_state_authoritative() {
    let storage = MemoryKeyValueStore::new();
    let mut store = TaskStore::open(&storage);
    store.add("saved", date(2024, 1, 1));

    storage.set_fail_writes(true);
    let tasks = store.add("unsaved", date(2024, 1, 2));

    assert_eq!(tasks.len(), 2);
    assert_eq!(store.tasks().len(), 2);
    let persisted: Vec<Task> =
        serde_json::from_str(&storage.raw(TASKS_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(persisted.len(), 1);

    storage.set_fail_writes(false);
    store.toggle_done(&tasks[0].id);
    let persisted: Vec<Task> =
        serde_json::from_str(&storage.get_item(TASKS_STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.len(), 2);
}

#[test]
fn store_views_follow_current_snapshot() {
    let storage = MemoryKeyValueStore::new();
    let mut store = TaskStore::open(&storage);
    let tasks = store.add("overdue", date(2024, 1, 1));
    store.add("upcoming", date(2024, 2, 1));

    assert_eq!(store.expired(date(2024, 1, 5)).len(), 1);
    store.toggle_done(&tasks[0].id);
    assert!(store.expired(date(2024, 1, 5)).is_empty());
    assert_eq!(store.get(&tasks[0].id).map(|t| t.done), Some(true));
}

proptest! {
    #[test]
    fn saved_tasks_load_back_unchanged(
        entries in prop::collection::vec((".*", arb_wide_date(), any::<bool>()), 0..30)
    ) {
        let tasks = entries
            .into_iter()
            .enumerate()
            .map(|(index, (description, deadline, done))| Task {
                id: TaskId::from(format!("task-{index}")),
                description,
                deadline,
                done,
            })
            .collect::<Vec<_>>();
        let storage = MemoryKeyValueStore::new();
        let mut store = TaskStore::new(&storage);

        store.save(&tasks);

        prop_assert_eq!(store.load().to_vec(), tasks);
    }

    #[test]
    fn n_adds_yield_n_tasks_with_unique_ids(
        entries in prop::collection::vec((".*", arb_wide_date()), 0..50)
    ) {
        let storage = MemoryKeyValueStore::new();
        let mut store = TaskStore::open(&storage);

        for (description, deadline) in &entries {
            store.add(description.as_str(), *deadline);
        }

        let tasks = store.tasks();
        prop_assert_eq!(tasks.len(), entries.len());
        let ids = tasks.iter().map(|t| t.id.clone()).collect::<HashSet<_>>();
        prop_assert_eq!(ids.len(), entries.len());
    }
}
