use chrono::NaiveDate;
use proptest::prelude::*;
use taskdeck_core::{expired, in_range, DateRange, Task, TaskId};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u32..730).prop_map(|offset| {
        date(2023, 1, 1)
            .checked_add_days(chrono::Days::new(u64::from(offset)))
            .unwrap()
    })
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec((arb_date(), any::<bool>()), 0..40).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, (deadline, done))| Task {
                id: TaskId::from(format!("task-{index}")),
                description: String::new(),
                deadline,
                done,
            })
            .collect()
    })
}

#[test]
fn expired_example_orders_earliest_first() {
    let tasks = vec![
        Task::with_id("late", "", date(2024, 1, 3)).unwrap(),
        Task::with_id("early", "", date(2024, 1, 1)).unwrap(),
    ];

    let result = expired(&tasks, date(2024, 1, 5));
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].deadline, date(2024, 1, 1));
}

#[test]
fn range_example_january() {
    let tasks = vec![
        Task::with_id("feb", "", date(2024, 2, 1)).unwrap(),
        Task::with_id("jan", "", date(2024, 1, 15)).unwrap(),
    ];
    let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();

    let result = in_range(&tasks, &range);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id.as_str(), "jan");
}

proptest! {
    #[test]
    fn expired_is_exactly_open_overdue_sorted(tasks in arb_tasks(), today in arb_date()) {
        let result = expired(&tasks, today);

        let expected_ids = tasks
            .iter()
            .filter(|t| !t.done && t.deadline <= today)
            .map(|t| t.id.clone())
            .collect::<std::collections::HashSet<_>>();
        let result_ids = result.iter().map(|t| t.id.clone()).collect::<std::collections::HashSet<_>>();

        prop_assert_eq!(result.len(), expected_ids.len());
        prop_assert_eq!(result_ids, expected_ids);
        prop_assert!(result.iter().all(|t| !t.done));
        prop_assert!(result.windows(2).all(|pair| pair[0].deadline <= pair[1].deadline));
    }

    #[test]
    fn in_range_is_stable_inclusive_filter(tasks in arb_tasks(), a in arb_date(), b in arb_date()) {
        let range = DateRange::new(a, b);
        let result = in_range(&tasks, &range);

        let expected = tasks
            .iter()
            .filter(|t| a <= t.deadline && t.deadline <= b)
            .cloned()
            .collect::<Vec<_>>();
        prop_assert_eq!(result, expected);
    }
}
