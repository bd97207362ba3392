//! Overdue-task view.
//!
//! A task is expired when it is not done and its deadline is at or before
//! the reference date. Output is ordered by deadline, most overdue first;
//! tasks sharing a deadline keep their source order.

use crate::model::task::Task;
use chrono::{DateTime, NaiveDate, Utc};

/// Returns open tasks whose deadline is on or before `today`.
pub fn expired(tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    let mut overdue = tasks
        .iter()
        .filter(|task| task.is_expired_on(today))
        .cloned()
        .collect::<Vec<_>>();
    overdue.sort_by_key(|task| task.deadline);
    overdue
}

/// Same as [`expired`], using the UTC calendar date of `now`.
///
/// A `YYYY-MM-DD` deadline denotes UTC midnight, so it has passed as soon as
/// the UTC date reaches it.
pub fn expired_at(tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
    expired(tasks, now.date_naive())
}
