//! Deadline window view.

use crate::model::date::DateRange;
use crate::model::task::Task;

/// Returns tasks whose deadline lies inside `range` (both bounds inclusive),
/// in source order.
pub fn in_range(tasks: &[Task], range: &DateRange) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| range.contains(task.deadline))
        .cloned()
        .collect()
}
