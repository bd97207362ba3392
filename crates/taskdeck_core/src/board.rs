//! Presentation-facing board facade.
//!
//! # Responsibility
//! - Own one `TaskStore` plus the screen state around it: the filter window
//!   and the task creation draft.
//! - Expose the callbacks a UI wires to its controls (`on_add_task`,
//!   `on_toggle_done`, `on_cancel`).
//!
//! # Invariants
//! - Text date input is parsed here; the store and views only see
//!   `NaiveDate`.
//! - A rejected filter edit leaves the previous window in place.
//! - Cancelling never touches persisted tasks.

use crate::clock::Clock;
use crate::config::BoardConfig;
use crate::model::date::{parse_date_input, DateInputError, DateRange};
use crate::model::task::{Task, TaskId};
use crate::storage::KeyValueStore;
use crate::store::{TaskList, TaskStore};
use chrono::NaiveDate;
use log::{debug, warn};

/// Unsaved input of the task creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub deadline: NaiveDate,
}

impl TaskDraft {
    fn blank(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            deadline: today,
        }
    }
}

/// Task store plus filter window and creation draft for one screen.
pub struct TaskBoard<S: KeyValueStore, C: Clock> {
    store: TaskStore<S>,
    clock: C,
    filter: DateRange,
    draft: TaskDraft,
}

impl<S: KeyValueStore, C: Clock> TaskBoard<S, C> {
    /// Loads persisted tasks and initializes screen state from `clock`.
    pub fn open(storage: S, clock: C, config: &BoardConfig) -> Self {
        let mut store = TaskStore::with_key(storage, config.storage_key.clone());
        store.load();

        let today = clock.today();
        Self {
            store,
            filter: DateRange::trailing_days(today, config.filter_lookback_days),
            draft: TaskDraft::blank(today),
            clock,
        }
    }

    pub fn tasks(&self) -> TaskList {
        self.store.tasks()
    }

    /// Open tasks due today or earlier, most overdue first.
    pub fn expired_tasks(&self) -> Vec<Task> {
        self.store.expired(self.clock.today())
    }

    /// Tasks inside the current filter window, in insertion order.
    pub fn filtered_tasks(&self) -> Vec<Task> {
        self.store.in_range(&self.filter)
    }

    pub fn filter(&self) -> DateRange {
        self.filter
    }

    /// Replaces the filter window when both bounds parse.
    pub fn set_filter(&mut self, start: &str, end: &str) -> Result<(), DateInputError> {
        match DateRange::parse(start, end) {
            Ok(range) => {
                debug!(
                    "event=filter_set module=board status=ok start={} end={} reversed={}",
                    range.start,
                    range.end,
                    range.is_reversed()
                );
                self.filter = range;
                Ok(())
            }
            Err(err) => {
                warn!("event=filter_set module=board status=rejected error={err}");
                Err(err)
            }
        }
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Creates a task from form input and clears the draft.
    ///
    /// A malformed deadline rejects the submission and keeps the draft.
    pub fn on_add_task(
        &mut self,
        description: &str,
        deadline: &str,
    ) -> Result<TaskList, DateInputError> {
        let deadline = match parse_date_input(deadline) {
            Ok(deadline) => deadline,
            Err(err) => {
                warn!("event=task_add module=board status=rejected error={err}");
                self.draft.description = description.to_string();
                return Err(err);
            }
        };

        let tasks = self.store.add(description, deadline);
        self.reset_draft();
        Ok(tasks)
    }

    pub fn on_toggle_done(&mut self, id: &TaskId) -> TaskList {
        self.store.toggle_done(id)
    }

    /// Discards the draft.
    pub fn on_cancel(&mut self) {
        self.reset_draft();
    }

    fn reset_draft(&mut self) {
        self.draft = TaskDraft::blank(self.clock.today());
    }
}
