//! Canonical task list and its persistence.
//!
//! # Responsibility
//! - Own the ordered task sequence for one process.
//! - Persist the full sequence after every mutation.
//! - Degrade storage failures to logged events instead of caller errors.
//!
//! # Invariants
//! - Task ids are unique within the sequence.
//! - Every mutation publishes a new immutable snapshot; earlier snapshots
//!   handed to callers never change.
//! - The in-memory sequence stays authoritative when a write fails.

use crate::model::date::DateRange;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::storage::{KeyValueStore, StorageError};
use crate::view::{expired::expired, range::in_range};
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Storage key holding the JSON task array.
pub const TASKS_STORAGE_KEY: &str = "tasks";

/// Immutable snapshot of the task sequence, in insertion order.
pub type TaskList = Arc<[Task]>;

/// Why a persisted payload could not be turned into a task list.
#[derive(Debug)]
pub enum PayloadError {
    Storage(StorageError),
    Decode(serde_json::Error),
    InvalidTask {
        index: usize,
        source: TaskValidationError,
    },
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "malformed task payload: {err}"),
            Self::InvalidTask { index, source } => {
                write!(f, "invalid task at index {index}: {source}")
            }
        }
    }
}

impl Error for PayloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::InvalidTask { source, .. } => Some(source),
        }
    }
}

impl From<StorageError> for PayloadError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for PayloadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Decodes a persisted JSON array into tasks.
///
/// Records failing validation reject the whole payload. Duplicate ids keep
/// their first occurrence.
pub fn decode_tasks(payload: &str) -> Result<Vec<Task>, PayloadError> {
    let decoded: Vec<Task> = serde_json::from_str(payload)?;
    let mut seen = HashSet::with_capacity(decoded.len());
    let mut tasks = Vec::with_capacity(decoded.len());

    for (index, task) in decoded.into_iter().enumerate() {
        task.validate()
            .map_err(|source| PayloadError::InvalidTask { index, source })?;
        if !seen.insert(task.id.clone()) {
            warn!("event=tasks_load module=store status=warn reason=duplicate_id id={}", task.id);
            continue;
        }
        tasks.push(task);
    }

    Ok(tasks)
}

/// Encodes tasks as the persisted JSON array.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Owner of the canonical task sequence.
pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    key: String,
    tasks: TaskList,
    loaded: bool,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Creates an unloaded, empty store over the default key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, TASKS_STORAGE_KEY)
    }

    /// Creates an unloaded, empty store over a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            tasks: Arc::from(Vec::new()),
            loaded: false,
        }
    }

    /// Creates a store and loads the persisted sequence.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Replaces the in-memory sequence with the persisted one.
    ///
    /// Missing, unreadable or malformed data yields an empty sequence; the
    /// failure is logged and never returned.
    pub fn load(&mut self) -> TaskList {
        let tasks = match self.read_persisted() {
            Ok(Some(tasks)) => {
                info!(
                    "event=tasks_load module=store status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Ok(None) => {
                info!("event=tasks_load module=store status=ok count=0 reason=no_data");
                Vec::new()
            }
            Err(err) => {
                error!("event=tasks_load module=store status=error fallback=empty error={err}");
                Vec::new()
            }
        };

        self.tasks = Arc::from(tasks);
        self.loaded = true;
        Arc::clone(&self.tasks)
    }

    /// Writes the full sequence, overwriting any prior value.
    ///
    /// Best effort: failures are logged and dropped, never retried.
    pub fn save(&self, tasks: &[Task]) {
        let payload = match encode_tasks(tasks) {
            Ok(payload) => payload,
            Err(err) => {
                error!("event=tasks_save module=store status=error error_code=encode_failed error={err}");
                return;
            }
        };

        match self.storage.set_item(&self.key, &payload) {
            Ok(()) => debug!(
                "event=tasks_save module=store status=ok count={} bytes={}",
                tasks.len(),
                payload.len()
            ),
            Err(err) => error!(
                "event=tasks_save module=store status=error error_code=write_failed count={} error={err}",
                tasks.len()
            ),
        }
    }

    /// Appends a new not-done task and persists the resulting sequence.
    pub fn add(&mut self, description: impl Into<String>, deadline: NaiveDate) -> TaskList {
        let mut task = Task::new(description, deadline);
        while self.contains(&task.id) {
            task.id = TaskId::generate();
        }
        info!(
            "event=task_add module=store status=ok id={} deadline={}",
            task.id, task.deadline
        );

        let mut next = self.tasks.to_vec();
        next.push(task);
        self.publish(next)
    }

    /// Flips `done` on the matching task and persists the resulting sequence.
    ///
    /// An unknown id leaves the tasks unchanged; the sequence is still
    /// written.
    pub fn toggle_done(&mut self, id: &TaskId) -> TaskList {
        let mut matched = false;
        let next = self
            .tasks
            .iter()
            .map(|task| {
                if &task.id == id {
                    matched = true;
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect::<Vec<_>>();

        if matched {
            info!("event=task_toggle module=store status=ok id={id}");
        } else {
            warn!("event=task_toggle module=store status=noop reason=not_found id={id}");
        }
        self.publish(next)
    }

    /// Current snapshot.
    pub fn tasks(&self) -> TaskList {
        Arc::clone(&self.tasks)
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Expired view of the current snapshot.
    pub fn expired(&self, today: NaiveDate) -> Vec<Task> {
        expired(&self.tasks, today)
    }

    /// Range view of the current snapshot.
    pub fn in_range(&self, range: &DateRange) -> Vec<Task> {
        in_range(&self.tasks, range)
    }

    fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|task| &task.id == id)
    }

    fn read_persisted(&self) -> Result<Option<Vec<Task>>, PayloadError> {
        match self.storage.get_item(&self.key)? {
            Some(payload) => Ok(Some(decode_tasks(&payload)?)),
            None => Ok(None),
        }
    }

    fn publish(&mut self, next: Vec<Task>) -> TaskList {
        self.save(&next);
        self.tasks = Arc::from(next);
        Arc::clone(&self.tasks)
    }
}
