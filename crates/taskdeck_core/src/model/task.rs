//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by every board view.
//! - Keep the persisted wire shape (`id`, `description`, `deadline`, `done`)
//!   stable.
//!
//! # Invariants
//! - `id` is non-empty and never reused for another task.
//! - `description` and `deadline` never change after creation.
//! - `done` is the only mutable attribute.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque stable identifier for one task.
///
/// Stored as a string so payloads written by older clients (any string id)
/// load without loss.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generates a fresh random identifier (UUID v4, hyphenated).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation errors for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Free-form text; may be empty.
    pub description: String,
    /// Serialized as `YYYY-MM-DD`.
    pub deadline: NaiveDate,
    pub done: bool,
}

impl Task {
    /// Creates a not-done task with a generated id.
    pub fn new(description: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id: TaskId::generate(),
            description: description.into(),
            deadline,
            done: false,
        }
    }

    /// Creates a not-done task with a caller-provided id.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: impl Into<TaskId>,
        description: impl Into<String>,
        deadline: NaiveDate,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id: id.into(),
            description: description.into(),
            deadline,
            done: false,
        };
        task.validate()?;
        Ok(task)
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(())
    }

    /// Returns a copy with `done` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Whether the deadline is at or before `today` and the task is still open.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        !self.done && self.deadline <= today
    }
}
