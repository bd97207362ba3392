//! Core domain logic for TaskDeck.
//! This crate is the single source of truth for task list invariants.

pub mod board;
pub mod clock;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use board::{TaskBoard, TaskDraft};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BoardConfig, DEFAULT_FILTER_LOOKBACK_DAYS};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::date::{format_date, parse_date_input, DateInputError, DateRange};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use storage::memory::MemoryKeyValueStore;
pub use storage::sqlite::SqliteKeyValueStore;
pub use storage::{KeyValueStore, StorageError, StorageResult};
pub use store::{TaskList, TaskStore, TASKS_STORAGE_KEY};
pub use view::expired::{expired, expired_at};
pub use view::range::in_range;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
