//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the board callbacks and views to Dart via FRB.
//! - Convert core types into plain string/bool records.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each call opens the database, works on a freshly loaded store, and
//!   drops it; no task state lives in this crate between calls.
//! - Dates cross the boundary as `YYYY-MM-DD` strings.

use log::warn;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use taskdeck_core::db::open_db;
use taskdeck_core::{
    core_version as core_version_inner, default_log_level, expired, format_date, in_range,
    init_logging as init_logging_inner, parse_date_input, ping as ping_inner, BoardConfig, Clock,
    DateRange, FixedClock, SqliteKeyValueStore, SystemClock, Task, TaskBoard, TaskId, TaskStore,
};

const DB_FILE_NAME: &str = "taskdeck.sqlite3";
const DB_PATH_ENV: &str = "TASKDECK_DB_PATH";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// An empty `level` selects the build default (`debug`/`info`).
/// Returns an empty string on success and the error message otherwise.
/// Repeating the call with the same arguments is safe.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = match level.trim() {
        "" => default_log_level().as_str(),
        requested => requested,
    };
    match init_logging_inner(level, log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One task row as rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub deadline: String,
    pub done: bool,
}

/// Response envelope shared by every board call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Task rows produced by the call (empty on failure).
    pub tasks: Vec<TaskItem>,
}

impl BoardResponse {
    fn success(message: impl Into<String>, tasks: &[Task]) -> Self {
        Self {
            ok: true,
            message: message.into(),
            tasks: to_task_items(tasks),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            tasks: Vec::new(),
        }
    }
}

/// Everything the board screen renders on first paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub ok: bool,
    pub message: String,
    /// All tasks, insertion order.
    pub tasks: Vec<TaskItem>,
    /// Open tasks due today or earlier, most overdue first.
    pub expired: Vec<TaskItem>,
    /// Tasks inside the default filter window.
    pub filtered: Vec<TaskItem>,
    /// Default filter window bounds (`YYYY-MM-DD`), `[today - 7, today]`.
    pub filter_start: String,
    pub filter_end: String,
    /// Prefill for the deadline field of the creation form.
    pub default_deadline: String,
}

impl BoardSnapshot {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            tasks: Vec::new(),
            expired: Vec::new(),
            filtered: Vec::new(),
            filter_start: String::new(),
            filter_end: String::new(),
            default_deadline: String::new(),
        }
    }
}

/// Loads the board with its default screen state.
///
/// `today` (`YYYY-MM-DD`) pins the reference date; `None` or blank uses the
/// current UTC date.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot(today: Option<String>) -> BoardSnapshot {
    let db_path = resolve_db_path();
    match today.as_deref().map(str::trim).filter(|value| !value.is_empty()) {
        None => board_snapshot_at(&db_path, SystemClock),
        Some(value) => match parse_date_input(value) {
            Ok(date) => board_snapshot_at(&db_path, FixedClock(date)),
            Err(err) => BoardSnapshot::failure(format!("board_snapshot rejected: {err}")),
        },
    }
}

/// Returns every task in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> BoardResponse {
    list_tasks_at(&resolve_db_path())
}

/// Creates a task; `deadline` must be `YYYY-MM-DD`.
///
/// Returns the full updated list on success.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(description: String, deadline: String) -> BoardResponse {
    add_task_at(&resolve_db_path(), &description, &deadline)
}

/// Flips the done flag of one task; unknown ids are a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_done(id: String) -> BoardResponse {
    toggle_done_at(&resolve_db_path(), &id)
}

/// Open tasks due today (UTC) or earlier, most overdue first.
#[flutter_rust_bridge::frb(sync)]
pub fn expired_tasks() -> BoardResponse {
    expired_tasks_at(&resolve_db_path(), &SystemClock)
}

/// Tasks with `start <= deadline <= end`, in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn filter_tasks(start: String, end: String) -> BoardResponse {
    filter_tasks_at(&resolve_db_path(), &start, &end)
}

/// Default value for the deadline field of a new task (today, UTC).
#[flutter_rust_bridge::frb(sync)]
pub fn default_deadline() -> String {
    format_date(SystemClock.today())
}

fn board_snapshot_at(db_path: &Path, clock: impl Clock) -> BoardSnapshot {
    let conn = match open_db(db_path) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("event=ffi_db_open module=ffi status=error error={err}");
            return BoardSnapshot::failure(format!("board_snapshot failed: {err}"));
        }
    };
    let board = TaskBoard::open(
        SqliteKeyValueStore::new(&conn),
        clock,
        &BoardConfig::default(),
    );

    let tasks = board.tasks();
    let filter = board.filter();
    BoardSnapshot {
        ok: true,
        message: count_message(tasks.len()),
        tasks: to_task_items(&tasks),
        expired: to_task_items(&board.expired_tasks()),
        filtered: to_task_items(&board.filtered_tasks()),
        filter_start: format_date(filter.start),
        filter_end: format_date(filter.end),
        default_deadline: format_date(board.draft().deadline),
    }
}

fn list_tasks_at(db_path: &Path) -> BoardResponse {
    match with_store(db_path, |store| store.tasks()) {
        Ok(tasks) => BoardResponse::success(count_message(tasks.len()), &tasks),
        Err(err) => BoardResponse::failure(format!("list_tasks failed: {err}")),
    }
}

fn add_task_at(db_path: &Path, description: &str, deadline: &str) -> BoardResponse {
    let deadline = match parse_date_input(deadline) {
        Ok(deadline) => deadline,
        Err(err) => return BoardResponse::failure(format!("add_task rejected: {err}")),
    };
    match with_store(db_path, |store| store.add(description, deadline)) {
        Ok(tasks) => BoardResponse::success("Task created.", &tasks),
        Err(err) => BoardResponse::failure(format!("add_task failed: {err}")),
    }
}

fn toggle_done_at(db_path: &Path, id: &str) -> BoardResponse {
    let id = TaskId::from(id.trim());
    match with_store(db_path, |store| store.toggle_done(&id)) {
        Ok(tasks) => BoardResponse::success("Task updated.", &tasks),
        Err(err) => BoardResponse::failure(format!("toggle_done failed: {err}")),
    }
}

fn expired_tasks_at(db_path: &Path, clock: &impl Clock) -> BoardResponse {
    let today = clock.today();
    match with_store(db_path, |store| expired(&store.tasks(), today)) {
        Ok(tasks) => BoardResponse::success(count_message(tasks.len()), &tasks),
        Err(err) => BoardResponse::failure(format!("expired_tasks failed: {err}")),
    }
}

fn filter_tasks_at(db_path: &Path, start: &str, end: &str) -> BoardResponse {
    let range = match DateRange::parse(start, end) {
        Ok(range) => range,
        Err(err) => return BoardResponse::failure(format!("filter_tasks rejected: {err}")),
    };
    match with_store(db_path, |store| in_range(&store.tasks(), &range)) {
        Ok(tasks) => BoardResponse::success(count_message(tasks.len()), &tasks),
        Err(err) => BoardResponse::failure(format!("filter_tasks failed: {err}")),
    }
}

fn with_store<T>(
    db_path: &Path,
    f: impl FnOnce(&mut TaskStore<SqliteKeyValueStore<'_>>) -> T,
) -> Result<T, String> {
    let conn = open_db(db_path).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        format!("task DB open failed: {err}")
    })?;
    let mut store = TaskStore::open(SqliteKeyValueStore::new(&conn));
    Ok(f(&mut store))
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn count_message(count: usize) -> String {
    if count == 0 {
        "No tasks.".to_string()
    } else {
        format!("{count} task(s).")
    }
}

fn to_task_items(tasks: &[Task]) -> Vec<TaskItem> {
    tasks.iter().map(to_task_item).collect()
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        description: task.description.clone(),
        deadline: format_date(task.deadline),
        done: task.done,
    }
}
