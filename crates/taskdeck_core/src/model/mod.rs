//! Domain model for the task board.
//!
//! # Responsibility
//! - Define the task record and its persisted wire shape.
//! - Validate calendar input at the boundary.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Tasks are never deleted; the list only grows.

pub mod date;
pub mod task;
