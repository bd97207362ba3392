//! Flutter-facing FFI surface for TaskDeck.
//!
//! # Responsibility
//! - Expose use-case functions from `taskdeck_core` through FRB.
//!
//! # Invariants
//! - This crate adds no task semantics of its own.

pub mod api;
