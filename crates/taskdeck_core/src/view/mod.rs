//! Pure derived views over a task snapshot.
//!
//! # Invariants
//! - Views never mutate or reorder their input.
//! - Output tasks are clones; identity is preserved through `TaskId`.

pub mod expired;
pub mod range;
