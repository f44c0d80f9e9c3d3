//! The in-memory exercise log.
//!
//! [`ExerciseLog`] owns the ordered collection of exercises and implements
//! every record operation. It performs no terminal I/O: interactive prompts
//! and retry loops belong to the front end, which hands typed parameters to
//! the log.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`ExerciseLog`] instances
//! - [`exercise_ops`]: Add, list, lookup, complete and remove
//! - [`selection`]: Two-step name/ID selection with a tagged outcome
//!
//! # Usage
//!
//! ```rust
//! use gymlog_core::{
//!     params::{CompleteExercise, CreateExercise, Id},
//!     ExerciseLogBuilder, ExerciseStatus,
//! };
//!
//! # fn example() -> gymlog_core::Result<()> {
//! let mut log = ExerciseLogBuilder::new().build();
//!
//! let bench = log.add(&CreateExercise {
//!     name: "Bench Press".to_string(),
//!     description: "chest, barbell".to_string(),
//!     exercise_type: "strength".to_string(),
//!     planned_series: 4,
//!     due_date: "01/01/2025".to_string(),
//!     priority: "High".to_string(),
//! });
//! assert_eq!(bench.id, 1);
//!
//! let done = log.complete(&CompleteExercise {
//!     id: bench.id,
//!     repetitions: 10,
//!     weight: 60.5,
//!     observation: "felt easy".to_string(),
//! })?;
//! assert_eq!(done.status, ExerciseStatus::Completed);
//!
//! log.remove(&Id { id: bench.id })?;
//! assert!(log.list().is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use jiff::{civil::Date, Zoned};

use crate::models::Exercise;

pub mod builder;
pub mod exercise_ops;
pub mod selection;

#[cfg(test)]
mod tests;

pub use builder::ExerciseLogBuilder;
pub use selection::{NameMatch, Selection};

/// Ordered, in-memory collection of exercises.
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub(crate) exercises: Vec<Exercise>,
    /// High-water mark for id assignment; ids are never handed out twice.
    pub(crate) next_id: u64,
    /// Fixed creation date, when pinned by the builder.
    pub(crate) today: Option<Date>,
}

impl ExerciseLog {
    pub(crate) fn new(today: Option<Date>) -> Self {
        Self {
            exercises: Vec::new(),
            next_id: 1,
            today,
        }
    }

    /// Number of exercises currently in the log.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Returns true when no exercise is registered.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// The date stamped on newly added exercises.
    pub(crate) fn today(&self) -> Date {
        self.today.unwrap_or_else(|| Zoned::now().date())
    }
}
