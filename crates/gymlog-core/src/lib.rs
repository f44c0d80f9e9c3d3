//! Core library for the GymLog workout diary.
//!
//! This crate holds the exercise data model, the in-memory
//! [`ExerciseLog`] with its record operations, and the markdown display
//! layer. It does no terminal I/O; the `gymlog` binary drives it from an
//! interactive menu.
//!
//! # Quick Start
//!
//! ```rust
//! use gymlog_core::{params::CreateExercise, ExerciseLogBuilder};
//!
//! let mut log = ExerciseLogBuilder::new().build();
//!
//! let squat = log.add(&CreateExercise {
//!     name: "Squat".to_string(),
//!     description: "legs, barbell".to_string(),
//!     exercise_type: "strength".to_string(),
//!     planned_series: 5,
//!     due_date: "03/02/2025".to_string(),
//!     priority: "High".to_string(),
//! });
//! println!("Added: {}", squat);
//!
//! for exercise in &log.list() {
//!     println!("{} {}", exercise.id, exercise.name);
//! }
//! ```

pub mod display;
pub mod error;
pub mod exercise_log;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use display::{Candidates, CompleteResult, CreateResult, DeleteResult, Exercises};
pub use error::{GymLogError, Result};
pub use exercise_log::{ExerciseLog, ExerciseLogBuilder, NameMatch, Selection};
pub use models::{Exercise, ExerciseStatus};
pub use params::{CompleteExercise, CreateExercise, Id};
