//! Data models for the exercise log.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! # Examples
//!
//! ```rust
//! use gymlog_core::models::{Exercise, ExerciseStatus};
//! use jiff::civil::date;
//!
//! let exercise = Exercise {
//!     id: 1,
//!     name: "Bench Press".to_string(),
//!     description: "chest, barbell".to_string(),
//!     exercise_type: "strength".to_string(),
//!     planned_series: 4,
//!     due_date: "01/01/2025".to_string(),
//!     priority: "High".to_string(),
//!     creation_date: date(2024, 12, 30),
//!     repetitions: None,
//!     weight: None,
//!     observation: None,
//!     status: ExerciseStatus::Pending,
//! };
//! println!("{}", exercise); // Markdown with a ○ Pending status icon
//! ```

pub mod exercise;
pub mod status;


pub use exercise::Exercise;
pub use status::ExerciseStatus;
