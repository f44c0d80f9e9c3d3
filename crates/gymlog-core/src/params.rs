//! Parameter structures for exercise log operations.
//!
//! These structures carry already-typed values between the interactive
//! front end and [`ExerciseLog`](crate::ExerciseLog). Turning raw text into
//! those values is done by the `parse_*` helpers below, which the CLI calls
//! inside its retry loops.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Raw input     │    │  parse_series,  │    │  Core Params    │
//! │   (stdin line)  │───▶│  parse_count,   │───▶│ (typed values)  │
//! │                 │    │  parse_weight   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use crate::error::{GymLogError, Result};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default)]
pub struct Id {
    /// The ID of the exercise to operate on
    pub id: u64,
}

/// Parameters for adding a new exercise.
///
/// No field is validated: names, dates and priorities are free text.
#[derive(Debug, Clone, Default)]
pub struct CreateExercise {
    /// Name of the exercise
    pub name: String,
    /// Free-text description (target muscle, equipment, ...)
    pub description: String,
    /// Category label (strength, cardio, ...)
    pub exercise_type: String,
    /// Number of planned series, any integer
    pub planned_series: i64,
    /// Planned date, free text
    pub due_date: String,
    /// Priority label, free text
    pub priority: String,
}

/// Parameters for marking an exercise as completed.
#[derive(Debug, Clone, Default)]
pub struct CompleteExercise {
    /// ID of the exercise to complete
    pub id: u64,
    /// Repetitions performed
    pub repetitions: u32,
    /// Weight used, in kg
    pub weight: f64,
    /// Notes for next time
    pub observation: String,
}

/// Parses the planned series count.
///
/// Any integer is accepted, negative ones included; surrounding whitespace
/// is ignored.
///
/// # Errors
///
/// Returns `GymLogError::InvalidInput` when the input is not an integer.
///
/// # Examples
///
/// ```rust
/// use gymlog_core::params::parse_series;
///
/// assert_eq!(parse_series(" 4 ").unwrap(), 4);
/// assert_eq!(parse_series("-3").unwrap(), -3);
/// assert!(parse_series("four").is_err());
/// ```
pub fn parse_series(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| {
        GymLogError::invalid_input("series")
            .with_reason(format!("expected a whole number, got '{trimmed}'"))
    })
}

/// Parses a non-negative whole count such as repetitions.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `GymLogError::InvalidInput` naming `field` when the input is not a
/// non-negative integer.
///
/// # Examples
///
/// ```rust
/// use gymlog_core::params::parse_count;
///
/// assert_eq!(parse_count("repetitions", " 12 ").unwrap(), 12);
/// assert!(parse_count("repetitions", "-1").is_err());
/// assert!(parse_count("repetitions", "twelve").is_err());
/// ```
pub fn parse_count(field: &str, input: &str) -> Result<u32> {
    input.trim().parse::<u32>().map_err(|_| {
        GymLogError::invalid_input(field).with_reason(format!(
            "expected a whole number, got '{}'",
            input.trim()
        ))
    })
}

/// Parses a weight in kg.
///
/// Accepts any finite, non-negative real number; surrounding whitespace is
/// ignored.
///
/// # Errors
///
/// Returns `GymLogError::InvalidInput` for unparseable, negative or
/// non-finite values.
pub fn parse_weight(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let weight = trimmed.parse::<f64>().map_err(|_| {
        GymLogError::invalid_input("weight")
            .with_reason(format!("expected a number, got '{trimmed}'"))
    })?;
    validate_weight(weight)
}

/// Checks that a weight is finite and not negative.
///
/// # Errors
///
/// Returns `GymLogError::InvalidInput` otherwise.
pub fn validate_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(GymLogError::invalid_input("weight").with_reason("must be a finite number"));
    }
    if weight < 0.0 {
        return Err(GymLogError::invalid_input("weight").with_reason("must not be negative"));
    }
    Ok(weight)
}
