//! Exercise status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle status of an exercise.
///
/// An exercise starts out `Pending` and moves to `Completed` once its
/// execution details are recorded. There is no way back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStatus {
    /// Planned but not yet performed
    #[default]
    Pending,

    /// Performed, with repetitions, weight and observation recorded
    Completed,
}

impl FromStr for ExerciseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ExerciseStatus::Pending),
            "completed" => Ok(ExerciseStatus::Completed),
            _ => Err(format!("Invalid exercise status: {s}")),
        }
    }
}

impl ExerciseStatus {
    /// Lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseStatus::Pending => "pending",
            ExerciseStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gymlog_core::models::ExerciseStatus;
    ///
    /// assert_eq!(ExerciseStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ExerciseStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ExerciseStatus::Completed => "✓ Completed",
            ExerciseStatus::Pending => "○ Pending",
        }
    }
}
