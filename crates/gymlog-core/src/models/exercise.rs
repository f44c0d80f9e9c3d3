//! Exercise model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ExerciseStatus;

/// A planned workout item, optionally carrying the details of its execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier, assigned by the log
    pub id: u64,

    /// Name of the exercise (e.g. "Bench Press")
    pub name: String,

    /// Free-text description such as target muscle or equipment
    pub description: String,

    /// Category label such as "strength" or "cardio"
    #[serde(rename = "type")]
    pub exercise_type: String,

    /// Number of planned series
    pub planned_series: i64,

    /// Planned date, kept exactly as entered
    pub due_date: String,

    /// Priority label such as "High", "Medium" or "Low"
    pub priority: String,

    /// Local date on which the exercise was registered
    pub creation_date: Date,

    /// Repetitions performed, set on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,

    /// Weight used in kg, set on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Notes for next time, set on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,

    /// Current status of the exercise
    #[serde(default)]
    pub status: ExerciseStatus,
}

impl Exercise {
    /// Returns true once execution details have been recorded.
    pub fn is_completed(&self) -> bool {
        self.status == ExerciseStatus::Completed
    }

    /// Case-insensitive exact comparison against the exercise name.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
