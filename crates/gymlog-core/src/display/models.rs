//! Display implementations for domain models.
//!
//! Output is markdown, rendered by the CLI's terminal renderer.

use std::fmt;

use super::datetime::DayMonthYear;
use crate::models::{Exercise, ExerciseStatus};

/// Placeholder shown for execution fields that are not recorded yet.
const UNSET: &str = "-";

impl fmt::Display for ExerciseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        // Planning fields
        writeln!(f, "- **Description**: {}", self.description)?;
        writeln!(f, "- **Type**: {}", self.exercise_type)?;
        writeln!(f, "- **Series**: {}", self.planned_series)?;
        writeln!(f, "- **Due date**: {}", self.due_date)?;
        writeln!(f, "- **Priority**: {}", self.priority)?;
        writeln!(f, "- **Created**: {}", DayMonthYear(&self.creation_date))?;

        // Execution fields
        match self.repetitions {
            Some(reps) => writeln!(f, "- **Repetitions**: {reps}")?,
            None => writeln!(f, "- **Repetitions**: {UNSET}")?,
        }
        match self.weight {
            Some(weight) => writeln!(f, "- **Weight**: {weight:?} kg")?,
            None => writeln!(f, "- **Weight**: {UNSET}")?,
        }
        writeln!(
            f,
            "- **Observation**: {}",
            self.observation.as_deref().unwrap_or(UNSET)
        )?;
        writeln!(f)?;

        Ok(())
    }
}
