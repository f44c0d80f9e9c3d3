//! Display implementation for selection outcomes.

use std::fmt;

use crate::exercise_log::Selection;

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Found(id) => writeln!(f, "Selected exercise with ID {id}."),
            Selection::NotFound { name } => writeln!(f, "No exercise named '{name}' found."),
            Selection::UnknownId { id } => writeln!(f, "No exercise with ID {id} found."),
            Selection::InvalidId { .. } => writeln!(f, "Invalid ID. Please enter a number."),
        }
    }
}
