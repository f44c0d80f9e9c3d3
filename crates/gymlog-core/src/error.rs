//! Error types for the exercise log.

use thiserror::Error;

/// Error type for all exercise log operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GymLogError {
    /// Exercise not found for the given ID
    #[error("Exercise with ID {id} not found")]
    ExerciseNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GymLogError {
        GymLogError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GymLogError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }
}

/// Result type alias for exercise log operations
pub type Result<T> = std::result::Result<T, GymLogError>;
