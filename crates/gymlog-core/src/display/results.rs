//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper pairs a confirmation line with the affected exercise.

use std::fmt;

use crate::models::Exercise;

/// Wrapper type for displaying a newly added exercise.
///
/// # Examples
///
/// ```rust
/// use gymlog_core::{display::CreateResult, params::CreateExercise, ExerciseLogBuilder};
///
/// let mut log = ExerciseLogBuilder::new().build();
/// let exercise = log.add(&CreateExercise {
///     name: "Squat".to_string(),
///     ..Default::default()
/// });
/// let output = CreateResult::new(exercise).to_string();
/// assert!(output.starts_with("Exercise added successfully!"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Exercise> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exercise added successfully!")?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying an exercise that was just marked completed.
pub struct CompleteResult<T> {
    pub resource: T,
}

impl<T> CompleteResult<T> {
    /// Create a new CompleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CompleteResult<Exercise> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exercise with ID {} marked as completed!",
            self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a removal.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Exercise> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exercise with ID {} removed successfully!",
            self.resource.id
        )
    }
}
