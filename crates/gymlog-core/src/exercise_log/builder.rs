//! Builder for creating and configuring ExerciseLog instances.

use jiff::civil::Date;

use super::ExerciseLog;

/// Builder for creating and configuring ExerciseLog instances.
#[derive(Debug, Clone, Default)]
pub struct ExerciseLogBuilder {
    today: Option<Date>,
}

impl ExerciseLogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Pins the creation date stamped on new exercises.
    ///
    /// If not specified, the current local date is read at each add.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    /// Builds an empty exercise log.
    pub fn build(self) -> ExerciseLog {
        ExerciseLog::new(self.today)
    }
}
