//! Collection wrapper types for displaying groups of exercises.

use std::{fmt, ops::Index};

use crate::models::Exercise;

/// Newtype wrapper for displaying the full exercise list.
///
/// Handles the empty case with a dedicated message, so callers can print
/// the wrapper directly.
///
/// # Examples
///
/// ```rust
/// use gymlog_core::display::Exercises;
///
/// let exercises = Exercises(vec![]);
/// assert!(exercises.is_empty());
/// assert_eq!(format!("{}", exercises), "No exercises registered yet.\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exercises(pub Vec<Exercise>);

impl Exercises {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of exercises in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the exercises.
    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.0.iter()
    }

    /// The most recently added exercise, if any.
    pub fn last(&self) -> Option<&Exercise> {
        self.0.last()
    }
}

impl Index<usize> for Exercises {
    type Output = Exercise;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Exercises {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Exercises {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No exercises registered yet.")
        } else {
            writeln!(f, "# Exercises")?;
            writeln!(f)?;
            for exercise in &self.0 {
                write!(f, "{}", exercise)?;
            }
            Ok(())
        }
    }
}

/// Compact listing of exercises sharing a name, shown while the user
/// picks one by ID.
pub struct Candidates<'a>(pub &'a [Exercise]);

impl<'a> fmt::Display for Candidates<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Multiple exercises found with that name:")?;
        writeln!(f)?;
        for exercise in self.0 {
            writeln!(
                f,
                "- ID: {} - Exercise: {} (Due: {})",
                exercise.id, exercise.name, exercise.due_date
            )?;
        }
        Ok(())
    }
}
