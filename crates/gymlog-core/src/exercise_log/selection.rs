//! Two-step selection of an exercise by name, then by id.
//!
//! A name query may match zero, one or several exercises. Only the last
//! case asks the user for an id, which is then resolved against the whole
//! log.

use super::ExerciseLog;
use crate::models::Exercise;

/// Outcome of the first selection step.
#[derive(Debug, Clone, PartialEq)]
pub enum NameMatch {
    /// Nothing is called that
    NoMatch { name: String },
    /// Exactly one exercise matched
    One(u64),
    /// Several exercises share the name, in insertion order
    Many(Vec<Exercise>),
}

/// Final outcome of selecting an exercise for an action.
///
/// Everything except `Found` cancels the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The exercise with this id was selected
    Found(u64),
    /// No exercise has the given name
    NotFound { name: String },
    /// The id typed during disambiguation matches no exercise
    UnknownId { id: u64 },
    /// The text typed during disambiguation is not an id
    InvalidId { input: String },
}

impl Selection {
    /// The selected id, if the selection succeeded.
    pub fn id(&self) -> Option<u64> {
        match self {
            Selection::Found(id) => Some(*id),
            _ => None,
        }
    }
}

impl ExerciseLog {
    /// Resolves a name to zero, one or several exercises.
    pub fn select_by_name(&self, name: &str) -> NameMatch {
        let matches = self.find_by_name(name);
        match matches.as_slice() {
            [] => NameMatch::NoMatch {
                name: name.to_string(),
            },
            [only] => NameMatch::One(only.id),
            _ => NameMatch::Many(matches.iter().map(|exercise| (*exercise).clone()).collect()),
        }
    }

    /// Resolves the id typed while disambiguating several matches.
    ///
    /// Malformed input is not retried: it yields `Selection::InvalidId`.
    pub fn resolve_candidate_id(&self, input: &str) -> Selection {
        let Ok(id) = input.trim().parse::<u64>() else {
            return Selection::InvalidId {
                input: input.to_string(),
            };
        };

        match self.find_by_id(id) {
            Some(exercise) => Selection::Found(exercise.id),
            None => Selection::UnknownId { id },
        }
    }

    /// Runs the full selection, calling `choose` only when the name is
    /// ambiguous. `choose` receives the candidates and returns the raw id
    /// text entered by the user.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `choose`.
    pub fn select_with<E, F>(&self, name: &str, choose: F) -> Result<Selection, E>
    where
        F: FnOnce(&[Exercise]) -> Result<String, E>,
    {
        match self.select_by_name(name) {
            NameMatch::NoMatch { name } => Ok(Selection::NotFound { name }),
            NameMatch::One(id) => Ok(Selection::Found(id)),
            NameMatch::Many(candidates) => {
                let input = choose(&candidates)?;
                Ok(self.resolve_candidate_id(&input))
            }
        }
    }
}
