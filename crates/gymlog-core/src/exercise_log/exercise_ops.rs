//! Record operations for the ExerciseLog.

use log::debug;

use super::ExerciseLog;
use crate::{
    display::Exercises,
    error::{GymLogError, Result},
    models::{Exercise, ExerciseStatus},
    params::{validate_weight, CompleteExercise, CreateExercise, Id},
};

impl ExerciseLog {
    /// Adds a new pending exercise and returns a copy of it.
    ///
    /// The exercise gets the next free id and today's date as creation date;
    /// execution fields start unset. Field contents are not validated.
    pub fn add(&mut self, params: &CreateExercise) -> Exercise {
        let exercise = Exercise {
            id: self.next_id,
            name: params.name.clone(),
            description: params.description.clone(),
            exercise_type: params.exercise_type.clone(),
            planned_series: params.planned_series,
            due_date: params.due_date.clone(),
            priority: params.priority.clone(),
            creation_date: self.today(),
            repetitions: None,
            weight: None,
            observation: None,
            status: ExerciseStatus::Pending,
        };
        self.next_id += 1;

        debug!("Added exercise {} ({})", exercise.id, exercise.name);
        self.exercises.push(exercise.clone());
        exercise
    }

    /// Lists every exercise in insertion order.
    pub fn list(&self) -> Exercises {
        Exercises(self.exercises.clone())
    }

    /// Looks up an exercise by id.
    pub fn find_by_id(&self, id: u64) -> Option<&Exercise> {
        self.exercises.iter().find(|exercise| exercise.id == id)
    }

    /// Returns all exercises whose name equals `name`, ignoring case,
    /// in insertion order.
    pub fn find_by_name(&self, name: &str) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|exercise| exercise.name_matches(name))
            .collect()
    }

    /// Records execution details and marks the exercise completed.
    ///
    /// Completing an exercise that is already completed overwrites the
    /// previous repetitions, weight and observation.
    ///
    /// # Errors
    ///
    /// Returns `GymLogError::InvalidInput` if the weight is negative or not
    /// finite, and `GymLogError::ExerciseNotFound` if no exercise has the id.
    pub fn complete(&mut self, params: &CompleteExercise) -> Result<Exercise> {
        let weight = validate_weight(params.weight)?;

        let exercise = self
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == params.id)
            .ok_or(GymLogError::ExerciseNotFound { id: params.id })?;

        if exercise.is_completed() {
            debug!("Overwriting execution details of exercise {}", exercise.id);
        }

        exercise.repetitions = Some(params.repetitions);
        exercise.weight = Some(weight);
        exercise.observation = Some(params.observation.clone());
        exercise.status = ExerciseStatus::Completed;

        debug!("Completed exercise {}", exercise.id);
        Ok(exercise.clone())
    }

    /// Removes an exercise from the log and returns it.
    ///
    /// This operation cannot be undone, and the removed id is never
    /// assigned again.
    ///
    /// # Errors
    ///
    /// Returns `GymLogError::ExerciseNotFound` if no exercise has the id.
    pub fn remove(&mut self, params: &Id) -> Result<Exercise> {
        let index = self
            .exercises
            .iter()
            .position(|exercise| exercise.id == params.id)
            .ok_or(GymLogError::ExerciseNotFound { id: params.id })?;

        let removed = self.exercises.remove(index);
        debug!("Removed exercise {} ({})", removed.id, removed.name);
        Ok(removed)
    }
}
