//! Interactive numbered menu driving the exercise log.
//!
//! Each pass of the loop shows the menu, reads one option and runs the
//! matching action. The loop ends on option `5` or when the input closes.

use std::io::{self, BufRead, Write};

use gymlog_core::{
    params::{parse_count, parse_series, parse_weight},
    Candidates, CompleteExercise, CompleteResult, CreateExercise, CreateResult, DeleteResult,
    ExerciseLog, Id, Selection,
};
use log::{info, warn};

use crate::{prompt::Prompter, renderer::TerminalRenderer};

const MENU: &str = "\
=== GymLog - Workout Log ===
1 - Add new exercise
2 - List exercises
3 - Mark exercise as completed
4 - Remove exercise
5 - Exit";

/// Whether the loop keeps going after an action.
enum Flow {
    Continue,
    Exit,
}

/// The interactive session: owns the log for its whole lifetime.
pub struct Menu<R, W> {
    log: ExerciseLog,
    prompter: Prompter<R, W>,
    renderer: TerminalRenderer,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(log: ExerciseLog, prompter: Prompter<R, W>, renderer: TerminalRenderer) -> Self {
        Self {
            log,
            prompter,
            renderer,
        }
    }

    /// Runs the menu until the user exits or the input is closed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("Input closed, leaving GymLog");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn step(&mut self) -> io::Result<Flow> {
        writeln!(self.prompter.output(), "\n{MENU}")?;
        let option = self.prompter.ask("\nChoose an option: ")?;

        match option.trim() {
            "1" => self.add_exercise()?,
            "2" => self.list_exercises()?,
            "3" => self.complete_exercise()?,
            "4" => self.remove_exercise()?,
            "5" => {
                writeln!(self.prompter.output(), "\nLeaving GymLog. See you soon!")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(
                self.prompter.output(),
                "\nInvalid option. Please choose an option from 1 to 5."
            )?,
        }
        Ok(Flow::Continue)
    }

    fn add_exercise(&mut self) -> io::Result<()> {
        let name = self.prompter.ask("\nExercise name: ")?;
        let description = self
            .prompter
            .ask("Description (e.g. target muscle, equipment): ")?;
        let exercise_type = self.prompter.ask("Type (strength, cardio, etc.): ")?;
        let planned_series = self.prompter.ask_until(
            "Series: ",
            "Invalid value. Please enter a whole number for the series.",
            parse_series,
        )?;
        let due_date = self.prompter.ask("Due date (dd/mm/yyyy): ")?;
        let priority = self.prompter.ask("Priority (High, Medium, Low): ")?;

        let exercise = self.log.add(&CreateExercise {
            name,
            description,
            exercise_type,
            planned_series,
            due_date,
            priority,
        });

        writeln!(self.prompter.output())?;
        self.render(&CreateResult::new(exercise).to_string())
    }

    fn list_exercises(&mut self) -> io::Result<()> {
        writeln!(self.prompter.output())?;
        let exercises = self.log.list();
        self.render(&exercises.to_string())
    }

    fn complete_exercise(&mut self) -> io::Result<()> {
        let selection = self.select_for_action()?;
        let Some(exercise) = selection.id().and_then(|id| self.log.find_by_id(id)) else {
            return self.cancel(&selection);
        };
        let id = exercise.id;
        let name = exercise.name.clone();

        writeln!(self.prompter.output(), "\nCompleting exercise: {name}")?;
        let repetitions = self.prompter.ask_until(
            "Repetitions performed: ",
            "Invalid value. Please enter a whole number for the repetitions.",
            |s| parse_count("repetitions", s),
        )?;
        let weight = self.prompter.ask_until(
            "Weight used (kg): ",
            "Invalid value. Please enter a number for the weight.",
            parse_weight,
        )?;
        let observation = self.prompter.ask("Any notes for next time? ")?;

        match self.log.complete(&CompleteExercise {
            id,
            repetitions,
            weight,
            observation,
        }) {
            Ok(exercise) => {
                writeln!(self.prompter.output())?;
                self.render(&CompleteResult::new(exercise).to_string())
            }
            Err(e) => {
                warn!("Completion failed: {e}");
                writeln!(self.prompter.output(), "{e}")?;
                writeln!(self.prompter.output(), "Operation cancelled.")
            }
        }
    }

    fn remove_exercise(&mut self) -> io::Result<()> {
        let selection = self.select_for_action()?;
        let Some(id) = selection.id() else {
            return self.cancel(&selection);
        };

        match self.log.remove(&Id { id }) {
            Ok(exercise) => {
                writeln!(self.prompter.output())?;
                self.render(&DeleteResult::new(exercise).to_string())
            }
            Err(e) => {
                warn!("Removal failed: {e}");
                writeln!(self.prompter.output(), "{e}")?;
                writeln!(self.prompter.output(), "Operation cancelled.")
            }
        }
    }

    /// Asks for a name and, when several exercises share it, for an id.
    fn select_for_action(&mut self) -> io::Result<Selection> {
        let name = self.prompter.ask("\nEnter the exercise name: ")?;

        let prompter = &mut self.prompter;
        let renderer = &self.renderer;
        self.log.select_with(&name, |candidates| {
            writeln!(prompter.output())?;
            renderer.render(prompter.output(), &Candidates(candidates).to_string())?;
            prompter.ask("\nPlease enter the ID of the desired exercise: ")
        })
    }

    fn cancel(&mut self, selection: &Selection) -> io::Result<()> {
        warn!("Selection cancelled: {selection:?}");
        writeln!(self.prompter.output())?;
        write!(self.prompter.output(), "{selection}")?;
        writeln!(self.prompter.output(), "Operation cancelled.")
    }

    fn render(&mut self, markdown: &str) -> io::Result<()> {
        self.renderer.render(self.prompter.output(), markdown)
    }

    #[cfg(test)]
    fn into_parts(self) -> (ExerciseLog, Prompter<R, W>) {
        (self.log, self.prompter)
    }
}
