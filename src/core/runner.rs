use crate::core::{Exercise, Report};
use crate::utils::error::Result;

/// Runs exercises one after another, in registration order.
pub struct ExerciseRunner {
    exercises: Vec<Box<dyn Exercise>>,
}

impl ExerciseRunner {
    pub fn new() -> Self {
        Self {
            exercises: Vec::new(),
        }
    }

    pub fn with_exercise<E: Exercise + 'static>(mut self, exercise: E) -> Self {
        self.exercises.push(Box::new(exercise));
        self
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Runs every exercise, handing each output line to `emit` as soon as
    /// its exercise finishes. Stops at the first error; lines already
    /// emitted stay emitted.
    pub fn run_with<F>(&self, mut emit: F) -> Result<Report>
    where
        F: FnMut(&str),
    {
        let mut report = Report::default();

        for exercise in &self.exercises {
            tracing::info!("Running exercise: {}", exercise.name());
            let lines = exercise.run(&mut report).inspect_err(|e| {
                tracing::error!("Exercise {} failed: {}", exercise.name(), e);
            })?;
            for line in &lines {
                emit(line);
            }
            tracing::debug!("Exercise {} produced {} lines", exercise.name(), lines.len());
        }

        Ok(report)
    }

    /// Runs every exercise and prints its lines to stdout.
    pub fn run(&self) -> Result<Report> {
        self.run_with(|line| println!("{}", line))
    }
}

impl Default for ExerciseRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dispatcher::AdditionExercise;
    use crate::core::sorter::SortExercise;
    use crate::core::NumberList;
    use crate::utils::error::LambdaError;

    #[test]
    fn test_runs_in_registration_order() {
        let runner = ExerciseRunner::new()
            .with_exercise(SortExercise::default())
            .with_exercise(AdditionExercise::default());

        let mut lines = Vec::new();
        let report = runner.run_with(|line| lines.push(line.to_string())).unwrap();

        assert_eq!(
            lines,
            vec![
                "Ascending order: [3, 5, 10, 25, 100]",
                "Descending order: [100, 25, 10, 5, 3]",
                "Addition: 30",
            ]
        );
        assert_eq!(report.addition, Some(30));
    }

    #[test]
    fn test_stops_at_first_failure() {
        let runner = ExerciseRunner::new()
            .with_exercise(AdditionExercise::default())
            .with_exercise(SortExercise::new(NumberList::from_iter(["5", "abc", "3"])))
            .with_exercise(AdditionExercise::default());

        let mut lines = Vec::new();
        let result = runner.run_with(|line| lines.push(line.to_string()));

        assert!(matches!(result, Err(LambdaError::ParseError { index: 1, .. })));
        assert_eq!(lines, vec!["Addition: 30"]);
    }

    #[test]
    fn test_empty_runner_produces_empty_report() {
        let runner = ExerciseRunner::default();
        assert!(runner.is_empty());
        assert_eq!(runner.run_with(|_| {}).unwrap(), Report::default());
    }
}
