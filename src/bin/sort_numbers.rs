use small_lambdas::utils::logger;
use small_lambdas::{ExerciseRunner, SortExercise};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    ExerciseRunner::new()
        .with_exercise(SortExercise::default())
        .run()?;

    Ok(())
}
