use small_lambdas::utils::logger;
use small_lambdas::{AdditionExercise, ExerciseRunner};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    ExerciseRunner::new()
        .with_exercise(AdditionExercise::default())
        .run()?;

    Ok(())
}
