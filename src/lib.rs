pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::settings::Settings;
pub use crate::core::dispatcher::{addition, apply, AdditionExercise};
pub use crate::core::runner::ExerciseRunner;
pub use crate::core::sorter::{sort_ascending, sort_descending, SortExercise};
pub use crate::core::{BinaryIntOperation, NumberList, OperationKind, OutputFormat};
pub use crate::utils::error::{LambdaError, Result};
