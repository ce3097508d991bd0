use crate::config::toml_config::TomlConfig;
use crate::core::dispatcher::AdditionExercise;
use crate::core::runner::ExerciseRunner;
use crate::core::sorter::SortExercise;
use crate::core::{ConfigProvider, NumberList, OperationKind, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};

/// Fully resolved run settings. Defaults reproduce the sample run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub numbers: NumberList,
    pub operation: OperationKind,
    pub lhs: i32,
    pub rhs: i32,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            numbers: NumberList::sample(),
            operation: OperationKind::Named,
            lhs: 10,
            rhs: 20,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Layers a TOML file over the defaults; keys the file leaves out keep
    /// their default value.
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;

        let mut settings = Self::default();
        if let Some(numbers) = config.numbers() {
            settings.numbers = numbers.clone();
        }
        if let Some(operation) = config.operation()? {
            settings.operation = operation;
        }
        if let Some((lhs, rhs)) = config.operands()? {
            settings.lhs = lhs;
            settings.rhs = rhs;
        }
        if let Some(format) = config.output_format()? {
            settings.format = format;
        }
        Ok(settings)
    }

    /// Both exercises, sorter first.
    pub fn runner(&self) -> ExerciseRunner {
        ExerciseRunner::new()
            .with_exercise(SortExercise::new(self.numbers.clone()))
            .with_exercise(AdditionExercise::new(self.operation, self.lhs, self.rhs))
    }
}

impl ConfigProvider for Settings {
    fn numbers(&self) -> &NumberList {
        &self.numbers
    }

    fn operation(&self) -> OperationKind {
        self.operation
    }

    fn operands(&self) -> (i32, i32) {
        (self.lhs, self.rhs)
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}
