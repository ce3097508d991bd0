pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::settings::Settings;
    use super::toml_config::TomlConfig;
    use crate::core::{NumberList, OperationKind, OutputFormat};
    use crate::utils::error::Result;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
    #[command(name = "small-lambdas")]
    #[command(about = "Sorts numeric strings with comparator closures and applies a binary operation")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Values to sort, comma separated (default: 10,5,100,25,3)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        pub numbers: Option<Vec<String>>,

        /// How the addition is bound: a named function or an inline closure
        #[arg(long, value_enum)]
        pub operation: Option<OperationKind>,

        #[arg(long, allow_negative_numbers = true)]
        pub lhs: Option<i32>,

        #[arg(long, allow_negative_numbers = true)]
        pub rhs: Option<i32>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Defaults, then the TOML file if one was given, then flags.
        pub fn resolve(&self) -> Result<Settings> {
            let mut settings = match &self.config {
                Some(path) => {
                    tracing::info!("Loading configuration from: {}", path);
                    Settings::from_toml(&TomlConfig::from_file(path)?)?
                }
                None => Settings::default(),
            };

            if let Some(numbers) = &self.numbers {
                settings.numbers = NumberList::new(numbers.clone());
            }
            if let Some(operation) = self.operation {
                settings.operation = operation;
            }
            if let Some(lhs) = self.lhs {
                settings.lhs = lhs;
            }
            if let Some(rhs) = self.rhs {
                settings.rhs = rhs;
            }
            if let Some(format) = self.format {
                settings.format = format;
            }

            tracing::debug!("Resolved settings: {:?}", settings);
            Ok(settings)
        }
    }

}
