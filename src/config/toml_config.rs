use crate::core::{NumberList, OperationKind, OutputFormat};
use crate::utils::error::{LambdaError, Result};
use crate::utils::validation::{validate_one_of, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub sorter: Option<SorterConfig>,
    pub dispatcher: Option<DispatcherConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SorterConfig {
    pub numbers: NumberList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatcherConfig {
    pub operation: Option<String>,
    pub lhs: Option<i32>,
    pub rhs: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LambdaError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LambdaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SORT_INPUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LambdaError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn numbers(&self) -> Option<&NumberList> {
        self.sorter.as_ref().map(|s| &s.numbers)
    }

    pub fn operation(&self) -> Result<Option<OperationKind>> {
        let Some(name) = self.dispatcher.as_ref().and_then(|d| d.operation.as_deref()) else {
            return Ok(None);
        };
        validate_one_of("dispatcher.operation", name, &OperationKind::NAMES)?;
        name.parse::<OperationKind>()
            .map(Some)
            .map_err(|reason| LambdaError::InvalidConfigValueError {
                field: "dispatcher.operation".to_string(),
                value: name.to_string(),
                reason,
            })
    }

    /// Operands come as a pair: setting only one of `lhs`/`rhs` is an error.
    pub fn operands(&self) -> Result<Option<(i32, i32)>> {
        let Some(dispatcher) = self.dispatcher.as_ref() else {
            return Ok(None);
        };
        match (dispatcher.lhs, dispatcher.rhs) {
            (None, None) => Ok(None),
            _ => {
                let lhs = validate_required_field("dispatcher.lhs", &dispatcher.lhs)?;
                let rhs = validate_required_field("dispatcher.rhs", &dispatcher.rhs)?;
                Ok(Some((*lhs, *rhs)))
            }
        }
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        let Some(name) = self.output.as_ref().and_then(|o| o.format.as_deref()) else {
            return Ok(None);
        };
        validate_one_of("output.format", name, &OutputFormat::NAMES)?;
        name.parse::<OutputFormat>()
            .map(Some)
            .map_err(|reason| LambdaError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: name.to_string(),
                reason,
            })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.operation()?;
        self.operands()?;
        self.output_format()?;
        Ok(())
    }
}
