use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strings that each hold a base-10 integer. Sorting happens in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberList {
    items: Vec<String>,
}

impl NumberList {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// The five values the sorter exercise starts from.
    pub fn sample() -> Self {
        ["10", "5", "100", "25", "3"].into_iter().collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [String] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.items
    }
}

impl<S: Into<String>> FromIterator<S> for NumberList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(item)?;
        }
        f.write_str("]")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending order",
            SortOrder::Descending => "Descending order",
        }
    }
}

/// Which construction of `BinaryIntOperation` the dispatcher uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OperationKind {
    /// Reference to the named `addition` function.
    #[default]
    Named,
    /// Closure written at the call site.
    Inline,
}

impl OperationKind {
    pub const NAMES: [&'static str; 2] = ["named", "inline"];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Named => "named",
            OperationKind::Inline => "inline",
        }
    }
}

impl FromStr for OperationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "named" => Ok(OperationKind::Named),
            "inline" => Ok(OperationKind::Inline),
            other => Err(format!("unknown operation kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Results of one full run, used for JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascending: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descending: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addition: Option<i32>,
}
