pub mod dispatcher;
pub mod runner;
pub mod sorter;

pub use crate::domain::model::{NumberList, OperationKind, OutputFormat, Report, SortOrder};
pub use crate::domain::ports::{BinaryIntOperation, ConfigProvider, Exercise};
pub use crate::utils::error::Result;
