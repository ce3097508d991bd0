use crate::domain::model::{NumberList, OperationKind, OutputFormat, Report};
use crate::utils::error::Result;

/// Anything that takes two integers and returns one.
///
/// Every `Fn(i32, i32) -> i32` satisfies this, so a named `fn` item and a
/// closure are interchangeable wherever the trait is expected.
pub trait BinaryIntOperation {
    fn apply(&self, x: i32, y: i32) -> i32;
}

impl<F> BinaryIntOperation for F
where
    F: Fn(i32, i32) -> i32,
{
    fn apply(&self, x: i32, y: i32) -> i32 {
        self(x, y)
    }
}

pub trait ConfigProvider {
    fn numbers(&self) -> &NumberList;
    fn operation(&self) -> OperationKind;
    fn operands(&self) -> (i32, i32);
    fn output_format(&self) -> OutputFormat;
}

/// A runnable unit that produces console lines.
pub trait Exercise {
    fn name(&self) -> &str;

    /// Runs once, returning the lines to print and recording results in `report`.
    fn run(&self, report: &mut Report) -> Result<Vec<String>>;
}
