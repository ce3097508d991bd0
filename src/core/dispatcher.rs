use crate::core::{BinaryIntOperation, Exercise, OperationKind, Report};
use crate::utils::error::Result;

/// Adds two integers, wrapping on overflow.
pub fn addition(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Invokes `op` with `(x, y)` in that order.
pub fn apply<O>(op: &O, x: i32, y: i32) -> i32
where
    O: BinaryIntOperation + ?Sized,
{
    op.apply(x, y)
}

/// Builds the addition operation either as a reference to [`addition`] or
/// as a closure with the same body.
pub fn operation(kind: OperationKind) -> Box<dyn BinaryIntOperation> {
    match kind {
        OperationKind::Named => Box::new(addition),
        OperationKind::Inline => Box::new(|a: i32, b: i32| a.wrapping_add(b)),
    }
}

pub struct AdditionExercise {
    kind: OperationKind,
    lhs: i32,
    rhs: i32,
}

impl AdditionExercise {
    pub fn new(kind: OperationKind, lhs: i32, rhs: i32) -> Self {
        Self { kind, lhs, rhs }
    }
}

impl Default for AdditionExercise {
    fn default() -> Self {
        Self::new(OperationKind::Named, 10, 20)
    }
}

impl Exercise for AdditionExercise {
    fn name(&self) -> &str {
        "apply-addition"
    }

    fn run(&self, report: &mut Report) -> Result<Vec<String>> {
        tracing::debug!(
            "Applying {} operation to ({}, {})",
            self.kind.as_str(),
            self.lhs,
            self.rhs
        );

        let op = operation(self.kind);
        let sum = apply(op.as_ref(), self.lhs, self.rhs);
        report.addition = Some(sum);

        Ok(vec![format!("Addition: {}", sum)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_named_function() {
        assert_eq!(apply(&addition, 10, 20), 30);
    }

    #[test]
    fn test_inline_closure_matches_named_function() {
        let inline = |a: i32, b: i32| a + b;
        assert_eq!(apply(&inline, 10, 20), apply(&addition, 10, 20));

        let named = operation(OperationKind::Named);
        let boxed_inline = operation(OperationKind::Inline);
        for (x, y) in [(10, 20), (-7, 3), (0, 0), (i32::MAX, 1)] {
            assert_eq!(apply(named.as_ref(), x, y), apply(boxed_inline.as_ref(), x, y));
        }
    }

    #[test]
    fn test_arguments_are_passed_in_order() {
        let subtract = |a: i32, b: i32| a - b;
        assert_eq!(apply(&subtract, 10, 20), -10);

        let as_fn_pointer: fn(i32, i32) -> i32 = addition;
        assert_eq!(apply(&as_fn_pointer, 1, 2), 3);
    }

    #[test]
    fn test_addition_wraps_on_overflow() {
        assert_eq!(addition(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_exercise_prints_sum() {
        let mut report = Report::default();
        let lines = AdditionExercise::default().run(&mut report).unwrap();
        assert_eq!(lines, vec!["Addition: 30".to_string()]);
        assert_eq!(report.addition, Some(30));

        let inline = AdditionExercise::new(OperationKind::Inline, 10, 20);
        assert_eq!(inline.run(&mut Report::default()).unwrap(), lines);
    }
}
