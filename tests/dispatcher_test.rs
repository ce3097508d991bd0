use small_lambdas::core::dispatcher::operation;
use small_lambdas::{addition, apply, BinaryIntOperation, OperationKind};

fn run_with(op: &dyn BinaryIntOperation) -> i32 {
    apply(op, 10, 20)
}

#[test]
fn test_named_function_reference() {
    assert_eq!(apply(&addition, 10, 20), 30);
}

#[test]
fn test_inline_closure_is_interchangeable() {
    let inline = |a: i32, b: i32| a + b;
    assert_eq!(run_with(&inline), 30);
    assert_eq!(run_with(&addition), run_with(&inline));
}

#[test]
fn test_runtime_selected_operations_agree() {
    let ops = [operation(OperationKind::Named), operation(OperationKind::Inline)];
    let results: Vec<i32> = ops.iter().map(|op| apply(op.as_ref(), 10, 20)).collect();
    assert_eq!(results, vec![30, 30]);
}

#[test]
fn test_closure_capturing_environment() {
    let offset = 5;
    let shifted = move |a: i32, b: i32| a + b + offset;
    assert_eq!(apply(&shifted, 10, 20), 35);
}
