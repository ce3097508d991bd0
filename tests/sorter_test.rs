use anyhow::Result;
use small_lambdas::core::sorter::{sort_with, sorted_ascending, sorted_descending};
use small_lambdas::core::SortOrder;
use small_lambdas::{sort_ascending, sort_descending, LambdaError, NumberList};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// 範例資料：先遞增、再對結果遞減
#[test]
fn test_sample_list_sorted_in_place_twice() -> Result<()> {
    let mut numbers = NumberList::sample();

    numbers.sort(SortOrder::Ascending)?;
    assert_eq!(numbers.to_string(), "[3, 5, 10, 25, 100]");

    numbers.sort(SortOrder::Descending)?;
    assert_eq!(numbers.to_string(), "[100, 25, 10, 5, 3]");
    Ok(())
}

#[test]
fn test_duplicates_keep_relative_order_in_both_directions() -> Result<()> {
    let mut numbers = strings(&["5", "1", "05", "9", "+5"]);

    sort_ascending(&mut numbers)?;
    assert_eq!(numbers, strings(&["1", "5", "05", "+5", "9"]));

    sort_descending(&mut numbers)?;
    assert_eq!(numbers, strings(&["9", "5", "05", "+5", "1"]));
    Ok(())
}

#[test]
fn test_copying_variants_match_in_place_variants() -> Result<()> {
    let original = strings(&["-10", "3", "0", "3", "-2"]);

    let mut in_place = original.clone();
    sort_ascending(&mut in_place)?;
    assert_eq!(sorted_ascending(&original)?, in_place);

    sort_descending(&mut in_place)?;
    assert_eq!(sorted_descending(&original)?, in_place);
    Ok(())
}

#[test]
fn test_non_numeric_element_is_a_parse_error() {
    let mut numbers = strings(&["5", "abc", "3"]);

    let err = sort_ascending(&mut numbers).unwrap_err();
    assert!(matches!(
        &err,
        LambdaError::ParseError { index: 1, value, .. } if value == "abc"
    ));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_first_bad_element_is_reported() {
    let mut numbers = strings(&["1", "2.5", "x"]);
    match sort_descending(&mut numbers) {
        Err(LambdaError::ParseError { index, .. }) => assert_eq!(index, 1),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_comparator_closure_can_capture_state() -> Result<()> {
    let pivot = 10;
    let mut numbers = strings(&["4", "12", "9", "30"]);

    sort_with(&mut numbers, |a, b| (a - pivot).abs().cmp(&(b - pivot).abs()))?;
    assert_eq!(numbers, strings(&["9", "12", "4", "30"]));
    Ok(())
}
