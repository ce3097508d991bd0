use crate::core::{Exercise, NumberList, Report, SortOrder};
use crate::utils::error::{LambdaError, Result};
use std::cmp::Ordering;

/// Parses every element before anything moves, so a bad element leaves the
/// list untouched.
fn parse_all(list: &[String]) -> Result<Vec<i32>> {
    list.iter()
        .enumerate()
        .map(|(index, value)| {
            value.parse::<i32>().map_err(|source| {
                tracing::warn!("Element #{} ({:?}) is not an integer", index, value);
                LambdaError::ParseError {
                    index,
                    value: value.clone(),
                    source,
                }
            })
        })
        .collect()
}

/// Stable in-place sort of numeric strings, ordered by `cmp` over their
/// parsed values.
pub fn sort_with<F>(list: &mut [String], cmp: F) -> Result<&[String]>
where
    F: Fn(&i32, &i32) -> Ordering,
{
    let keys = parse_all(list)?;

    let mut keyed: Vec<(i32, String)> = keys
        .into_iter()
        .zip(list.iter_mut().map(std::mem::take))
        .collect();
    keyed.sort_by(|a, b| cmp(&a.0, &b.0));

    for (slot, (_, value)) in list.iter_mut().zip(keyed) {
        *slot = value;
    }

    Ok(&*list)
}

pub fn sort_ascending(list: &mut [String]) -> Result<&[String]> {
    sort_with(list, |a, b| a.cmp(b))
}

pub fn sort_descending(list: &mut [String]) -> Result<&[String]> {
    sort_with(list, |a, b| b.cmp(a))
}

/// Same as [`sort_ascending`] but leaves `list` alone.
pub fn sorted_ascending(list: &[String]) -> Result<Vec<String>> {
    let mut copy = list.to_vec();
    sort_ascending(&mut copy)?;
    Ok(copy)
}

pub fn sorted_descending(list: &[String]) -> Result<Vec<String>> {
    let mut copy = list.to_vec();
    sort_descending(&mut copy)?;
    Ok(copy)
}

impl NumberList {
    pub fn sort(&mut self, order: SortOrder) -> Result<&[String]> {
        tracing::debug!("Sorting {} values ({:?})", self.len(), order);
        match order {
            SortOrder::Ascending => sort_ascending(self.as_mut_slice()),
            SortOrder::Descending => sort_descending(self.as_mut_slice()),
        }
    }
}

/// Sorts one list ascending, prints it, then sorts the result descending.
pub struct SortExercise {
    numbers: NumberList,
}

impl SortExercise {
    pub fn new(numbers: NumberList) -> Self {
        Self { numbers }
    }
}

impl Default for SortExercise {
    fn default() -> Self {
        Self::new(NumberList::sample())
    }
}

impl Exercise for SortExercise {
    fn name(&self) -> &str {
        "sort-numbers"
    }

    fn run(&self, report: &mut Report) -> Result<Vec<String>> {
        let mut numbers = self.numbers.clone();
        let mut lines = Vec::with_capacity(2);

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            numbers.sort(order)?;
            lines.push(format!("{}: {}", order.label(), numbers));

            let snapshot = Some(numbers.as_slice().to_vec());
            match order {
                SortOrder::Ascending => report.ascending = snapshot,
                SortOrder::Descending => report.descending = snapshot,
            }
        }

        Ok(lines)
    }
}
