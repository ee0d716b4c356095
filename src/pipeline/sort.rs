//! Stable column sort

use crate::types::{Row, SortDirection, SortKey};

/// Sort rows on one column.
///
/// `slice::sort_by` is stable, and the direction is applied to the comparator
/// result rather than by reversing the output, so rows that compare equal keep
/// their input order in both directions.
pub fn sort_rows<'a>(rows: &[&'a Row], key: SortKey, direction: SortDirection) -> Vec<&'a Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| direction.apply(a.cmp_by(b, key)));
    sorted
}
