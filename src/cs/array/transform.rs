use std::collections::HashSet;

use crate::cs::sort::{OrderedSort, SortDirection};
use crate::error::{Error, Result};

/// Doubles every even value and negates every odd value.
///
/// Returns [`Error::Overflow`] if doubling leaves the `i32` range.
pub fn replace(input: &[i32]) -> Result<Vec<i32>> {
    input
        .iter()
        .map(|&value| {
            if value % 2 == 0 {
                value.checked_mul(2).ok_or(Error::Overflow)
            } else {
                // odd values are never i32::MIN
                Ok(-value)
            }
        })
        .collect()
}

/// Returns the second largest distinct value.
///
/// # Examples
///
/// ```
/// use warmup_arrays::array::find_second_max;
///
/// assert_eq!(find_second_max(&[4, 9, 9, 1]), Ok(4));
/// ```
pub fn find_second_max(input: &[i32]) -> Result<i32> {
    let mut unique = distinct(input);
    OrderedSort::with_direction(&mut unique, SortDirection::Descending).sort();
    unique
        .get(1)
        .copied()
        .ok_or(Error::NotEnoughDistinct {
            found: unique.len(),
        })
}

/// Negative values first, then the rest, each group in reverse order of appearance.
///
/// `[3, -5, 4, -7, 2, 9]` becomes `[-7, -5, 9, 2, 4, 3]`.
pub fn rearrange(input: &[i32]) -> Vec<i32> {
    let negatives = input.iter().rev().filter(|&&v| v < 0);
    let rest = input.iter().rev().filter(|&&v| v >= 0);
    negatives.chain(rest).copied().collect()
}

/// Drops every value smaller than `max - 10`, keeping the original order.
pub fn filter(input: &[i32]) -> Vec<i32> {
    let Some(&max) = input.iter().max() else {
        return Vec::new();
    };
    let threshold = max.saturating_sub(10);
    input.iter().copied().filter(|&v| v >= threshold).collect()
}

/// Keeps the first occurrence of each value.
pub fn distinct(input: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(input.len());
    input.iter().copied().filter(|v| seen.insert(*v)).collect()
}
