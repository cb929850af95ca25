use log::{debug, warn};

use crate::cs::sort::OrderedSort;
use crate::error::{Error, MergeInput, Result};

/// Merges two ascending arrays into one ascending array.
///
/// Both inputs are checked before they are concatenated. If either is not
/// sorted ascending, returns [`Error::UnsortedInput`] naming the first offender.
///
/// # Examples
///
/// ```
/// use warmup_arrays::array::merge_sorted_arrays;
///
/// let merged = merge_sorted_arrays(&[1, 3, 5], &[2, 4, 6]).unwrap();
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge_sorted_arrays(first: &[i32], second: &[i32]) -> Result<Vec<i32>> {
    ensure_ascending(first, MergeInput::First)?;
    ensure_ascending(second, MergeInput::Second)?;

    let mut merged = Vec::with_capacity(first.len() + second.len());
    merged.extend_from_slice(first);
    merged.extend_from_slice(second);
    debug!(
        "merging {} and {} sorted elements",
        first.len(),
        second.len()
    );

    OrderedSort::with_sequence(&mut merged, true).sort();
    Ok(merged)
}

fn ensure_ascending(input: &[i32], which: MergeInput) -> Result<()> {
    // Sessions borrow mutably, so the check runs on a scratch copy.
    let mut scratch = input.to_vec();
    if OrderedSort::with_sequence(&mut scratch, true).is_sorted() {
        Ok(())
    } else {
        warn!("{} merge input is not sorted ascending", which);
        Err(Error::UnsortedInput { input: which })
    }
}
