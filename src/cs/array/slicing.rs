use crate::error::{Error, Result};

/// Copies `input[start..end]` into a new vector.
///
/// Returns [`Error::InvalidRange`] if `start > end` or `end` exceeds the input length.
pub fn copy_values(input: &[i32], start: usize, end: usize) -> Result<Vec<i32>> {
    input
        .get(start..end)
        .map(<[i32]>::to_vec)
        .ok_or(Error::InvalidRange {
            start,
            end,
            len: input.len(),
        })
}

/// Returns a new vector with `values` inserted into `input` starting at index `start`.
///
/// `start == input.len()` appends. Larger indices return [`Error::IndexOutOfBounds`].
pub fn insert_values(input: &[i32], start: usize, values: &[i32]) -> Result<Vec<i32>> {
    if start > input.len() {
        return Err(Error::IndexOutOfBounds {
            index: start,
            len: input.len(),
        });
    }
    let mut combined = Vec::with_capacity(input.len() + values.len());
    combined.extend_from_slice(&input[..start]);
    combined.extend_from_slice(values);
    combined.extend_from_slice(&input[start..]);
    Ok(combined)
}
