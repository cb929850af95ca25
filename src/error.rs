use std::fmt;

/// Identifies which operand of a two-input operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeInput {
    First,
    Second,
}

impl fmt::Display for MergeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeInput::First => write!(f, "first"),
            MergeInput::Second => write!(f, "second"),
        }
    }
}

/// Errors produced by the array utilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A merge operand was not sorted in ascending order.
    #[error("{input} input is not sorted in ascending order")]
    UnsortedInput { input: MergeInput },

    /// The requested `start..end` range does not fit the input.
    #[error("range {start}..{end} is out of bounds for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Fewer than two distinct values were present.
    #[error("expected at least 2 distinct values, found {found}")]
    NotEnoughDistinct { found: usize },

    #[error("matrix has no rows or no columns")]
    EmptyMatrix,

    /// A matrix row differs in length from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cannot multiply a matrix with {left_cols} columns by one with {right_rows} rows")]
    DimensionMismatch { left_cols: usize, right_rows: usize },

    #[error("integer overflow")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::UnsortedInput {
            input: MergeInput::Second,
        };
        assert_eq!(err.to_string(), "second input is not sorted in ascending order");

        let err = Error::InvalidRange {
            start: 3,
            end: 1,
            len: 4,
        };
        assert_eq!(err.to_string(), "range 3..1 is out of bounds for length 4");

        let err = Error::DimensionMismatch {
            left_cols: 2,
            right_rows: 3,
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply a matrix with 2 columns by one with 3 rows"
        );
    }
}
