use log::debug;

use crate::error::{Error, Result};

/// Returns `(rows, cols)` of a non-empty rectangular matrix.
fn dimensions(matrix: &[Vec<i32>]) -> Result<(usize, usize)> {
    let cols = matrix.first().map_or(0, Vec::len);
    if cols == 0 {
        return Err(Error::EmptyMatrix);
    }
    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != cols)
    {
        return Err(Error::RaggedMatrix {
            row,
            expected: cols,
            found,
        });
    }
    Ok((matrix.len(), cols))
}

/// Checks that `left * right` is defined.
///
/// Both matrices must be non-empty and rectangular, and the column count of
/// `left` must equal the row count of `right`.
pub fn validate_for_matrix_multiplication(left: &[Vec<i32>], right: &[Vec<i32>]) -> Result<()> {
    let (_, left_cols) = dimensions(left)?;
    let (right_rows, _) = dimensions(right)?;
    if left_cols != right_rows {
        return Err(Error::DimensionMismatch {
            left_cols,
            right_rows,
        });
    }
    Ok(())
}

/// Multiplies two integer matrices indexed `[row][column]`.
///
/// Fails with the same errors as [`validate_for_matrix_multiplication`], or
/// [`Error::Overflow`] if an entry leaves the `i32` range.
///
/// # Examples
///
/// ```
/// use warmup_arrays::array::matrix_multiplication;
///
/// let left = vec![vec![1, 2], vec![3, 4]];
/// let right = vec![vec![5, 6], vec![7, 8]];
/// let product = matrix_multiplication(&left, &right).unwrap();
/// assert_eq!(product, vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn matrix_multiplication(left: &[Vec<i32>], right: &[Vec<i32>]) -> Result<Vec<Vec<i32>>> {
    validate_for_matrix_multiplication(left, right)?;
    let inner = right.len();
    let cols = right[0].len();
    debug!("multiplying {}x{} by {}x{}", left.len(), inner, inner, cols);

    let mut result = vec![vec![0; cols]; left.len()];
    for (i, row) in left.iter().enumerate() {
        for j in 0..cols {
            let mut sum: i32 = 0;
            for k in 0..inner {
                sum = row[k]
                    .checked_mul(right[k][j])
                    .and_then(|product| sum.checked_add(product))
                    .ok_or(Error::Overflow)?;
            }
            result[i][j] = sum;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_product() {
        let left = vec![vec![1, 2], vec![3, 4]];
        let right = vec![vec![5, 6], vec![7, 8]];
        assert_eq!(
            matrix_multiplication(&left, &right),
            Ok(vec![vec![19, 22], vec![43, 50]])
        );
    }

    #[test]
    fn test_rectangular_product() {
        // 2x3 times 3x1
        let left = vec![vec![1, 0, -2], vec![4, 1, 3]];
        let right = vec![vec![2], vec![5], vec![-1]];
        assert_eq!(matrix_multiplication(&left, &right), Ok(vec![vec![4], vec![10]]));
    }

    #[test]
    fn test_validate_accepts_compatible() {
        let left = vec![vec![1, 2, 3]];
        let right = vec![vec![1], vec![2], vec![3]];
        assert_eq!(validate_for_matrix_multiplication(&left, &right), Ok(()));
    }

    #[test]
    fn test_dimension_mismatch() {
        let left = vec![vec![1, 2], vec![3, 4]];
        let right = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
        assert_eq!(
            validate_for_matrix_multiplication(&left, &right),
            Err(Error::DimensionMismatch {
                left_cols: 2,
                right_rows: 3
            })
        );
    }

    #[test]
    fn test_empty_matrices() {
        let full = vec![vec![1]];
        assert_eq!(matrix_multiplication(&[], &full), Err(Error::EmptyMatrix));
        assert_eq!(
            matrix_multiplication(&full, &[vec![]]),
            Err(Error::EmptyMatrix),
            "a row with no columns is empty"
        );
    }

    #[test]
    fn test_ragged_matrix() {
        let left = vec![vec![1, 2], vec![3]];
        let right = vec![vec![1], vec![2]];
        assert_eq!(
            validate_for_matrix_multiplication(&left, &right),
            Err(Error::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_overflow() {
        let left = vec![vec![i32::MAX, 1]];
        let right = vec![vec![1], vec![1]];
        assert_eq!(matrix_multiplication(&left, &right), Err(Error::Overflow));
    }
}
