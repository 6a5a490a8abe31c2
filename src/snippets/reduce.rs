//! Per-row reduction over two-dimensional data

use crate::error::{Result, TourError};
use crate::matrix::Matrix;

/// Maximum of each matrix row, in row order
pub fn row_max(matrix: &Matrix) -> Result<Vec<i64>> {
    sublist_max(matrix.rows())
}

/// Maximum of each inner list, in outer order
pub fn sublist_max(lists: &[Vec<i64>]) -> Result<Vec<i64>> {
    lists
        .iter()
        .enumerate()
        .map(|(index, row)| row.iter().copied().max().ok_or(TourError::EmptyRow { index }))
        .collect()
}
