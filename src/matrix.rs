//! Small random integer matrix
//!
//! Stands in for a 2-D numeric array: rows of equal length filled with
//! uniformly drawn integers in `0..upper`.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::Serialize;
use std::fmt;

use crate::error::{Result, TourError};

/// Row-major integer matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix {
    rows: Vec<Vec<i64>>,
}

impl Matrix {
    /// Build a matrix from explicit rows
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    /// Fill a `rows x cols` matrix with values in `0..upper` drawn from `rng`
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, upper: i64, rng: &mut R) -> Result<Self> {
        if rows == 0 || cols == 0 || upper <= 0 {
            return Err(TourError::InvalidMatrix { rows, cols, upper });
        }

        let rows = (0..rows)
            .map(|_| (0..cols).map(|_| rng.random_range(0..upper)).collect())
            .collect();
        Ok(Self { rows })
    }

    /// Same as [`Matrix::random`] but reproducible from a seed
    pub fn seeded(rows: usize, cols: usize, upper: i64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(rows, cols, upper, &mut rng)
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        for (i, row) in self.rows.iter().enumerate() {
            let open = if i == 0 { "[[" } else { " [" };
            let close = if i + 1 == self.rows.len() { "]]" } else { "]" };
            let cells: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
            write!(f, "{}{}{}", open, cells.join(" "), close)?;
            if i + 1 < self.rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
