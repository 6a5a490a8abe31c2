//! Error types for the tour

use thiserror::Error;

/// Errors raised while building or running an example
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TourError {
    /// No example with this id exists
    #[error("unknown example {0} (valid ids are 1-{max})", max = crate::tour::EXAMPLE_COUNT)]
    UnknownExample(u8),

    /// A row or sublist had nothing to take the maximum of
    #[error("row {index} is empty and has no maximum")]
    EmptyRow { index: usize },

    /// Matrix shape or value bound is degenerate
    #[error("invalid matrix {rows}x{cols} with upper bound {upper}")]
    InvalidMatrix { rows: usize, cols: usize, upper: i64 },
}

pub type Result<T> = std::result::Result<T, TourError>;
