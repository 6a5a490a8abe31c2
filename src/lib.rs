//! listcomp-tour library
//!
//! Small, independent examples of building collections with iterator
//! chains:
//! - filtering and transforming a flat list
//! - string predicates, alone and combined
//! - per-row reduction over a random matrix and a list of lists
//! - flattening nested lists, with and without a filter
//!
//! # Example
//!
//! ```
//! use listcomp_tour::snippets::greater_than;
//!
//! assert_eq!(greater_than(&[2, 4, 5, 6, 7, 15], 5), vec![6, 7, 15]);
//! ```

pub mod types;
pub mod error;
pub mod data;
pub mod matrix;
pub mod snippets;
pub mod config;
pub mod tour;
pub mod report;
pub mod logging;
pub mod cli;

pub use config::Config;
pub use error::TourError;
pub use matrix::Matrix;
pub use report::{Format, Report};
pub use tour::Tour;

