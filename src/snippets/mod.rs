//! The collection-building examples themselves
//!
//! Each function is one self-contained iterator chain ending in `collect`.
//! They share nothing beyond their argument types.

pub mod filter;
pub mod names;
pub mod reduce;
pub mod flatten;

pub use filter::{doubled_greater_than, greater_than};
pub use flatten::{flatten, flatten_greater_than, flatten_with_loops};
pub use names::{all_conditions, any_condition, containing, starting_with};
pub use reduce::{row_max, sublist_max};
