//! Literal inputs shared by the examples

/// Integers used by the filter and transform examples
pub const NUMBERS: [i64; 6] = [2, 4, 5, 6, 7, 15];

/// Names used by the string predicate examples
pub const NAMES: [&str; 7] = ["Adam S", "Candace", "Brad", "Jim", "Kevaughn", "Abbas", "Adam R"];

/// A small list of lists for per-sublist reduction and flattening
pub fn list_of_lists() -> Vec<Vec<i64>> {
    vec![vec![2, 3, 4], vec![5, 1, 2], vec![8, 9, 3]]
}

/// Owned copy of [`NAMES`]
pub fn names() -> Vec<String> {
    NAMES.iter().map(|n| n.to_string()).collect()
}
