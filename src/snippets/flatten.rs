//! Nested iteration: flattening a list of lists

/// All inner elements, outer-then-inner order
pub fn flatten(lists: &[Vec<i64>]) -> Vec<i64> {
    lists.iter().flatten().copied().collect()
}

/// [`flatten`] spelled out as two nested loops
pub fn flatten_with_loops(lists: &[Vec<i64>]) -> Vec<i64> {
    let mut out = Vec::new();
    for list in lists {
        for &x in list {
            out.push(x);
        }
    }
    out
}

/// Flattened elements strictly greater than `threshold`
pub fn flatten_greater_than(lists: &[Vec<i64>], threshold: i64) -> Vec<i64> {
    lists
        .iter()
        .flat_map(|list| list.iter().copied())
        .filter(|&x| x > threshold)
        .collect()
}
