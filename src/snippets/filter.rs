//! Filtering and transforming a flat sequence

/// Elements strictly greater than `threshold`, in order
pub fn greater_than(numbers: &[i64], threshold: i64) -> Vec<i64> {
    numbers.iter().copied().filter(|&x| x > threshold).collect()
}

/// Elements strictly greater than `threshold`, each doubled
pub fn doubled_greater_than(numbers: &[i64], threshold: i64) -> Vec<i64> {
    numbers
        .iter()
        .filter(|&&x| x > threshold)
        .map(|x| x * 2)
        .collect()
}
