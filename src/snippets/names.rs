//! String predicates over a list of names
//!
//! Every comparison runs on the lowercase form of the name except the
//! space check in [`all_conditions`], which looks at the name as written.

/// Names whose lowercase form starts with `prefix`
pub fn starting_with(names: &[String], prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .cloned()
        .collect()
}

/// Names whose lowercase form contains `needle`
pub fn containing(names: &[String], needle: &str) -> Vec<String> {
    let needle = needle.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Names that start with `prefix`, contain `also`, and contain a space
pub fn all_conditions(names: &[String], prefix: &str, also: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    let also = also.to_lowercase();
    names
        .iter()
        .filter(|name| {
            let lower = name.to_lowercase();
            lower.starts_with(&prefix) && lower.contains(&also) && name.contains(' ')
        })
        .cloned()
        .collect()
}

/// Names that start with `prefix` or end with `suffix`
pub fn any_condition(names: &[String], prefix: &str, suffix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    let suffix = suffix.to_lowercase();
    names
        .iter()
        .filter(|name| {
            let lower = name.to_lowercase();
            lower.starts_with(&prefix) || lower.ends_with(&suffix)
        })
        .cloned()
        .collect()
}
