//! Duplicate suppression by value.

/// Collect `items`, dropping any item equal to one already kept.
///
/// Equality is `PartialEq`, so two records with the same fields are
/// duplicates no matter where they came from. First-seen order is kept.
pub fn dedup_by_value<T, I>(items: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut kept: Vec<T> = Vec::new();
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}
