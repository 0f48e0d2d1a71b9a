//! Per-element iteration and filtered removal for list-like sequences.

/// Invokes `action` once per element, in iteration order.
pub fn for_each<T>(items: impl IntoIterator<Item = T>, mut action: impl FnMut(T)) {
    for item in items {
        action(item);
    }
}

/// Invokes `action` once per element with its 0-based position.
pub fn for_each_indexed<T>(items: impl IntoIterator<Item = T>, mut action: impl FnMut(T, usize)) {
    for (index, item) in items.into_iter().enumerate() {
        action(item, index);
    }
}

/// Removes every element satisfying `predicate`, preserving the relative
/// order of survivors. Returns how many elements were removed.
///
/// Removing none or all are both valid outcomes.
pub fn remove_where<T>(items: &mut Vec<T>, predicate: impl Fn(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(|item| !predicate(item));
    before - items.len()
}
