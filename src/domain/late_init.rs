// Copyright (c) 2025 - Cowboy AI, Inc.
//! Late Initialization Helpers
//!
//! Late initialization backfills desired-state fields the owner left unset
//! from the state observed remotely. The rules are the same for every facet:
//!
//! 1. An unset scalar (`None`) takes the observed value
//! 2. A set scalar is never touched, even when the remote value differs
//! 3. An empty collection takes the whole observed collection, in order
//! 4. A non-empty collection is never touched

/// Fill `current` from `observed` when it is unset
///
/// Returns `true` when the field was changed.
pub fn fill_if_unset<T: Clone>(current: &mut Option<T>, observed: Option<&T>) -> bool {
    match (current.as_ref(), observed) {
        (None, Some(value)) => {
            *current = Some(value.clone());
            true
        }
        _ => false,
    }
}

/// Replace an empty `current` collection with the observed elements
///
/// `observed` is only evaluated when `current` is empty. Order is preserved
/// and no deduplication is performed. Returns `true` when the collection was
/// changed.
pub fn fill_if_empty<T, I, F>(current: &mut Vec<T>, observed: F) -> bool
where
    F: FnOnce() -> I,
    I: IntoIterator<Item = T>,
{
    if !current.is_empty() {
        return false;
    }
    current.extend(observed());
    !current.is_empty()
}
