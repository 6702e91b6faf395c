use crate::domain::model::Groups;
use std::hash::Hash;

/// Groups elements by their own value.
pub fn group_by<T>(sequence: &[T]) -> Groups<T, T>
where
    T: Eq + Hash + Clone,
{
    group_by_key(sequence, T::clone)
}

/// Groups elements by the key `key_of` derives from each one.
///
/// `key_of` runs exactly once per element, in sequence order. Keys keep their
/// first-occurrence order and each group keeps input order.
pub fn group_by_key<T, K, F>(sequence: &[T], mut key_of: F) -> Groups<K, T>
where
    T: Clone,
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut groups = Groups::new();
    for element in sequence {
        groups.push(key_of(element), element.clone());
    }

    tracing::trace!(input = sequence.len(), groups = groups.len(), "group_by");
    groups
}
