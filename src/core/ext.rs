use super::{group, uniq, without};
use crate::domain::model::Groups;
use std::hash::Hash;

/// Slice methods for the sequence helpers.
///
/// Methods carry an `_ext` suffix so they never shadow inherent slice methods.
///
/// ```
/// use smart_arrays::SmartSliceExt;
///
/// let arr = [0, 1, 0, 1, 2, 3, 3, 2];
/// assert_eq!(arr.uniq_ext(), vec![0, 1, 2, 3]);
/// assert_eq!(arr.without_ext(&[0, 1]), vec![2, 3, 3, 2]);
/// ```
pub trait SmartSliceExt<T> {
    fn group_by_ext(&self) -> Groups<T, T>
    where
        T: Eq + Hash + Clone;

    fn group_by_key_ext<K, F>(&self, key_of: F) -> Groups<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K;

    fn uniq_ext(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    fn uniq_by_ext<K, F>(&self, value_of: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    fn without_ext(&self, excluded: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone;
}

impl<T> SmartSliceExt<T> for [T] {
    fn group_by_ext(&self) -> Groups<T, T>
    where
        T: Eq + Hash + Clone,
    {
        group::group_by(self)
    }

    fn group_by_key_ext<K, F>(&self, key_of: F) -> Groups<K, T>
    where
        T: Clone,
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        group::group_by_key(self, key_of)
    }

    fn uniq_ext(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        uniq::uniq(self)
    }

    fn uniq_by_ext<K, F>(&self, value_of: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        uniq::uniq_by(self, value_of)
    }

    fn without_ext(&self, excluded: &[T]) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        without::without(self, excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_match_free_functions() {
        let words = vec!["one", "two", "three", "four", "five"];

        assert_eq!(words.uniq_by_ext(|w| w.len()), vec!["one", "three", "four"]);
        assert_eq!(words.without_ext(&["two", "four"]), vec!["one", "three", "five"]);

        let by_len = words.group_by_key_ext(|w| w.len());
        assert_eq!(&by_len[&3], &["one", "two"]);
        assert_eq!(&by_len[&4], &["four", "five"]);
        assert_eq!(&by_len[&5], &["three"]);

        let by_value = [1, 1, 2].group_by_ext();
        assert_eq!(by_value.len(), 2);
        assert_eq!([1, 1, 2].uniq_ext(), vec![1, 2]);
    }
}
