use std::collections::HashSet;
use std::hash::Hash;

/// Keeps the first occurrence of each distinct element, in input order.
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    uniq_by(sequence, T::clone)
}

/// Keeps the first element for each distinct value `value_of` derives.
///
/// Equivalent to scanning back for an earlier element with an equal derived
/// value, but tracks seen values in a `HashSet`.
pub fn uniq_by<T, K, F>(sequence: &[T], mut value_of: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(sequence.len());
    let unique: Vec<T> = sequence
        .iter()
        .filter(|element| seen.insert(value_of(element)))
        .cloned()
        .collect();

    tracing::trace!(input = sequence.len(), output = unique.len(), "uniq");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_duplicates_by_equality() {
        let arr = [0, 1, 0, 1, 2, 3, 3, 2];
        assert_eq!(uniq(&arr), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_removes_duplicates_by_derived_value() {
        let arr = [("Luke", 19), ("Yoda", 900), ("Leia", 19), ("Han", 32)];
        let by_age = uniq_by(&arr, |(_, age)| *age);
        assert_eq!(by_age, vec![("Luke", 19), ("Yoda", 900), ("Han", 32)]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let arr = ["apple", "avocado", "banana", "blueberry", "cherry"];
        let by_initial = uniq_by(&arr, |fruit| fruit.chars().next());
        assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_output_is_subsequence_without_equal_values() {
        let arr = [4, 9, 4, 1, 9, 9, 0, 1, 4];
        let unique = uniq(&arr);

        let distinct: HashSet<_> = unique.iter().collect();
        assert_eq!(distinct.len(), unique.len());

        let mut cursor = arr.iter();
        for value in &unique {
            assert!(cursor.any(|candidate| candidate == value));
        }
    }

    #[test]
    fn test_already_unique_is_unchanged() {
        let arr = ["x", "y", "z"];
        assert_eq!(uniq(&arr), arr.to_vec());
        assert!(uniq::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let arr = vec![1, 1, 2];
        let before = arr.clone();
        let _ = uniq(&arr);
        assert_eq!(arr, before);
    }
}
