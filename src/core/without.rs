/// Copies `sequence` minus every element equal to one of `excluded`.
///
/// Excluded values that never appear are ignored; an empty `excluded`
/// returns a plain copy.
pub fn without<T>(sequence: &[T], excluded: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let kept: Vec<T> = sequence
        .iter()
        .filter(|element| !excluded.contains(element))
        .cloned()
        .collect();

    tracing::trace!(
        input = sequence.len(),
        excluded = excluded.len(),
        output = kept.len(),
        "without"
    );
    kept
}

/// Variadic form of [`without`](crate::without()).
///
/// ```
/// use smart_arrays::without;
///
/// assert_eq!(without!([0, 1, 0, 2, 0, 3], 0, 4, 5), vec![1, 2, 3]);
/// assert_eq!(without!([1, 2]), vec![1, 2]);
/// ```
#[macro_export]
macro_rules! without {
    ($sequence:expr $(,)?) => {
        $crate::core::without::without(&$sequence, &[])
    };
    ($sequence:expr, $($value:expr),+ $(,)?) => {
        $crate::core::without::without(&$sequence, &[$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_every_excluded_value() {
        let arr = [0, 1, 0, 2, 0, 3];
        assert_eq!(without(&arr, &[0, 4, 5]), vec![1, 2, 3]);
    }

    #[test]
    fn test_absent_values_are_ignored() {
        let arr = ["a", "b", "c"];
        assert_eq!(without(&arr, &["z"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_excluded_values_copies_input() {
        let arr = [3, 2, 1];
        assert_eq!(without(&arr, &[]), vec![3, 2, 1]);
    }

    #[test]
    fn test_order_of_remaining_elements_is_kept() {
        let arr = [9, 1, 8, 2, 7, 3];
        assert_eq!(without(&arr, &[8, 7, 9]), vec![1, 2, 3]);
    }

    #[test]
    fn test_variadic_macro() {
        let arr = vec![0, 1, 0, 2, 0, 3];
        assert_eq!(crate::without!(arr, 0, 4, 5), vec![1, 2, 3]);
        assert_eq!(crate::without!(arr, 0), vec![1, 2, 3]);
        assert_eq!(crate::without!(arr), arr);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let arr = vec![Some(1), None, Some(2)];
        let before = arr.clone();
        assert_eq!(without(&arr, &[None]), vec![Some(1), Some(2)]);
        assert_eq!(arr, before);
    }
}
