/// Integers from `0` up to, but not including, `end`.
pub fn range(end: i64) -> Vec<i64> {
    range_between(0, end)
}

/// Integers from `start` up to, but not including, `end`, stepping by one.
///
/// Empty whenever `end <= start`; never descends.
pub fn range_between(start: i64, end: i64) -> Vec<i64> {
    let sequence: Vec<i64> = (start..end).collect();
    tracing::trace!(start, end, len = sequence.len(), "range");
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument_starts_at_zero() {
        assert_eq!(range(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_accepts_a_start_value() {
        assert_eq!(range_between(3, 7), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_when_end_not_greater_than_start() {
        assert!(range_between(3, 0).is_empty());
        assert!(range_between(3, 3).is_empty());
        assert!(range(0).is_empty());
        assert!(range(-5).is_empty());
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(range_between(-2, 2), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_elements_are_start_plus_index() {
        let (start, end) = (-7, 13);
        let sequence = range_between(start, end);
        assert_eq!(sequence.len() as i64, (end - start).max(0));
        for (i, value) in sequence.iter().enumerate() {
            assert_eq!(*value, start + i as i64);
        }
    }
}
