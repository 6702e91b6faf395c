use crate::domain::model::Nested;

/// Flattens arbitrarily nested sequences into their leaves, left to right.
///
/// Empty lists contribute nothing. Depth is bounded by heap memory only: the
/// traversal keeps an explicit stack of iterators instead of recursing.
pub fn flatten<T: Clone>(sequence: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::with_capacity(sequence.len());
    let mut stack = vec![sequence.iter()];

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Item(item)) => flat.push(item.clone()),
            Some(Nested::List(list)) => stack.push(list.iter()),
            None => {
                stack.pop();
            }
        }
    }

    tracing::trace!(input = sequence.len(), output = flat.len(), "flatten");
    flat
}

/// Same as [`flatten`] but moves the leaves out of `sequence`.
pub fn flatten_owned<T>(sequence: Vec<Nested<T>>) -> Vec<T> {
    let input = sequence.len();
    let mut flat = Vec::with_capacity(input);
    let mut stack = vec![sequence.into_iter()];

    while let Some(level) = stack.last_mut() {
        match level.next() {
            Some(Nested::Item(item)) => flat.push(item),
            Some(Nested::List(list)) => stack.push(list.into_vec().into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    tracing::trace!(input, output = flat.len(), "flatten_owned");
    flat
}
