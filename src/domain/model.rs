use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::{Deref, Index};

/// One element of an arbitrarily nested sequence.
///
/// Deserializes untagged: a JSON array becomes a `List`, anything else an `Item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    List(NestedList<T>),
    Item(T),
}

impl<T> Nested<T> {
    pub fn list(children: Vec<Nested<T>>) -> Self {
        Nested::List(NestedList::from(children))
    }
}

impl<T> From<T> for Nested<T> {
    fn from(item: T) -> Self {
        Nested::Item(item)
    }
}

/// Children of a [`Nested::List`].
///
/// Dropping walks descendants with a heap work-list, so arbitrarily deep
/// values are released without recursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedList<T>(Vec<Nested<T>>);

impl<T> NestedList<T> {
    pub fn into_vec(mut self) -> Vec<Nested<T>> {
        std::mem::take(&mut self.0)
    }
}

impl<T> From<Vec<Nested<T>>> for NestedList<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        NestedList(children)
    }
}

impl<T> Deref for NestedList<T> {
    type Target = [Nested<T>];

    fn deref(&self) -> &[Nested<T>] {
        &self.0
    }
}

impl<T> Drop for NestedList<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(node) = pending.pop() {
            if let Nested::List(mut children) = node {
                pending.append(&mut children.0);
            }
        }
    }
}

/// Builds a `Vec<Nested<T>>` from bracketed literals.
///
/// ```
/// use smart_arrays::{flatten, nested};
///
/// let arr = nested![0, [[1], 2], [[[3]]]];
/// assert_eq!(flatten(&arr), vec![0, 1, 2, 3]);
/// ```
///
/// Each element must be a single token tree; wrap compound expressions such
/// as `-1` or `x + 1` in parentheses.
#[macro_export]
macro_rules! nested {
    (@elem [$($inner:tt)*]) => {
        $crate::Nested::list($crate::nested![$($inner)*])
    };
    (@elem $item:expr) => {
        $crate::Nested::Item($item)
    };
    ($($elem:tt),* $(,)?) => {
        vec![$($crate::nested!(@elem $elem)),*]
    };
}

/// Association from key to the elements that produced it.
///
/// Keys iterate in first-occurrence order and elements keep their input order
/// inside each group.
#[derive(Debug, Clone)]
pub struct Groups<K, T> {
    entries: Vec<(K, Vec<T>)>,
    index: HashMap<K, usize>,
}

impl<K, T> Groups<K, T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.entries
            .iter()
            .map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K: Eq + Hash + Clone, T> Groups<K, T> {
    pub(crate) fn push(&mut self, key: K, value: T) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }
}

impl<K: Eq + Hash, T> Groups<K, T> {
    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Drops key ordering.
    pub fn into_hash_map(self) -> HashMap<K, Vec<T>> {
        self.entries.into_iter().collect()
    }
}

impl<K, T> Default for Groups<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Q, T> Index<&Q> for Groups<K, T>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = [T];

    fn index(&self, key: &Q) -> &[T] {
        match self.get(key) {
            Some(values) => values,
            None => panic!("no group for the given key"),
        }
    }
}

impl<K: PartialEq, T: PartialEq> PartialEq for Groups<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, T> IntoIterator for Groups<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Display, T: Serialize> Serialize for Groups<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(&key.to_string(), values)?;
        }
        map.end()
    }
}
