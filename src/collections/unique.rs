use std::fmt;
use std::hash::Hash;

use indexmap::set;
use indexmap::{Equivalent, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Set of distinct values that remembers the order values were first added.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct UniqueCollection<T> {
    items: IndexSet<T>,
}

impl<T: Hash + Eq> UniqueCollection<T> {
    pub fn new() -> Self {
        Self {
            items: IndexSet::new(),
        }
    }

    /// Inserts `value` unless an equal value is already present.
    ///
    /// Re-adding a present value leaves both size and position unchanged.
    pub fn add(&mut self, value: T) {
        let inserted = self.items.insert(value);
        trace!(inserted, size = self.items.len(), "unique collection add");
    }

    pub fn has<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        self.items.contains(value)
    }

    /// Removes `value`, returning `true` iff it was present.
    ///
    /// Remaining values keep their relative order.
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<T>,
    {
        let removed = self.items.shift_remove(value);
        trace!(removed, size = self.items.len(), "unique collection delete");
        removed
    }

    pub fn clear(&mut self) {
        trace!(dropped = self.items.len(), "unique collection clear");
        self.items.clear();
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in insertion order. Each call starts over from the first value.
    pub fn iter(&self) -> set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> Default for UniqueCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Set equality: order does not participate.
impl<T: Hash + Eq> PartialEq for UniqueCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Hash + Eq> Eq for UniqueCollection<T> {}

impl<T: fmt::Debug> fmt::Debug for UniqueCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Hash + Eq> FromIterator<T> for UniqueCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for UniqueCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for UniqueCollection<T> {
    type Item = T;
    type IntoIter = set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueCollection<T> {
    type Item = &'a T;
    type IntoIter = set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
