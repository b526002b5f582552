use std::fmt;
use std::hash::Hash;

use indexmap::map;
use indexmap::{Equivalent, IndexMap};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Key-value mapping that iterates in the order keys were first inserted.
///
/// Replacing the value of an existing key keeps that key's position.
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "K: Serialize, V: Serialize",
    deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"
))]
pub struct AssociativeCollection<K, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> AssociativeCollection<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Inserts or replaces, returning the replaced value.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.entries.insert(key, value);
        trace!(
            replaced = previous.is_some(),
            size = self.entries.len(),
            "associative collection set"
        );
        previous
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get_mut(key)
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning `true` iff it was present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let removed = self.entries.shift_remove(key).is_some();
        trace!(removed, size = self.entries.len(), "associative collection delete");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, value)` pairs in insertion order. Restartable: each call begins anew.
    pub fn entries(&self) -> map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> map::Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> map::Values<'_, K, V> {
        self.entries.values()
    }
}

impl<K: Hash + Eq, V> Default for AssociativeCollection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssociativeCollection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for AssociativeCollection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for AssociativeCollection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for AssociativeCollection<K, V> {
    type Item = (K, V);
    type IntoIter = map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a AssociativeCollection<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
