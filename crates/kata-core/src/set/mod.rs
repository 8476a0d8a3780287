//! Ordered collection that keeps at most one value per key.
//!
//! Values are compared through [`Keyed::key`] only.
//! The first value stored for a key wins: later insertions with the same key are dropped silently.
//!
//! Mutation takes `&mut self` and the type does no internal locking.
//! Callers that share a set between tasks must wrap it in their own lock.
use std::collections::{BTreeMap, btree_map};
use std::fmt;

use kata_model::Keyed;
use serde::{Serialize, Serializer};

/// Key-unique set of values, iterated in ascending key order.
pub struct OrderedSet<T: Keyed> {
    items: BTreeMap<T::Key, T>,
}

impl<T> OrderedSet<T>
where
    T: Keyed,
    T::Key: Clone,
{
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Insert `value` unless its key is already present.
    ///
    /// Returns `true` if the value was stored.
    /// On a duplicate key the stored value is kept and `value` is dropped.
    pub fn insert(&mut self, value: T) -> bool {
        match self.items.entry(value.key().clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }
}

impl<T: Keyed> OrderedSet<T> {
    /// Ascending-key iterator; can be requested any number of times.
    #[inline]
    pub fn iter(&self) -> btree_map::Values<'_, T::Key, T> {
        self.items.values()
    }

    /// Get the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.items.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Keyed,
    T::Key: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrderedSet<T>
where
    T: Keyed + Clone,
    T::Key: Clone,
{
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<T: Keyed + fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = btree_map::Values<'a, T::Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for OrderedSet<T>
where
    T: Keyed,
    T::Key: Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Keyed,
    T::Key: Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Renders as `[a, b, c]` using each value's `Display`.
impl<T> fmt::Display for OrderedSet<T>
where
    T: Keyed + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> Serialize for OrderedSet<T>
where
    T: Keyed + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_model::Entry;

    fn pairs(set: &OrderedSet<Entry>) -> Vec<(i64, &str)> {
        set.iter().map(|e| (e.key, e.label.as_str())).collect()
    }

    #[test]
    fn duplicate_key_keeps_first_insert() {
        let mut set = OrderedSet::new();
        assert!(set.insert(Entry::new(101, "Raj")));
        assert!(set.insert(Entry::new(100, "Sara")));
        assert!(!set.insert(Entry::new(100, "Ahmed")));

        assert_eq!(pairs(&set), vec![(100, "Sara"), (101, "Raj")]);
        assert_eq!(set.to_string(), "[100 : Sara, 101 : Raj]");
    }

    #[test]
    fn repeated_duplicates_never_replace() {
        let mut set = OrderedSet::new();
        set.insert(Entry::new(5, "first"));
        for label in ["second", "third", "fourth"] {
            assert!(!set.insert(Entry::new(5, label)));
        }
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&5).map(|e| e.label.as_str()), Some("first"));
    }

    #[test]
    fn iterates_ascending_regardless_of_insert_order() {
        let keys = [42, -7, 0, 1000, 3, i64::MIN, i64::MAX, 17];
        let set: OrderedSet<Entry> = keys
            .iter()
            .map(|k| Entry::new(*k, format!("e{k}")))
            .collect();

        let seen: Vec<i64> = set.iter().map(|e| e.key).collect();
        assert_eq!(seen.len(), keys.len());
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn iteration_is_restartable() {
        let set: OrderedSet<Entry> = [Entry::new(2, "b"), Entry::new(1, "a")]
            .into_iter()
            .collect();

        let first: Vec<&Entry> = set.iter().collect();
        let second: Vec<&Entry> = (&set).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn extend_honours_first_insert() {
        let mut set = OrderedSet::new();
        set.insert(Entry::new(1, "kept"));
        set.extend([Entry::new(1, "dropped"), Entry::new(2, "new")]);

        assert_eq!(pairs(&set), vec![(1, "kept"), (2, "new")]);
        assert!(set.contains_key(&2));
        assert!(!set.contains_key(&3));
    }

    #[test]
    fn empty_set() {
        let set: OrderedSet<Entry> = OrderedSet::default();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
        assert_eq!(set.to_string(), "[]");
    }

    #[test]
    fn serializes_as_ascending_array() {
        let set: OrderedSet<Entry> = [Entry::new(101, "Raj"), Entry::new(100, "Sara")]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"[{"key":100,"label":"Sara"},{"key":101,"label":"Raj"}]"#
        );
    }
}
