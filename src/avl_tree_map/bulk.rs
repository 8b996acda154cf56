#[cfg(feature = "std")]
use core::hash::Hash;
#[cfg(feature = "std")]
use std::collections::HashSet;

use super::AvlTreeMap;

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Returns `true` if any entry's value equals `value`.
    ///
    /// Values are not indexed, so this visits every entry in the worst case.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert!(map.contains_value(&"b"));
    /// assert!(!map.contains_value(&"c"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.contains_value_by(|candidate| candidate == value)
    }

    /// Returns `true` if `matches` accepts any entry's value.
    ///
    /// This is [`contains_value`](Self::contains_value) with the equality supplied by
    /// the caller, for value types whose `PartialEq` is missing or not the desired
    /// notion of sameness.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, 1.5_f64), (2, f64::NAN)]);
    /// assert!(!map.contains_value(&f64::NAN));
    /// assert!(map.contains_value_by(|v| v.is_nan()));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains_value_by<F>(&self, matches: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        self.raw.any_value(matches)
    }

    /// Returns a snapshot of the map's keys as an unordered set.
    ///
    /// Set membership uses the keys' `Hash` and `Eq`, not the map's comparator. Use
    /// [`keys`](Self::keys) to visit the keys in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.key_set(), HashSet::from([1, 2]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[cfg(feature = "std")]
    #[must_use]
    pub fn key_set(&self) -> HashSet<K>
    where
        K: Clone + Eq + Hash,
    {
        self.keys().cloned().collect()
    }

    /// Returns a snapshot of the map's entries as an unordered set of `(key, value)`
    /// pairs, compared by both key and value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.entry_set(), HashSet::from([(1, "a"), (2, "b")]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[cfg(feature = "std")]
    #[must_use]
    pub fn entry_set(&self) -> HashSet<(K, V)>
    where
        K: Clone + Eq + Hash,
        V: Clone + Eq + Hash,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
