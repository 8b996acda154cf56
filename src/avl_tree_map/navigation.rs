use super::AvlTreeMap;
use crate::comparator::Comparator;
use crate::error::EmptyMapError;

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Returns the smallest key in the map.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMapError`] if the map is empty. Use
    /// [`first_entry`](Self::first_entry) for an `Option` instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::{AvlTreeMap, EmptyMapError};
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.first_key(), Err(EmptyMapError));
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first_key(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn first_key(&self) -> Result<&K, EmptyMapError> {
        self.raw.first().map(|handle| self.raw.node(handle).key()).ok_or(EmptyMapError)
    }

    /// Returns the largest key in the map.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMapError`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.last_key(), Ok(&2));
    /// ```
    pub fn last_key(&self) -> Result<&K, EmptyMapError> {
        self.raw.last().map(|handle| self.raw.node(handle).key()).ok_or(EmptyMapError)
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.first_entry(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_entry(), Some((&1, &"b")));
    /// ```
    pub fn first_entry(&self) -> Option<(&K, &V)> {
        self.raw.first().map(|handle| self.raw.entry(handle))
    }

    /// Returns the entry with the largest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.last_entry(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_entry(), Some((&2, &"a")));
    /// ```
    pub fn last_entry(&self) -> Option<(&K, &V)> {
        self.raw.last().map(|handle| self.raw.entry(handle))
    }

    /// Removes and returns the entry with the smallest key, or `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// Draining elements in ascending order, while keeping a usable map each iteration.
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// while let Some((key, _val)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _v)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the largest key, or `None` if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.pop_last(), Some((2, "b")));
    /// assert_eq!(map.pop_last(), Some((1, "a")));
    /// assert_eq!(map.pop_last(), None);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }
}

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Returns the greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, ()), (5, ()), (7, ())]);
    /// assert_eq!(map.floor_key(&6), Some(&5));
    /// assert_eq!(map.floor_key(&7), Some(&7));
    /// assert_eq!(map.floor_key(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn floor_key(&self, key: &K) -> Option<&K> {
        self.raw.floor(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    pub fn floor_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.floor(key).map(|handle| self.raw.entry(handle))
    }

    /// Returns the least key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, ()), (5, ()), (7, ())]);
    /// assert_eq!(map.ceiling_key(&4), Some(&5));
    /// assert_eq!(map.ceiling_key(&5), Some(&5));
    /// assert_eq!(map.ceiling_key(&8), None);
    /// ```
    pub fn ceiling_key(&self, key: &K) -> Option<&K> {
        self.raw.ceiling(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    pub fn ceiling_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.ceiling(key).map(|handle| self.raw.entry(handle))
    }

    /// Returns the greatest key strictly less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, ()), (5, ()), (7, ())]);
    /// assert_eq!(map.lower_key(&5), Some(&3));
    /// assert_eq!(map.lower_key(&3), None);
    /// ```
    pub fn lower_key(&self, key: &K) -> Option<&K> {
        self.raw.lower(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the entry with the greatest key strictly less than `key`.
    pub fn lower_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.lower(key).map(|handle| self.raw.entry(handle))
    }

    /// Returns the least key strictly greater than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, ()), (5, ()), (7, ())]);
    /// assert_eq!(map.higher_key(&5), Some(&7));
    /// assert_eq!(map.higher_key(&7), None);
    /// ```
    pub fn higher_key(&self, key: &K) -> Option<&K> {
        self.raw.higher(key).map(|handle| self.raw.node(handle).key())
    }

    /// Returns the entry with the least key strictly greater than `key`.
    pub fn higher_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.raw.higher(key).map(|handle| self.raw.entry(handle))
    }
}
