use core::ops::Bound;

use super::AvlTreeMap;
use crate::comparator::Comparator;

impl<K: Clone, V: Clone, C: Comparator<K> + Clone> AvlTreeMap<K, V, C> {
    /// Returns a new map holding a copy of every entry whose key is strictly less
    /// than `end`.
    ///
    /// The result is a snapshot, not a view: later changes to either map are not
    /// seen by the other. It is ordered by a clone of this map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, 'a'), (5, 'b'), (7, 'c'), (10, 'd'), (12, 'e'), (15, 'f')]);
    /// let head = map.head_map(&12);
    /// assert_eq!(head.keys().copied().collect::<Vec<_>>(), [3, 5, 7, 10]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(m log m) for a result of m entries, plus O(log n) to reach the range.
    #[must_use]
    pub fn head_map(&self, end: &K) -> Self {
        self.range_map(Bound::Unbounded, Bound::Excluded(end))
    }

    /// Returns a new map holding a copy of every entry whose key is greater than or
    /// equal to `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, 'a'), (5, 'b'), (7, 'c'), (10, 'd'), (12, 'e'), (15, 'f')]);
    /// let tail = map.tail_map(&7);
    /// assert_eq!(tail.keys().copied().collect::<Vec<_>>(), [7, 10, 12, 15]);
    /// ```
    #[must_use]
    pub fn tail_map(&self, start: &K) -> Self {
        self.range_map(Bound::Included(start), Bound::Unbounded)
    }

    /// Returns a new map holding a copy of every entry whose key lies in the
    /// half-open range `[start, end)`.
    ///
    /// If `start` is not less than `end` the result is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(3, 'a'), (5, 'b'), (7, 'c'), (10, 'd'), (12, 'e'), (15, 'f')]);
    /// let sub = map.sub_map(&5, &15);
    /// assert_eq!(sub.keys().copied().collect::<Vec<_>>(), [5, 7, 10, 12]);
    /// assert!(map.sub_map(&15, &5).is_empty());
    /// ```
    #[must_use]
    pub fn sub_map(&self, start: &K, end: &K) -> Self {
        self.range_map(Bound::Included(start), Bound::Excluded(end))
    }

    /// Returns a new map holding a copy of every entry whose key lies between `lower`
    /// and `upper`, each bound being inclusive, exclusive or absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::Bound;
    /// use avl_navmap::AvlTreeMap;
    ///
    /// let map = AvlTreeMap::from([(1, ()), (2, ()), (3, ()), (4, ())]);
    /// let inner = map.range_map(Bound::Excluded(&1), Bound::Included(&3));
    /// assert_eq!(inner.keys().copied().collect::<Vec<_>>(), [2, 3]);
    /// ```
    #[must_use]
    pub fn range_map(&self, lower: Bound<&K>, upper: Bound<&K>) -> Self {
        AvlTreeMap {
            raw: self.raw.range_copy(lower, upper),
        }
    }
}
