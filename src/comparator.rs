use core::cmp::Ordering;

/// A strict total order over keys of type `K`.
///
/// Every [`AvlTreeMap`](crate::AvlTreeMap) is built around one comparator, fixed for the
/// map's lifetime. For any `a` and `b`, exactly one of `Less`, `Equal` or `Greater` must
/// be returned, and the relation must be transitive. A comparator that breaks these
/// rules leaves the map in an unspecified (but memory safe) state. A comparator that
/// panics propagates the panic to the caller of the map operation.
///
/// Closures of the form `Fn(&K, &K) -> Ordering` are comparators:
///
/// ```
/// use avl_navmap::AvlTreeMap;
///
/// // Order strings by length, then lexicographically.
/// let mut map = AvlTreeMap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
/// map.insert("ccc", 3);
/// map.insert("a", 1);
/// map.insert("bb", 2);
///
/// assert_eq!(map.first_key(), Ok(&"a"));
/// assert_eq!(map.last_key(), Ok(&"ccc"));
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The comparator used by [`AvlTreeMap::new`](crate::AvlTreeMap::new): the key type's
/// own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts another comparator.
///
/// # Examples
///
/// ```
/// use avl_navmap::{AvlTreeMap, NaturalOrder, Reversed};
///
/// let mut map = AvlTreeMap::with_comparator(Reversed(NaturalOrder));
/// map.insert(1, "a");
/// map.insert(3, "c");
/// map.insert(2, "b");
///
/// assert_eq!(map.first_key(), Ok(&3));
/// assert_eq!(map.higher_key(&3), Some(&2));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reversed<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
