use core::error::Error;
use core::fmt;

/// Returned by [`first_key`](crate::AvlTreeMap::first_key) and
/// [`last_key`](crate::AvlTreeMap::last_key) when the map has no entries.
///
/// These are the only map operations that fail outright on an empty map; every other
/// query reports absence with `None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyMapError;

impl fmt::Display for EmptyMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map is empty")
    }
}

impl Error for EmptyMapError {}
