//! A height-balanced ordered map for Rust.
//!
//! This crate provides [`AvlTreeMap`], an ordered key-value map backed by an AVL tree.
//! Besides the usual O(log n) insert, lookup and removal it offers navigation around
//! keys that are not in the map, and bounded copies of key ranges:
//!
//! - [`first_key`](AvlTreeMap::first_key) / [`last_key`](AvlTreeMap::last_key) - the
//!   extreme keys, failing with [`EmptyMapError`] on an empty map
//! - [`floor_key`](AvlTreeMap::floor_key), [`ceiling_key`](AvlTreeMap::ceiling_key),
//!   [`lower_key`](AvlTreeMap::lower_key), [`higher_key`](AvlTreeMap::higher_key) - the
//!   nearest stored key around a probe
//! - [`head_map`](AvlTreeMap::head_map), [`tail_map`](AvlTreeMap::tail_map),
//!   [`sub_map`](AvlTreeMap::sub_map) - independent snapshots of a key range
//!
//! # Example
//!
//! ```
//! use avl_navmap::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for key in [10, 5, 15, 3, 7, 12] {
//!     map.insert(key, key * 100);
//! }
//!
//! assert_eq!(map.first_key(), Ok(&3));
//! assert_eq!(map.floor_key(&8), Some(&7));
//! assert_eq!(map.ceiling_entry(&8), Some((&10, &1000)));
//!
//! let head = map.head_map(&12);
//! assert_eq!(head.keys().copied().collect::<Vec<_>>(), [3, 5, 7, 10]);
//! ```
//!
//! # Ordering
//!
//! Keys are ordered by a [`Comparator`] chosen at construction. [`AvlTreeMap::new`] uses
//! [`NaturalOrder`], the key type's [`Ord`]; [`AvlTreeMap::with_comparator`] accepts any
//! other comparator, including plain closures.
//!
//! # Features
//!
//! - **`std`** (default) - enables [`key_set`](AvlTreeMap::key_set) and
//!   [`entry_set`](AvlTreeMap::entry_set), which return `std::collections::HashSet`.
//!   Without it the crate is `no_std` and only needs `alloc`.
//! - **`tracing`** - emits `tracing` events for rotations, removals, clears and range
//!   snapshots.
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children by index, so every node has
//! exactly one owner slot and the whole tree is released at once on
//! [`clear`](AvlTreeMap::clear). Insertion and removal descend iteratively, recording
//! their path, and then rebalance bottom-up along that path with single or double
//! rotations.
//!
//! The map is not synchronized. It is `Send`/`Sync` whenever its keys, values and
//! comparator are; sharing it mutably across threads requires external locking.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Forwards to the `tracing` macro of the same level when the `tracing` feature is on,
/// and expands to nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}
pub(crate) use trace_event;

mod comparator;
mod error;
mod raw;

pub mod avl_tree_map;

pub use avl_tree_map::AvlTreeMap;
pub use comparator::{Comparator, NaturalOrder, Reversed};
pub use error::EmptyMapError;
