mod arena;
mod handle;
mod node;
mod raw_avl_tree_map;

pub(crate) use raw_avl_tree_map::{InOrder, RawAvlTreeMap};
