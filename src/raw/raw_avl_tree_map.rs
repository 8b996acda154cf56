use core::cmp::Ordering;
use core::ops::Bound;

use alloc::vec::Vec;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::{Direction, Handle};
use super::node::Node;
use crate::comparator::Comparator;

/// The AVL engine backing `AvlTreeMap`.
#[derive(Clone)]
pub(crate) struct RawAvlTreeMap<K, V, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
    /// Total order over keys, fixed for the lifetime of the tree.
    comparator: C,
}

/// One step of a descent: the node visited and the child slot taken out of it.
struct PathElement {
    node: Handle,
    direction: Direction,
}

/// Root-to-leaf descent record, replayed bottom-up to rebalance.
///
/// An AVL tree with `Handle::MAX` nodes is under 48 levels deep, so a path never
/// spills out of the inline buffer.
type Path = SmallVec<[PathElement; 64]>;

/// Explicit stack for in-order walks.
type Stack = SmallVec<[Handle; 64]>;

/// Pushes `link` and its chain of left descendants, so the top of `stack` is the
/// smallest entry of that subtree.
fn push_left_spine<K, V>(nodes: &Arena<Node<K, V>>, stack: &mut Stack, mut link: Option<Handle>) {
    while let Some(handle) = link {
        stack.push(handle);
        link = nodes.get(handle).left();
    }
}

/// Borrowing in-order cursor over a tree's entries.
pub(crate) struct InOrder<'a, K, V> {
    nodes: &'a Arena<Node<K, V>>,
    stack: Stack,
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let node = self.nodes.get(handle);
        push_left_spine(self.nodes, &mut self.stack, node.right());
        Some((node.key(), node.value()))
    }
}

impl<K, V, C> RawAvlTreeMap<K, V, C> {
    /// Creates a new, empty tree ordered by `comparator`.
    pub(crate) const fn new(comparator: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.comparator
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Borrows the entry stored at `handle`.
    pub(crate) fn entry(&self, handle: Handle) -> (&K, &V) {
        let node = self.nodes.get(handle);
        (node.key(), node.value())
    }

    /// Releases every node at once.
    pub(crate) fn clear(&mut self) {
        crate::trace_event!(debug, len = self.len, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Walks the entries in ascending order.
    pub(crate) fn in_order(&self) -> InOrder<'_, K, V> {
        let mut stack = Stack::new();
        push_left_spine(&self.nodes, &mut stack, self.root);
        InOrder {
            nodes: &self.nodes,
            stack,
        }
    }

    /// Moves every entry out in ascending order, leaving the tree empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut result = Vec::with_capacity(self.len);
        let mut stack = Stack::new();
        push_left_spine(&self.nodes, &mut stack, self.root);

        while let Some(handle) = stack.pop() {
            let node = self.nodes.take(handle);
            push_left_spine(&self.nodes, &mut stack, node.right());
            result.push(node.into_entry());
        }

        self.clear();
        result
    }

    /// Leftmost node.
    pub(crate) fn first(&self) -> Option<Handle> {
        self.extreme(Direction::Left)
    }

    /// Rightmost node.
    pub(crate) fn last(&self) -> Option<Handle> {
        self.extreme(Direction::Right)
    }

    fn extreme(&self, direction: Direction) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(direction) {
            current = next;
        }
        Some(current)
    }

    /// Removes the leftmost entry.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        self.pop_extreme(Direction::Left)
    }

    /// Removes the rightmost entry.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        self.pop_extreme(Direction::Right)
    }

    fn pop_extreme(&mut self, direction: Direction) -> Option<(K, V)> {
        let mut path = Path::new();
        let mut current = self.root?;
        while let Some(next) = self.nodes.get(current).child(direction) {
            path.push(PathElement {
                node: current,
                direction,
            });
            current = next;
        }
        Some(self.remove_at(path, current))
    }

    /// Visits every value until `pred` accepts one. No ordering shortcut applies to
    /// values, so this is a full O(n) walk.
    pub(crate) fn any_value<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&V) -> bool,
    {
        let mut stack = Stack::new();
        stack.extend(self.root);
        while let Some(handle) = stack.pop() {
            let node = self.nodes.get(handle);
            if pred(node.value()) {
                return true;
            }
            stack.extend(node.left());
            stack.extend(node.right());
        }
        false
    }

    // ─── Balancing ───────────────────────────────────────────────────────────

    #[inline]
    fn height(&self, link: Option<Handle>) -> u8 {
        link.map_or(0, |handle| self.nodes.get(handle).height())
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let height = 1 + self.height(node.left()).max(self.height(node.right()));
        self.nodes.get_mut(handle).set_height(height);
    }

    /// `height(left) - height(right)`.
    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.height(node.left())) - i16::from(self.height(node.right()))
    }

    /// Rotates the subtree rooted at `pivot` toward `toward`, returning the new root.
    ///
    /// Rotating right promotes `pivot.left`; its right subtree becomes `pivot.left`, and
    /// `pivot` becomes its right child. Rotating left is the mirror image. Heights are
    /// refreshed bottom-up: the demoted pivot first, then the promoted child.
    fn rotate(&mut self, pivot: Handle, toward: Direction) -> Handle {
        let up = toward.opposite();
        let promoted = self.nodes.get(pivot).child(up).expect("rotation requires a child to promote");
        crate::trace_event!(trace, pivot = pivot.to_index(), promoted = promoted.to_index(), ?toward, "rotate");

        let inner = self.nodes.get(promoted).child(toward);
        self.nodes.get_mut(pivot).set_child(up, inner);
        self.nodes.get_mut(promoted).set_child(toward, Some(pivot));

        self.update_height(pivot);
        self.update_height(promoted);
        promoted
    }

    /// Refreshes the cached height of `handle` and restores the AVL balance of the
    /// subtree it roots, returning the (possibly new) subtree root.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.update_height(handle);
        let bf = self.balance_factor(handle);

        if bf > 1 {
            let left = self.nodes.get(handle).left().expect("left-heavy node has a left child");
            if self.balance_factor(left) < 0 {
                let left = self.rotate(left, Direction::Left);
                self.nodes.get_mut(handle).set_child(Direction::Left, Some(left));
            }
            return self.rotate(handle, Direction::Right);
        }

        if bf < -1 {
            let right = self.nodes.get(handle).right().expect("right-heavy node has a right child");
            if self.balance_factor(right) > 0 {
                let right = self.rotate(right, Direction::Right);
                self.nodes.get_mut(handle).set_child(Direction::Right, Some(right));
            }
            return self.rotate(handle, Direction::Left);
        }

        handle
    }

    /// Rebalances every node on `path`, deepest first, re-linking each (possibly
    /// rotated) subtree into its parent or the root slot.
    fn rebalance_path(&mut self, path: &Path) {
        for depth in (0..path.len()).rev() {
            let subtree = self.rebalance(path[depth].node);
            if depth == 0 {
                self.root = Some(subtree);
            } else {
                let parent = &path[depth - 1];
                self.nodes.get_mut(parent.node).set_child(parent.direction, Some(subtree));
            }
        }
    }

    /// Points the slot at the end of `path` (or the root slot) at `child`.
    fn relink(&mut self, path: &Path, child: Option<Handle>) {
        match path.last() {
            Some(parent) => self.nodes.get_mut(parent.node).set_child(parent.direction, child),
            None => self.root = child,
        }
    }

    /// Unlinks `target`, reached through `path`, and rebalances back up to the root.
    ///
    /// A node with two children takes over its in-order successor's entry; the
    /// successor (which never has a left child) is the node actually spliced out.
    fn remove_at(&mut self, mut path: Path, target: Handle) -> (K, V) {
        let node = self.nodes.get(target);
        let removed = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                path.push(PathElement {
                    node: target,
                    direction: Direction::Right,
                });
                let mut successor = right;
                while let Some(left) = self.nodes.get(successor).left() {
                    path.push(PathElement {
                        node: successor,
                        direction: Direction::Left,
                    });
                    successor = left;
                }
                crate::trace_event!(
                    trace,
                    target = target.to_index(),
                    successor = successor.to_index(),
                    "promoting successor"
                );

                let orphan = self.nodes.get(successor).right();
                self.relink(&path, orphan);
                let (key, value) = self.nodes.take(successor).into_entry();
                self.nodes.get_mut(target).replace_entry(key, value)
            }
            (left, right) => {
                crate::trace_event!(trace, target = target.to_index(), "splicing out node");
                self.relink(&path, left.or(right));
                self.nodes.take(target).into_entry()
            }
        };

        self.len -= 1;
        self.rebalance_path(&path);
        removed
    }
}

impl<K, V, C: Comparator<K>> RawAvlTreeMap<K, V, C> {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.comparator.compare(a, b)
    }

    /// Finds the node holding a key equal to `key`.
    pub(crate) fn search(&self, key: &K) -> Option<Handle> {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.compare(key, node.key()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = self.search(key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.search(key).map(|handle| self.entry(handle))
    }

    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present, in which case the tree's
    /// shape is untouched.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(root) = self.root else {
            self.root = Some(self.nodes.alloc(Node::leaf(key, value)));
            self.len = 1;
            return None;
        };

        let mut path = Path::new();
        let mut current = root;
        loop {
            let node = self.nodes.get(current);
            let direction = match self.compare(&key, node.key()) {
                Ordering::Equal => return Some(self.nodes.get_mut(current).replace_value(value)),
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            path.push(PathElement {
                node: current,
                direction,
            });
            match node.child(direction) {
                Some(child) => current = child,
                None => break,
            }
        }

        let leaf = self.nodes.alloc(Node::leaf(key, value));
        self.relink(&path, Some(leaf));
        self.len += 1;
        self.rebalance_path(&path);
        None
    }

    /// Removes a key from the tree, returning the stored key and value.
    /// An absent key leaves the tree exactly as it was.
    pub(crate) fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let mut path = Path::new();
        let mut current = self.root?;
        loop {
            let node = self.nodes.get(current);
            let direction = match self.compare(key, node.key()) {
                Ordering::Equal => break,
                Ordering::Less => Direction::Left,
                Ordering::Greater => Direction::Right,
            };
            let next = node.child(direction)?;
            path.push(PathElement {
                node: current,
                direction,
            });
            current = next;
        }
        Some(self.remove_at(path, current))
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    // ─── Navigation ──────────────────────────────────────────────────────────

    /// Greatest key `<= key`.
    pub(crate) fn floor(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.compare(key, node.key()) {
                Ordering::Equal => return Some(handle),
                Ordering::Greater => {
                    best = Some(handle);
                    node.right()
                }
                Ordering::Less => node.left(),
            };
        }
        best
    }

    /// Smallest key `>= key`.
    pub(crate) fn ceiling(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.compare(key, node.key()) {
                Ordering::Equal => return Some(handle),
                Ordering::Less => {
                    best = Some(handle);
                    node.left()
                }
                Ordering::Greater => node.right(),
            };
        }
        best
    }

    /// Greatest key `< key`.
    pub(crate) fn lower(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = if self.compare(node.key(), key) == Ordering::Less {
                best = Some(handle);
                node.right()
            } else {
                node.left()
            };
        }
        best
    }

    /// Smallest key `> key`.
    pub(crate) fn higher(&self, key: &K) -> Option<Handle> {
        let mut best = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = if self.compare(node.key(), key) == Ordering::Greater {
                best = Some(handle);
                node.left()
            } else {
                node.right()
            };
        }
        best
    }

    // ─── Range snapshots ─────────────────────────────────────────────────────

    /// Copies every entry within `(lower, upper)` into a new, independent tree that
    /// shares this tree's comparator.
    pub(crate) fn range_copy(&self, lower: Bound<&K>, upper: Bound<&K>) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
    {
        let mut out = Self::new(self.comparator.clone());
        self.copy_range_into(self.root, lower, upper, &mut out);
        crate::trace_event!(debug, source = self.len, copied = out.len, "built range snapshot");
        out
    }

    /// In-order walk that only descends into children which may still hold keys in
    /// range. A node's own bound test says nothing about its children beyond the one
    /// side it rules out.
    fn copy_range_into(&self, link: Option<Handle>, lower: Bound<&K>, upper: Bound<&K>, out: &mut Self)
    where
        K: Clone,
        V: Clone,
    {
        let Some(handle) = link else {
            return;
        };
        let node = self.nodes.get(handle);

        let above_lower = match lower {
            Bound::Unbounded => true,
            Bound::Included(start) => self.compare(node.key(), start) != Ordering::Less,
            Bound::Excluded(start) => self.compare(node.key(), start) == Ordering::Greater,
        };
        let below_upper = match upper {
            Bound::Unbounded => true,
            Bound::Included(end) => self.compare(node.key(), end) != Ordering::Greater,
            Bound::Excluded(end) => self.compare(node.key(), end) == Ordering::Less,
        };

        // Everything left of a node under the lower bound is under it too, and
        // likewise on the right for the upper bound.
        if above_lower {
            self.copy_range_into(node.left(), lower, upper, out);
        }
        if above_lower && below_upper {
            out.insert(node.key().clone(), node.value().clone());
        }
        if below_upper {
            self.copy_range_into(node.right(), lower, upper, out);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::comparator::NaturalOrder;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    impl<K, V, C: Comparator<K>> RawAvlTreeMap<K, V, C> {
        /// Validates all AVL invariants. Panics with a descriptive message if any are
        /// violated. This is intended for use in tests to catch tree corruption.
        pub(crate) fn validate_invariants(&self) {
            let mut errors: Vec<String> = Vec::new();
            let (_, count) = self.validate_node(self.root, None, None, &mut errors);

            if self.len != count {
                errors.push(alloc::format!("len mismatch: self.len={}, reachable={}", self.len, count));
            }
            if self.nodes.len() != count {
                errors.push(alloc::format!("arena holds {} live nodes, tree reaches {}", self.nodes.len(), count));
            }

            assert!(errors.is_empty(), "Tree invariant violations:\n{}", errors.join("\n"));
        }

        /// Returns `(height, node_count)` of the subtree at `link`. Every key must lie
        /// strictly between `min` and `max`.
        fn validate_node(
            &self,
            link: Option<Handle>,
            min: Option<&K>,
            max: Option<&K>,
            errors: &mut Vec<String>,
        ) -> (u8, usize) {
            let Some(handle) = link else {
                return (0, 0);
            };
            let node = self.nodes.get(handle);

            if let Some(min) = min
                && self.compare(node.key(), min) != Ordering::Greater
            {
                errors.push(alloc::format!("BST order broken at handle {handle:?}: key not above its lower bound"));
            }
            if let Some(max) = max
                && self.compare(node.key(), max) != Ordering::Less
            {
                errors.push(alloc::format!("BST order broken at handle {handle:?}: key not below its upper bound"));
            }

            let (left_height, left_count) = self.validate_node(node.left(), min, Some(node.key()), errors);
            let (right_height, right_count) = self.validate_node(node.right(), Some(node.key()), max, errors);

            let bf = i16::from(left_height) - i16::from(right_height);
            if bf.abs() > 1 {
                errors.push(alloc::format!("AVL balance broken at handle {handle:?}: balance factor {bf}"));
            }

            let height = 1 + left_height.max(right_height);
            if node.height() != height {
                errors.push(alloc::format!(
                    "Stale height at handle {:?}: cached={}, actual={}",
                    handle,
                    node.height(),
                    height
                ));
            }

            (height, left_count + right_count + 1)
        }

        fn keys_in_order(&self) -> Vec<K>
        where
            K: Clone,
        {
            self.in_order().map(|(k, _)| k.clone()).collect()
        }

        fn entries_in_order(&self) -> Vec<(K, V)>
        where
            K: Clone,
            V: Clone,
        {
            self.in_order().map(|(k, v)| (k.clone(), v.clone())).collect()
        }
    }

    fn tree_of(keys: &[i32]) -> RawAvlTreeMap<i32, i32, NaturalOrder> {
        let mut tree = RawAvlTreeMap::new(NaturalOrder);
        for &key in keys {
            tree.insert(key, key * 10);
        }
        tree.validate_invariants();
        tree
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i32),
        Remove(i32),
        PopFirst,
        PopLast,
    }

    fn op_strategy(keys: impl Strategy<Value = i32> + Clone) -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => keys.clone().prop_map(Op::Insert),
            3 => keys.prop_map(Op::Remove),
            1 => Just(Op::PopFirst),
            1 => Just(Op::PopLast),
        ]
    }

    /// Inserts `len` consecutive keys from `start`, ascending or descending.
    fn run_strategy() -> impl Strategy<Value = Vec<Op>> {
        (0i32..1000, 1i32..64, any::<bool>()).prop_map(|(start, len, ascending)| {
            let run: Vec<Op> = (start..start + len).map(Op::Insert).collect();
            if ascending { run } else { run.into_iter().rev().collect() }
        })
    }

    /// Replays `ops` against a `BTreeMap`, checking every invariant after each step.
    fn replay_against_model(ops: Vec<Op>) -> Result<(), TestCaseError> {
        let mut tree: RawAvlTreeMap<i32, i32, NaturalOrder> = RawAvlTreeMap::new(NaturalOrder);
        let mut model = alloc::collections::BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key, key * 2), model.insert(key, key * 2));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(&key), model.remove(&key));
                }
                Op::PopFirst => {
                    prop_assert_eq!(tree.pop_first(), model.pop_first());
                }
                Op::PopLast => {
                    prop_assert_eq!(tree.pop_last(), model.pop_last());
                }
            }
            tree.validate_invariants();
        }

        let expected: Vec<i32> = model.keys().copied().collect();
        prop_assert_eq!(tree.keys_in_order(), expected);
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn tree_invariants_maintained_after_operations(ops in prop::collection::vec(op_strategy(0i32..1000), 0..500)) {
            replay_against_model(ops)?;
        }

        #[test]
        fn tree_invariants_maintained_with_clustered_keys(ops in prop::collection::vec(op_strategy(0i32..16), 0..500)) {
            replay_against_model(ops)?;
        }

        #[test]
        fn tree_invariants_maintained_with_monotone_runs(
            runs in prop::collection::vec(run_strategy(), 1..16),
            tail in prop::collection::vec(op_strategy(0i32..1064), 0..200),
        ) {
            let mut ops: Vec<Op> = runs.into_iter().flatten().collect();
            ops.extend(tail);
            replay_against_model(ops)?;
        }

        #[test]
        fn height_stays_logarithmic(count in 1usize..2000) {
            let mut tree: RawAvlTreeMap<usize, (), NaturalOrder> = RawAvlTreeMap::new(NaturalOrder);
            for key in 0..count {
                tree.insert(key, ());
            }
            // AVL bound: h < 1.4405 * log2(n + 2), and log2(n + 2) <= bits(n + 1).
            let bits = usize::BITS - (count + 1).leading_zeros();
            prop_assert!(u32::from(tree.height(tree.root)) <= 3 * bits / 2 + 1);
        }

        #[test]
        fn floor_and_ceiling_bracket_probe(keys in prop::collection::vec(0i32..500, 0..200), probe in -10i32..510) {
            let tree = tree_of(&keys);
            let sorted = tree.keys_in_order();

            let floor = tree.floor(&probe).map(|h| *tree.node(h).key());
            let ceiling = tree.ceiling(&probe).map(|h| *tree.node(h).key());
            let lower = tree.lower(&probe).map(|h| *tree.node(h).key());
            let higher = tree.higher(&probe).map(|h| *tree.node(h).key());

            prop_assert_eq!(floor, sorted.iter().rev().find(|&&k| k <= probe).copied());
            prop_assert_eq!(ceiling, sorted.iter().find(|&&k| k >= probe).copied());
            prop_assert_eq!(lower, sorted.iter().rev().find(|&&k| k < probe).copied());
            prop_assert_eq!(higher, sorted.iter().find(|&&k| k > probe).copied());
        }
    }

    #[test]
    fn deep_trees_fit_the_inline_path() {
        let mut tree: RawAvlTreeMap<u32, (), NaturalOrder> = RawAvlTreeMap::new(NaturalOrder);
        for key in 0..60_000 {
            tree.insert(key, ());
        }
        assert!(usize::from(tree.height(tree.root)) <= Path::new().inline_size());
        assert!(usize::from(tree.height(tree.root)) <= Stack::new().inline_size());

        // Strided then exhaustive removals, each re-descending a full-height path.
        for key in (0..60_000).step_by(3) {
            assert_eq!(tree.remove(&key), Some(()));
        }
        tree.validate_invariants();
        while tree.root.is_some() {
            let root_key = *tree.node(tree.root.unwrap()).key();
            assert_eq!(tree.remove(&root_key), Some(()));
        }
        tree.validate_invariants();
        assert!(tree.is_empty());
    }

    #[test]
    fn ascending_and_descending_inserts_stay_valid_at_every_step() {
        let mut tree: RawAvlTreeMap<i32, i32, NaturalOrder> = RawAvlTreeMap::new(NaturalOrder);
        for key in 0..300 {
            tree.insert(key, key);
            tree.validate_invariants();
        }
        for key in (-300..0).rev() {
            tree.insert(key, key);
            tree.validate_invariants();
        }
        for key in (-300..300).step_by(2) {
            assert_eq!(tree.remove(&key), Some(key));
            tree.validate_invariants();
        }
        assert_eq!(tree.len(), 300);
    }

    #[test]
    fn empty_tree() {
        let mut tree: RawAvlTreeMap<i32, i32, NaturalOrder> = RawAvlTreeMap::new(NaturalOrder);
        tree.validate_invariants();

        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.floor(&0).is_none());
        assert!(tree.higher(&0).is_none());
        assert_eq!(tree.remove(&0), None);
        assert_eq!(tree.pop_first(), None);
        assert_eq!(tree.pop_last(), None);
    }

    #[test]
    fn ascending_inserts_trigger_single_rotations() {
        let tree = tree_of(&[1, 2, 3]);
        let root = tree.root.unwrap();
        assert_eq!(*tree.node(root).key(), 2);
        assert_eq!(tree.node(root).height(), 2);
    }

    #[test]
    fn zig_zag_inserts_trigger_double_rotations() {
        // Left-right case.
        let tree = tree_of(&[30, 10, 20]);
        assert_eq!(*tree.node(tree.root.unwrap()).key(), 20);

        // Right-left case.
        let tree = tree_of(&[10, 30, 20]);
        assert_eq!(*tree.node(tree.root.unwrap()).key(), 20);
    }

    #[test]
    fn replacing_a_value_keeps_shape() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        let root = tree.root;
        assert_eq!(tree.insert(3, 99), Some(30));
        assert_eq!(tree.root, root);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.get(&3), Some(&99));
        tree.validate_invariants();
    }

    #[test]
    fn removing_a_node_with_two_children_promotes_successor() {
        let mut tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 65]);
        assert_eq!(tree.remove_entry(&50), Some((50, 500)));
        tree.validate_invariants();

        // 60 was the in-order successor of 50 and now sits at the root.
        assert_eq!(*tree.node(tree.root.unwrap()).key(), 60);
        assert_eq!(tree.keys_in_order(), vec![20, 30, 40, 60, 65, 70, 80]);
    }

    #[test]
    fn removing_an_absent_key_changes_nothing() {
        let mut tree = tree_of(&[5, 3, 8]);
        let before = tree.entries_in_order();
        let root = tree.root;
        assert_eq!(tree.remove(&4), None);
        assert_eq!(tree.root, root);
        assert_eq!(tree.entries_in_order(), before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn range_copy_respects_bounds() {
        let tree = tree_of(&[3, 5, 7, 10, 12, 15]);

        let head = tree.range_copy(Bound::Unbounded, Bound::Excluded(&12));
        head.validate_invariants();
        assert_eq!(head.keys_in_order(), vec![3, 5, 7, 10]);

        let tail = tree.range_copy(Bound::Included(&7), Bound::Unbounded);
        tail.validate_invariants();
        assert_eq!(tail.keys_in_order(), vec![7, 10, 12, 15]);

        let sub = tree.range_copy(Bound::Included(&5), Bound::Excluded(&15));
        sub.validate_invariants();
        assert_eq!(sub.keys_in_order(), vec![5, 7, 10, 12]);

        let inverted = tree.range_copy(Bound::Included(&12), Bound::Excluded(&5));
        assert!(inverted.is_empty());
    }

    #[test]
    fn drain_yields_ascending_entries_and_empties() {
        let mut tree = tree_of(&[9, 1, 5, 3, 7]);
        let drained = tree.drain_to_vec();
        assert_eq!(drained, vec![(1, 10), (3, 30), (5, 50), (7, 70), (9, 90)]);
        assert!(tree.is_empty());
        tree.validate_invariants();
    }

    #[test]
    fn any_value_scans_whole_tree() {
        let tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert!(tree.any_value(|v| *v == 70));
        assert!(tree.any_value(|v| *v == 10));
        assert!(!tree.any_value(|v| *v == 15));
    }
}
