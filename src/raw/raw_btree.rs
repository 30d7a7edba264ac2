use log::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, SearchResult};
use crate::Degree;

/// The core B-tree backing [`BTree`](crate::BTree).
///
/// Every node lives in `nodes`; the tree always has a root, which is an empty
/// leaf when the tree holds no keys.
#[derive(Clone)]
pub(crate) struct RawBTree {
    /// Minimum degree `t`.
    degree: Degree,
    /// Arena storing all tree nodes.
    nodes: Arena<Node>,
    /// Handle to the root node.
    root: Handle,
    /// Number of keys in the tree.
    len: usize,
}

impl RawBTree {
    /// Creates an empty tree: a single empty leaf root.
    pub(crate) fn new(degree: Degree) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.alloc(Node::new_leaf(degree));
        Self {
            degree,
            nodes,
            root,
            len: 0,
        }
    }

    pub(crate) const fn degree(&self) -> Degree {
        self.degree
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root(&self) -> Handle {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node {
        self.nodes.get(handle)
    }

    /// Number of levels; a lone leaf root has height 1.
    pub(crate) fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;
        while let Some(child) = self.nodes.get(current).first_child() {
            current = child;
            height += 1;
        }
        height
    }

    /// Drops every node and starts over from a single empty leaf.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = self.nodes.alloc(Node::new_leaf(self.degree));
        self.len = 0;
    }

    pub(crate) fn contains(&self, key: i64) -> bool {
        let mut current = self.root;
        loop {
            let node = self.nodes.get(current);
            match node.search(key) {
                SearchResult::Found(_) => return true,
                SearchResult::NotFound(_) if node.is_leaf() => return false,
                SearchResult::NotFound(idx) => current = node.child(idx),
            }
        }
    }

    pub(crate) fn first(&self) -> Option<i64> {
        (!self.is_empty()).then(|| self.leftmost_key(self.root))
    }

    pub(crate) fn last(&self) -> Option<i64> {
        (!self.is_empty()).then(|| self.rightmost_key(self.root))
    }

    /// Smallest key in the subtree rooted at `handle`.
    fn leftmost_key(&self, handle: Handle) -> i64 {
        let mut current = handle;
        while let Some(child) = self.nodes.get(current).first_child() {
            current = child;
        }
        self.nodes.get(current).key(0)
    }

    /// Largest key in the subtree rooted at `handle`.
    fn rightmost_key(&self, handle: Handle) -> i64 {
        let mut current = handle;
        while let Some(child) = self.nodes.get(current).last_child() {
            current = child;
        }
        let node = self.nodes.get(current);
        node.key(node.key_count() - 1)
    }

    /// Inserts `key`, returning `false` if it was already present.
    ///
    /// Full nodes are split on the way down, so the leaf reached at the bottom
    /// always has room and no split ever propagates back up.
    pub(crate) fn insert(&mut self, key: i64) -> bool {
        if self.contains(key) {
            return false;
        }

        if self.nodes.get(self.root).is_full(self.degree) {
            let old_root = self.root;
            self.root = self.nodes.alloc(Node::new_internal(self.degree, old_root));
            self.split_child(self.root, 0);
            debug!("root split, height is now {}", self.height());
        }

        let mut current = self.root;
        loop {
            let node = self.nodes.get(current);
            let mut idx = match node.search(key) {
                SearchResult::Found(_) => return false,
                SearchResult::NotFound(idx) => idx,
            };

            if node.is_leaf() {
                self.nodes.get_mut(current).insert_key(idx, key);
                break;
            }

            if self.nodes.get(node.child(idx)).is_full(self.degree) {
                self.split_child(current, idx);
                if key > self.nodes.get(current).key(idx) {
                    idx += 1;
                }
            }
            current = self.nodes.get(current).child(idx);
        }

        self.len += 1;
        true
    }

    /// Removes `key`, returning `false` if it was not present.
    ///
    /// Every node entered below the root holds at least `t` keys, so removing a
    /// key from a leaf never leaves it under-full.
    pub(crate) fn remove(&mut self, key: i64) -> bool {
        if !self.contains(key) {
            return false;
        }

        self.shrink_root_if_thin();

        let mut target = key;
        let mut current = self.root;
        loop {
            let node = self.nodes.get(current);
            match node.search(target) {
                SearchResult::Found(idx) if node.is_leaf() => {
                    self.nodes.get_mut(current).remove_key(idx);
                    break;
                }
                SearchResult::Found(idx) => {
                    let left = node.child(idx);
                    let right = node.child(idx + 1);
                    if self.nodes.get(left).can_lend(self.degree) {
                        let predecessor = self.rightmost_key(left);
                        self.nodes.get_mut(current).replace_key(idx, predecessor);
                        target = predecessor;
                        current = left;
                    } else if self.nodes.get(right).can_lend(self.degree) {
                        let successor = self.leftmost_key(right);
                        self.nodes.get_mut(current).replace_key(idx, successor);
                        target = successor;
                        current = right;
                    } else {
                        current = self.merge_children(current, idx);
                    }
                }
                SearchResult::NotFound(_) if node.is_leaf() => {
                    unreachable!("`RawBTree::remove()` - key vanished during descent!")
                }
                SearchResult::NotFound(idx) => {
                    current = self.prepare_child(current, idx);
                }
            }
        }

        self.len -= 1;
        true
    }

    /// Root special case for removal: a one-key root whose two children are both
    /// at minimum occupancy is folded into a single node that becomes the new root.
    /// This is the only place the tree loses height.
    fn shrink_root_if_thin(&mut self) {
        let root = self.nodes.get(self.root);
        if root.is_leaf() || root.key_count() != 1 {
            return;
        }
        let left = self.nodes.get(root.child(0));
        let right = self.nodes.get(root.child(1));
        if left.can_lend(self.degree) || right.can_lend(self.degree) {
            return;
        }

        let old_root = self.root;
        self.root = self.merge_children(old_root, 0);
        self.nodes.free(old_root);
        debug!("root merged, height is now {}", self.height());
    }

    /// Makes sure `children[idx]` of `parent` holds at least `t` keys before the
    /// descent enters it, returning the handle to descend into.
    fn prepare_child(&mut self, parent: Handle, idx: usize) -> Handle {
        let node = self.nodes.get(parent);
        let child = node.child(idx);
        if self.nodes.get(child).can_lend(self.degree) {
            return child;
        }

        let has_left = idx > 0;
        let has_right = idx < node.key_count();
        if has_left && self.nodes.get(node.child(idx - 1)).can_lend(self.degree) {
            self.rotate_clockwise(parent, idx);
            child
        } else if has_right && self.nodes.get(node.child(idx + 1)).can_lend(self.degree) {
            self.rotate_counterclockwise(parent, idx);
            child
        } else if has_left {
            self.merge_children(parent, idx - 1)
        } else {
            self.merge_children(parent, idx)
        }
    }

    /// Splits the full child at `idx`, lifting its median into `parent`.
    fn split_child(&mut self, parent: Handle, idx: usize) {
        let child = self.nodes.get(parent).child(idx);
        let (median, right) = self.nodes.get_mut(child).split_off_upper(self.degree);
        let right = self.nodes.alloc(right);
        self.nodes.get_mut(parent).insert_separator(idx, median, right);
        trace!("split child {idx}, median {median} moved up");
    }

    /// Moves one key from `children[idx - 1]` through the parent into `children[idx]`.
    fn rotate_clockwise(&mut self, parent: Handle, idx: usize) {
        let node = self.nodes.get(parent);
        let (left, child) = (node.child(idx - 1), node.child(idx));

        let (borrowed, orphan) = self.nodes.get_mut(left).pop_back();
        let separator = self.nodes.get_mut(parent).replace_key(idx - 1, borrowed);
        self.nodes.get_mut(child).push_front(separator, orphan);
        trace!("rotated {separator} into child {idx} from the left");
    }

    /// Moves one key from `children[idx + 1]` through the parent into `children[idx]`.
    fn rotate_counterclockwise(&mut self, parent: Handle, idx: usize) {
        let node = self.nodes.get(parent);
        let (child, right) = (node.child(idx), node.child(idx + 1));

        let (borrowed, orphan) = self.nodes.get_mut(right).pop_front();
        let separator = self.nodes.get_mut(parent).replace_key(idx, borrowed);
        self.nodes.get_mut(child).push_back(separator, orphan);
        trace!("rotated {separator} into child {idx} from the right");
    }

    /// Folds `keys[idx]` and `children[idx + 1]` into `children[idx]`, releasing
    /// the right sibling. Returns the surviving child.
    fn merge_children(&mut self, parent: Handle, idx: usize) -> Handle {
        let (separator, right) = self.nodes.get_mut(parent).remove_separator(idx);
        let right = self.nodes.take(right);
        let left = self.nodes.get(parent).child(idx);
        self.nodes.get_mut(left).absorb(separator, right);
        trace!("merged children {idx} and {} around {separator}", idx + 1);
        left
    }
}
