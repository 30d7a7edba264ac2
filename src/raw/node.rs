use alloc::vec::Vec;

use super::handle::Handle;
use crate::Degree;

/// A single B-tree node.
///
/// `keys` is strictly increasing. A leaf owns no children; an internal node with
/// `k` keys owns exactly `k + 1` children, where `children[i]` holds every key
/// between `keys[i - 1]` and `keys[i]`.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    leaf: bool,
    keys: Vec<i64>,
    children: Vec<Handle>,
}

/// Result of searching for a key in a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SearchResult {
    /// Key was found at the given index.
    Found(usize),
    /// Key was not found; index is the child to descend into (and the insertion point).
    NotFound(usize),
}

impl Node {
    /// Creates a new empty leaf sized for `degree`.
    pub(crate) fn new_leaf(degree: Degree) -> Self {
        Self {
            leaf: true,
            keys: Vec::with_capacity(degree.max_keys()),
            children: Vec::new(),
        }
    }

    /// Creates a new internal node with `first` as its only child.
    pub(crate) fn new_internal(degree: Degree, first: Handle) -> Self {
        let mut children = Vec::with_capacity(degree.max_children());
        children.push(first);
        Self {
            leaf: false,
            keys: Vec::with_capacity(degree.max_keys()),
            children,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.leaf
    }

    #[inline]
    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> i64 {
        self.keys[index]
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> &[i64] {
        &self.keys
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> Handle {
        self.children[index]
    }

    #[cfg(test)]
    pub(crate) fn children(&self) -> &[Handle] {
        &self.children
    }

    pub(crate) fn first_child(&self) -> Option<Handle> {
        self.children.first().copied()
    }

    pub(crate) fn last_child(&self) -> Option<Handle> {
        self.children.last().copied()
    }

    /// True when the node holds `2t - 1` keys and must be split before a key can enter it.
    pub(crate) fn is_full(&self, degree: Degree) -> bool {
        self.keys.len() >= degree.max_keys()
    }

    /// True when the node can give up a key and still hold at least `t - 1`.
    pub(crate) fn can_lend(&self, degree: Degree) -> bool {
        self.keys.len() > degree.min_keys()
    }

    /// Binary search for `key` among this node's keys.
    #[inline]
    pub(crate) fn search(&self, key: i64) -> SearchResult {
        match self.keys.binary_search(&key) {
            Ok(idx) => SearchResult::Found(idx),
            Err(idx) => SearchResult::NotFound(idx),
        }
    }

    /// Inserts `key` at `index`, shifting larger keys right. Leaves only.
    pub(crate) fn insert_key(&mut self, index: usize, key: i64) {
        debug_assert!(self.leaf, "`Node::insert_key()` - node is internal!");
        self.keys.insert(index, key);
    }

    /// Removes and returns the key at `index`. Leaves only.
    pub(crate) fn remove_key(&mut self, index: usize) -> i64 {
        debug_assert!(self.leaf, "`Node::remove_key()` - node is internal!");
        self.keys.remove(index)
    }

    /// Overwrites the key at `index`, returning the old one.
    pub(crate) fn replace_key(&mut self, index: usize, key: i64) -> i64 {
        core::mem::replace(&mut self.keys[index], key)
    }

    /// Inserts a separator at `index` and its right-hand child at `index + 1`.
    pub(crate) fn insert_separator(&mut self, index: usize, key: i64, right: Handle) {
        self.keys.insert(index, key);
        self.children.insert(index + 1, right);
    }

    /// Removes the separator at `index` and its right-hand child at `index + 1`.
    pub(crate) fn remove_separator(&mut self, index: usize) -> (i64, Handle) {
        let key = self.keys.remove(index);
        let right = self.children.remove(index + 1);
        (key, right)
    }

    /// Prepends a key, and a child when internal.
    pub(crate) fn push_front(&mut self, key: i64, child: Option<Handle>) {
        self.keys.insert(0, key);
        if let Some(child) = child {
            self.children.insert(0, child);
        }
    }

    /// Appends a key, and a child when internal.
    pub(crate) fn push_back(&mut self, key: i64, child: Option<Handle>) {
        self.keys.push(key);
        if let Some(child) = child {
            self.children.push(child);
        }
    }

    /// Removes the first key, and the first child when internal.
    pub(crate) fn pop_front(&mut self) -> (i64, Option<Handle>) {
        let key = self.keys.remove(0);
        let child = if self.leaf { None } else { Some(self.children.remove(0)) };
        (key, child)
    }

    /// Removes the last key, and the last child when internal.
    pub(crate) fn pop_back(&mut self) -> (i64, Option<Handle>) {
        let key = self.keys.pop().expect("`Node::pop_back()` - node is empty!");
        let child = if self.leaf { None } else { self.children.pop() };
        (key, child)
    }

    /// Splits a full node around its median.
    ///
    /// The upper `t - 1` keys (and upper `t` children) move to the returned node,
    /// the median at index `t - 1` is returned separately, and `self` keeps the
    /// lower `t - 1` keys.
    pub(crate) fn split_off_upper(&mut self, degree: Degree) -> (i64, Node) {
        let t = degree.get();
        assert_eq!(self.keys.len(), degree.max_keys(), "`Node::split_off_upper()` - node is not full!");

        let mut keys = Vec::with_capacity(degree.max_keys());
        keys.extend(self.keys.drain(t..));
        let mut children = Vec::new();
        if !self.leaf {
            children.reserve_exact(degree.max_children());
            children.extend(self.children.drain(t..));
        }
        let median = self.keys.pop().expect("`Node::split_off_upper()` - node is empty!");

        let right = Node {
            leaf: self.leaf,
            keys,
            children,
        };
        (median, right)
    }

    /// Folds `separator` and every key and child of `right` onto the end of `self`.
    pub(crate) fn absorb(&mut self, separator: i64, mut right: Node) {
        debug_assert_eq!(self.leaf, right.leaf, "`Node::absorb()` - siblings differ in leaf-ness!");
        self.keys.push(separator);
        self.keys.append(&mut right.keys);
        self.children.append(&mut right.children);
    }
}
