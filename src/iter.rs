use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::raw::{Handle, RawBTree};

/// A position in one node: the next key to yield, or, for an internal node whose
/// key at `index - 1` was just yielded, the child to descend into next.
#[derive(Clone, Copy, Debug)]
struct Frame {
    node: Handle,
    index: usize,
}

/// Type alias for the descent stack; one frame per level.
type Stack = SmallVec<[Frame; 16]>;

/// An iterator over the keys of a [`BTree`](crate::BTree) in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`BTree`]. It walks the
/// tree without recursion, keeping one `(node, index)` frame per level.
///
/// The iterator borrows the tree, so the tree cannot be modified while the
/// iterator is alive. Once exhausted it keeps returning `None`; start over with
/// a fresh call to [`iter`].
///
/// # Examples
///
/// ```
/// use mindeg_btree::BTree;
///
/// let tree: BTree = [30, 10, 20].into_iter().collect();
/// let mut iter = tree.iter();
/// assert_eq!(iter.next(), Some(10));
/// assert_eq!(iter.next(), Some(20));
/// assert_eq!(iter.next(), Some(30));
/// assert_eq!(iter.next(), None);
/// ```
///
/// Mutating the tree while an iterator is outstanding does not compile:
///
/// ```compile_fail
/// use mindeg_btree::BTree;
///
/// let mut tree = BTree::new(2);
/// tree.insert(1);
/// let mut iter = tree.iter();
/// tree.insert(2);
/// iter.next();
/// ```
///
/// [`iter`]: crate::BTree::iter
/// [`BTree`]: crate::BTree
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    tree: &'a RawBTree,
    stack: Stack,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(tree: &'a RawBTree) -> Self {
        let mut stack = Stack::new();
        if !tree.is_empty() {
            stack.push(Frame {
                node: tree.root(),
                index: 0,
            });
        }
        Self {
            tree,
            stack,
            remaining: tree.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let tree = self.tree;
        let top = *self.stack.last()?;

        // Descend to the leftmost leaf of the pending child.
        let mut node = tree.node(top.node);
        let mut index = top.index;
        while !node.is_leaf() {
            let child = node.child(index);
            self.stack.push(Frame { node: child, index: 0 });
            node = tree.node(child);
            index = 0;
        }

        while let Some(frame) = self.stack.last_mut() {
            let node = tree.node(frame.node);
            if frame.index < node.key_count() {
                let key = node.key(frame.index);
                frame.index += 1;
                self.remaining -= 1;
                return Some(key);
            }
            self.stack.pop();
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
