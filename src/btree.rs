use core::fmt;

use crate::iter::Iter;
use crate::raw::RawBTree;
use crate::{Degree, DegreeError};

/// An ordered set of `i64` keys stored in a B-tree of configurable minimum degree.
///
/// Every node except the root holds between `t - 1` and `2t - 1` keys, where `t`
/// is the tree's [`Degree`]. Insertion splits full nodes on the way down and
/// removal rebalances thin nodes on the way down, so both finish in a single
/// root-to-leaf pass touching O(log<sub>t</sub> n) nodes.
///
/// Keys are unique: inserting a present key or removing an absent one does
/// nothing and reports `false`.
///
/// # Examples
///
/// ```
/// use mindeg_btree::BTree;
///
/// let mut tree = BTree::new(2);
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.contains(&12));
/// assert!(tree.remove(&6));
/// assert!(!tree.remove(&999));
///
/// let keys: Vec<i64> = tree.iter().collect();
/// assert_eq!(keys, [5, 7, 10, 12, 17, 20, 30]);
/// ```
#[derive(Clone)]
pub struct BTree {
    raw: RawBTree,
}

impl BTree {
    /// Makes a new, empty `BTree` with minimum degree `min_degree`.
    ///
    /// # Panics
    ///
    /// Panics if `min_degree < 2`. Use [`BTree::try_new`] to handle that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let tree = BTree::new(3);
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.min_degree(), 3);
    /// ```
    #[must_use]
    pub fn new(min_degree: usize) -> Self {
        Self::with_degree(Degree::new(min_degree))
    }

    /// Makes a new, empty `BTree`, rejecting a minimum degree below 2.
    ///
    /// # Errors
    ///
    /// Returns [`DegreeError::TooSmall`] if `min_degree < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::{BTree, DegreeError};
    ///
    /// assert!(BTree::try_new(2).is_ok());
    /// assert_eq!(BTree::try_new(1).err(), Some(DegreeError::TooSmall { min_degree: 1 }));
    /// ```
    pub fn try_new(min_degree: usize) -> Result<Self, DegreeError> {
        Degree::try_from(min_degree).map(Self::with_degree)
    }

    /// Makes a new, empty `BTree` with the given degree.
    #[must_use]
    pub fn with_degree(degree: Degree) -> Self {
        BTree {
            raw: RawBTree::new(degree),
        }
    }

    /// Returns the minimum degree `t` the tree was built with.
    #[must_use]
    pub fn min_degree(&self) -> usize {
        self.raw.degree().get()
    }

    /// Returns the tree's [`Degree`].
    #[must_use]
    pub fn degree(&self) -> Degree {
        self.raw.degree()
    }

    /// Returns `true` if the tree contains `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let tree: BTree = [1, 2, 3].into_iter().collect();
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, key: &i64) -> bool {
        self.raw.contains(*key)
    }

    /// Adds `key` to the tree.
    ///
    /// Returns whether the key was newly inserted. If the key was already present
    /// the tree is left untouched, including its node layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let mut tree = BTree::new(2);
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: i64) -> bool {
        self.raw.insert(key)
    }

    /// Removes `key` from the tree. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let mut tree = BTree::new(2);
    /// tree.insert(2);
    /// assert!(tree.remove(&2));
    /// assert!(!tree.remove(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, key: &i64) -> bool {
        self.raw.remove(*key)
    }

    /// Removes every key, leaving a single empty leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let mut tree: BTree = (0..100).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the smallest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let mut tree = BTree::new(2);
    /// assert_eq!(tree.first(), None);
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.first(), Some(1));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<i64> {
        self.raw.first()
    }

    /// Returns the largest key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let tree: BTree = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.last(), Some(3));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<i64> {
        self.raw.last()
    }

    /// Returns the number of levels in the tree. An empty tree has height 1.
    ///
    /// Height only grows when a full root is split and only shrinks when a
    /// one-key root is merged with its two children.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let mut tree = BTree::new(2);
    /// tree.extend([1, 2, 3]);
    /// assert_eq!(tree.height(), 1);
    /// tree.insert(4);
    /// assert_eq!(tree.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }

    /// Gets an iterator that visits the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mindeg_btree::BTree;
    ///
    /// let tree: BTree = [3, 1, 2].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.raw)
    }

    /// Returns the number of keys in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl PartialEq for BTree {
    /// Two trees are equal when they hold the same keys, regardless of degree or layout.
    fn eq(&self, other: &BTree) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for BTree {}

impl fmt::Debug for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Default for BTree {
    /// Creates an empty `BTree` with [`Degree::DEFAULT`].
    fn default() -> Self {
        Self::with_degree(Degree::DEFAULT)
    }
}

impl FromIterator<i64> for BTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = BTree::default();
        tree.extend(iter);
        tree
    }
}

impl Extend<i64> for BTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> Extend<&'a i64> for BTree {
    fn extend<I: IntoIterator<Item = &'a i64>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<const N: usize> From<[i64; N]> for BTree {
    fn from(arr: [i64; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a BTree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
