use crate::error::DegreeError;

/// The minimum degree `t` of a [`BTree`](crate::BTree).
///
/// Every node other than the root holds between `t - 1` and `2t - 1` keys, and an
/// internal node with `k` keys has `k + 1` children. `t` must be at least 2.
///
/// # Examples
///
/// ```
/// use mindeg_btree::Degree;
///
/// let t = Degree::new(3);
/// assert_eq!(t.min_keys(), 2);
/// assert_eq!(t.max_keys(), 5);
///
/// assert!(Degree::try_from(1).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Degree(usize);

impl Degree {
    /// The smallest legal minimum degree (a 2-3-4 tree).
    pub const MIN: Self = Self(2);

    /// The degree used by [`BTree::default`](crate::BTree::default).
    pub const DEFAULT: Self = Self(6);

    /// Creates a new minimum degree.
    ///
    /// # Panics
    ///
    /// Panics if `min_degree < 2`.
    #[must_use]
    pub const fn new(min_degree: usize) -> Self {
        assert!(min_degree >= Self::MIN.0, "`Degree::new()` - `min_degree` < 2!");
        Self(min_degree)
    }

    /// Returns `t`.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Fewest keys a non-root node may hold, `t - 1`.
    #[inline]
    #[must_use]
    pub const fn min_keys(self) -> usize {
        self.0 - 1
    }

    /// Most keys any node may hold, `2t - 1`.
    #[inline]
    #[must_use]
    pub const fn max_keys(self) -> usize {
        2 * self.0 - 1
    }

    /// Most children an internal node may hold, `2t`.
    #[inline]
    #[must_use]
    pub const fn max_children(self) -> usize {
        2 * self.0
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Degree {
    type Error = DegreeError;

    fn try_from(min_degree: usize) -> Result<Self, Self::Error> {
        if min_degree < Self::MIN.0 {
            return Err(DegreeError::TooSmall { min_degree });
        }
        Ok(Self(min_degree))
    }
}
