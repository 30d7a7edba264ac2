use thiserror::Error;

/// Errors produced while configuring a [`BTree`](crate::BTree).
///
/// Lookups and updates never fail: an absent key is reported through the
/// `bool` results of [`insert`](crate::BTree::insert),
/// [`remove`](crate::BTree::remove) and [`contains`](crate::BTree::contains).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DegreeError {
    /// The requested minimum degree is below 2.
    #[error("minimum degree must be at least 2, got {min_degree}")]
    TooSmall {
        /// The rejected value.
        min_degree: usize,
    },
}
