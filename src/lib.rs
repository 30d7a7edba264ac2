//! A minimum-degree B-tree over integer keys.
//!
//! This crate provides [`BTree`], an ordered set of `i64` keys laid out as a classic
//! (CLRS-style) B-tree whose minimum degree `t` is chosen at construction time:
//!
//! - [`insert`](BTree::insert) - splits full nodes on the way down, never backtracks
//! - [`remove`](BTree::remove) - rotates or merges thin nodes on the way down
//! - [`contains`](BTree::contains) - a single root-to-leaf descent
//! - [`iter`](BTree::iter) - a lazy in-order walk driven by an explicit frame stack
//!
//! # Example
//!
//! ```
//! use mindeg_btree::BTree;
//!
//! let mut tree = BTree::new(2);
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//!
//! assert!(tree.contains(&7));
//! assert_eq!(tree.height(), 2);
//!
//! tree.remove(&6);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [5, 7, 10, 12, 17, 20, 30]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Arena-backed nodes** - Children are slot handles into a per-tree arena, so
//!   splits and merges never hand out aliased or dangling links
//! - **Logging** - Structural events (root growth and shrink, splits, merges,
//!   rotations) are reported through the [`log`] facade at `debug`/`trace` level
//!
//! # Implementation
//!
//! Every node other than the root holds between `t - 1` and `2t - 1` keys and all
//! leaves sit at the same depth. Height grows only when a full root is split and
//! shrinks only when a one-key root is merged with its two children.

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
#[cfg(test)]
extern crate std;

mod degree;
mod error;
mod raw;

pub mod btree;
pub mod iter;

pub use btree::BTree;
pub use degree::Degree;
pub use error::DegreeError;
pub use iter::Iter;
