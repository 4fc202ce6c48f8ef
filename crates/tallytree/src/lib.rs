//! # tallytree
//!
//! Arena-backed binary search trees.
//!
//! ## Architecture
//! - **`OrderStatTree`**: BST augmented with per-node subtree sizes,
//!   giving O(h) rank and select alongside the usual operations
//! - **`BinarySearchTree`**: the plain variant, with delete and balanced
//!   construction from sorted input
//! - **Arena + index**: nodes live in a `Vec` and link to each other by
//!   [`NodeId`]; no pointers, no unsafe
//!
//! Neither tree rebalances. Height is O(n) in the worst case (for example
//! under strictly ascending insertion), and every operation costs time
//! proportional to the height actually reached.

#![warn(missing_docs)]

mod bst;
mod node;
mod ostree;

pub use bst::BinarySearchTree;
pub use node::NodeId;
pub use ostree::OrderStatTree;
