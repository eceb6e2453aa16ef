//! A self-balancing binary search tree over `i32` keys.
//!
//! The tree supports insertion, deletion and breadth-first or depth-first (pre-order, in-order
//! and post-order) traversals. Traversals can be handed to a `Reporter` for presentation.

pub mod avl_tree;
mod error;
pub mod reporter;

pub use crate::avl_tree::{AvlTree, AvlTreeIter, Node, Order};
pub use crate::error::{Error, Result};
