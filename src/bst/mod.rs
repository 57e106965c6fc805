//! Plain (unbalanced) binary search tree with selectable traversal order.

pub mod tree;
pub mod types;

pub use tree::{BinaryTree, BstIter, TraversalMode};
pub use types::BstNode;
