//! Ordered in-memory collections built on index-arena trees.
//!
//! The centerpiece is [`RedBlackTree`], a self-balancing ordered container
//! with an unusual deletion strategy: nodes are tombstoned in place, and
//! the tree is rebuilt from its surviving values once tombstones reach
//! half of the live count. Around it sit the simpler structures that share
//! its plumbing.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`red_black`] | [`RedBlackTree`]: rotations, recoloring, soft delete + rebuild |
//! | [`bst`] | [`BinaryTree`]: plain BST with selectable traversal order |
//! | [`priority_queue`] | sorted-list and BST-backed priority queues |
//! | [`graph`] | adjacency-list [`Graph`] with BFS/DFS and widest path |
//! | [`sort`] | comparison sorts, from [`sort::heap()`] down to [`sort::bogo()`] |
//!
//! Tree nodes live in `Vec`-backed arenas; every link is an `Option<u32>`
//! index and parent links never own anything (see [`types::Node`]).
//! Ordering everywhere goes through a three-way comparator
//! (`Fn(&T, &T) -> i32`), defaulting to the natural `PartialOrd` order.

pub mod bst;
pub mod graph;
pub mod priority_queue;
pub mod red_black;
pub mod sort;
pub mod types;
pub mod util;

pub use bst::{BinaryTree, TraversalMode};
pub use graph::{Graph, GraphError, GraphType};
pub use priority_queue::{ListPriorityQueue, PriorityMode, PriorityQueue, TreePriorityQueue};
pub use red_black::{EmptyTreeError, RedBlackTree};
