//! Red-black tree with soft deletion and threshold-triggered rebuilds.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::{Iter, RedBlackTree};
pub use types::{Color, Direction, EmptyTreeError, RbNode};
pub use util::{assert_valid, print};
