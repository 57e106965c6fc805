//! Priority queues: a sorted linear list and a binary-search-tree wrapper.

pub mod list;
pub mod tree;

pub use list::ListPriorityQueue;
pub use tree::TreePriorityQueue;

/// Common priority-queue surface. `dequeue` and `peek` return `None` on an
/// empty queue.
pub trait PriorityQueue<T> {
    fn is_empty(&self) -> bool;
    fn enqueue(&mut self, item: T);
    fn dequeue(&mut self) -> Option<T>;
    fn peek(&self) -> Option<&T>;
}

/// Whether the lowest or the highest value is the most urgent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriorityMode {
    #[default]
    Lowest,
    Highest,
}
