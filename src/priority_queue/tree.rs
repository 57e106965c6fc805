use crate::bst::BinaryTree;
use crate::types::default_comparator;

use super::{PriorityMode, PriorityQueue};

/// Priority queue backed by a [`BinaryTree`]: the leftmost or rightmost
/// value (per [`PriorityMode`]) is the most urgent. Dequeue looks the
/// extreme value up again to remove it, which is why `T: Clone` is
/// required there.
pub struct TreePriorityQueue<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    pub mode: PriorityMode,
    items: BinaryTree<T, C>,
}

impl<T: PartialOrd> TreePriorityQueue<T, fn(&T, &T) -> i32> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T: PartialOrd> Default for TreePriorityQueue<T, fn(&T, &T) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> TreePriorityQueue<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            mode: PriorityMode::Lowest,
            items: BinaryTree::with_comparator(comparator),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Values in ascending order regardless of mode.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T, C> PriorityQueue<T> for TreePriorityQueue<T, C>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn enqueue(&mut self, item: T) {
        self.items.add(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        let value = match self.mode {
            PriorityMode::Highest => self.items.rightmost(),
            PriorityMode::Lowest => self.items.leftmost(),
        }?
        .clone();
        self.items.remove(&value);
        Some(value)
    }

    fn peek(&self) -> Option<&T> {
        match self.mode {
            PriorityMode::Highest => self.items.rightmost(),
            PriorityMode::Lowest => self.items.leftmost(),
        }
    }
}
