use std::collections::VecDeque;
use std::fmt;
use std::mem;

use crate::types::default_comparator;
use crate::util::{first, last, InOrder};

use super::types::{Color, EmptyTreeError, RbNode};
use super::util;

/// Self-balancing ordered container with lazy deletion.
///
/// Inserts rebalance through classic red-black rotations and recoloring.
/// Deletion never restructures: the matched node is tombstoned, and once
/// tombstones reach half of the live count the whole tree is rebuilt from
/// its surviving values. Lookup filters tombstones; in-order iteration does
/// not (callers that want live values only must filter against
/// [`contains`](RedBlackTree::contains)).
///
/// Duplicate values are allowed and descend to the right. The rebalancing
/// logic resolves directions and siblings by comparing values, so
/// duplicate-heavy workloads inherit the quirks described on
/// `parent_direction` in the module's rebalancing engine.
pub struct RedBlackTree<T, C = fn(&T, &T) -> i32>
where
    C: Fn(&T, &T) -> i32,
{
    arena: Vec<RbNode<T>>,
    root: Option<u32>,
    node_count: usize,
    deleted_node_count: usize,
    comparator: C,
}

impl<T: PartialOrd> RedBlackTree<T, fn(&T, &T) -> i32> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }
}

impl<T: PartialOrd> Default for RedBlackTree<T, fn(&T, &T) -> i32> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            node_count: 0,
            deleted_node_count: 0,
            comparator,
        }
    }

    #[inline]
    fn compare(&self, a: &T, b: &T) -> i32 {
        (self.comparator)(a, b)
    }

    /// Count of live values. Tombstones are excluded the moment they are
    /// deleted, even though they remain in the tree until the next rebuild.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Tombstones accumulated since the last rebuild.
    pub fn deleted_node_count(&self) -> usize {
        self.deleted_node_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value`, keeping the red-black invariants. Equal values are
    /// not collapsed; they descend to the right and occupy their own nodes.
    pub fn insert(&mut self, value: T) {
        let Some(root) = self.root else {
            let mut node = RbNode::new(value);
            node.color = Color::Black;
            self.arena.push(node);
            self.root = Some((self.arena.len() - 1) as u32);
            self.node_count += 1;
            return;
        };

        let mut curr = root;
        loop {
            let cmp = self.compare(&value, &self.arena[curr as usize].data);
            let next = if cmp < 0 {
                self.arena[curr as usize].l
            } else {
                self.arena[curr as usize].r
            };
            match next {
                Some(n) => curr = n,
                None => {
                    self.arena.push(RbNode::new(value));
                    let idx = (self.arena.len() - 1) as u32;
                    if cmp < 0 {
                        self.arena[curr as usize].l = Some(idx);
                    } else {
                        self.arena[curr as usize].r = Some(idx);
                    }
                    self.arena[idx as usize].p = Some(curr);
                    self.node_count += 1;

                    self.root = util::check_node(&mut self.arena, self.root, curr, &self.comparator);
                    let rt = self.root.expect("non-empty tree has a root");
                    self.arena[rt as usize].color = Color::Black;
                    return;
                }
            }
        }
    }

    /// Whether a live node with this value exists. Tombstones steer the
    /// descent like any other node but never count as a match.
    pub fn contains(&self, value: &T) -> bool {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = self.compare(value, &self.arena[i as usize].data);
            if cmp < 0 {
                curr = self.arena[i as usize].l;
            } else if cmp > 0 {
                curr = self.arena[i as usize].r;
            } else {
                return !self.arena[i as usize].deleted;
            }
        }
        false
    }

    /// Deletes the first node matching `value`. Absent values and an empty
    /// tree are silent no-ops, as is a match that is already tombstoned, so
    /// deleting the same value twice cannot skew the counters.
    pub fn delete(&mut self, value: &T) {
        let mut curr = self.root;
        while let Some(i) = curr {
            let cmp = self.compare(value, &self.arena[i as usize].data);
            if cmp < 0 {
                curr = self.arena[i as usize].l;
            } else if cmp > 0 {
                curr = self.arena[i as usize].r;
            } else {
                if !self.arena[i as usize].deleted {
                    self.soft_delete(i);
                }
                return;
            }
        }
    }

    fn soft_delete(&mut self, i: u32) {
        self.arena[i as usize].deleted = true;
        self.deleted_node_count += 1;
        self.node_count -= 1;

        // Post-decrement count in the trigger: the threshold fires slightly
        // earlier than a naive half-of-previous-size check.
        if self.deleted_node_count >= self.node_count / 2 {
            self.rebuild();
        }
    }

    /// Discards every tombstone by rebuilding from scratch: walk the whole
    /// tree breadth-first, keep the surviving values in visitation order,
    /// and re-insert them into a fresh arena.
    fn rebuild(&mut self) {
        let root = self.root.take();
        let old = mem::take(&mut self.arena);
        let mut slots: Vec<Option<RbNode<T>>> = old.into_iter().map(Some).collect();

        let mut queue = VecDeque::new();
        if let Some(r) = root {
            queue.push_back(r);
        }

        let mut survivors = Vec::new();
        while let Some(i) = queue.pop_front() {
            let node = slots[i as usize]
                .take()
                .expect("rebuild visits each node exactly once");
            if let Some(l) = node.l {
                queue.push_back(l);
            }
            if let Some(r) = node.r {
                queue.push_back(r);
            }
            if !node.deleted {
                survivors.push(node.data);
            }
        }

        self.node_count = 0;
        self.deleted_node_count = 0;
        for value in survivors {
            self.insert(value);
        }
    }

    /// Smallest value in the tree. May be a tombstone: extreme lookups do
    /// not filter deleted nodes.
    pub fn leftmost(&self) -> Result<&T, EmptyTreeError> {
        let i = first(&self.arena, self.root).ok_or(EmptyTreeError)?;
        Ok(&self.arena[i as usize].data)
    }

    /// Largest value in the tree. Same tombstone caveat as
    /// [`leftmost`](RedBlackTree::leftmost).
    pub fn rightmost(&self) -> Result<&T, EmptyTreeError> {
        let i = last(&self.arena, self.root).ok_or(EmptyTreeError)?;
        Ok(&self.arena[i as usize].data)
    }

    /// Nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        fn depth<T>(arena: &[RbNode<T>], node: Option<u32>) -> usize {
            match node {
                None => 0,
                Some(i) => {
                    1 + depth(arena, arena[i as usize].l).max(depth(arena, arena[i as usize].r))
                }
            }
        }
        depth(&self.arena, self.root)
    }

    /// Lazy in-order iteration over every stored value, tombstones
    /// included. Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            inner: InOrder::new(&self.arena, self.root),
        }
    }

    /// Structural validator for tests and debugging.
    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_valid(&self.arena, self.root, &self.comparator)
    }
}

/// In-order value iterator, see [`RedBlackTree::iter`].
pub struct Iter<'a, T> {
    arena: &'a [RbNode<T>],
    inner: InOrder<'a, RbNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|i| &self.arena[i as usize].data)
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> i32,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> fmt::Display for RedBlackTree<T, C>
where
    T: fmt::Display,
    C: Fn(&T, &T) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", util::print(&self.arena, self.root, "", ""))
    }
}
