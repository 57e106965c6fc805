//! Rebalancing engine: the post-insert fix-up walk and its four rotations.
//!
//! All functions operate on a `Vec`-backed arena and thread the root index
//! through explicitly; a rotation that promotes a node to the top returns
//! the new root. Direction and sibling decisions compare node *values*, not
//! indices; see `parent_direction` and `sibling_of`.

use crate::util::InOrder;

use super::types::{Color, Direction, RbNode};

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

#[inline]
fn l<T>(arena: &[RbNode<T>], i: u32) -> Option<u32> {
    arena[i as usize].l
}

#[inline]
fn r<T>(arena: &[RbNode<T>], i: u32) -> Option<u32> {
    arena[i as usize].r
}

#[inline]
fn p<T>(arena: &[RbNode<T>], i: u32) -> Option<u32> {
    arena[i as usize].p
}

#[inline]
fn set_l<T>(arena: &mut [RbNode<T>], i: u32, v: Option<u32>) {
    arena[i as usize].l = v;
}

#[inline]
fn set_r<T>(arena: &mut [RbNode<T>], i: u32, v: Option<u32>) {
    arena[i as usize].r = v;
}

#[inline]
fn set_p<T>(arena: &mut [RbNode<T>], i: u32, v: Option<u32>) {
    arena[i as usize].p = v;
}

#[inline]
fn color<T>(arena: &[RbNode<T>], i: u32) -> Color {
    arena[i as usize].color
}

#[inline]
fn set_color<T>(arena: &mut [RbNode<T>], i: u32, c: Color) {
    arena[i as usize].color = c;
}

/// Which side of `i` its parent lies on, decided by re-comparing values:
/// no parent, or data greater than the parent's, means the parent is to the
/// left. With duplicate keys the answer can disagree with the slot the node
/// actually occupies; that behavior is part of the tree's contract and is
/// deliberately not resolved through index identity.
pub(crate) fn parent_direction<T, C>(arena: &[RbNode<T>], i: u32, comparator: &C) -> Direction
where
    C: Fn(&T, &T) -> i32,
{
    match p(arena, i) {
        None => Direction::Left,
        Some(pi) => {
            if comparator(&arena[i as usize].data, &arena[pi as usize].data) > 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        }
    }
}

/// The parent's other child, located by value: when the parent's left child
/// compares equal to `i`'s data the sibling is the right child, otherwise
/// the left. Subject to the same duplicate-key caveat as
/// `parent_direction`.
pub(crate) fn sibling_of<T, C>(arena: &[RbNode<T>], i: u32, comparator: &C) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let pi = p(arena, i)?;
    if let Some(li) = l(arena, pi) {
        if comparator(&arena[li as usize].data, &arena[i as usize].data) == 0 {
            return r(arena, pi);
        }
    }
    l(arena, pi)
}

/// Fix-up walk after an insert, started at the new leaf's parent.
///
/// Each step either recolors (sibling red) and climbs two levels, or
/// rotates (sibling black or missing) and continues at the index the
/// rotation hands back. Returns the possibly-changed root. The walk stops
/// at black nodes, at the top of the tree, and at a grandparent whose value
/// compares equal to the root's.
pub(crate) fn check_node<T, C>(
    arena: &mut [RbNode<T>],
    mut root: Option<u32>,
    start: u32,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&T, &T) -> i32,
{
    let mut current = Some(start);
    while let Some(i) = current {
        if color(arena, i) != Color::Red {
            break;
        }

        let sibling = sibling_of(arena, i, comparator);
        let sibling_red = sibling.map(|s| color(arena, s) == Color::Red).unwrap_or(false);

        if sibling_red {
            let s = sibling.expect("red sibling exists");
            set_color(arena, s, Color::Black);
            set_color(arena, i, Color::Black);
            let pi = p(arena, i).expect("a node with a sibling has a parent");
            set_color(arena, pi, Color::Red);

            current = match (p(arena, pi), root) {
                (Some(g), Some(rt))
                    if comparator(&arena[g as usize].data, &arena[rt as usize].data) != 0 =>
                {
                    Some(g)
                }
                _ => None,
            };
            continue;
        }

        let red_left = l(arena, i)
            .map(|c| color(arena, c) == Color::Red)
            .unwrap_or(false);

        let (next, new_root) = if red_left {
            match parent_direction(arena, i, comparator) {
                Direction::Right => rotate_left_child_right_parent(arena, root, i, comparator),
                Direction::Left => rotate_left_child_left_parent(arena, root, i),
            }
        } else {
            match r(arena, i) {
                Some(ri) if color(arena, ri) == Color::Red => {
                    match parent_direction(arena, i, comparator) {
                        Direction::Right => rotate_right_child_right_parent(arena, root, i),
                        Direction::Left => {
                            rotate_right_child_left_parent(arena, root, i, comparator)
                        }
                    }
                }
                // Nothing red below: no violation to repair.
                _ => break,
            }
        };
        root = new_root;
        current = next;
    }
    root
}

/// After a promotion, push the promoted node's redness down onto whichever
/// child is still black.
fn fix_child_colors<T>(arena: &mut [RbNode<T>], i: u32) {
    if color(arena, i) != Color::Red {
        return;
    }
    if let Some(li) = l(arena, i) {
        if color(arena, li) == Color::Black {
            set_color(arena, li, Color::Red);
            set_color(arena, i, Color::Black);
            return;
        }
    }
    if let Some(ri) = r(arena, i) {
        if color(arena, ri) == Color::Black {
            set_color(arena, ri, Color::Red);
            set_color(arena, i, Color::Black);
        }
    }
}

/// `i` sits in its parent's left slot and carries a red right child: rotate
/// that child up into `i`'s place. No recoloring happens here; the walk
/// continues at the promoted child and finishes the repair there.
fn rotate_right_child_right_parent<T>(
    arena: &mut [RbNode<T>],
    root: Option<u32>,
    i: u32,
) -> (Option<u32>, Option<u32>) {
    let Some(pi) = p(arena, i) else {
        // Never rotate on the root.
        return (None, root);
    };
    let ri = r(arena, i).expect("rotation requires a right child");

    let tmp = l(arena, ri);
    set_p(arena, ri, Some(pi));
    set_l(arena, pi, Some(ri));
    set_p(arena, i, Some(ri));
    set_l(arena, ri, Some(i));
    set_r(arena, i, tmp);
    if let Some(t) = tmp {
        set_p(arena, t, Some(i));
    }

    (Some(ri), root)
}

/// Mirror of [`rotate_right_child_right_parent`]: `i` sits in its parent's
/// right slot and carries a red left child.
fn rotate_left_child_left_parent<T>(
    arena: &mut [RbNode<T>],
    root: Option<u32>,
    i: u32,
) -> (Option<u32>, Option<u32>) {
    let Some(pi) = p(arena, i) else {
        return (None, root);
    };
    let li = l(arena, i).expect("rotation requires a left child");

    let tmp = r(arena, li);
    set_p(arena, li, Some(pi));
    set_r(arena, pi, Some(li));
    set_p(arena, i, Some(li));
    set_r(arena, li, Some(i));
    set_l(arena, i, tmp);
    if let Some(t) = tmp {
        set_p(arena, t, Some(i));
    }

    (Some(li), root)
}

/// `i` sits in its parent's left slot with a red left child: promote `i`
/// over its parent. The orphaned right subtree of `i` moves into the
/// parent's left slot, the great-grandparent (when present) re-adopts `i`
/// on the side its value dictates, and the promotion is recolored so the
/// subtree keeps exactly one red-black alternation.
fn rotate_left_child_right_parent<T, C>(
    arena: &mut [RbNode<T>],
    mut root: Option<u32>,
    i: u32,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(pi) = p(arena, i) else {
        return (None, root);
    };

    let ri = r(arena, i);
    set_l(arena, pi, ri);
    if let Some(t) = ri {
        set_p(arena, t, Some(pi));
    }

    let gi = p(arena, pi);
    set_r(arena, i, Some(pi));
    set_p(arena, pi, Some(i));

    match gi {
        None => {
            root = Some(i);
            set_p(arena, i, None);
        }
        Some(g) => {
            set_p(arena, i, Some(g));
            if comparator(&arena[g as usize].data, &arena[i as usize].data) > 0 {
                set_l(arena, g, Some(i));
            } else {
                set_r(arena, g, Some(i));
            }
        }
    }

    fix_child_colors(arena, i);
    (p(arena, i), root)
}

/// Mirror of [`rotate_left_child_right_parent`]: `i` sits in its parent's
/// right slot with a red right child.
fn rotate_right_child_left_parent<T, C>(
    arena: &mut [RbNode<T>],
    mut root: Option<u32>,
    i: u32,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    C: Fn(&T, &T) -> i32,
{
    let Some(pi) = p(arena, i) else {
        return (None, root);
    };

    let li = l(arena, i);
    set_r(arena, pi, li);
    if let Some(t) = li {
        set_p(arena, t, Some(pi));
    }

    let gi = p(arena, pi);
    set_l(arena, i, Some(pi));
    set_p(arena, pi, Some(i));

    match gi {
        None => {
            root = Some(i);
            set_p(arena, i, None);
        }
        Some(g) => {
            set_p(arena, i, Some(g));
            if comparator(&arena[g as usize].data, &arena[i as usize].data) > 0 {
                set_l(arena, g, Some(i));
            } else {
                set_r(arena, g, Some(i));
            }
        }
    }

    fix_child_colors(arena, i);
    (p(arena, i), root)
}

/// Structural validator for tests and debugging: root is black and
/// parentless, parent links agree with child links, no red node has a red
/// child, black-height is uniform, and the in-order value sequence is
/// non-decreasing. Tombstones take part like any other node, since soft
/// deletion leaves the structure untouched.
pub fn assert_valid<T, C>(
    arena: &[RbNode<T>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&T, &T) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if arena[root as usize].p.is_some() {
        return Err("root has a parent".to_string());
    }
    if arena[root as usize].color != Color::Black {
        return Err("root is not black".to_string());
    }

    fn black_height<T>(arena: &[RbNode<T>], node: Option<u32>) -> Result<usize, String> {
        let Some(i) = node else {
            return Ok(0);
        };

        let l = arena[i as usize].l;
        let r = arena[i as usize].r;

        if let Some(li) = l {
            if arena[li as usize].p != Some(i) {
                return Err("broken parent link on left child".to_string());
            }
        }
        if let Some(ri) = r {
            if arena[ri as usize].p != Some(i) {
                return Err("broken parent link on right child".to_string());
            }
        }

        if arena[i as usize].color == Color::Red {
            if l.map(|c| arena[c as usize].color == Color::Red).unwrap_or(false) {
                return Err("red node has a red left child".to_string());
            }
            if r.map(|c| arena[c as usize].color == Color::Red).unwrap_or(false) {
                return Err("red node has a red right child".to_string());
            }
        }

        let lh = black_height(arena, l)?;
        let rh = black_height(arena, r)?;
        if lh != rh {
            return Err("black-height mismatch".to_string());
        }

        Ok(lh + usize::from(arena[i as usize].color == Color::Black))
    }

    black_height(arena, Some(root))?;

    let mut prev: Option<u32> = None;
    for i in InOrder::new(arena, Some(root)) {
        if let Some(pv) = prev {
            if comparator(&arena[pv as usize].data, &arena[i as usize].data) > 0 {
                return Err("in-order values out of order".to_string());
            }
        }
        prev = Some(i);
    }

    Ok(())
}
