use std::fmt::Display;

use super::super::types::{Color, RbNode};

/// Debug rendering of a subtree: red nodes marked `@@`, black nodes `..`,
/// children prefixed `|-L-` / `|-R-`.
pub fn print<T: Display>(
    arena: &[RbNode<T>],
    node: Option<u32>,
    prefix_node: &str,
    prefix_children: &str,
) -> String {
    let Some(i) = node else {
        return String::new();
    };
    let n = &arena[i as usize];
    let marker = if n.color == Color::Red { "@@" } else { ".." };
    let mut out = format!("{prefix_node}{marker} {}", n.data);

    let left = print(
        arena,
        n.l,
        &format!("{prefix_children}|-L-"),
        &format!("{prefix_children}|  "),
    );
    let right = print(
        arena,
        n.r,
        &format!("{prefix_children}|-R-"),
        &format!("{prefix_children}   "),
    );

    if !left.is_empty() {
        out.push('\n');
        out.push_str(&left);
    }
    if !right.is_empty() {
        out.push('\n');
        out.push_str(&right);
    }
    out
}
