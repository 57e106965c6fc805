//! Graph searches. DFS and BFS differ only in the container feeding the
//! visit loop (stack vs queue); both consume an unvisited set so each
//! vertex is scheduled at most once.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;

use super::Graph;

/// Depth-first search from `start`; returns vertex ids in visit order.
pub fn depth_first_search<T>(graph: &Graph<T>, start: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut unvisited: HashSet<String> = graph.vertex_ids().map(str::to_string).collect();
    let mut stack = Vec::new();

    unvisited.remove(start);
    stack.push(start.to_string());
    while let Some(top) = stack.pop() {
        for neighbor in graph.neighbors(&top) {
            if unvisited.remove(&neighbor) {
                stack.push(neighbor);
            }
        }
        result.push(top);
    }
    result
}

/// Breadth-first search from `start`; returns vertex ids in visit order.
pub fn breadth_first_search<T>(graph: &Graph<T>, start: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut unvisited: HashSet<String> = graph.vertex_ids().map(str::to_string).collect();
    let mut queue = VecDeque::new();

    unvisited.remove(start);
    queue.push_back(start.to_string());
    while let Some(head) = queue.pop_front() {
        result.push(head.clone());
        for neighbor in graph.neighbors(&head) {
            if unvisited.remove(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }
    result
}

/// Maximum-bottleneck ("widest") path widths from `from`, stopping early
/// once `to` is settled. Returns the width of the best path found to every
/// vertex: `INFINITY` for the source itself, `NEG_INFINITY` for vertices
/// not reached before the search stopped.
pub fn widest_path<T>(graph: &Graph<T>, from: &str, to: &str) -> IndexMap<String, f64> {
    let mut width: IndexMap<String, f64> = graph
        .vertex_ids()
        .map(|id| (id.to_string(), f64::NEG_INFINITY))
        .collect();

    match width.get_mut(from) {
        Some(w) => *w = f64::INFINITY,
        None => return width,
    }

    let mut q: Vec<String> = graph.vertex_ids().map(str::to_string).collect();
    while !q.is_empty() {
        // First candidate of maximum width.
        let mut best = 0;
        for j in 1..q.len() {
            if width[&q[j]] > width[&q[best]] {
                best = j;
            }
        }
        let u = q.remove(best);

        if width[&u] == f64::NEG_INFINITY || u == to {
            break;
        }

        for neighbor in graph.neighbors(&u) {
            let Some(cost) = graph.get_edge_cost(&u, &neighbor) else {
                continue;
            };
            let alt = width[&neighbor].max(width[&u].min(cost));
            if alt > width[&neighbor] {
                width[&neighbor] = alt;
            }
        }
    }

    width
}
