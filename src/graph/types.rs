use std::fmt;

/// Whether edges are one-way or stored as mirrored pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphType {
    Directed,
    Undirected,
}

/// Graph vertex: a string id as its handle, plus bookkeeping fields the
/// search algorithms may use (`cost`, `visited`, `previous`).
#[derive(Clone, Debug)]
pub struct Vertex<T> {
    pub id: String,
    pub label: String,
    pub cost: f64,
    pub visited: bool,
    pub previous: Option<String>,
    pub data: T,
}

impl<T> Vertex<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            cost: 0.0,
            visited: false,
            previous: None,
            data,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Label: {}, Data: {}, Cost: {}, Visited: {}, Previous: [{}]",
            self.id,
            self.label,
            self.data,
            self.cost,
            self.visited,
            self.previous.as_deref().unwrap_or("")
        )
    }
}

/// Weighted edge between two vertex ids. Undirected graphs store each edge
/// twice, once per direction.
#[derive(Clone, Debug)]
pub struct Edge {
    pub label: String,
    pub from: String,
    pub to: String,
    pub cost: f64,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge: {}\n\tFrom: {}\n\tTo: {}\n\tCost: {}",
            self.label, self.from, self.to, self.cost
        )
    }
}
