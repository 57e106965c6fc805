//! Adjacency-list graph with breadth-first, depth-first and widest-path
//! searches.

pub mod search;
pub mod types;

pub use search::{breadth_first_search, depth_first_search, widest_path};
pub use types::{Edge, GraphType, Vertex};

use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex with id {0:?} already exists")]
    DuplicateVertex(String),
    #[error("no vertex with id {0:?}")]
    VertexNotFound(String),
}

/// Directed or undirected graph. Vertices live in an insertion-ordered
/// id-to-vertex map so iteration and the searches built on it are
/// deterministic; edges are a flat list scanned on demand.
pub struct Graph<T> {
    graph_type: GraphType,
    vertices: IndexMap<String, Vertex<T>>,
    edges: Vec<Edge>,
}

impl<T> Graph<T> {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            vertices: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex<T>> {
        self.vertices.get(id)
    }

    pub fn vertex_mut(&mut self, id: &str) -> Option<&mut Vertex<T>> {
        self.vertices.get_mut(id)
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn add_vertex(&mut self, vertex: Vertex<T>) -> Result<(), GraphError> {
        if self.vertices.contains_key(&vertex.id) {
            return Err(GraphError::DuplicateVertex(vertex.id.clone()));
        }
        self.vertices.insert(vertex.id.clone(), vertex);
        Ok(())
    }

    /// Removes a vertex together with every edge touching it.
    pub fn remove_vertex(&mut self, id: &str) -> Result<(), GraphError> {
        if self.vertices.shift_remove(id).is_none() {
            return Err(GraphError::VertexNotFound(id.to_string()));
        }
        self.edges.retain(|e| e.from != id && e.to != id);
        Ok(())
    }

    /// Adds an edge between existing vertices; an undirected graph stores
    /// the mirrored edge as well.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        label: &str,
        cost: f64,
    ) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.vertices.contains_key(id) {
                return Err(GraphError::VertexNotFound(id.to_string()));
            }
        }
        self.edges.push(Edge {
            label: label.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            cost,
        });
        if self.graph_type == GraphType::Undirected {
            self.edges.push(Edge {
                label: label.to_string(),
                from: to.to_string(),
                to: from.to_string(),
                cost,
            });
        }
        Ok(())
    }

    /// Cost of the first edge from `from` to `to`, if one exists.
    pub fn get_edge_cost(&self, from: &str, to: &str) -> Option<f64> {
        self.edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .map(|e| e.cost)
    }

    /// Ids adjacent to `id`, in edge-insertion order. On an undirected
    /// graph both stored directions of an edge match, so each neighbor
    /// appears once per match; callers that need a set must dedupe.
    pub fn neighbors(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        for edge in &self.edges {
            match self.graph_type {
                GraphType::Directed => {
                    if edge.from == id {
                        out.push(edge.to.clone());
                    }
                }
                GraphType::Undirected => {
                    if edge.from == id {
                        out.push(edge.to.clone());
                    }
                    if edge.to == id {
                        out.push(edge.from.clone());
                    }
                }
            }
        }
        out
    }
}
