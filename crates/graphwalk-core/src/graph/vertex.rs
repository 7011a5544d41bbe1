//! Labeled-vertex graphs.
//!
//! Vertices live in an arena owned by [`VertexGraph`] and refer to their
//! neighbors by [`VertexId`], so self-loops and longer cycles need no shared
//! ownership.

use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};

use super::adjacency::Adjacency;

/// Handle to a vertex inside a [`VertexGraph`].
///
/// Two handles are equal only when they denote the same vertex; labels play
/// no part in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Returns the arena slot of this vertex.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A vertex: a label and an ordered list of outgoing neighbors.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::VertexGraph;
///
/// let mut graph = VertexGraph::new();
/// let cat = graph.add_vertex("cat".to_string());
/// graph.add_edge(cat, cat).unwrap();
///
/// let vertex = &graph[cat];
/// assert_eq!(vertex.label(), "cat");
/// assert_eq!(vertex.neighbors(), &[cat]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    label: T,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Returns the vertex label.
    #[must_use]
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the outgoing neighbors in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Returns the out-degree of the vertex.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Arena of labeled vertices with directed, possibly cyclic edges.
///
/// Edges may repeat and may point back at their source. The graph is only
/// mutated through `&mut self`, so it cannot change under a running query.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }
}

impl<T> VertexGraph<T> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    /// Adds a vertex with no neighbors and returns its handle.
    pub fn add_vertex(&mut self, label: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            label,
            neighbors: Vec::new(),
        });
        id
    }

    /// Appends `to` to the neighbor list of `from`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either handle is not part of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if !self.contains(to) {
            tracing::warn!(from = %from, to = %to, "Edge target is not in the graph");
            return Err(Error::VertexNotFound(to.0));
        }
        let vertex = self.vertices.get_mut(from.0).ok_or_else(|| {
            tracing::warn!(from = %from, to = %to, "Edge source is not in the graph");
            Error::VertexNotFound(from.0)
        })?;
        vertex.neighbors.push(to);
        Ok(())
    }

    /// Returns true if the handle belongs to this graph.
    #[must_use]
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Gets a vertex by handle.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Gets a vertex label by handle.
    #[must_use]
    pub fn label(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::label)
    }

    /// Returns the neighbors of a vertex, or an empty slice for foreign handles.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map_or(&[], Vertex::neighbors)
    }

    /// Returns true if the vertex lists itself among its own neighbors.
    #[must_use]
    pub fn has_self_loop(&self, id: VertexId) -> bool {
        self.neighbors(id).contains(&id)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the total number of edges, counting repeats.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// Iterates over all vertex handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId)
    }
}

impl<T> Index<VertexId> for VertexGraph<T> {
    type Output = Vertex<T>;

    /// # Panics
    ///
    /// Panics if the handle was issued by a different graph.
    fn index(&self, id: VertexId) -> &Vertex<T> {
        &self.vertices[id.0]
    }
}

impl<T> Adjacency for VertexGraph<T> {
    type Node = VertexId;

    fn successors(&self, node: &VertexId) -> &[VertexId] {
        self.neighbors(*node)
    }

    fn contains_node(&self, node: &VertexId) -> bool {
        self.contains(*node)
    }
}
