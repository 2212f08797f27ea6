use std::fmt;

use crate::graph::Edge;

/// A vertex with an optional opaque payload and its owned adjacency list.
///
/// # Invariants
/// - `id` equals the vertex's slot index in its owning [`Graph`], enforced
///   at construction and never re-checked by the algorithms.
/// - `adjacency` preserves insertion order; duplicate edges are permitted.
///
/// [`Graph`]: crate::graph::Graph
pub struct Vertex<P> {
    pub id: usize,
    pub payload: Option<P>,
    pub(crate) adjacency: Vec<Edge>,
}

impl<P> Vertex<P> {
    pub(crate) fn new(id: usize, payload: Option<P>) -> Self {
        Vertex {
            id,
            payload,
            adjacency: Vec::new(),
        }
    }

    /// Outgoing edges, in insertion order.
    pub fn adjacency(&self) -> &[Edge] {
        &self.adjacency
    }
}

impl<P> fmt::Display for Vertex<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.id)?;
        for edge in &self.adjacency {
            write!(f, "{edge} --> ")?;
        }
        write!(f, "NULL")
    }
}

impl<P: fmt::Debug> fmt::Debug for Vertex<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id)
            .field("payload", &self.payload)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}
