use std::fmt;

use crate::graph::{Edge, Vertex};

/// In-memory weighted graph backed by a fixed array of vertex slots.
///
/// # Invariants
/// - `vertices[i]`, when present, holds the vertex with `id == i`.
/// - Every stored `Edge` endpoint is a valid index into `vertices`.
/// - The slot array is never resized after construction; slots may stay
///   empty.
///
/// Construction validates ids with asserts; the traversal algorithms rely
/// on these invariants without re-checking them.
pub struct Graph<P = ()> {
    vertices: Vec<Option<Vertex<P>>>,
    num_edges: usize,
}

impl<P> Graph<P> {
    /// Creates a graph with `num_vertices` empty vertex slots.
    pub fn new(num_vertices: usize) -> Self {
        let mut vertices = Vec::with_capacity(num_vertices);
        vertices.resize_with(num_vertices, || None);
        Graph {
            vertices,
            num_edges: 0,
        }
    }

    /// Fills slot `id` with a fresh vertex carrying `payload`.
    ///
    /// # Panics
    /// Panics if `id` is out of range or the slot is already filled.
    pub fn add_vertex(&mut self, id: usize, payload: Option<P>) {
        assert!(id < self.vertices.len(), "vertex id {id} out of range");
        assert!(self.vertices[id].is_none(), "vertex {id} already present");
        self.vertices[id] = Some(Vertex::new(id, payload));
    }

    /// Appends the directed edge `(from -> to, weight)` to `from`'s
    /// adjacency list.
    ///
    /// # Panics
    /// Panics if either endpoint is out of range or `from`'s slot is empty.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) {
        assert!(to < self.vertices.len(), "vertex id {to} out of range");
        let vertex = self
            .vertices
            .get_mut(from)
            .and_then(Option::as_mut)
            .unwrap_or_else(|| panic!("no vertex in slot {from}"));
        vertex.adjacency.push(Edge::new(from, to, weight));
        self.num_edges += 1;
    }

    /// Stores an undirected connection as two mirrored directed edges.
    ///
    /// Counts as two in [`num_edges`](Self::num_edges).
    pub fn add_undirected_edge(&mut self, u: usize, v: usize, weight: i64) {
        self.add_edge(u, v, weight);
        self.add_edge(v, u, weight);
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored directed edges.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn vertex(&self, id: usize) -> Option<&Vertex<P>> {
        self.vertices.get(id).and_then(Option::as_ref)
    }

    /// Outgoing edges of `id`; empty for out-of-range ids and empty slots.
    pub fn adjacency(&self, id: usize) -> &[Edge] {
        self.vertex(id).map_or(&[], Vertex::adjacency)
    }
}

impl<P> fmt::Display for Graph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number of vertices: {}. Number of edges: {}.",
            self.vertices.len(),
            self.num_edges
        )?;
        writeln!(f)?;
        for slot in &self.vertices {
            match slot {
                Some(vertex) => writeln!(f, "{vertex}")?,
                None => writeln!(f, "NULL")?,
            }
        }
        Ok(())
    }
}
