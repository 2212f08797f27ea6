use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed weighted edge between two vertex ids.
///
/// An undirected connection is stored as two mirrored `Edge`s, one in each
/// endpoint's adjacency list. Edges are immutable once created.
///
/// Weights may be any `i64`, but the traversal algorithms assume
/// non-negative weights for correctness.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the vertex this edge leaves from.
    pub from: usize,

    /// Id of the vertex this edge points to.
    pub to: usize,

    /// Edge weight.
    pub weight: i64,
}

impl Edge {
    pub fn new(from: usize, to: usize, weight: i64) -> Self {
        Edge { from, to, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -- {}, {})", self.from, self.to, self.weight)
    }
}
