use tracing::{debug, trace};

use crate::{
    graph::{Edge, Graph},
    traversal::{MinimumSpanning, Records, RelaxationPolicy, ShortestDistance},
};

impl<P> Graph<P> {
    /// Runs Prim's algorithm from `start` and returns the minimum spanning
    /// tree as a list of edges, each pointing from a vertex to its
    /// predecessor and carrying the weight of that connecting edge.
    ///
    /// Returns `None` when `start` is not a valid vertex id. When the
    /// graph is not connected from `start`, unreachable vertices simply
    /// contribute no edge, so the tree is shorter than
    /// `num_vertices() - 1`.
    pub fn minimum_spanning_tree(&self, start: usize) -> Option<Vec<Edge>> {
        self.grow_tree::<MinimumSpanning>(start)
    }

    /// Runs Dijkstra's algorithm from `start` and returns the distance
    /// tree: each edge points from a vertex to its predecessor and carries
    /// the vertex's cumulative shortest distance from `start`.
    ///
    /// Returns `None` when `start` is not a valid vertex id. Assumes
    /// non-negative edge weights.
    pub fn shortest_path_tree(&self, start: usize) -> Option<Vec<Edge>> {
        self.grow_tree::<ShortestDistance>(start)
    }

    /// The shared traversal: drain the heap, and for each extracted vertex
    /// record its tree edge and relax its outgoing edges under `R`.
    fn grow_tree<R: RelaxationPolicy>(&self, start: usize) -> Option<Vec<Edge>> {
        if start >= self.num_vertices() {
            return None;
        }

        let mut records = Records::new(self, start);
        while let Some(node) = records.extract_min() {
            let u = node.id;
            records.mark_finished(u);

            if let Some(predecessor) = records.predecessor(u) {
                records.add_tree_edge(Edge::new(u, predecessor, node.priority));
            }

            for edge in self.adjacency(u) {
                let v = edge.to;
                if records.is_finished(v) {
                    continue;
                }
                let candidate = R::candidate_key(node.priority, edge.weight);
                // Strictly less: ties never reassign a predecessor.
                if candidate < records.priority_of(v) {
                    trace!(from = u, to = v, candidate, "relaxing");
                    records.decrease_priority(v, candidate);
                    records.set_predecessor(v, u);
                }
            }
        }

        let tree = records.into_tree();
        debug!(start, edges = tree.len(), "traversal finished");
        Some(tree)
    }
}
