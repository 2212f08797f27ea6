use tracing::debug;

use crate::{
    graph::{Edge, Graph},
    heap::{HeapNode, IndexedMinHeap},
    traversal::FinishedSet,
};

/// Seed priority for every vertex except the start: the largest finite
/// priority, standing in for "not reached yet". Relaxation saturates
/// instead of overflowing, so a candidate computed through an unreached
/// vertex can never beat a real one.
pub const UNREACHED: i64 = i64::MAX;

/// Per-run bookkeeping shared by Prim's and Dijkstra's algorithms.
///
/// Created at the start of one algorithm invocation and dropped at its
/// end; only the accumulated tree survives, handed to the caller by
/// [`into_tree`](Records::into_tree).
pub(crate) struct Records {
    heap: IndexedMinHeap,
    finished: FinishedSet,
    predecessors: Vec<Option<usize>>,
    tree: Vec<Edge>,
}

impl Records {
    /// Builds the records for a run from `start`: the heap holds every
    /// vertex id, `start` at priority 0 and the rest at [`UNREACHED`].
    ///
    /// Precondition: `start < graph.num_vertices()`, checked by the engine.
    pub(crate) fn new<P>(graph: &Graph<P>, start: usize) -> Self {
        let num_vertices = graph.num_vertices();
        debug!(num_vertices, start, "seeding traversal records");

        let mut heap = IndexedMinHeap::with_capacity(num_vertices);
        for id in 0..num_vertices {
            let priority = if id == start { 0 } else { UNREACHED };
            heap.insert(priority, id);
        }

        Records {
            heap,
            finished: FinishedSet::new(num_vertices),
            predecessors: vec![None; num_vertices],
            tree: Vec::with_capacity(num_vertices.saturating_sub(1)),
        }
    }

    pub(crate) fn extract_min(&mut self) -> Option<HeapNode> {
        self.heap.extract_min()
    }

    pub(crate) fn priority_of(&self, id: usize) -> i64 {
        self.heap.priority_of(id)
    }

    pub(crate) fn decrease_priority(&mut self, id: usize, new_priority: i64) {
        self.heap.decrease_priority(id, new_priority)
    }

    pub(crate) fn is_finished(&self, id: usize) -> bool {
        self.finished.get(id)
    }

    pub(crate) fn mark_finished(&mut self, id: usize) {
        self.finished.set(id)
    }

    pub(crate) fn predecessor(&self, id: usize) -> Option<usize> {
        self.predecessors[id]
    }

    pub(crate) fn set_predecessor(&mut self, id: usize, predecessor: usize) {
        self.predecessors[id] = Some(predecessor)
    }

    /// Appends one tree edge. At most `num_vertices - 1` ever get added,
    /// one per extracted vertex with a recorded predecessor.
    pub(crate) fn add_tree_edge(&mut self, edge: Edge) {
        self.tree.push(edge)
    }

    /// Consumes the records, releasing everything but the tree.
    pub(crate) fn into_tree(self) -> Vec<Edge> {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertex_graph() -> Graph {
        let mut g = Graph::new(2);
        g.add_vertex(0, None);
        g.add_vertex(1, None);
        g.add_undirected_edge(0, 1, 3);
        g
    }

    #[test]
    fn seeds_start_at_zero_and_rest_at_unreached() {
        let g = two_vertex_graph();
        let records = Records::new(&g, 1);
        assert_eq!(records.priority_of(1), 0);
        assert_eq!(records.priority_of(0), UNREACHED);
    }

    #[test]
    fn fresh_records_have_no_history() {
        let g = two_vertex_graph();
        let records = Records::new(&g, 0);
        assert!(!records.is_finished(0));
        assert!(!records.is_finished(1));
        assert_eq!(records.predecessor(0), None);
        assert_eq!(records.predecessor(1), None);
        assert!(records.into_tree().is_empty());
    }

    #[test]
    fn start_vertex_drains_first() {
        let g = two_vertex_graph();
        let mut records = Records::new(&g, 0);
        let first = records.extract_min().unwrap();
        assert_eq!(first.id, 0);
        assert_eq!(first.priority, 0);
    }
}
