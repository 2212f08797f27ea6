use hashbrown::HashMap;

use crate::graph::Edge;

/// Reconstructs, for every vertex, the edge sequence leading from it back
/// to `start`, out of a distance tree produced by
/// [`shortest_path_tree`](crate::graph::Graph::shortest_path_tree).
///
/// Every non-start vertex reached by the traversal appears as the `from`
/// endpoint of exactly one tree edge, pointing at its predecessor; the
/// reconstruction is a walk along those edges. Tree edges carry cumulative
/// distances, so each emitted path edge gets the difference of the two
/// endpoint distances as its weight; the weights along `paths[id]` sum to
/// the shortest distance of `id`. `paths[start]` is empty, and so is the
/// path of any vertex the traversal never reached.
///
/// Returns `None` when `start >= num_vertices`. Tree edges naming ids
/// outside `[0, num_vertices)` are a caller error; walks are bounded by
/// `num_vertices` hops, so even a malformed tree cannot loop forever (the
/// affected path comes back empty).
pub fn shortest_paths(
    dist_tree: &[Edge],
    num_vertices: usize,
    start: usize,
) -> Option<Vec<Vec<Edge>>> {
    if start >= num_vertices {
        return None;
    }

    let mut up_edges: HashMap<usize, Edge> = HashMap::with_capacity(dist_tree.len());
    for edge in dist_tree {
        up_edges.insert(edge.from, *edge);
    }

    // A tree edge's weight is the cumulative distance of its `from` vertex.
    let distance_of = |id: usize| -> i64 {
        if id == start {
            0
        } else {
            up_edges.get(&id).map_or(0, |edge| edge.weight)
        }
    };

    let mut paths = Vec::with_capacity(num_vertices);
    for id in 0..num_vertices {
        let mut path = Vec::new();
        let mut current = id;
        let mut hops = 0;
        while current != start {
            let Some(edge) = up_edges.get(&current) else {
                // Unreached vertex (or a tree that never leads to start).
                path.clear();
                break;
            };
            let hop_weight = edge.weight - distance_of(edge.to);
            path.push(Edge::new(edge.from, edge.to, hop_weight));
            current = edge.to;

            hops += 1;
            if hops > num_vertices {
                path.clear();
                break;
            }
        }
        paths.push(path);
    }
    Some(paths)
}
