/// The single point of variation between Prim's and Dijkstra's algorithms:
/// how a candidate key for a neighbor is computed during relaxation.
///
/// Everything else — heap seeding, extraction order, predecessor updates,
/// tree accumulation — is shared by the one engine loop.
pub trait RelaxationPolicy {
    /// Candidate key for reaching a neighbor over an edge of weight
    /// `edge_weight`, from a vertex extracted at `extracted_priority`.
    fn candidate_key(extracted_priority: i64, edge_weight: i64) -> i64;
}

/// Prim's rule: a vertex's key is the weight of the cheapest edge
/// connecting it to the tree built so far.
pub struct MinimumSpanning;

impl RelaxationPolicy for MinimumSpanning {
    fn candidate_key(_extracted_priority: i64, edge_weight: i64) -> i64 {
        edge_weight
    }
}

/// Dijkstra's rule: a vertex's key is the cumulative distance from the
/// start. Saturating: relaxing through an [`UNREACHED`] vertex cannot
/// overflow and cannot improve any key.
///
/// [`UNREACHED`]: crate::traversal::UNREACHED
pub struct ShortestDistance;

impl RelaxationPolicy for ShortestDistance {
    fn candidate_key(extracted_priority: i64, edge_weight: i64) -> i64 {
        extracted_priority.saturating_add(edge_weight)
    }
}

#[cfg(test)]
mod tests {
    use crate::traversal::UNREACHED;

    use super::*;

    #[test]
    fn prim_ignores_the_accumulated_distance() {
        assert_eq!(MinimumSpanning::candidate_key(100, 7), 7);
        assert_eq!(MinimumSpanning::candidate_key(0, 7), 7);
    }

    #[test]
    fn dijkstra_accumulates() {
        assert_eq!(ShortestDistance::candidate_key(100, 7), 107);
    }

    #[test]
    fn dijkstra_saturates_at_the_sentinel() {
        let candidate = ShortestDistance::candidate_key(UNREACHED, 1);
        assert_eq!(candidate, UNREACHED);
        // A saturated candidate never passes the strictly-less relax test.
        assert!(candidate >= UNREACHED);
    }
}
