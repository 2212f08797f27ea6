use std::cmp::Ordering;

/// A heap entry pairing a vertex id with its current priority.
///
/// Nodes are ordered by `priority` alone; two nodes with equal priorities
/// but different ids compare as equal for heap purposes.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct HeapNode {
    pub priority: i64,
    pub id: usize,
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ignores_id() {
        let a = HeapNode { priority: 1, id: 9 };
        let b = HeapNode { priority: 1, id: 0 };
        let c = HeapNode { priority: 2, id: 0 };

        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(a < c);
        assert!(c > b);
    }
}
