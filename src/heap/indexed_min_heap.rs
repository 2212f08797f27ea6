use crate::heap::HeapNode;

/// Position-index sentinel for ids not currently in the heap.
const ABSENT: usize = usize::MAX;

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// An array-backed binary min-heap of `(priority, id)` pairs with an
/// id-to-slot index enabling O(log n) decrease-priority.
///
/// Ids are assumed to come from the dense range `[0, capacity)`; the
/// position index is a plain `Vec<usize>` over that range, with
/// `usize::MAX` marking absent ids.
///
/// # Invariants
/// - `heap[parent(p)].priority <= heap[p].priority` for every slot `p > 0`.
/// - For every present id, `positions[id]` is the unique slot holding that
///   id and `heap[positions[id]].id == id`.
///
/// Both invariants are restored before any mutating operation returns; no
/// caller can observe a heap array without a matching position index.
///
/// # Time Complexity
/// - `insert`, `extract_min`, `decrease_priority`: O(log n)
/// - `peek_min`, `priority_of`, `contains`: O(1)
pub struct IndexedMinHeap {
    heap: Vec<HeapNode>,
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap with room for ids in `[0, capacity)`.
    ///
    /// # Examples
    /// ```
    /// use spantree::heap::IndexedMinHeap;
    ///
    /// let mut pq = IndexedMinHeap::with_capacity(4);
    /// pq.insert(10, 2);
    /// pq.insert(3, 0);
    /// assert_eq!(pq.peek_min().unwrap().id, 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![ABSENT; capacity],
        }
    }

    /// Adds `id` with the given priority and sifts it up into place.
    ///
    /// # Panics
    /// Panics if `id >= capacity` or `id` is already present. (Presence of
    /// all distinct ids bounds the size by the capacity, so a full heap
    /// cannot be overrun without tripping one of these.)
    pub fn insert(&mut self, priority: i64, id: usize) {
        assert!(id < self.positions.len(), "id {id} out of range");
        assert!(!self.contains(id), "id {id} already in the heap");

        self.heap.push(HeapNode { priority, id });
        let slot = self.heap.len() - 1;
        self.positions[id] = slot;
        self.sift_up(slot);
    }

    /// Returns the minimum-priority node without removing it.
    pub fn peek_min(&self) -> Option<HeapNode> {
        self.heap.first().copied()
    }

    /// Removes and returns the minimum-priority node.
    ///
    /// The last array element moves into the root slot and sifts down.
    /// When both children of a slot carry equal priorities the left child
    /// is preferred, keeping extraction order deterministic.
    pub fn extract_min(&mut self) -> Option<HeapNode> {
        let min = *self.heap.first()?;
        self.positions[min.id] = ABSENT;

        let last = self.heap.pop().unwrap();
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.positions[last.id] = 0;
            self.sift_down(0);
        }
        Some(min)
    }

    /// Current priority of `id`, via the position index.
    ///
    /// # Panics
    /// Panics if `id` is not present.
    pub fn priority_of(&self, id: usize) -> i64 {
        let slot = self.positions[id];
        assert!(slot != ABSENT, "id {id} not in the heap");
        self.heap[slot].priority
    }

    /// Lowers the priority of `id` in place and sifts it up.
    ///
    /// Callers only invoke this with a strictly smaller priority (the
    /// relaxation loops skip the call otherwise); the precondition is
    /// debug-asserted, not enforced.
    ///
    /// # Panics
    /// Panics if `id` is not present.
    pub fn decrease_priority(&mut self, id: usize, new_priority: i64) {
        let slot = self.positions[id];
        assert!(slot != ABSENT, "id {id} not in the heap");
        debug_assert!(new_priority < self.heap[slot].priority);

        self.heap[slot].priority = new_priority;
        self.sift_up(slot);
    }

    pub fn contains(&self, id: usize) -> bool {
        self.positions.get(id).is_some_and(|&slot| slot != ABSENT)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Swaps two slots and repairs the position index for both ids.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].id] = a;
        self.positions[self.heap[b].id] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let up = parent(slot);
            if self.heap[up].priority <= self.heap[slot].priority {
                break;
            }
            self.swap_slots(up, slot);
            slot = up;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let mut smallest = slot;
            let left = left_child(slot);
            let right = right_child(slot);

            // Strict comparisons: on equal priorities the left child wins.
            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}
