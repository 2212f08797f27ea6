//! Array-backed binary min-heap with an auxiliary position index.
//!
//! The position index is what buys O(log n) decrease-key: a vertex id maps
//! to its current slot in the heap array, so the entry to re-prioritize is
//! found in O(1) before sifting.

mod heap_node;
mod indexed_min_heap;

pub use heap_node::*;
pub use indexed_min_heap::*;
