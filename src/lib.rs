pub mod graph;
pub mod heap;
pub mod traversal;
