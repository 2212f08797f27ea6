//! Weighted adjacency-list graph store.
//!
//! The store is deliberately dumb: vertex ids are validated when edges and
//! vertices are added, and the traversal algorithms trust them afterwards.

mod adjacency;
mod edge;
mod vertex;

pub use adjacency::*;
pub use edge::*;
pub use vertex::*;
