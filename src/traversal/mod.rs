//! The shared "extract minimum, relax neighbors" traversal driving both
//! Prim's and Dijkstra's algorithms, plus shortest-path reconstruction.

mod engine;
mod finished_set;
mod paths;
mod records;
mod relaxation;

pub use finished_set::*;
pub use paths::*;
pub use records::UNREACHED;
pub use relaxation::*;

pub(crate) use records::Records;
