//! Graph model and shortest-path engines
//!
//! - `model`: graph input and validation
//! - `adjacency`: per-run adjacency list
//! - `queue`: binary min-heap with comparison accounting
//! - `algos`: linear-scan and heap-based Dijkstra
//! - `types`: distances, steps and results

pub mod adjacency;
pub mod algos;
pub mod model;
pub mod queue;
pub mod types;

pub use adjacency::{AdjacencyList, Neighbor};
pub use algos::{
    run_heap_based, run_heap_based_with, run_linear_scan, run_linear_scan_with, Strategy,
};
pub use model::{Edge, EdgeRecord, Graph, GraphRecord, Node, NodeRecord};
pub use queue::{MinPriorityQueue, QueueEntry};
pub use types::{Distance, EdgeMode, RunOptions, RunResult, Step, TargetResult, TreeResult};
