//! Pathrace Core Library
//!
//! Instrumented single-source shortest paths: a linear-scan Dijkstra and a
//! binary-heap Dijkstra that report comparable, step-by-step operation
//! counts on identical input.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod race;
