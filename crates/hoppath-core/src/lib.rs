//! Hoppath Core Library
//!
//! Graph model and breadth-first shortest-path search for the hoppath CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
