//! Graph model and path-finding operations
//!
//! - `bfs`: unweighted shortest-path search
//! - `load`: reading adjacency mappings from JSON, YAML or TOML files
//! - `traversal`: the read-only adjacency trait searches run against
//! - `types`: owned graph and serializable search results

pub mod bfs;
pub mod load;
pub mod traversal;
pub mod types;

pub use bfs::{find_path_result, find_shortest_path, hop_distance};
pub use load::{load_graph, parse_graph, GraphFormat};
pub use traversal::GraphProvider;
pub use types::{AdjacencyGraph, PathResult};
