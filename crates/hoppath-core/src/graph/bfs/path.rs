//! Path reconstruction from a BFS predecessor map

use std::collections::HashMap;
use std::hash::Hash;

/// Walk predecessors back from `to` and return the path in `from -> to` order
pub fn reconstruct_path<N>(from: &N, to: &N, predecessors: &HashMap<N, Option<N>>) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut nodes = vec![to.clone()];
    let mut current = to;

    while let Some(Some(pred)) = predecessors.get(current) {
        nodes.push(pred.clone());
        current = pred;
    }

    nodes.reverse();
    debug_assert!(nodes.first() == Some(from), "path must begin at its start node");
    nodes
}
