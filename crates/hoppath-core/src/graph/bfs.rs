mod path;

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::graph::types::PathResult;
use crate::graph::GraphProvider;

/// Breadth-first search from `from` until `to` is discovered
///
/// Returns whether `to` was reached, together with the predecessor map. The
/// map's key set doubles as the discovered set; `from` maps to `None`.
fn bfs_search<N, G>(graph: &G, from: &N, to: &N) -> (bool, HashMap<N, Option<N>>)
where
    N: Eq + Hash + Clone,
    G: GraphProvider<N> + ?Sized,
{
    let mut predecessors: HashMap<N, Option<N>> = HashMap::new();
    let mut queue: VecDeque<N> = VecDeque::new();

    predecessors.insert(from.clone(), None);
    queue.push_back(from.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if predecessors.contains_key(neighbor) {
                continue;
            }

            predecessors.insert(neighbor.clone(), Some(current.clone()));

            // Stop at first discovery; BFS order makes it a shortest path
            if neighbor == to {
                return (true, predecessors);
            }

            queue.push_back(neighbor.clone());
        }
    }

    (false, predecessors)
}

/// Find the path with the fewest edges from `start` to `target`
///
/// Returns `None` when either endpoint is not a key of `graph` (even if they
/// are equal) or when `target` is unreachable. A node compared with itself
/// yields the single-element path. Ties between equally short paths are
/// broken by adjacency order.
#[tracing::instrument(skip_all, fields(start = ?start, target = ?target))]
pub fn find_shortest_path<N, G>(graph: &G, start: &N, target: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphProvider<N> + ?Sized,
{
    if !graph.contains(start) || !graph.contains(target) {
        debug!("endpoint not in graph");
        return None;
    }

    if start == target {
        return Some(vec![start.clone()]);
    }

    let (found, predecessors) = bfs_search(graph, start, target);
    if !found {
        debug!(discovered = predecessors.len(), "target unreachable");
        return None;
    }

    let nodes = path::reconstruct_path(start, target, &predecessors);
    debug!(
        discovered = predecessors.len(),
        hops = nodes.len() - 1,
        "path found"
    );
    Some(nodes)
}

/// Run `find_shortest_path` and package the outcome for output
pub fn find_path_result<N, G>(graph: &G, start: &N, target: &N) -> PathResult<N>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphProvider<N> + ?Sized,
{
    let nodes = find_shortest_path(graph, start, target);
    PathResult::new(start.clone(), target.clone(), nodes)
}

/// Number of edges on the shortest path, `Some(0)` for a node to itself
pub fn hop_distance<N, G>(graph: &G, start: &N, target: &N) -> Option<usize>
where
    N: Eq + Hash + Clone + Debug,
    G: GraphProvider<N> + ?Sized,
{
    find_shortest_path(graph, start, target).map(|nodes| nodes.len() - 1)
}
