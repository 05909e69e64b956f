use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Trait for providing read-only graph adjacency
///
/// A node is part of the graph only when it is a key of the adjacency
/// mapping. Neighbours that are not keys are still returned by `neighbors`
/// of the node that lists them, but have no neighbours of their own.
pub trait GraphProvider<N> {
    /// Whether `node` is a key of the adjacency mapping
    fn contains(&self, node: &N) -> bool;

    /// Neighbours of `node` in adjacency order, or an empty slice for unknown nodes
    fn neighbors(&self, node: &N) -> &[N];
}

impl<N, S> GraphProvider<N> for HashMap<N, Vec<N>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn contains(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<N: Ord> GraphProvider<N> for BTreeMap<N, Vec<N>> {
    fn contains(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}
