use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::traversal::GraphProvider;

/// Owned adjacency mapping from node id to its ordered neighbours
///
/// Serializes as a plain mapping, e.g. `{"A": ["B", "C"], "B": []}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct AdjacencyGraph<N> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash> PartialEq for AdjacencyGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<N: Eq + Hash> Eq for AdjacencyGraph<N> {}

impl<N: Eq + Hash + Clone> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from directed edges. Both endpoints of every edge become keys.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Add `node` as a key with no neighbours. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Append `to` to the adjacency of `from`, adding both as keys
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().push(to);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of listed edges, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

impl<N: Eq + Hash + Clone + Ord> AdjacencyGraph<N> {
    /// Neighbour ids that are not keys of the mapping, sorted and deduplicated
    pub fn dangling_references(&self) -> Vec<N> {
        self.adjacency
            .values()
            .flatten()
            .filter(|neighbor| !self.adjacency.contains_key(*neighbor))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Copy of this graph where every listed edge `u -> v` is also listed as `v -> u`
    ///
    /// Existing adjacency order is kept; reverse edges are appended in sorted
    /// order of their source and never duplicated.
    pub fn to_undirected(&self) -> Self {
        let mut adjacency = self.adjacency.clone();

        let mut keys: Vec<&N> = self.adjacency.keys().collect();
        keys.sort();

        for from in keys {
            for to in &self.adjacency[from] {
                let reverse = adjacency.entry(to.clone()).or_default();
                if !reverse.contains(from) {
                    reverse.push(from.clone());
                }
            }
        }

        Self { adjacency }
    }
}

impl<N: Eq + Hash> GraphProvider<N> for AdjacencyGraph<N> {
    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl<N> From<HashMap<N, Vec<N>>> for AdjacencyGraph<N> {
    fn from(adjacency: HashMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for AdjacencyGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

/// Outcome of a shortest-path search, in a form suitable for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<N> {
    pub from: N,
    pub to: N,
    pub found: bool,
    pub nodes: Vec<N>,
    /// Number of edges on the path; 0 when nothing was found
    pub path_length: usize,
}

impl<N> PathResult<N> {
    pub fn new(from: N, to: N, path: Option<Vec<N>>) -> Self {
        match path {
            Some(nodes) => Self {
                from,
                to,
                found: true,
                path_length: nodes.len().saturating_sub(1),
                nodes,
            },
            None => Self {
                from,
                to,
                found: false,
                nodes: Vec::new(),
                path_length: 0,
            },
        }
    }
}
