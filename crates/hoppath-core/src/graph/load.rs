//! Reading adjacency mappings from graph files
//!
//! Every supported format holds a top-level mapping of node id to a list of
//! neighbour ids:
//!
//! ```text
//! {"A": ["B", "C"], "B": ["C"], "C": []}     # JSON
//! A = ["B", "C"]                             # TOML
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_unsupported;
use crate::error::{HoppathError, Result};
use crate::graph::types::AdjacencyGraph;

/// Graph file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    Json,
    Yaml,
    Toml,
}

impl GraphFormat {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match extension.to_lowercase().as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            "toml" => Ok(GraphFormat::Toml),
            _ => bail_unsupported!(
                "graph file extension",
                path.display(),
                "json, yaml, yml, toml"
            ),
        }
    }
}

impl FromStr for GraphFormat {
    type Err = HoppathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            "toml" => Ok(GraphFormat::Toml),
            other => bail_unsupported!("graph format", other, "json, yaml, toml"),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Json => write!(f, "json"),
            GraphFormat::Yaml => write!(f, "yaml"),
            GraphFormat::Toml => write!(f, "toml"),
        }
    }
}

/// Parse graph text in the given format
pub fn parse_graph(content: &str, format: GraphFormat) -> Result<AdjacencyGraph<String>> {
    let graph: AdjacencyGraph<String> = match format {
        GraphFormat::Json => serde_json::from_str(content)?,
        GraphFormat::Yaml => serde_yaml::from_str(content)?,
        GraphFormat::Toml => toml::from_str(content)?,
    };
    Ok(graph)
}

/// Load a graph file, inferring its format from the extension unless one is given
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path, format: Option<GraphFormat>) -> Result<AdjacencyGraph<String>> {
    let format = match format {
        Some(format) => format,
        None => GraphFormat::from_path(path)?,
    };

    let content = fs::read_to_string(path)
        .map_err(|e| HoppathError::io_operation("read graph file", path.display(), e))?;

    let graph = parse_graph(&content, format)?;
    debug!(
        %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}
