//! User configuration for hoppath (stored in ~/.config/hoppath/config.toml)
//!
//! ```toml
//! graph = "graph.json"            # used when --graph is not given;
//!                                 # relative to this file's directory
//! undirected = false              # treat every edge as bidirectional
//! graph_format = "json"           # skip extension-based detection
//! ```
//!
//! Command-line flags take precedence over every key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HoppathError, Result};
use crate::graph::GraphFormat;

const CONFIG_DIR: &str = "hoppath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "HOPPATH_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default graph file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Search the graph as undirected
    #[serde(default)]
    pub undirected: bool,

    /// Force a graph file format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_format: Option<GraphFormat>,
}

impl Config {
    /// Location of the config file, honouring `HOPPATH_CONFIG_DIR`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    HoppathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| HoppathError::io_operation("read config", path.display(), e))?;

        let mut config: Self = toml::from_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Anchor a relative `graph` path at the directory holding the config file
    fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(graph) = self.graph.as_mut() {
            if graph.is_relative() {
                *graph = base.join(&*graph);
            }
        }
    }
}
