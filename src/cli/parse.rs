use hoppath_core::format::OutputFormat;
use hoppath_core::graph::GraphFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph file format from string
pub fn parse_graph_format(s: &str) -> std::result::Result<GraphFormat, String> {
    s.parse::<GraphFormat>().map_err(|e| e.to_string())
}
