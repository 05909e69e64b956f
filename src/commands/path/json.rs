use hoppath_core::error::Result;
use hoppath_core::graph::PathResult;

pub fn output_path_json(result: &PathResult<String>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}
