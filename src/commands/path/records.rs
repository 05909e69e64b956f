use hoppath_core::graph::PathResult;
use hoppath_core::records::record_value;

/// Build records lines: one header, then `N` per node and `E` per edge
pub fn path_records(result: &PathResult<String>) -> Vec<String> {
    let mut lines = vec![format!(
        "H hoppath=1 records=1 mode=path from={} to={} found={} length={}",
        record_value(&result.from),
        record_value(&result.to),
        result.found,
        result.path_length
    )];

    lines.extend(
        result
            .nodes
            .iter()
            .map(|node| format!("N {}", record_value(node))),
    );
    lines.extend(
        result
            .nodes
            .windows(2)
            .map(|pair| format!("E {} {}", record_value(&pair[0]), record_value(&pair[1]))),
    );

    lines
}

pub fn output_path_records(result: &PathResult<String>) {
    for line in path_records(result) {
        println!("{}", line);
    }
}
