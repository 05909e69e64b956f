use crate::cli::support::{hoppath_in, write_graph, CHAIN_JSON};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_multi_hop() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["path", "A", "C", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("Path length: 2 hops"));
}

#[test]
fn test_path_direct() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["path", "A", "D", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> D"))
        .stdout(predicate::str::contains("Path length: 1 hop\n"));
}

#[test]
fn test_path_to_self() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["path", "E", "E", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("E\n"))
        .stdout(predicate::str::contains("Path length: 0 hops"));
}

#[test]
fn test_path_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["path", "C", "A", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from C to A"));
}

#[test]
fn test_path_unknown_node_is_not_an_error() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["path", "A", "Z", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to Z"));
}

#[test]
fn test_path_quiet_omits_length() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["--quiet", "path", "A", "C", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"))
        .stdout(predicate::str::contains("Path length").not());
}

#[test]
fn test_path_json_output() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    let output = hoppath_in(dir.path())
        .args(["--format", "json", "path", "A", "C", "--graph", "graph.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["from"], "A");
    assert_eq!(json["to"], "C");
    assert_eq!(json["found"], true);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["path_length"], 2);
}

#[test]
fn test_path_json_output_not_found() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    let output = hoppath_in(dir.path())
        .args(["--format", "json", "path", "A", "E", "--graph", "graph.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["nodes"], serde_json::json!([]));
    assert_eq!(json["path_length"], 0);
}

#[test]
fn test_path_records_output() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["--format", "records", "path", "A", "C", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H hoppath=1 records=1 mode=path from=A to=C found=true length=2",
        ))
        .stdout(predicate::str::contains("N B\n"))
        .stdout(predicate::str::contains("E B C\n"));
}

#[test]
fn test_path_undirected_flag() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["path", "C", "A", "--graph", "graph.json", "--undirected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C -> B -> A"));
}

#[test]
fn test_path_yaml_graph() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.yaml", "A: [B]\nB: [C]\nC: []\n");

    hoppath_in(dir.path())
        .args(["path", "A", "C", "--graph", "graph.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"));
}

#[test]
fn test_path_toml_graph() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "graph.toml",
        "A = [\"B\"]\nB = [\"C\"]\nC = []\n",
    );

    hoppath_in(dir.path())
        .args(["path", "A", "C", "--graph", "graph.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"));
}

#[test]
fn test_path_forced_graph_format() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.txt", CHAIN_JSON);

    hoppath_in(dir.path())
        .args([
            "path",
            "A",
            "C",
            "--graph",
            "graph.txt",
            "--graph-format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"));
}

#[test]
fn test_path_unsupported_extension_is_usage_error() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.csv", "A,B\n");

    hoppath_in(dir.path())
        .args(["path", "A", "B", "--graph", "graph.csv"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension"));
}

#[test]
fn test_path_missing_graph_file() {
    let dir = tempdir().unwrap();

    hoppath_in(dir.path())
        .args(["path", "A", "B", "--graph", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}

#[test]
fn test_path_malformed_graph_is_data_error() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", r#"{"A": "B"}"#);

    hoppath_in(dir.path())
        .args(["path", "A", "B", "--graph", "graph.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_path_malformed_graph_json_envelope() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", "{");

    hoppath_in(dir.path())
        .args(["--format", "json", "path", "A", "B", "--graph", "graph.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(r#""code":3"#))
        .stderr(predicate::str::contains(r#""type":"json_error""#));
}

#[test]
fn test_path_without_graph_is_usage_error() {
    let dir = tempdir().unwrap();

    hoppath_in(dir.path())
        .args(["path", "A", "B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn test_path_missing_arguments() {
    let dir = tempdir().unwrap();

    hoppath_in(dir.path())
        .args(["path", "A"])
        .assert()
        .code(2);
}
