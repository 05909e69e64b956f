use crate::cli::support::{hoppath_in, write_graph, CHAIN_JSON};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_check_counts() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["check", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nodes: 5"))
        .stdout(predicate::str::contains("Edges: 3"))
        .stdout(predicate::str::contains("Undirected: no"))
        .stdout(predicate::str::contains("Dangling references: none"));
}

#[test]
fn test_check_reports_dangling_references() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", r#"{"A": ["B", "Y", "X"], "B": ["X"]}"#);

    hoppath_in(dir.path())
        .args(["check", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dangling references: X, Y"));
}

#[test]
fn test_check_undirected_counts_reverse_edges() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", CHAIN_JSON);

    hoppath_in(dir.path())
        .args(["check", "--graph", "graph.json", "--undirected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edges: 6"))
        .stdout(predicate::str::contains("Undirected: yes"));
}

#[test]
fn test_check_json_output() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", r#"{"A": ["B", "X"], "B": []}"#);

    let output = hoppath_in(dir.path())
        .args(["--format", "json", "check", "--graph", "graph.json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 2);
    assert_eq!(json["edges"], 2);
    assert_eq!(json["undirected"], false);
    assert_eq!(json["dangling"], serde_json::json!(["X"]));
}

#[test]
fn test_check_records_output() {
    let dir = tempdir().unwrap();
    write_graph(dir.path(), "graph.json", r#"{"A": ["X"]}"#);

    hoppath_in(dir.path())
        .args(["--format", "records", "check", "--graph", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H hoppath=1 records=1 mode=check nodes=1 edges=1 undirected=false dangling=1",
        ))
        .stdout(predicate::str::contains("D X\n"));
}
