use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for pathrace with ambient log configuration cleared
pub fn pathrace() -> Command {
    let mut cmd = cargo_bin_cmd!("pathrace");
    cmd.env_remove("RUST_LOG")
        .env_remove("PATHRACE_LOG")
        .env_remove("PATHRACE_CONFIG");
    cmd
}

/// Four nodes where the three-hop route (cost 6) beats the direct edge (cost 10)
pub const DETOUR_GRAPH: &str = r#"{
  "nodes": [{"id": 0}, {"id": 1}, {"id": 2}, {"id": 3}],
  "edges": [
    {"id": "0-1", "from": 0, "to": 1, "label": "2"},
    {"id": "1-2", "from": 1, "to": 2, "label": "3"},
    {"id": "2-3", "from": 2, "to": 3, "label": "1"},
    {"id": "0-3", "from": 0, "to": 3, "label": "10"}
  ]
}"#;

/// Write `contents` as `name` inside a fresh temp dir
pub fn write_graph(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
