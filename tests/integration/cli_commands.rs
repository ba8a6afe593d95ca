//! End-to-end runs of the `cli` binary over a CSV fixture.
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

const EDGES_CSV: &str = "src,dst,timestamp,amount\n\
                         1,2,100,5.0\n\
                         1,3,150,10.0\n\
                         1,2,200,20.0\n\
                         2,1,120,7.5\n\
                         3,1,180,2.5\n";

fn write_edges(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tmpdir");
    let path = dir.path().join(format!("{name}.csv"));
    fs::write(&path, EDGES_CSV).expect("fixture");
    (dir, path)
}

#[test]
fn query_emits_the_six_field_record() {
    let (_dir, edges) = write_edges("query");
    let output = cargo_bin_cmd!("cli")
        .arg("--edges")
        .arg(&edges)
        .args(["query", "--id", "1", "--start", "90", "--end", "210"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["sumEdge1Amount"], 35.0);
    assert_eq!(json["maxEdge1Amount"], 20.0);
    assert_eq!(json["numEdge1"], 3);
    assert_eq!(json["sumEdge2Amount"], 10.0);
    assert_eq!(json["maxEdge2Amount"], 7.5);
    assert_eq!(json["numEdge2"], 2);
}

#[test]
fn query_window_boundaries_are_exclusive() {
    let (_dir, edges) = write_edges("boundaries");
    let output = cargo_bin_cmd!("cli")
        .arg("--edges")
        .arg(&edges)
        .args(["query", "--id", "1", "--start", "100", "--end", "200"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["numEdge1"], 1);
    assert_eq!(json["sumEdge1Amount"], 10.0);
}

#[test]
fn request_accepts_a_raw_json_body() {
    let (_dir, edges) = write_edges("request");
    let output = cargo_bin_cmd!("cli")
        .arg("--edges")
        .arg(&edges)
        .args(["request", r#"{"id": 3, "startTime": 0, "endTime": 500}"#])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json["numEdge1"], 1);
    assert_eq!(json["sumEdge1Amount"], 2.5);
    assert_eq!(json["numEdge2"], 1);
    assert_eq!(json["sumEdge2Amount"], 10.0);
}

#[test]
fn malformed_request_reports_and_exits_nonzero() {
    let (_dir, edges) = write_edges("malformed");
    let output = cargo_bin_cmd!("cli")
        .arg("--edges")
        .arg(&edges)
        .args(["request", "{ not json"])
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).expect("valid json");
    let msg = json["msg"].as_str().expect("msg string");
    assert!(msg.starts_with("json parse error: "), "got: {msg}");
}

#[test]
fn unknown_account_fails_with_a_diagnostic() {
    let (_dir, edges) = write_edges("unknown");
    let output = cargo_bin_cmd!("cli")
        .arg("--edges")
        .arg(&edges)
        .args(["query", "--id", "404", "--start", "0", "--end", "10"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).expect("utf8");
    assert!(stderr.contains("not found"), "got: {stderr}");
}

#[test]
fn edges_path_can_come_from_the_environment() {
    let (_dir, edges) = write_edges("env");
    cargo_bin_cmd!("cli")
        .env("REMESA_EDGES", &edges)
        .args(["query", "--id", "2", "--start", "0", "--end", "500"])
        .assert()
        .success();
}

#[test]
fn missing_edge_file_is_an_error() {
    cargo_bin_cmd!("cli")
        .args(["--edges", "/no/such/file.csv"])
        .args(["query", "--id", "1", "--start", "0", "--end", "10"])
        .assert()
        .failure();
}
