//! Integration tests for the dg CLI.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn run_dg(args: &[&str], dir: &Path) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_dg"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute dg");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let status = output.status.code().unwrap_or(1);

    (stdout, stderr, status)
}

fn write_edges(dir: &Path, name: &str, text: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    name.to_string()
}

#[test]
fn test_info_counts_and_edges() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "dag.txt", "0 1\n0 2\n1 2\n");

    let (stdout, _stderr, status) = run_dg(&["info", &file], dir);
    assert_eq!(status, 0);
    assert!(stdout.contains("Vertices: 3"));
    assert!(stdout.contains("Edges:    3"));
    assert!(stdout.contains("0 -> 1"));
    assert!(stdout.contains("1 -> 2"));
}

#[test]
fn test_info_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "dag.txt", "0 1\n");

    let (stdout, _stderr, status) = run_dg(&["info", &file, "--json"], dir);
    assert_eq!(status, 0);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["vertices"], 2);
    assert_eq!(report["edges"], 1);
    assert_eq!(report["edge_list"][0]["source"], 0);
    assert_eq!(report["edge_list"][0]["target"], 1);
}

#[test]
fn test_check_acyclic() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "dag.txt", "0 1\n1 2\n");

    let (stdout, _stderr, status) = run_dg(&["check", &file], dir);
    assert_eq!(status, 0);
    assert!(stdout.contains("No cycles"));
}

#[test]
fn test_check_cyclic_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "loop.txt", "0 1\n1 2\n2 0\n");

    let (stdout, _stderr, status) = run_dg(&["check", &file], dir);
    assert_eq!(status, 1);
    assert!(stdout.contains("Cycle detected"));
}

#[test]
fn test_check_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "loop.txt", "0 0\n");

    let (stdout, _stderr, status) = run_dg(&["check", &file, "--json"], dir);
    assert_eq!(status, 1);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["cyclic"], true);
}

#[test]
fn test_sort_emits_valid_order() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "dag.txt", "0 1\n0 2\n1 2\n");

    let (stdout, _stderr, status) = run_dg(&["sort", &file], dir);
    assert_eq!(status, 0);

    let order: Vec<usize> = stdout
        .lines()
        .map(|line| line.trim().parse().unwrap())
        .collect();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn test_sort_json() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "dag.txt", "0 1\n1 2\n");

    let (stdout, _stderr, status) = run_dg(&["sort", &file, "--json"], dir);
    assert_eq!(status, 0);

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["order"][0], 0);
    assert_eq!(report["order"][2], 2);
}

#[test]
fn test_sort_cyclic_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "loop.txt", "0 1\n1 0\n");

    let (stdout, stderr, status) = run_dg(&["sort", &file], dir);
    assert_eq!(status, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("cycle"));
}

#[test]
fn test_malformed_edge_list_names_the_line() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let file = write_edges(dir, "bad.txt", "0 1\nnot-a-vertex 2\n");

    let (_stdout, stderr, status) = run_dg(&["info", &file], dir);
    assert_eq!(status, 1);
    assert!(stderr.contains("line 2"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let (_stdout, stderr, status) = run_dg(&["info", "no-such-file.txt"], dir);
    assert_eq!(status, 1);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_reads_edge_list_from_stdin() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    let mut child = Command::new(env!("CARGO_BIN_EXE_dg"))
        .current_dir(dir)
        .args(["sort", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn dg");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"0 1\n1 2\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let order: Vec<usize> = stdout
        .lines()
        .map(|line| line.trim().parse().unwrap())
        .collect();
    assert_eq!(order, vec![0, 1, 2]);
}
