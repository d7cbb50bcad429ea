//! Integration tests for all CLI commands
//!
//! Tests each command with real invocations against OBJ files written to a
//! temporary directory. `HOME` and the working directory point at the temp
//! directory so no user config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TRIANGLE: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
const QUAD: &str = "# quad\nv 0 0 0\nv 2 0 0\nv 2 2 0\nv 0 2 0\nf 1 2 3 4\n";

/// Helper to create a CLI command isolated inside `dir`
fn cli(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_meshseries"));
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn parse_json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).expect("stdout should be valid JSON")
}

// ============ HELP ============

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Load Wavefront OBJ meshes"));
}

#[test]
fn test_load_help() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["load", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--format"));
}

// ============ LOAD COMMAND ============

#[test]
fn test_load_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "triangle.obj", TRIANGLE);

    cli(&dir)
        .arg("load")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# triangle.obj\n"))
        .stdout(predicate::str::contains("**Total Vertices:** 3"))
        .stdout(predicate::str::contains("**Total Faces:** 1 (triangles)"));
}

#[test]
fn test_load_summary_custom_name() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "quad.obj", QUAD);

    cli(&dir)
        .arg("load")
        .arg(&path)
        .args(["--name", "Floor"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Floor\n"))
        .stdout(predicate::str::contains("(4-gons)"));
}

#[test]
fn test_load_single_json() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "triangle.obj", TRIANGLE);

    let output = cli(&dir)
        .arg("load")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = parse_json(&output.stdout);
    assert_eq!(value["kind"], "single");
    assert_eq!(value["faces"], serde_json::json!([[0, 1, 2]]));
    assert_eq!(value["values"], serde_json::json!([0.0, 0.0, 0.0]));
}

#[test]
fn test_load_list_as_series_json() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "t0.obj", TRIANGLE);
    let b = write_file(&dir, "t1.obj", QUAD);

    let output = cli(&dir)
        .arg("load")
        .arg(&a)
        .arg(&b)
        .args(["--format", "json", "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1, "compact JSON is a single line");

    let value = parse_json(&output.stdout);
    assert_eq!(value["kind"], "series");
    assert_eq!(value["faces"], serde_json::json!([[0, 1, 2], [3, 4, 5, 6]]));
    assert_eq!(value["steps"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["vertices"][3], serde_json::json!([1.0, 0.0, 0.0, 0.0]));
}

#[test]
fn test_load_directory_sorted() {
    let dir = TempDir::new().unwrap();
    let frames = dir.path().join("frames");
    fs::create_dir(&frames).unwrap();
    fs::write(frames.join("b.obj"), QUAD).unwrap();
    fs::write(frames.join("a.obj"), TRIANGLE).unwrap();
    fs::write(frames.join("notes.txt"), "skip me").unwrap();

    let output = cli(&dir)
        .arg("load")
        .arg(&frames)
        .args(["--sort", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = parse_json(&output.stdout);
    assert_eq!(value["kind"], "series");
    assert_eq!(value["steps"][0]["vertex_count"], 3);
    assert_eq!(value["steps"][1]["vertex_count"], 4);
}

#[test]
fn test_load_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "triangle.obj", TRIANGLE);
    let out = dir.path().join("summary.md");

    cli(&dir)
        .arg("load")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("## Geometry Statistics"));
}

#[test]
fn test_load_quiet_suppresses_status() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "triangle.obj", TRIANGLE);
    let out = dir.path().join("summary.md");

    cli(&dir)
        .arg("-q")
        .arg("load")
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ============ ERRORS ============

#[test]
fn test_load_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "bad.obj", "v 0 0 0\nv 1 zero 0\n");

    cli(&dir)
        .arg("load")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["load", "missing.obj"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.obj"));
}

#[test]
fn test_load_unsupported_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "model.stl", "solid x\n");

    cli(&dir)
        .arg("load")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported"));
}

#[test]
fn test_load_without_paths_fails() {
    let dir = TempDir::new().unwrap();
    cli(&dir).arg("load").assert().failure();
}

// ============ CONFIG ============

#[test]
fn test_project_config_sets_format() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, ".meshseries.toml", "[output]\nformat = \"json\"\n");
    let path = write_file(&dir, "triangle.obj", TRIANGLE);

    let output = cli(&dir).arg("load").arg(&path).output().unwrap();
    assert!(output.status.success());
    assert_eq!(parse_json(&output.stdout)["kind"], "single");
}

#[test]
fn test_cli_format_overrides_config() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, ".meshseries.toml", "[output]\nformat = \"json\"\n");
    let path = write_file(&dir, "triangle.obj", TRIANGLE);

    cli(&dir)
        .arg("load")
        .arg(&path)
        .args(["--format", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# triangle.obj"));
}

#[test]
fn test_config_command_prints_merged_config() {
    let dir = TempDir::new().unwrap();
    write_file(
        &dir,
        ".meshseries.toml",
        "[load]\nentry_order = \"lexicographic\"\n",
    );

    cli(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("entry_order = \"lexicographic\""));
}

#[test]
fn test_explicit_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "custom.toml", "[output]\nformat = 42\n");

    cli(&dir)
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom.toml"));
}
