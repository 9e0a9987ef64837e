//! Integration tests for the tokenwind CLI
//!
//! These tests run the binary against a temporary project laid out like a
//! real one: a config at the root, markup and Rust sources below it.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a tokenwind command
fn tokenwind() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("tokenwind"))
}

const CONFIG: &str = r#"
plugins = []

[content]
files = ["*.html", "./src/*.rs", "./src/**"]

[theme.extend.height]
128 = "36rem"

[theme.extend.width]
128 = "36rem"

[theme.extend.fontFamily]
h1 = ["MagicSchoolTwo"]
"#;

/// Helper to write a file, creating parent directories
fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}

fn setup_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "tokenwind.toml", CONFIG);
    write(temp.path(), "index.html", "<main class=\"h-128 w-128 font-h1\"></main>\n");
    write(temp.path(), "src/main.rs", "view! { <p class=\"mx-5 md:h-128\"/> }\n");
    temp
}

// =============================================================================
// scan
// =============================================================================

#[test]
fn test_scan_human() {
    let temp = setup_project();

    tokenwind()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned 2 file(s)"))
        .stdout(predicate::str::contains("h-128"))
        .stdout(predicate::str::contains("MagicSchoolTwo"));
}

#[test]
fn test_scan_json() {
    let temp = setup_project();

    let output = tokenwind()
        .args(["--json", "scan"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["files_scanned"], 2);

    let utilities = json["utilities"].as_array().unwrap();
    let h = utilities.iter().find(|u| u["candidate"] == "h-128").unwrap();
    assert_eq!(h["namespace"], "height");
    assert_eq!(h["value"], "36rem");

    let md = utilities.iter().find(|u| u["candidate"] == "md:h-128").unwrap();
    assert_eq!(md["variants"], serde_json::json!(["md"]));
}

#[test]
fn test_scan_with_explicit_config_and_root() {
    let temp = setup_project();
    let elsewhere = TempDir::new().unwrap();

    tokenwind()
        .arg("scan")
        .arg("--config")
        .arg(temp.path().join("tokenwind.toml"))
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned 2 file(s)"));

    tokenwind()
        .arg("scan")
        .arg("--config")
        .arg(temp.path().join("tokenwind.toml"))
        .arg("--root")
        .arg(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned 0 file(s)"));
}

#[test]
fn test_scan_reports_unreadable_file() {
    let temp = setup_project();
    fs::write(temp.path().join("broken.html"), [0xff, 0xfe, 0x80]).unwrap();

    tokenwind()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings:"))
        .stdout(predicate::str::contains("broken.html"));
}

#[test]
fn test_scan_without_config_fails() {
    let temp = TempDir::new().unwrap();

    tokenwind()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tokenwind.toml"));
}

#[test]
fn test_scan_malformed_theme_fails() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "tokenwind.toml", "[theme.extend]\nheight = \"36rem\"\n");

    tokenwind()
        .arg("scan")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shape"));
}

// =============================================================================
// resolve / namespaces
// =============================================================================

#[test]
fn test_resolve_found() {
    let temp = setup_project();

    tokenwind()
        .args(["resolve", "fontFamily", "h1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("MagicSchoolTwo\n");
}

#[test]
fn test_resolve_from_base() {
    let temp = setup_project();

    tokenwind()
        .args(["resolve", "spacing", "4"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("1rem\n");
}

#[test]
fn test_resolve_missing() {
    let temp = setup_project();

    tokenwind()
        .args(["resolve", "height", "999"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_namespaces_json() {
    let temp = setup_project();

    let output = tokenwind()
        .args(["--json", "namespaces"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json["namespaces"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|ns| ns["name"].as_str())
        .collect();
    assert!(names.contains(&"fontFamily"));
    assert!(names.contains(&"height"));
    assert!(names.contains(&"spacing"));
}

#[test]
fn test_version() {
    tokenwind()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokenwind v"));
}
