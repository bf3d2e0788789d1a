// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `optresolve` binary as a black box using std::process::Command.
// Covers output formats, exit codes, response files and library selection.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `optresolve` binary produced by Cargo.
fn optresolve_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_optresolve") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("optresolve");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(optresolve_bin())
        .args(args)
        .env_remove("OPTRESOLVE_LIB_FILES")
        .env_remove("OPTRESOLVE_LOG")
        .output()
        .expect("failed to run optresolve")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

// ── 1. Output formats ────────────────────────────────────────────────────────

#[test]
fn test_cli_text_output() {
    let o = run(&["--", "--library", "es5,es6.symbol.wellknown", "0.ts"]);
    assert_eq!(o.status.code(), Some(0));
    assert_eq!(
        stdout(&o),
        "option library: [lib.es5.d.ts, lib.es6.symbol.wellknown.d.ts]\nfile 0.ts\n"
    );
}

#[test]
fn test_cli_json_output() {
    let o = run(&["--json", "--", "--library", "es5", "0.ts", "--library", "es6.array"]);
    assert_eq!(o.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&o.stdout).unwrap();
    assert_eq!(v["options"]["library"], serde_json::json!(["lib.es5.d.ts", "lib.es6.array.d.ts"]));
    assert_eq!(v["fileNames"], serde_json::json!(["0.ts"]));
}

// ── 2. Exit codes ────────────────────────────────────────────────────────────

#[test]
fn test_cli_diagnostics_exit_1() {
    let o = run(&["--", "--library", "es5,es7", "0.ts"]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stdout(&o).starts_with("error TS6046: Argument for '--library' option must be: "));
}

#[test]
fn test_cli_missing_response_file_exit_2() {
    let dir = TempDir::new().unwrap();
    let at = format!("@{}", dir.path().join("missing.rsp").display());
    let o = run(&[at.as_str()]);
    assert_eq!(o.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&o.stderr).contains("cannot read response file"));
}

#[test]
fn test_cli_bad_driver_flag_exit_2() {
    let o = run(&["--no-such-flag"]);
    assert_eq!(o.status.code(), Some(2));
    assert!(stdout(&o).is_empty());
}

#[test]
fn test_cli_misspelled_json_flag_exit_2() {
    let o = run(&["--jsonn", "--", "--library", "es5"]);
    assert_eq!(o.status.code(), Some(2));
    assert!(stdout(&o).is_empty());
}

#[test]
fn test_cli_option_after_first_file_passes_through() {
    let o = run(&["a.ts", "--noEmit"]);
    assert_eq!(o.status.code(), Some(0));
    assert_eq!(stdout(&o), "option noEmit: true\nfile a.ts\n");
}

// ── 3. Help / version of the resolved command line ───────────────────────────

#[test]
fn test_cli_compiler_help() {
    let o = run(&["--", "--help"]);
    assert_eq!(o.status.code(), Some(0));
    let text = stdout(&o);
    assert!(text.contains("Options:"));
    assert!(text.contains("--library"));
}

#[test]
fn test_cli_compiler_version_short_name() {
    let o = run(&["--", "-v"]);
    assert_eq!(o.status.code(), Some(0));
    assert!(stdout(&o).starts_with("optresolve Version "));
}

// ── 4. Response files and library selection ──────────────────────────────────

#[test]
fn test_cli_response_file() {
    let dir = TempDir::new().unwrap();
    let rsp = dir.path().join("args.rsp");
    fs::write(&rsp, "--target es5\n--library es5,\nes7\n").unwrap();
    let at = format!("@{}", rsp.display());
    let o = run(&["--json", at.as_str(), "0.ts"]);
    assert_eq!(o.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&o.stdout).unwrap();
    assert_eq!(v["options"]["target"], "ES5");
    assert_eq!(v["fileNames"], serde_json::json!(["es7", "0.ts"]));
}

#[test]
fn test_cli_lib_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("lib.es7.d.ts"), b"").unwrap();
    let o = run(&["--lib-dir", dir.path().to_str().unwrap(), "--", "--library", "es7"]);
    assert_eq!(o.status.code(), Some(0));
    assert_eq!(stdout(&o), "option library: [lib.es7.d.ts]\n");
}

#[test]
fn test_cli_lib_files_env() {
    let o = Command::new(optresolve_bin())
        .args(["--", "--library", "es5"])
        .env("OPTRESOLVE_LIB_FILES", "lib.custom.d.ts")
        .output()
        .unwrap();
    assert_eq!(o.status.code(), Some(1));
    assert!(stdout(&o).contains("must be: custom"));
}
