//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_bender", "-", "slack"));
    let mut cmd = Command::new(bin);
    cmd.env_remove("BENDER_SLACK_MSG_LIMIT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run with the given args from an empty temp dir so dotenv() won't load a project .env.
fn run_in_tmp(args: &[&str], files: &[(&str, &str)]) -> Output {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    for (name, content) in files {
        std::fs::write(tmp.path().join(name), content).expect("write input");
    }
    bin()
        .args(args)
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = run_in_tmp(&["--help"], &[]);
    let stdout = stdout_of(&output);
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("split"));
    assert!(stdout.contains("BENDER_SLACK_MSG_LIMIT"));
}

#[test]
fn cli_version_succeeds() {
    let output = run_in_tmp(&["--version"], &[]);
    assert!(stdout_of(&output).contains("bender-slack"));
}

#[test]
fn convert_file() {
    let md = "## Task\n**Client:** helmcode\n[Link](https://example.com)";
    let output = run_in_tmp(&["convert", "reply.md"], &[("reply.md", md)]);
    assert_eq!(
        stdout_of(&output),
        "*Task*\n*Client:* helmcode\n<https://example.com|Link>\n"
    );
}

#[test]
fn convert_preserve_code_leaves_fences_alone() {
    let md = "# Run\n```\n# not a heading\n```\n";
    let output = run_in_tmp(&["convert", "--preserve-code", "r.md"], &[("r.md", md)]);
    assert_eq!(stdout_of(&output), "*Run*\n```\n# not a heading\n```\n");
}

#[test]
fn convert_reads_stdin() {
    let mut child = bin()
        .arg("convert")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .current_dir(tempfile::TempDir::new().expect("temp dir").path())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"above\n---\nbelow\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert_eq!(stdout_of(&output), "above\n\nbelow\n");
}

#[test]
fn split_plain_text_output() {
    let output = run_in_tmp(
        &["split", "--max-length", "6", "in.txt"],
        &[("in.txt", "abcde\n\n\nfghij")],
    );
    assert_eq!(stdout_of(&output), "abcde\n---8<---\nfghij\n");
}

#[test]
fn split_json_output() {
    let text = "a".repeat(30);
    let output = run_in_tmp(
        &["split", "-n", "10", "--json", "in.txt"],
        &[("in.txt", text.as_str())],
    );
    let report: serde_json::Value = serde_json::from_str(&stdout_of(&output)).expect("json");
    assert_eq!(report["count"], 3);
    assert_eq!(report["max_length"], 10);
    let chunks = report["chunks"].as_array().expect("chunks array");
    assert!(chunks.iter().all(|c| c == &serde_json::json!("a".repeat(10))));
}

#[test]
fn split_uses_env_limit() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(tmp.path().join("in.txt"), "a".repeat(12)).expect("write input");
    let output = bin()
        .args(["split", "--json", "in.txt"])
        .env("BENDER_SLACK_MSG_LIMIT", "5")
        .current_dir(tmp.path())
        .output()
        .expect("binary not found - run cargo build first");
    let report: serde_json::Value = serde_json::from_str(&stdout_of(&output)).expect("json");
    assert_eq!(report["max_length"], 5);
    assert_eq!(report["chunks"], serde_json::json!(["aaaaa", "aaaaa", "aa"]));
}

#[test]
fn invalid_env_limit_exits_with_error() {
    let output = bin()
        .args(["split", "-"])
        .env("BENDER_SLACK_MSG_LIMIT", "0")
        .current_dir(tempfile::TempDir::new().expect("temp dir").path())
        .stdin(Stdio::null())
        .output()
        .expect("binary not found - run cargo build first");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("BENDER_SLACK_MSG_LIMIT"),
        "expected config error message, got: {}",
        stderr
    );
}

#[test]
fn zero_max_length_is_rejected() {
    let output = run_in_tmp(&["split", "--max-length", "0", "in.txt"], &[("in.txt", "x")]);
    assert!(!output.status.success());
}

#[test]
fn missing_file_exits_with_error() {
    let output = run_in_tmp(&["convert", "nope.md"], &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nope.md"), "got: {}", stderr);
}

#[test]
fn send_ready_converts_then_splits() {
    let md = "# Deploy\n**Status:** done\nSee [logs](https://ci.example.com/1)";
    let output = run_in_tmp(&["send-ready", "-n", "40", "r.md"], &[("r.md", md)]);
    assert_eq!(
        stdout_of(&output),
        "*Deploy*\n*Status:* done\n---8<---\nSee <https://ci.example.com/1|logs>\n"
    );
}
