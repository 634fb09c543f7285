use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use sha2::{Digest, Sha256};
use tempfile::tempdir;

fn run_goldframe(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goldframe"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("goldframe command should run")
}

#[test]
fn render_named_set_writes_files_and_confirmations() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_goldframe(
        dir.path(),
        &["render", "styles", "--out-dir", "out", "--builtin-font"],
    );
    assert!(output.status.success(), "render should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in &lines {
        assert!(line.starts_with("Wrote out"), "unexpected line: {line}");
        assert!(line.contains("(1400x900, sha256="), "unexpected line: {line}");
    }
    assert!(dir.path().join("out/macos_editor_style1_crack.png").is_file());
    assert!(dir.path().join("out/macos_editor_style5_lightning.png").is_file());
}

#[test]
fn bare_invocation_renders_the_whole_catalogue() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_goldframe(dir.path(), &[]);
    assert!(output.status.success(), "bare run should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let written = stdout.lines().filter(|line| line.starts_with("Wrote ")).count();
    assert_eq!(written, 42);
    assert!(dir.path().join("macos_editor_extended10_dandelion.png").is_file());
    assert!(dir.path().join("macos_editor_dark_gold.png").is_file());
    assert!(dir.path().join("macos_editor_v8_vivid.png").is_file());
}

#[test]
fn confirmations_stream_before_a_later_failure() {
    let dir = tempdir().expect("tempdir should create");
    fs::create_dir(dir.path().join("macos_editor_style2_geyao.png")).expect("blocker dir");
    let output = run_goldframe(dir.path(), &["render", "styles", "--builtin-font"]);
    assert!(!output.status.success(), "blocked write should fail");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "unexpected stdout: {stdout}");
    assert!(lines[0].starts_with("Wrote ./macos_editor_style1_crack.png"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("macos_editor_style2_geyao.png"), "stderr: {stderr}");
}

#[test]
fn confirmation_digest_matches_file_bytes() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_goldframe(dir.path(), &["render", "elegant", "--builtin-font"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let digest = stdout
        .trim()
        .rsplit("sha256=")
        .next()
        .and_then(|tail| tail.strip_suffix(')'))
        .expect("digest in confirmation");
    assert_eq!(digest.len(), 64);

    let bytes = fs::read(dir.path().join("macos_editor_v9_elegant.png")).expect("png exists");
    let expected: String = Sha256::digest(&bytes)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect();
    assert_eq!(digest, expected);
}

#[test]
fn repeated_renders_are_byte_identical() {
    let first = tempdir().expect("tempdir should create");
    let second = tempdir().expect("tempdir should create");
    for dir in [&first, &second] {
        let output = run_goldframe(dir.path(), &["render", "hybrid", "--builtin-font"]);
        assert!(output.status.success());
    }
    let name = "macos_editor_hybrid4_organic_gold.png";
    assert_eq!(
        fs::read(first.path().join(name)).unwrap(),
        fs::read(second.path().join(name)).unwrap()
    );
}

#[test]
fn list_json_describes_every_set() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_goldframe(dir.path(), &["list", "--json"]);
    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let palette = parsed["palette"].as_array().expect("array of colours");
    assert_eq!(palette.len(), 14);
    assert_eq!(palette[0]["name"], Value::String("bg_primary".to_owned()));
    let sets = parsed["sets"].as_array().expect("array of sets");
    assert_eq!(sets.len(), 13);
    assert_eq!(sets[12]["set"], Value::String("vivid".to_owned()));
    assert_eq!(sets[0]["set"], Value::String("elegant".to_owned()));
    assert_eq!(sets[6]["set"], Value::String("extended-fixed".to_owned()));
    assert_eq!(
        sets[6]["mockups"][0]["zones"]["policy"]["mode"],
        Value::String("thin".to_owned())
    );
    assert_eq!(sets[5]["mockups"].as_array().map(Vec::len), Some(10));
}

#[test]
fn unknown_set_emits_typed_error_envelope() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_goldframe(dir.path(), &["render", "styles", "vaporwave"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "nothing should be rendered");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let parsed: Value = serde_json::from_str(&stderr).expect("stderr should be envelope json");
    assert_eq!(parsed["ok"], Value::Bool(false));
    assert_eq!(
        parsed["error"]["code"],
        Value::String("UNKNOWN_MOCKUP_SET".to_owned())
    );
    assert_eq!(parsed["error"]["details"]["provided"], "vaporwave");
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn version_flag_reports_package_version() {
    let dir = tempdir().expect("tempdir should create");
    let output = run_goldframe(dir.path(), &["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
