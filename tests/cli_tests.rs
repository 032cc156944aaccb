//! End-to-end tests for the `dua` binary
//!
//! Each test runs the compiled binary with an isolated config directory so
//! that a user's own `config.toml` cannot change the outcome.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_file(path: &Path, size: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, vec![0u8; size]).expect("Failed to write file");
}

/// A `dua` command whose config directory is `config_home`.
fn dua(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dua").expect("binary built");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn test_help_exits_zero_without_scanning() {
    let config = TempDir::new().unwrap();

    dua(config.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--threshold"));
}

#[test]
fn test_out_of_range_threshold_exits_one() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    dua(config.path())
        .args(["-t", "1.5"])
        .arg(target.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Threshold not in range"));
}

#[test]
fn test_malformed_threshold_exits_one() {
    let config = TempDir::new().unwrap();

    dua(config.path())
        .args(["-t", "lots", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn test_non_positive_count_exits_one() {
    let config = TempDir::new().unwrap();

    for value in ["0", "-4"] {
        dua(config.path())
            .args(["-n", value, "."])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("N must be greater than 0."));
    }
}

#[test]
fn test_wrong_argument_count_exits_one() {
    let config = TempDir::new().unwrap();

    dua(config.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    dua(config.path())
        .args(["one", "two"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_directory_is_fatal() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    dua(config.path())
        .arg(target.path().join("absent"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: cannot read directory"));
}

#[test]
fn test_line_output_format() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let a = target.path().join("a");
    create_file(&a.join("big"), 1000);
    create_file(&a.join("small"), 10);

    let expected = format!(
        "   1000  b [f] {}\n     10  b [f] {}\n",
        a.join("big").display(),
        a.join("small").display()
    );

    dua(config.path())
        .arg(&a)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_top_limits_output_lines() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    for i in 1..=6 {
        create_file(&target.path().join(format!("f{i}")), i * 100);
    }

    let output = dua(config.path())
        .args(["-n", "2"])
        .arg(target.path())
        .output()
        .expect("dua runs");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(&format!("[d] {}", target.path().display())));
    assert!(lines[1].ends_with(&format!("[f] {}", target.path().join("f6").display())));
}

#[test]
fn test_json_output_is_parseable() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    create_file(&target.path().join("x/one"), 500);
    create_file(&target.path().join("x/two"), 500);

    let output = dua(config.path())
        .args(["--json", "--all", "-t", "0.8"])
        .arg(target.path().join("x"))
        .output()
        .expect("dua runs");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");

    assert_eq!(json["total_size"], 1000);
    assert_eq!(json["limit"], 0);
    assert_eq!(json["candidates"], 3);
    assert_eq!(json["exploded_directories"], 0);
    assert_eq!(json["entries"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["entries"][0]["kind"], "directory");
    assert_eq!(json["entries"][0]["size"], 1000);
}

#[test]
fn test_config_file_sets_defaults() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    create_file(&config.path().join("dua/config.toml"), 0);
    fs::write(config.path().join("dua/config.toml"), "top = 1\n").unwrap();
    for i in 1..=3 {
        create_file(&target.path().join(format!("f{i}")), i * 10);
    }

    let output = dua(config.path())
        .arg(target.path())
        .output()
        .expect("dua runs");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 1);
}

#[test]
fn test_malformed_config_file_falls_back_to_defaults() {
    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    create_file(&config.path().join("dua/config.toml"), 0);
    fs::write(config.path().join("dua/config.toml"), "top = \"many\"\n").unwrap();
    create_file(&target.path().join("f"), 10);

    dua(config.path())
        .arg(target.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Failed to load config file:"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_metadata_exit_codes() {
    use std::os::unix::fs::PermissionsExt;

    let config = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let dir = target.path().join("noexec");
    let file = dir.join("f");
    create_file(&file, 5000);
    create_file(&target.path().join("visible"), 10);

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o444)).unwrap();
    // Privileged users can still stat the file.
    if fs::symlink_metadata(&file).is_ok() {
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let aborted = dua(config.path()).arg(target.path()).output().expect("dua runs");
    let kept_going = dua(config.path())
        .arg("--keep-going")
        .arg(target.path())
        .output()
        .expect("dua runs");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(aborted.status.code(), Some(1));
    assert!(aborted.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&aborted.stderr).starts_with("Error: cannot read metadata of")
    );

    assert_eq!(kept_going.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&kept_going.stderr).contains("cannot read metadata of"));
    let stdout = String::from_utf8_lossy(&kept_going.stdout);
    assert!(stdout.contains(&format!("      0  b [f] {}", file.display())));
}
