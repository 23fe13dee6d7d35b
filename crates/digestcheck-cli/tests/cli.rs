//! End-to-end tests of the `digestcheck` binary with config and state dirs in temp locations.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn digestcheck(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("digestcheck").unwrap();
    cmd.current_dir(home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    digestcheck(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_verify_empty_file_matches() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("empty.bin");
    fs::write(&file, b"").unwrap();

    digestcheck(dir.path())
        .args(["verify", "empty.bin", "--expected", EMPTY_SHA256])
        .assert()
        .success()
        .stdout(format!(
            "Computed digest: {0}.\nExpected digest: {0}.\nDigests match!\n",
            EMPTY_SHA256
        ));
}

#[test]
fn test_verify_mismatch_still_exits_zero() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), b"hello\n").unwrap();

    digestcheck(dir.path())
        .args(["verify", "hello.txt", "--expected", EMPTY_SHA256])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Digest mismatch!\n"));
}

#[test]
fn test_verify_strict_mismatch_exits_two() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.txt"), b"hello\n").unwrap();

    digestcheck(dir.path())
        .args(["verify", "hello.txt", "--strict", "--expected", EMPTY_SHA256])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Digest mismatch!"));
}

#[test]
fn test_verify_length_mismatch_warns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), b"").unwrap();

    digestcheck(dir.path())
        .args(["verify", "empty.bin", "--expected", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Digest lengths don't match, was the correct hash function used?",
        ))
        .stdout(predicate::str::contains("Digests match!").not());
}

#[test]
fn test_default_run_without_target_fails() {
    let dir = tempdir().unwrap();

    digestcheck(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("digestcheck error"))
        .stderr(predicate::str::contains("zooey-picture.jpg"));
    assert!(dir.path().join("config/digestcheck/config.toml").exists());
}

#[test]
fn test_default_run_uses_config_values() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), b"").unwrap();
    let cfg_dir = dir.path().join("config/digestcheck");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(
        cfg_dir.join("config.toml"),
        format!(
            "target_path = \"empty.bin\"\nexpected_digest = \"{}\"\n",
            EMPTY_SHA256
        ),
    )
    .unwrap();

    digestcheck(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Digests match!\n"));
}

#[test]
fn test_checksum_prints_digest_and_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), b"").unwrap();

    digestcheck(dir.path())
        .args(["checksum", "empty.bin"])
        .assert()
        .success()
        .stdout(format!("{}  empty.bin\n", EMPTY_SHA256));
}

#[test]
fn test_unusable_config_dir_does_not_block_verify_or_checksum() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), b"").unwrap();
    let not_a_dir = dir.path().join("config-is-a-file");
    fs::write(&not_a_dir, b"").unwrap();

    digestcheck(dir.path())
        .env("XDG_CONFIG_HOME", &not_a_dir)
        .args(["verify", "empty.bin", "--expected", EMPTY_SHA256])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Digests match!\n"));

    digestcheck(dir.path())
        .env("XDG_CONFIG_HOME", &not_a_dir)
        .args(["checksum", "empty.bin"])
        .assert()
        .success()
        .stdout(format!("{}  empty.bin\n", EMPTY_SHA256));
}

#[test]
fn test_invalid_config_exits_one_naming_the_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), b"").unwrap();
    let cfg_dir = dir.path().join("config/digestcheck");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), "strict = \"maybe\"\n").unwrap();

    digestcheck(dir.path())
        .args(["verify", "empty.bin", "--expected", EMPTY_SHA256])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("digestcheck error"))
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn test_verify_non_hex_expected_mismatches() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("empty.bin"), b"").unwrap();
    let expected = "g".repeat(64);

    digestcheck(dir.path())
        .args(["verify", "empty.bin", "--expected", expected.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Expected digest: {}.", expected)))
        .stdout(predicate::str::ends_with("Digest mismatch!\n"));
}
