//! Integration tests for the `tuned-hmac` binary.

use std::fs;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

const GET_HEADER: &str =
    "Tuned-HMAC AK:UbhBmA05Xs3R1iaas9iAoD1ghIHfPka7lsZe03lSVow=:abc:1700000000";

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env_remove("TUNED_HMAC_ACCESS_KEY")
        .env_remove("TUNED_HMAC_SECRET_KEY")
        .env_remove("TUNED_HMAC_SCHEME")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_should_sign_get_request_from_flags() {
    let output = cmd()
        .args([
            "sign",
            "--access-key",
            "AK",
            "--secret-key",
            "c2VjcmV0",
            "--url",
            "http://example.com",
            "--nonce",
            "abc",
            "--timestamp",
            "1700000000",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), GET_HEADER);
}

#[test]
fn test_should_read_keys_from_environment() {
    let output = cmd()
        .env("TUNED_HMAC_ACCESS_KEY", "AK")
        .env("TUNED_HMAC_SECRET_KEY", "c2VjcmV0")
        .args([
            "sign",
            "--url",
            "http://example.com",
            "--nonce",
            "abc",
            "--timestamp",
            "1700000000",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), GET_HEADER);
}

#[test]
fn test_should_sign_post_body_from_file() {
    let dir = TempDir::new().unwrap();
    let body_path = dir.path().join("body.json");
    fs::write(&body_path, "{\"a\":1}\n").unwrap();

    let output = cmd()
        .args([
            "sign",
            "--access-key",
            "AK",
            "--secret-key",
            "c2VjcmV0",
            "-X",
            "POST",
            "--url",
            "http://example.com",
            "--nonce",
            "abc",
            "--timestamp",
            "1700000000",
            "--body-file",
            body_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Tuned-HMAC AK:6VEC0999Fp4F+ERBWTv26jHZgZprd/nFzmolJqlTwZs=:abc:1700000000"
    );
}

#[test]
fn test_should_print_empty_output_for_incomplete_request() {
    let output = cmd()
        .args(["sign", "--access-key", "AK", "--url", "http://a"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "");
}

#[test]
fn test_should_exit_with_error_on_invalid_secret_key() {
    let output = cmd()
        .args([
            "sign",
            "--access-key",
            "AK",
            "--secret-key",
            "not base64!",
            "--url",
            "http://a",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid Base64"));
}

#[test]
fn test_should_minify_stdin() {
    let output = cmd()
        .arg("minify")
        .write_stdin("{\n  \"b\": [1, 2],\n  \"a\": \"x y\"\n}\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "{\"b\":[1,2],\"a\":\"x y\"}"
    );
}

#[test]
fn test_should_fail_to_minify_invalid_json() {
    let output = cmd().arg("minify").write_stdin("{oops").output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid JSON"));
}

#[test]
fn test_should_print_nonce_and_timestamp() {
    let nonce = cmd().arg("nonce").output().unwrap();
    assert!(nonce.status.success());
    assert_eq!(String::from_utf8_lossy(&nonce.stdout).trim_end().len(), 36);

    let timestamp = cmd().arg("timestamp").output().unwrap();
    assert!(timestamp.status.success());
    let text = String::from_utf8_lossy(&timestamp.stdout);
    assert!(text.trim_end().parse::<u64>().is_ok());
}
