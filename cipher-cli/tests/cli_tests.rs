#![allow(missing_docs)]
use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("cipher-cli").unwrap()
}

#[test]
fn test_caesar_encrypt_and_decrypt() {
    cli()
        .args(["encrypt", "caesar", "HELLO", "--key", "3"])
        .assert()
        .success()
        .stdout("KHOOR\n");

    cli()
        .args(["decrypt", "caesar", "KHOOR", "-k", "3"])
        .assert()
        .success()
        .stdout("HELLO\n");
}

#[test]
fn test_trace_prints_numbered_steps() {
    cli()
        .args(["encrypt", "rail-fence", "HELLO", "--key", "2", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("HLOEL\n"))
        .stdout(predicate::str::contains("  1. Using 2 rails on 5 letters"))
        .stdout(predicate::str::contains("Final result: HLOEL"));
}

#[test]
fn test_json_outcome() {
    let output = cli()
        .args(["encrypt", "hill", "HELP", "--key", "3 3 2 5", "--json"])
        .output()
        .expect("Failed to execute encrypt");
    assert!(output.status.success());

    let outcome: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(outcome["result"], "HIAT");
    assert!(outcome["trace"].as_array().is_some_and(|steps| !steps.is_empty()));
}

#[test]
fn test_json_failure() {
    let output = cli()
        .args(["encrypt", "one-time-pad", "HELLO", "--key", "ABCD", "--json"])
        .output()
        .expect("Failed to execute encrypt");
    assert!(!output.status.success());

    let failure: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(failure["errorKind"], "KeyLengthMismatch");
}

#[test]
fn test_errors_exit_non_zero() {
    cli()
        .args(["encrypt", "hill", "HELP", "--key", "6 24 1 13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NonInvertibleMatrix"));

    cli()
        .args(["encrypt", "caesar", "HELLO 1", "--key", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CharacterSetViolation"));
}

#[test]
fn test_input_file_roundtrip() {
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("plain.txt");
    let cipher_path = temp_dir.path().join("cipher.txt");
    fs::write(&input_path, "WE ARE DISCOVERED\n").unwrap();

    let output = cli()
        .args(["encrypt", "row-column", "--key", "ZEBRA", "--input"])
        .arg(&input_path)
        .output()
        .expect("Failed to execute encrypt");
    assert!(output.status.success());
    let ciphertext = String::from_utf8(output.stdout).unwrap();
    assert_eq!(ciphertext.trim(), "EODASREIERCEWDV");
    fs::write(&cipher_path, &ciphertext).unwrap();

    cli()
        .args(["decrypt", "row-column", "--key", "ZEBRA", "--input"])
        .arg(&cipher_path)
        .assert()
        .success()
        .stdout("WEAREDISCOVERED\n");
}

#[test]
fn test_missing_text_is_an_error() {
    cli()
        .args(["encrypt", "caesar", "--key", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provide the text"));
}

#[test]
fn test_keygen_monoalphabetic() {
    let output = cli()
        .args(["keygen", "monoalphabetic"])
        .output()
        .expect("Failed to execute keygen");
    assert!(output.status.success());

    let key = String::from_utf8(output.stdout).unwrap().trim().to_string();
    let mut letters: Vec<char> = key.chars().collect();
    letters.sort_unstable();
    assert_eq!(letters.iter().collect::<String>(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
}

#[test]
fn test_keygen_hill_key_validates() {
    let output = cli()
        .args(["keygen", "hill", "--size", "3"])
        .output()
        .expect("Failed to execute keygen");
    assert!(output.status.success());
    let key = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert_eq!(key.split_whitespace().count(), 9);

    cli()
        .args(["validate", "hill", "--size", "3", "--key", &key])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_keygen_one_time_pad_json() {
    let output = cli()
        .args(["keygen", "one-time-pad", "--text", "MEET ME", "--json"])
        .output()
        .expect("Failed to execute keygen");
    assert!(output.status.success());

    let generated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(generated["cipher"], "one-time-pad");
    assert_eq!(generated["key"].as_str().map(str::len), Some(6));
}

#[test]
fn test_keygen_unsupported_cipher() {
    cli()
        .args(["keygen", "caesar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn test_validate_reports_invalid_keys() {
    cli()
        .args(["validate", "one-time-pad", "--key", "ABCD", "--text", "HELLO"])
        .assert()
        .failure()
        .stdout("invalid\n");

    cli()
        .args(["validate", "playfair", "--key", "MONARCHY"])
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn test_list_shows_every_cipher() {
    cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rail-fence"))
        .stdout(predicate::str::contains("One-Time Pad"));
}
