//! Integration tests for the convert and config commands.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{load_fixture, temp_fixture, write_file};

/// Build a puml2lib command isolated from the user's config
fn puml2lib(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("puml2lib").expect("binary exists");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();

    puml2lib(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("macro-library dialect"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions").not());
}

#[test]
fn convert_single_file() {
    let (temp, input) = temp_fixture("checkout.puml");

    puml2lib(temp.path())
        .arg("convert")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Processed: checkout.puml -> checkout_byLib.puml",
        ))
        .stdout(predicate::str::contains("Done: 1 converted, 0 skipped, 0 failed"));

    assert_eq!(
        fs::read_to_string(temp.path().join("checkout_byLib.puml")).unwrap(),
        load_fixture("checkout_byLib.expected")
    );
}

#[test]
fn convert_prompts_for_path_when_missing() {
    let (temp, input) = temp_fixture("checkout.puml");

    puml2lib(temp.path())
        .arg("convert")
        .write_stdin(format!("{}\n", input.display()))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter path: "));

    assert!(temp.path().join("checkout_byLib.puml").exists());
}

#[test]
fn empty_directory_fails_with_no_files() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty");
    fs::create_dir(&empty).unwrap();

    puml2lib(temp.path())
        .arg("convert")
        .arg(&empty)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files to process"));
}

#[test]
fn failing_file_does_not_stop_the_batch() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("diagrams");
    write_file(&dir, "a.puml", "box A\n");
    write_file(&dir, "b.puml", "end\n");

    puml2lib(temp.path())
        .arg("convert")
        .arg(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed: a.puml"))
        .stdout(predicate::str::contains("Processed: b.puml"))
        .stderr(predicate::str::contains("1 of 2 file(s) failed"));

    assert!(!dir.join("a_byLib.puml").exists());
    assert!(dir.join("b_byLib.puml").exists());
}

#[test]
fn lenient_flag_converts_unbalanced_file() {
    let temp = TempDir::new().unwrap();
    let input = write_file(temp.path(), "a.puml", "box A\nend\n");

    puml2lib(temp.path())
        .args(["convert", "--lenient"])
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("a_byLib.puml")).unwrap(),
        "END()\n"
    );
}

#[test]
fn config_file_enables_recursion() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        ".config/puml2lib/config.toml",
        "[convert]\nrecursive = true\n",
    );
    let dir = temp.path().join("docs");
    write_file(&dir, "nested/deep.puml", "end\n");

    puml2lib(temp.path())
        .arg("convert")
        .arg(&dir)
        .assert()
        .success();

    assert!(dir.join("nested").join("deep_byLib.puml").exists());
}

#[test]
fn config_init_then_show() {
    let temp = TempDir::new().unwrap();

    puml2lib(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(temp
        .path()
        .join(".config")
        .join("puml2lib")
        .join("config.toml")
        .exists());

    puml2lib(temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));

    puml2lib(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strict = true"));
}

#[test]
fn config_path_points_into_home() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join(".config").join("puml2lib").join("config.toml");

    puml2lib(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}
