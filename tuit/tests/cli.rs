//! End-to-end tests for the tuit binary.

use assert_cmd::Command;
use predicates::prelude::*;

const GOOD: &str = "package demo\n\n@component App(title string) {\n\t<box class=\"flex flex-col p-1\">\n\t\t<text class=\"font-bold\">{title}</text>\n\t</box>\n}\n";
const BROKEN: &str = "package demo\n@component App( {\n}\n";

fn tuit() -> Command {
    Command::cargo_bin("tuit").expect("binary builds")
}

#[test]
fn test_check_ok() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("app.tui");
    std::fs::write(&file, GOOD).expect("write");

    tuit()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("no errors"));
}

#[test]
fn test_check_reports_diagnostics_and_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("broken.tui");
    std::fs::write(&file, BROKEN).expect("write");

    tuit()
        .arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("broken.tui:2:"));
}

#[test]
fn test_build_writes_go_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("app.tui");
    std::fs::write(&file, GOOD).expect("write");

    tuit().arg("build").arg(&file).assert().success();

    let generated = dir.path().join("app_tui.go");
    let content = std::fs::read_to_string(generated).expect("generated file exists");
    assert!(content.contains("package demo"));
    assert!(content.contains("func App(title string"));
    assert!(content.contains("element.WithDirection(layout.Column)"));
}

#[test]
fn test_build_with_output_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("gen");
    let file = dir.path().join("app.tui");
    std::fs::write(&file, GOOD).expect("write");

    tuit()
        .arg("build")
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("app_tui.go").exists());
}

#[test]
fn test_build_directory_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("a.tui"), GOOD).expect("write");
    std::fs::write(dir.path().join("b.tui"), GOOD).expect("write");

    tuit().arg("build").arg(dir.path()).assert().success();

    assert!(dir.path().join("a_tui.go").exists());
    assert!(dir.path().join("b_tui.go").exists());
}

#[test]
fn test_build_emit_tokens_prints_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("app.tui");
    std::fs::write(&file, "package demo\n").expect("write");

    tuit()
        .arg("build")
        .arg(&file)
        .arg("--emit")
        .arg("tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("KwPackage"));
}

#[test]
fn test_build_failure_leaves_no_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("broken.tui");
    std::fs::write(&file, BROKEN).expect("write");

    tuit()
        .arg("build")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("build failed"));

    assert!(!dir.path().join("broken_tui.go").exists());
}

#[test]
fn test_classes_listing() {
    tuit()
        .arg("classes")
        .assert()
        .success()
        .stdout(predicate::str::contains("flex-col"))
        .stdout(predicate::str::contains("spacing"));
}

#[test]
fn test_classes_category_filter() {
    tuit()
        .arg("classes")
        .arg("--category")
        .arg("typography")
        .assert()
        .success()
        .stdout(predicate::str::contains("font-bold"))
        .stdout(predicate::str::contains("typography"));
}

#[test]
fn test_classes_validate_with_suggestion() {
    tuit()
        .arg("classes")
        .arg("--validate")
        .arg("flex-columns")
        .assert()
        .failure()
        .stdout(predicate::str::contains("did you mean 'flex-col'"));
}

#[test]
fn test_missing_input() {
    tuit()
        .arg("check")
        .arg("/definitely/not/here.tui")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
