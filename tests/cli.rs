use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn verify_valid_fixture() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("verify").arg(fixture_path("test2.txt"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Valid tree with 13 lines"));
}

#[test]
fn verify_flat_list_exits_with_two() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("verify").arg(fixture_path("flat.txt"));

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Tree is not indented at all"));
}

#[test]
fn format_drops_comments() {
    let expected = fs::read_to_string(fixture_path("test2-no-comments.txt")).unwrap();
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("format").arg(fixture_path("test2.txt"));

    cmd.assert().success().stdout(expected);
}

#[test]
fn format_keeps_comments_on_request() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("format")
        .arg(fixture_path("test2.txt"))
        .arg("--comments");

    cmd.assert().success().stdout(
        predicate::str::contains("Plantae [kingdom] # green things\n")
            .and(predicate::str::contains("marine} # silver fir\n")),
    );
}

#[test]
fn format_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("format").arg("-").write_stdin("A\n  *B\n  C # c\n");

    cmd.assert().success().stdout("A\n  =B\n  C\n");
}

#[test]
fn format_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "Abies\n   Abies alba\n").unwrap();

    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("format").arg(&path);

    cmd.assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("format").arg(fixture_path("does-not-exist.txt"));

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn flatten_lists_ids_flags_and_names() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("flatten").arg("-").write_stdin("A\n  =$S\n    X\n  †C\n");

    cmd.assert().success().stdout("1\tA\n2\t$S\n4\t†C\n");
}

#[test]
fn convert_to_json_with_names() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("convert")
        .arg(fixture_path("test2.txt"))
        .arg("--format")
        .arg("json")
        .arg("--names");

    cmd.assert().success().stdout(
        predicate::str::contains("\"parsed_name\"")
            .and(predicate::str::contains("\"specific_epithet\": \"alba\"")),
    );
}

#[test]
fn convert_to_treeviz() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("convert")
        .arg("-")
        .arg("-f")
        .arg("treeviz")
        .write_stdin("A\n  B\n");

    cmd.assert().success().stdout("└─ A\n  └─ B\n");
}

#[test]
fn convert_unknown_format_lists_available_formats() {
    let mut cmd = cargo_bin_cmd!("txtree");
    cmd.arg("convert")
        .arg(fixture_path("test.txt"))
        .arg("--format")
        .arg("xml");

    cmd.assert().code(1).stderr(
        predicate::str::contains("Format 'xml' not found")
            .and(predicate::str::contains("json, treeviz, txtree, yaml")),
    );
}
