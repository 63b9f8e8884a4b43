//! Pre-screening the fixture files

use rstest::rstest;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use txtree::{parse_simple, verify, verify_reader};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[rstest]
#[case("test.txt", 15)]
#[case("test2.txt", 13)]
#[case("test2-no-comments.txt", 13)]
fn test_fixtures_are_valid(#[case] name: &str, #[case] lines: usize) {
    let file = File::open(fixture_path(name)).unwrap();
    let result = verify_reader(BufReader::new(file));
    assert!(result.valid, "{name}: {}", result.message);
    assert_eq!(result.lines_scanned, lines);
    assert_eq!(result.message, format!("Valid tree with {lines} lines"));
}

#[test]
fn test_flat_fixture_is_not_a_tree() {
    let source = std::fs::read_to_string(fixture_path("flat.txt")).unwrap();
    let result = verify(&source);
    assert!(!result.valid);
    assert_eq!(result.message, "Tree is not indented at all");
    // the builder has no such rule
    assert_eq!(parse_simple(&source).unwrap().size(), 9);
}

#[test]
fn test_verifier_is_more_lenient_than_the_builder() {
    let source = "  A\n    B\n";
    assert!(verify(source).valid);
    assert!(parse_simple(source).is_err());
}

#[test]
fn test_verifier_and_builder_agree_on_bad_lines() {
    for source in ["A\n   B\n", "A\n  B\n      C\n", "A\n\t B\n", "A\n  $$B\n"] {
        assert!(!verify(source).valid, "{source:?}");
        assert!(parse_simple(source).is_err(), "{source:?}");
    }
}
