//! Structural pre-screening
//!
//!     `verify` checks that some input plausibly is a txtree without building the forest.
//!     It is more lenient than the builder: instead of tracking open ancestors it only
//!     compares each line with the line before it.
//!
//!     A line fails verification when
//!
//!     - it does not match the line grammar
//!     - its rank tag is not a known rank
//!     - its indent is not a multiple of two spaces
//!     - it is indented more than one level deeper than the previous line
//!
//!     and the whole input fails when it holds more than eight lines but none of them is
//!     indented: such a flat list is most likely not a tree.
//!
//!     The result is a value, never an error, so untrusted input can be screened without
//!     error handling.

use crate::txtree::ast::Rank;
use crate::txtree::grammar::{self, INDENT_UNIT};
use std::io::{self, BufRead};

/// Flat inputs with more lines than this are rejected
const MAX_FLAT_LINES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub valid: bool,
    /// Non-blank lines scanned, up to and including a failing line
    pub lines_scanned: usize,
    pub message: String,
}

impl Verification {
    fn valid(lines_scanned: usize) -> Self {
        Self {
            valid: true,
            lines_scanned,
            message: format!("Valid tree with {lines_scanned} lines"),
        }
    }

    fn invalid(lines_scanned: usize, message: String) -> Self {
        tracing::error!("{message}");
        Self {
            valid: false,
            lines_scanned,
            message,
        }
    }
}

pub fn verify(source: &str) -> Verification {
    verify_lines(source.lines().map(Ok))
}

pub fn verify_reader<B: BufRead>(reader: B) -> Verification {
    verify_lines(reader.lines())
}

fn verify_lines<I, S>(lines: I) -> Verification
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut scanned = 0;
    let mut max_indent = 0;
    let mut last_indent = 0;

    for (idx, text) in lines.into_iter().enumerate() {
        let line = idx + 1;
        let text = match text {
            Ok(text) => text,
            Err(err) => {
                return Verification::invalid(
                    scanned,
                    format!("Failed to read tree on line {line}: {err}"),
                )
            }
        };
        let text = text.as_ref();
        if grammar::is_blank(text) {
            continue;
        }
        scanned += 1;

        let Some(parts) = grammar::match_line(text) else {
            return Verification::invalid(
                scanned,
                format!("Failed to parse tree on line {line}: {text}"),
            );
        };
        if let Some(rank) = parts.rank {
            if let Err(err) = rank.parse::<Rank>() {
                return Verification::invalid(
                    scanned,
                    format!("Failed to parse tree on line {line}, {err}: {text}"),
                );
            }
        }

        let indent = parts.indent;
        max_indent = max_indent.max(indent);
        if indent % INDENT_UNIT != 0 {
            return Verification::invalid(
                scanned,
                format!(
                    "Tree is not indented properly on line {line}. Use {INDENT_UNIT} spaces only: {text}"
                ),
            );
        }
        if indent > last_indent + INDENT_UNIT {
            return Verification::invalid(
                scanned,
                format!(
                    "Tree is indented too much on line {line}. Use {INDENT_UNIT} spaces only: {text}"
                ),
            );
        }
        last_indent = indent;
    }

    if max_indent == 0 && scanned > MAX_FLAT_LINES {
        return Verification::invalid(scanned, "Tree is not indented at all".to_string());
    }
    Verification::valid(scanned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_valid_tree() {
        let result = verify("A\n  B\n    C\n  =D\nE\n");
        assert!(result.valid);
        assert_eq!(result.lines_scanned, 5);
    }

    #[rstest]
    #[case::odd_indent("A\n   B\n", 2)]
    #[case::too_deep("A\n  B\n      C\n", 3)]
    #[case::malformed("A\n  B\n\tC\n", 3)]
    #[case::unknown_rank("A [genus]\n  B [specie]\n", 2)]
    fn test_invalid(#[case] source: &str, #[case] lines: usize) {
        let result = verify(source);
        assert!(!result.valid, "{source:?} should be invalid");
        assert_eq!(result.lines_scanned, lines);
    }

    #[test]
    fn test_message_names_the_line() {
        let result = verify("A\n\n   B\n");
        assert_eq!(
            result.message,
            "Tree is not indented properly on line 3. Use 2 spaces only:    B"
        );
        assert_eq!(result.lines_scanned, 2);
    }

    #[test]
    fn test_short_flat_list_is_accepted() {
        let source = "A\nB\nC\nD\nE\nF\nG\nH\n";
        assert!(verify(source).valid);
    }

    #[test]
    fn test_long_flat_list_is_rejected() {
        let source = "A\nB\nC\nD\nE\nF\nG\nH\nI\n";
        let result = verify(source);
        assert!(!result.valid);
        assert_eq!(result.lines_scanned, 9);
        assert_eq!(result.message, "Tree is not indented at all");
    }

    #[test]
    fn test_indented_first_line_is_accepted() {
        // only the step from the previous line is checked, and there is none
        let result = verify("  A\n    B\n  C\n");
        assert!(result.valid);
        assert_eq!(result.lines_scanned, 3);
    }

    #[test]
    fn test_reader() {
        let result = verify_reader("A\n  B\n".as_bytes());
        assert!(result.valid);
        assert_eq!(result.lines_scanned, 2);
    }
}
