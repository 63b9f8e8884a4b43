//! Parsing entry points
//!
//!     parse_simple(source)              string ranks
//!     parse_with_names(source, names)   resolved ranks and parsed names
//!
//!     Both read the whole input and either return the complete forest or fail on the
//!     first malformed or badly indented line. There is no partial result.
//!
//!     [`Parser`] offers the same operations on any buffered reader, and lets callers
//!     observe every processed line.

use crate::txtree::ast::{Forest, Infos, Parsed, Simple};
use crate::txtree::building::{ForestBuilder, NameResolver, NameServiceResolver, SimpleResolver};
use crate::txtree::grammar::INDENT_UNIT;
use crate::txtree::names::NameParser;
use std::fmt;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse tree on line {line}: {text}")]
    MalformedLine { line: usize, text: String },
    #[error("Tree is not indented properly on line {line}, {kind}: {text}")]
    Indentation {
        line: usize,
        text: String,
        kind: IndentationKind,
    },
    #[error("Unknown rank '{rank}' on line {line}")]
    UnknownRank { line: usize, rank: String },
    #[error("Failed to read tree input at line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl ParseError {
    /// The 1-based line the error was found on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedLine { line, .. }
            | ParseError::Indentation { line, .. }
            | ParseError::UnknownRank { line, .. }
            | ParseError::Io { line, .. } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentationKind {
    /// The indent is not made of whole levels
    OddWidth { width: usize },
    /// The line is more than one level deeper than its nearest ancestor
    LevelSkip { level: usize, allowed: usize },
}

impl fmt::Display for IndentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentationKind::OddWidth { width } => write!(
                f,
                "{width} spaces is not a multiple of {INDENT_UNIT}, use {INDENT_UNIT} spaces only"
            ),
            IndentationKind::LevelSkip { level, allowed } => write!(
                f,
                "level {level} is deeper than the allowed level {allowed}, use {INDENT_UNIT} spaces for children"
            ),
        }
    }
}

/// A processed line as passed to observers
#[derive(Debug, Clone, Copy)]
pub struct TreeLine<'a> {
    /// 1-based line number, also the node id
    pub line: usize,
    pub level: usize,
    /// The line without indentation and trailing whitespace
    pub content: &'a str,
    pub infos: &'a Infos,
}

type Observer<'o> = Box<dyn FnMut(&TreeLine<'_>) + 'o>;

/// Configurable parser
///
/// ```text
/// let mut lines = Vec::new();
/// let forest = Parser::new()
///     .with_observer(|l| lines.push(l.line))
///     .parse_simple(source)?;
/// ```
#[derive(Default)]
pub struct Parser<'o> {
    observer: Option<Observer<'o>>,
}

impl<'o> Parser<'o> {
    pub fn new() -> Self {
        Self { observer: None }
    }

    /// Calls `observer` once for every non-blank line after its node was attached
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&TreeLine<'_>) + 'o,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn parse_simple(&mut self, source: &str) -> Result<Forest<Simple>, ParseError> {
        self.run(SimpleResolver, source.lines().map(Ok))
    }

    pub fn parse_with_names(
        &mut self,
        source: &str,
        names: &dyn NameParser,
    ) -> Result<Forest<Parsed>, ParseError> {
        self.run(NameServiceResolver::new(names), source.lines().map(Ok))
    }

    /// Reads UTF-8 lines from `reader` until the end
    pub fn read_simple<B: BufRead>(&mut self, reader: B) -> Result<Forest<Simple>, ParseError> {
        self.run(SimpleResolver, reader.lines())
    }

    pub fn read_with_names<B: BufRead>(
        &mut self,
        reader: B,
        names: &dyn NameParser,
    ) -> Result<Forest<Parsed>, ParseError> {
        self.run(NameServiceResolver::new(names), reader.lines())
    }

    fn run<R, I, S>(&mut self, resolver: R, lines: I) -> Result<Forest<R::Kind>, ParseError>
    where
        R: NameResolver,
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let mut builder = ForestBuilder::new(resolver);
        for (idx, text) in lines.into_iter().enumerate() {
            let line = idx + 1;
            let text = text.map_err(|source| ParseError::Io { line, source })?;
            let text = text.as_ref();
            let Some(attached) = builder.push_line(line, text)? else {
                continue;
            };
            if let Some(observer) = self.observer.as_mut() {
                observer(&TreeLine {
                    line,
                    level: attached.level,
                    content: text.trim(),
                    infos: attached.node.infos(),
                });
            }
        }
        Ok(builder.finish())
    }
}

/// Parses a forest with plain string ranks
pub fn parse_simple(source: &str) -> Result<Forest<Simple>, ParseError> {
    Parser::new().parse_simple(source)
}

/// Parses a forest, resolving ranks and handing every name to `names`
pub fn parse_with_names(
    source: &str,
    names: &dyn NameParser,
) -> Result<Forest<Parsed>, ParseError> {
    Parser::new().parse_with_names(source, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txtree::names::{NameParseError, ParsedName, ScientificNameParser};
    use crate::txtree::ast::Rank;

    #[test]
    fn test_flag_decoding() {
        let forest = parse_simple("†$Abies alba [species]").unwrap();
        let node = &forest.roots()[0];
        assert_eq!(node.name(), "Abies alba");
        assert_eq!(node.rank_tag(), Some("species"));
        assert!(node.is_extinct());
        assert!(node.is_basionym());
        assert!(!node.is_provisional());
    }

    #[test]
    fn test_ids_are_line_numbers() {
        let forest = parse_simple("A\n\n  B\n\n\n  C\n").unwrap();
        let ids: Vec<_> = forest.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 3, 6]);
        assert_eq!(forest.size(), 3);
    }

    #[test]
    fn test_odd_indent() {
        let err = parse_simple("A\n B\n").unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(matches!(
            err,
            ParseError::Indentation {
                kind: IndentationKind::OddWidth { width: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_level_skip() {
        let err = parse_simple("A\n  B\n      C\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::Indentation {
                line: 3,
                kind: IndentationKind::LevelSkip {
                    level: 3,
                    allowed: 2
                },
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_line_message() {
        let err = parse_simple("A\n\tB\n").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse tree on line 2: \tB");
    }

    #[test]
    fn test_observer_sees_every_line() {
        let mut seen = Vec::new();
        Parser::new()
            .with_observer(|l| {
                seen.push((l.line, l.level, l.content.to_string(), l.infos.len()))
            })
            .parse_simple("A {ID=1}\n\n  =B   \n")
            .unwrap();
        assert_eq!(
            seen,
            vec![
                (1, 0, "A {ID=1}".to_string(), 1),
                (3, 1, "=B".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_read_from_reader() {
        let source = "A\r\n  B\r\n";
        let forest = Parser::new().read_simple(source.as_bytes()).unwrap();
        assert_eq!(forest.roots()[0].children()[0].name(), "B");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let bytes: &[u8] = b"A\n  \xff\xfe\n";
        let err = Parser::new().read_simple(bytes).unwrap_err();
        assert!(matches!(err, ParseError::Io { line: 2, .. }));
    }

    #[test]
    fn test_parse_with_names() {
        let forest =
            parse_with_names("Abies [genus]\n  Abies alba Mill. [species]\n", &ScientificNameParser)
                .unwrap();
        let species = &forest.roots()[0].children()[0];
        assert_eq!(species.rank(), Some(&Rank::Species));
        let pn = species.parsed_name().unwrap();
        assert_eq!(pn.specific_epithet.as_deref(), Some("alba"));
        assert_eq!(pn.rank, Some(Rank::Species));
    }

    #[test]
    fn test_name_service_sees_name_and_rank() {
        let calls = std::cell::RefCell::new(Vec::new());
        let names = |name: &str, rank: Option<Rank>| -> Result<ParsedName, NameParseError> {
            calls.borrow_mut().push((name.to_string(), rank));
            Err(NameParseError::Unparsable {
                name: name.to_string(),
            })
        };
        let forest = parse_with_names("Abies [genus]\n  =Picea\n", &names).unwrap();
        assert!(forest.roots()[0].parsed_name().is_none());
        assert_eq!(
            calls.into_inner(),
            vec![
                ("Abies".to_string(), Some(Rank::Genus)),
                ("Picea".to_string(), None)
            ]
        );
    }
}
