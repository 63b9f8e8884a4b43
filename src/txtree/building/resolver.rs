//! Rank and name resolution
//!
//! The builder is the same for both node kinds; only the step that turns the raw rank
//! tag and name into the node's rank and payload differs. That step is a
//! [`NameResolver`].

use crate::txtree::ast::{NodeKind, Parsed, Rank, Simple};
use crate::txtree::grammar::LineMatch;
use crate::txtree::names::NameParser;
use crate::txtree::parsing::ParseError;

type Resolved<K> = (Option<<K as NodeKind>::Rank>, <K as NodeKind>::Payload);

pub trait NameResolver {
    type Kind: NodeKind;

    fn resolve(&self, line: usize, parts: &LineMatch<'_>) -> Result<Resolved<Self::Kind>, ParseError>;
}

/// Keeps the rank tag as written, lowercased
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleResolver;

impl NameResolver for SimpleResolver {
    type Kind = Simple;

    fn resolve(&self, _line: usize, parts: &LineMatch<'_>) -> Result<Resolved<Simple>, ParseError> {
        Ok((parts.rank.map(str::to_lowercase), ()))
    }
}

/// Resolves ranks strictly and asks a name parser for every name.
///
/// Name parser failures are logged and leave the parsed name empty.
pub struct NameServiceResolver<'p> {
    names: &'p dyn NameParser,
}

impl<'p> NameServiceResolver<'p> {
    pub fn new(names: &'p dyn NameParser) -> Self {
        Self { names }
    }
}

impl NameResolver for NameServiceResolver<'_> {
    type Kind = Parsed;

    fn resolve(&self, line: usize, parts: &LineMatch<'_>) -> Result<Resolved<Parsed>, ParseError> {
        let rank = match parts.rank {
            Some(tag) => tag
                .parse::<Rank>()
                .map_err(|_| ParseError::UnknownRank {
                    line,
                    rank: tag.to_string(),
                })?,
            None => Rank::Unranked,
        };
        let rank = (rank != Rank::Unranked).then_some(rank);

        let parsed = match self.names.parse(parts.name, rank) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!(line, name = parts.name, "Failed to parse name: {err}");
                None
            }
        };
        Ok((rank, parsed))
    }
}
