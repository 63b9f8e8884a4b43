//! Scientific name parsing
//!
//!     Parsed trees hand every name, together with its rank, to a [`NameParser`]. The
//!     parser is an outside collaborator: the tree only needs the one `parse` call, and a
//!     failure there never aborts reading the tree.
//!
//!     [`ScientificNameParser`] is a small regex based implementation covering the
//!     common botanical and zoological name shapes:
//!
//!         Pinaceae                              uninomial
//!         Abies Mill.                           genus with authorship
//!         Abies (Pseudotsuga) alba Mill.        infrageneric epithet
//!         Quercus robur subsp. robur L.         infraspecific name with rank marker
//!
//!     Anything it does not recognise is reported as unparsable. Callers with access to a
//!     complete name parser implement [`NameParser`] for it instead.

use crate::txtree::ast::Rank;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The name service used by parsed trees
pub trait NameParser {
    fn parse(&self, name: &str, rank: Option<Rank>) -> Result<ParsedName, NameParseError>;
}

impl<F> NameParser for F
where
    F: Fn(&str, Option<Rank>) -> Result<ParsedName, NameParseError>,
{
    fn parse(&self, name: &str, rank: Option<Rank>) -> Result<ParsedName, NameParseError> {
        self(name, rank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameParseError {
    #[error("unparsable name: {name}")]
    Unparsable { name: String },
    #[error("name '{name}' does not fit rank {rank}")]
    RankMismatch { name: String, rank: Rank },
}

impl NameParseError {
    pub fn name(&self) -> &str {
        match self {
            NameParseError::Unparsable { name } | NameParseError::RankMismatch { name, .. } => {
                name
            }
        }
    }
}

/// A scientific name split into its parts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uninomial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrageneric_epithet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_epithet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infraspecific_epithet: Option<String>,
    /// Rank marker as written, e.g. `subsp.`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorship: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,
}

impl ParsedName {
    /// The name without authorship and without rank markers
    pub fn canonical_name(&self) -> String {
        self.epithets(false).join(" ")
    }

    /// The name with rank marker and authorship
    pub fn canonical_name_complete(&self) -> String {
        let mut parts = self.epithets(true);
        if let Some(authorship) = &self.authorship {
            parts.push(authorship);
        }
        parts.join(" ")
    }

    fn epithets(&self, with_marker: bool) -> Vec<&str> {
        let mut parts = Vec::new();
        if let Some(uninomial) = &self.uninomial {
            parts.push(uninomial.as_str());
        }
        if let Some(genus) = &self.genus {
            parts.push(genus);
        }
        if let Some(infrageneric) = &self.infrageneric_epithet {
            if with_marker || self.specific_epithet.is_none() {
                parts.push(infrageneric);
            }
        }
        if let Some(species) = &self.specific_epithet {
            parts.push(species);
        }
        if let Some(infraspecific) = &self.infraspecific_epithet {
            if with_marker {
                if let Some(marker) = &self.rank_marker {
                    parts.push(marker);
                }
            }
            parts.push(infraspecific);
        }
        parts
    }
}

static NAME_PARSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<first>[A-Z][a-zäöüëï-]+)",
        r"(?:\s+\((?P<infrageneric>[A-Z][a-zäöüëï-]+)\))?",
        r"(?:\s+(?P<species>[a-zäöüëï-]{2,})",
        r"(?:\s+(?:(?P<marker>subsp\.|ssp\.|var\.|subvar\.|f\.|fo\.|forma|morph)\s+)?(?P<infraspecies>[a-zäöüëï-]{2,}))?)?",
        r"(?:\s+(?P<authorship>[^a-z\s].*?))?",
        r"\s*$",
    ))
    .expect("name regex is valid")
});

/// Built-in name parser for the common monomial, binomial and trinomial shapes
#[derive(Debug, Clone, Copy, Default)]
pub struct ScientificNameParser;

impl ScientificNameParser {
    pub fn new() -> Self {
        Self
    }
}

impl NameParser for ScientificNameParser {
    fn parse(&self, name: &str, rank: Option<Rank>) -> Result<ParsedName, NameParseError> {
        let unparsable = || NameParseError::Unparsable {
            name: name.to_string(),
        };
        let caps = NAME_PARSER.captures(name.trim()).ok_or_else(unparsable)?;
        let text = |group: &str| caps.name(group).map(|m| m.as_str().to_string());

        let first = text("first").ok_or_else(unparsable)?;
        let species = text("species");
        let mut parsed = ParsedName {
            infrageneric_epithet: text("infrageneric"),
            infraspecific_epithet: text("infraspecies"),
            rank_marker: text("marker"),
            authorship: text("authorship"),
            rank,
            ..ParsedName::default()
        };

        match (species, rank) {
            (Some(_), Some(rank)) if rank.is_suprageneric() => {
                return Err(NameParseError::RankMismatch {
                    name: name.to_string(),
                    rank,
                });
            }
            (Some(species), _) => {
                parsed.genus = Some(first);
                parsed.specific_epithet = Some(species);
            }
            (None, Some(rank)) if rank.is_suprageneric() => parsed.uninomial = Some(first),
            (None, _) if parsed.infrageneric_epithet.is_some() => parsed.genus = Some(first),
            (None, Some(Rank::Genus)) => parsed.genus = Some(first),
            (None, _) => parsed.uninomial = Some(first),
        }
        Ok(parsed)
    }
}
