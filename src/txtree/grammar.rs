//! Line grammar
//!
//!     Every non-blank line of a txtree document describes exactly one taxon. The line is
//!     decomposed by a single anchored regex into its parts, in this fixed order:
//!
//!         <indent><synonym marker>?<flag markers>*<name>( [<rank>])?( {<infos>})?( #<comment>)?
//!
//!     The indent is reported as a raw width; turning it into a level (and rejecting odd
//!     widths) is the job of the builder and the verifier, which treat it differently.
//!
//! Markers
//!
//!     =   synonym
//!     ≡   homotypic synonym
//!     *   synonym (legacy spelling, read but never written)
//!     $   basionym
//!     †   extinct
//!     ?   provisional
//!
//!     The synonym marker always comes first. The flag markers are written in the order
//!     `$†?` but are accepted in any order, each at most once. Whitespace may follow any
//!     marker, so `= Abies` is a synonym named `Abies`.

use once_cell::sync::Lazy;
use regex::Regex;

pub const SYNONYM_SYMBOL: char = '=';
pub const HOMOTYPIC_SYMBOL: char = '≡';
pub const LEGACY_SYNONYM_SYMBOL: char = '*';
pub const BASIONYM_SYMBOL: char = '$';
pub const EXTINCT_SYMBOL: char = '†';
pub const PROVISIONAL_SYMBOL: char = '?';

/// Width of one indentation level in spaces
pub const INDENT_UNIT: usize = 2;

static LINE_PARSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<indent> *)",
        r"(?:(?P<synonym>[=≡*])\s*)?",
        r"(?P<flags>(?:[$†?]\s*)*)",
        r"(?P<name>\S.*?)",
        r"(?:\s+\[(?P<rank>[A-Za-z][A-Za-z _-]*)\])?",
        r"(?:\s+\{(?P<infos>[^{}]*)\})?",
        r"(?:\s+#(?P<comment>.*))?",
        r"\s*$",
    ))
    .expect("line grammar regex is valid")
});

/// How a line is attached to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynonymMarker {
    /// `=` or the legacy `*`
    Heterotypic,
    /// `≡`
    Homotypic,
}

impl SynonymMarker {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.chars().next()? {
            SYNONYM_SYMBOL | LEGACY_SYNONYM_SYMBOL => Some(SynonymMarker::Heterotypic),
            HOMOTYPIC_SYMBOL => Some(SynonymMarker::Homotypic),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            SynonymMarker::Heterotypic => SYNONYM_SYMBOL,
            SynonymMarker::Homotypic => HOMOTYPIC_SYMBOL,
        }
    }
}

/// The decomposed parts of one raw line. All text borrows from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Number of leading spaces
    pub indent: usize,
    pub synonym: Option<SynonymMarker>,
    pub basionym: bool,
    pub extinct: bool,
    pub provisional: bool,
    /// Trimmed name, never empty
    pub name: &'a str,
    /// Raw rank tag between the brackets
    pub rank: Option<&'a str>,
    /// Raw content between the braces, possibly empty
    pub infos: Option<&'a str>,
    /// Trimmed comment text; `None` when missing or empty
    pub comment: Option<&'a str>,
}

impl LineMatch<'_> {
    pub fn is_synonym(&self) -> bool {
        self.synonym.is_some()
    }

    pub fn is_homotypic(&self) -> bool {
        self.synonym == Some(SynonymMarker::Homotypic)
    }
}

/// Decomposes one line. Returns `None` if the line does not follow the grammar.
///
/// Blank lines never match; callers skip them before matching.
pub fn match_line(line: &str) -> Option<LineMatch<'_>> {
    let caps = LINE_PARSER.captures(line)?;

    let mut basionym = false;
    let mut extinct = false;
    let mut provisional = false;
    let flags = caps.name("flags").map_or("", |m| m.as_str());
    for flag in flags.chars().filter(|c| !c.is_whitespace()) {
        let seen = match flag {
            BASIONYM_SYMBOL => &mut basionym,
            EXTINCT_SYMBOL => &mut extinct,
            PROVISIONAL_SYMBOL => &mut provisional,
            _ => return None,
        };
        if *seen {
            return None;
        }
        *seen = true;
    }

    let name = caps.name("name")?.as_str().trim();
    if name.is_empty() {
        return None;
    }

    Some(LineMatch {
        indent: caps.name("indent").map_or(0, |m| m.as_str().len()),
        synonym: caps
            .name("synonym")
            .and_then(|m| SynonymMarker::from_symbol(m.as_str())),
        basionym,
        extinct,
        provisional,
        name,
        rank: caps.name("rank").map(|m| m.as_str().trim()),
        infos: caps.name("infos").map(|m| m.as_str()),
        comment: caps
            .name("comment")
            .map(|m| m.as_str().trim())
            .filter(|c| !c.is_empty()),
    })
}

/// A line is blank if it only holds whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
