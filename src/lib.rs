//! # txtree
//!
//! A parser, verifier and printer for the txtree format: a plain text, indentation
//! structured listing of taxonomic names with synonyms and metadata.
//!
//! ```text
//! Pinaceae [family]
//!   Abies [genus]
//!     Abies alba Mill. [species] {ID=1234}
//!       =Abies pectinata DC. [species]
//!     †Abies nordenskioeldii [species]  # fossil only
//! ```
//!
//! The parsed [`Forest`] can be printed back (comments are dropped unless asked for), walked in the flattened
//! order used for tree comparisons, or converted to other formats.
//!
//! ## Testing
//!
//! Forest assertions for tests live in the [testing module](txtree::testing).

pub mod txtree;

pub use txtree::ast::{Forest, Infos, Node, NodeKind, Parsed, ParsedNode, Rank, Simple, SimpleNode};
pub use txtree::formats::{
    serialize, serialize_with, write_forest, FormatError, FormatRegistry, Formatter, TextOptions,
};
pub use txtree::names::{NameParseError, NameParser, ParsedName, ScientificNameParser};
pub use txtree::parsing::{parse_simple, parse_with_names, ParseError, Parser, TreeLine};
pub use txtree::verify::{verify, verify_reader, Verification};
