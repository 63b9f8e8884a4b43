//! In-memory model of a txtree document
//!
//! A [`Forest`] owns its root [`Node`]s, and every node owns its synonyms and children.

pub mod forest;
pub mod infos;
pub mod node;
pub mod rank;

pub use forest::Forest;
pub use infos::Infos;
pub use node::{Node, NodeKind, Parsed, ParsedNode, RankTag, Simple, SimpleNode};
pub use rank::{Rank, UnknownRank};
