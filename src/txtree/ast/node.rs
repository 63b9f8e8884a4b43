//! Tree node
//!
//!     A node is one taxon entry: one non-blank line of the source. It owns its children
//!     and its synonyms outright, so a forest is a plain owned tree without back edges.
//!
//!     Nodes come in two kinds that share everything but rank resolution:
//!
//!     - [`Simple`] keeps the rank tag as written (lowercased), and carries nothing else.
//!     - [`Parsed`] resolves the rank tag against [`Rank`] and carries the
//!       [`ParsedName`] obtained from a name parser, if the name could be parsed.
//!
//!     Nodes are only ever created by the forest builder; the public API is read-only.

use super::infos::Infos;
use super::rank::Rank;
use crate::txtree::names::ParsedName;
use serde::Serialize;
use std::fmt;

/// What distinguishes the two node flavours
pub trait NodeKind {
    type Rank: RankTag + Clone + fmt::Debug + PartialEq + Serialize;
    type Payload: Clone + fmt::Debug + PartialEq + Serialize;

    /// Whether the payload carries nothing worth serializing
    fn payload_is_empty(payload: &Self::Payload) -> bool;
}

/// A rank value that can be written back inside `[...]`
pub trait RankTag {
    fn tag(&self) -> &str;
}

impl RankTag for String {
    fn tag(&self) -> &str {
        self
    }
}

impl RankTag for Rank {
    fn tag(&self) -> &str {
        self.as_str()
    }
}

/// Nodes with a plain string rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simple;

impl NodeKind for Simple {
    type Rank = String;
    type Payload = ();

    fn payload_is_empty(_: &()) -> bool {
        true
    }
}

/// Nodes with a resolved rank and a parsed scientific name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed;

impl NodeKind for Parsed {
    type Rank = Rank;
    type Payload = Option<ParsedName>;

    fn payload_is_empty(payload: &Option<ParsedName>) -> bool {
        payload.is_none()
    }
}

pub type SimpleNode = Node<Simple>;
pub type ParsedNode = Node<Parsed>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Node<K: NodeKind> {
    pub(crate) id: usize,
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rank: Option<K::Rank>,
    pub(crate) basionym: bool,
    pub(crate) extinct: bool,
    pub(crate) homotypic: bool,
    pub(crate) provisional: bool,
    #[serde(skip_serializing_if = "Infos::is_empty")]
    pub(crate) infos: Infos,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) comment: Option<String>,
    #[serde(rename = "parsed_name", skip_serializing_if = "K::payload_is_empty")]
    pub(crate) payload: K::Payload,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) synonyms: Vec<Node<K>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<Node<K>>,
}

impl<K: NodeKind> Node<K> {
    /// The 1-based source line this node was read from
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> Option<&K::Rank> {
        self.rank.as_ref()
    }

    /// The rank as written inside `[...]`, if ranked
    pub fn rank_tag(&self) -> Option<&str> {
        self.rank.as_ref().map(RankTag::tag)
    }

    pub fn is_basionym(&self) -> bool {
        self.basionym
    }

    pub fn is_extinct(&self) -> bool {
        self.extinct
    }

    /// True for synonyms read with the `≡` marker
    pub fn is_homotypic(&self) -> bool {
        self.homotypic
    }

    pub fn is_provisional(&self) -> bool {
        self.provisional
    }

    pub fn infos(&self) -> &Infos {
        &self.infos
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    pub fn synonyms(&self) -> &[Node<K>] {
        &self.synonyms
    }

    pub fn payload(&self) -> &K::Payload {
        &self.payload
    }

    /// Number of nodes in this subtree, synonyms and their subtrees included
    pub fn subtree_size(&self) -> usize {
        1 + self
            .synonyms
            .iter()
            .chain(self.children.iter())
            .map(Node::subtree_size)
            .sum::<usize>()
    }
}

impl Node<Parsed> {
    /// The parsed name, absent when the name parser rejected the name
    pub fn parsed_name(&self) -> Option<&ParsedName> {
        self.payload.as_ref()
    }
}

/// `name [rank]`
impl<K: NodeKind> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank_tag() {
            Some(rank) => write!(f, "{} [{}]", self.name, rank),
            None => f.write_str(&self.name),
        }
    }
}
