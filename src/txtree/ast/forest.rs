//! Forest
//!
//! The result of a parse: the root level nodes in source order, and the number of
//! nodes read. The forest is immutable once built; traversals only borrow it.

use super::node::{Node, NodeKind};
use crate::txtree::iter::{Flatten, Walk};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Forest<K: NodeKind> {
    pub(crate) roots: Vec<Node<K>>,
    pub(crate) size: usize,
}

impl<K: NodeKind> Forest<K> {
    pub(crate) fn new() -> Self {
        Self {
            roots: Vec::new(),
            size: 0,
        }
    }

    pub fn roots(&self) -> &[Node<K>] {
        &self.roots
    }

    /// Total number of nodes, synonyms included. Equals the number of non-blank lines read.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Flattened traversal: each accepted node, then its direct synonyms, then its
    /// children. Subtrees hanging below a synonym are not visited; use [`Forest::walk`]
    /// to see every node.
    pub fn iter(&self) -> Flatten<'_, K> {
        Flatten::new(self)
    }

    /// Full traversal in print order, yielding every node with its depth
    pub fn walk(&self) -> Walk<'_, K> {
        Walk::new(self)
    }

    /// Finds the node read from the given source line
    pub fn find_by_id(&self, id: usize) -> Option<&Node<K>> {
        self.walk().map(|step| step.node).find(|node| node.id() == id)
    }
}

impl<'a, K: NodeKind> IntoIterator for &'a Forest<K> {
    type Item = &'a Node<K>;
    type IntoIter = Flatten<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
