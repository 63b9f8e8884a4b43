//! Forest traversals
//!
//!     Two traversal orders are offered, both driven by an explicit stack so they can be
//!     consumed step by step without recursion and without touching the forest.
//!
//!     Flatten
//!
//!         The order used when comparing trees: a preorder over children in which every
//!         node is immediately followed by its direct synonyms.
//!
//!             A                   A, S1, S2, C1, C2
//!               =S1
//!               =S2
//!               C1
//!               C2
//!
//!         Synonyms are yielded as flat entries. Nodes indented below a synonym are never
//!         reached by this traversal.
//!
//!     Walk
//!
//!         The print order: every node, synonyms before children at each level, each
//!         paired with its depth and whether it hangs off its parent as a synonym.

use crate::txtree::ast::{Forest, Node, NodeKind};
use std::iter::FusedIterator;

/// A node whose direct synonyms are being emitted
struct Cursor<'a, K: NodeKind> {
    node: &'a Node<K>,
    synonym_idx: usize,
}

impl<'a, K: NodeKind> Cursor<'a, K> {
    fn new(node: &'a Node<K>) -> Self {
        Self {
            node,
            synonym_idx: 0,
        }
    }

    fn next_synonym(&mut self) -> Option<&'a Node<K>> {
        let synonym = self.node.synonyms.get(self.synonym_idx)?;
        self.synonym_idx += 1;
        Some(synonym)
    }
}

/// Flattened traversal, see the module docs
pub struct Flatten<'a, K: NodeKind> {
    stack: Vec<&'a Node<K>>,
    current: Option<Cursor<'a, K>>,
}

impl<'a, K: NodeKind> Flatten<'a, K> {
    pub fn new(forest: &'a Forest<K>) -> Self {
        Self {
            stack: forest.roots.iter().rev().collect(),
            current: None,
        }
    }
}

impl<'a, K: NodeKind> Iterator for Flatten<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(synonym) = self.current.as_mut().and_then(Cursor::next_synonym) {
            return Some(synonym);
        }
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        self.current = Some(Cursor::new(node));
        Some(node)
    }
}

impl<K: NodeKind> FusedIterator for Flatten<'_, K> {}

/// One step of a [`Walk`]
#[derive(Debug)]
pub struct WalkStep<'a, K: NodeKind> {
    pub node: &'a Node<K>,
    /// Zero for roots
    pub depth: usize,
    /// True if the node is listed among its parent's synonyms
    pub synonym: bool,
}

impl<K: NodeKind> Clone for WalkStep<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: NodeKind> Copy for WalkStep<'_, K> {}

/// Full traversal in print order, see the module docs
pub struct Walk<'a, K: NodeKind> {
    stack: Vec<WalkStep<'a, K>>,
}

impl<'a, K: NodeKind> Walk<'a, K> {
    pub fn new(forest: &'a Forest<K>) -> Self {
        Self {
            stack: forest
                .roots
                .iter()
                .rev()
                .map(|node| WalkStep {
                    node,
                    depth: 0,
                    synonym: false,
                })
                .collect(),
        }
    }
}

impl<'a, K: NodeKind> Iterator for Walk<'a, K> {
    type Item = WalkStep<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.stack.pop()?;
        let depth = step.depth + 1;
        // children go below synonyms so synonyms pop first
        for node in step.node.children.iter().rev() {
            self.stack.push(WalkStep {
                node,
                depth,
                synonym: false,
            });
        }
        for node in step.node.synonyms.iter().rev() {
            self.stack.push(WalkStep {
                node,
                depth,
                synonym: true,
            });
        }
        Some(step)
    }
}

impl<K: NodeKind> FusedIterator for Walk<'_, K> {}
