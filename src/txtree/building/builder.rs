//! Forest builder
//!
//!     Lines are fed in source order. The builder keeps the chain of open ancestors, one
//!     entry per indentation level, and hangs every new node below the ancestor one level
//!     up, as a synonym when the line carries a synonym marker and as a child otherwise.
//!
//! Algorithm
//!
//!     1. Skip blank lines
//!     2. Match the line against the grammar and reject odd indent widths
//!     3. level = indent / 2
//!     4. Level 0: the node becomes a root and the only open ancestor
//!     5. Otherwise close ancestors until exactly `level` remain. Fewer than `level`
//!        means the line is indented deeper than one level below its predecessor chain.
//!     6. Attach to the innermost open ancestor, then open the node itself
//!
//!     Synonyms are opened like any other node, so lines can be indented below them.
//!
//!     Since nodes are owned by their parents, open ancestors are tracked as index paths
//!     from the root rather than as references.

use super::resolver::NameResolver;
use crate::txtree::ast::{Forest, Infos, Node, NodeKind};
use crate::txtree::grammar::{self, INDENT_UNIT};
use crate::txtree::parsing::{IndentationKind, ParseError};

/// One hop of an ancestor path
#[derive(Debug, Clone, Copy)]
struct Step {
    synonym: bool,
    index: usize,
}

/// A node that was just attached, with its level
pub struct Attached<'f, K: NodeKind> {
    pub level: usize,
    pub node: &'f Node<K>,
}

pub struct ForestBuilder<R: NameResolver> {
    resolver: R,
    forest: Forest<R::Kind>,
    ancestors: Vec<Step>,
}

impl<R: NameResolver> ForestBuilder<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            forest: Forest::new(),
            ancestors: Vec::new(),
        }
    }

    /// Adds one source line. Returns `None` for blank lines.
    ///
    /// `line` is the 1-based line number and becomes the node id.
    pub fn push_line(
        &mut self,
        line: usize,
        text: &str,
    ) -> Result<Option<Attached<'_, R::Kind>>, ParseError> {
        if grammar::is_blank(text) {
            return Ok(None);
        }
        self.forest.size += 1;

        let parts = grammar::match_line(text).ok_or_else(|| ParseError::MalformedLine {
            line,
            text: text.to_string(),
        })?;
        if parts.indent % INDENT_UNIT != 0 {
            return Err(ParseError::Indentation {
                line,
                text: text.to_string(),
                kind: IndentationKind::OddWidth {
                    width: parts.indent,
                },
            });
        }
        let level = parts.indent / INDENT_UNIT;

        let (rank, payload) = self.resolver.resolve(line, &parts)?;
        let node = Node {
            id: line,
            name: parts.name.to_string(),
            rank,
            basionym: parts.basionym,
            extinct: parts.extinct,
            homotypic: parts.is_homotypic(),
            provisional: parts.provisional,
            infos: parts.infos.map(Infos::parse).unwrap_or_default(),
            comment: parts.comment.map(str::to_string),
            payload,
            synonyms: Vec::new(),
            children: Vec::new(),
        };

        if level == 0 {
            self.forest.roots.push(node);
            self.ancestors.clear();
            self.ancestors.push(Step {
                synonym: false,
                index: self.forest.roots.len() - 1,
            });
        } else {
            self.ancestors.truncate(level);
            if self.ancestors.len() < level {
                return Err(ParseError::Indentation {
                    line,
                    text: text.to_string(),
                    kind: IndentationKind::LevelSkip {
                        level,
                        allowed: self.ancestors.len(),
                    },
                });
            }
            let parent = node_at(&mut self.forest.roots, &self.ancestors);
            let siblings = if parts.is_synonym() {
                &mut parent.synonyms
            } else {
                &mut parent.children
            };
            siblings.push(node);
            let index = siblings.len() - 1;
            self.ancestors.push(Step {
                synonym: parts.is_synonym(),
                index,
            });
        }

        let node = node_at(&mut self.forest.roots, &self.ancestors);
        Ok(Some(Attached { level, node }))
    }

    pub fn finish(self) -> Forest<R::Kind> {
        tracing::debug!(
            roots = self.forest.roots.len(),
            size = self.forest.size,
            "Forest built"
        );
        self.forest
    }
}

/// Follows an ancestor path. The path is never empty and always valid.
fn node_at<'f, K: NodeKind>(roots: &'f mut [Node<K>], path: &[Step]) -> &'f mut Node<K> {
    let (first, rest) = path
        .split_first()
        .expect("ancestor path starts at a root");
    let mut node = &mut roots[first.index];
    for step in rest {
        node = if step.synonym {
            &mut node.synonyms[step.index]
        } else {
            &mut node.children[step.index]
        };
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txtree::building::SimpleResolver;

    fn build(lines: &[&str]) -> Result<Forest<crate::txtree::ast::Simple>, ParseError> {
        let mut builder = ForestBuilder::new(SimpleResolver);
        for (i, line) in lines.iter().enumerate() {
            builder.push_line(i + 1, line)?;
        }
        Ok(builder.finish())
    }

    #[test]
    fn test_attached_reports_level() {
        let mut builder = ForestBuilder::new(SimpleResolver);
        builder.push_line(1, "A").unwrap();
        let attached = builder.push_line(2, "  =B").unwrap().unwrap();
        assert_eq!(attached.level, 1);
        assert_eq!(attached.node.name(), "B");
        assert!(builder.push_line(3, "   ").unwrap().is_none());
    }

    #[test]
    fn test_spaced_markers_attach_synonyms() {
        let forest = build(&["Abies alba", "  = Abies pectinata", "  * Pinus picea", "  C"]).unwrap();
        let a = &forest.roots()[0];
        let synonyms: Vec<_> = a.synonyms().iter().map(|n| n.name()).collect();
        assert_eq!(synonyms, vec!["Abies pectinata", "Pinus picea"]);
        assert_eq!(a.children().len(), 1);
        assert_eq!(a.children()[0].name(), "C");
    }

    #[test]
    fn test_children_and_synonyms() {
        let forest = build(&["A", "  =S", "  C", "    D"]).unwrap();
        let a = &forest.roots()[0];
        assert_eq!(a.synonyms()[0].name(), "S");
        assert_eq!(a.children()[0].name(), "C");
        assert_eq!(a.children()[0].children()[0].name(), "D");
        assert_eq!(forest.size(), 4);
    }

    #[test]
    fn test_lines_below_a_synonym() {
        let forest = build(&["A", "  =S", "    X", "  C"]).unwrap();
        let a = &forest.roots()[0];
        assert_eq!(a.synonyms()[0].children()[0].name(), "X");
        assert_eq!(a.children()[0].name(), "C");
    }

    #[test]
    fn test_dedent_several_levels() {
        let forest = build(&["A", "  B", "    C", "      D", "  E"]).unwrap();
        let a = &forest.roots()[0];
        assert_eq!(a.children().len(), 2);
        assert_eq!(a.children()[1].name(), "E");
    }

    #[test]
    fn test_first_line_indented() {
        let err = build(&["  A"]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Indentation {
                line: 1,
                kind: IndentationKind::LevelSkip {
                    level: 1,
                    allowed: 0
                },
                ..
            }
        ));
    }
}
