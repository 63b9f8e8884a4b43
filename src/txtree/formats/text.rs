//! txtree printer
//!
//!     Writes a forest back in the line grammar it was read from. Every node is printed
//!     as one line, its synonyms first and then its children, each one level deeper:
//!
//!         <indent><synonym marker>?$?†??<name>( [<rank>])?( {<infos>})?( # <comment>)?
//!
//!     The synonym marker is only written for nodes printed as a synonym of their parent,
//!     `≡` for homotypic synonyms and `=` for all others. Comments are dropped unless
//!     asked for, so printing a parsed tree reproduces its input minus the comments.

use crate::txtree::ast::{Forest, Node, NodeKind};
use crate::txtree::grammar::{
    SynonymMarker, BASIONYM_SYMBOL, EXTINCT_SYMBOL, INDENT_UNIT, PROVISIONAL_SYMBOL,
};
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Append ` # comment` to lines that had one
    pub comments: bool,
}

/// Renders a forest as txtree text
pub fn serialize<K: NodeKind>(forest: &Forest<K>) -> String {
    serialize_with(forest, TextOptions::default())
}

pub fn serialize_with<K: NodeKind>(forest: &Forest<K>, options: TextOptions) -> String {
    let mut out = String::new();
    write_text(&mut out, forest, options).expect("writing to a String cannot fail");
    out
}

/// Writes a forest as UTF-8 txtree text. The writer is neither flushed nor closed.
pub fn write_forest<K: NodeKind, W: io::Write>(forest: &Forest<K>, mut writer: W) -> io::Result<()> {
    writer.write_all(serialize(forest).as_bytes())
}

pub fn write_text<K: NodeKind>(
    out: &mut impl fmt::Write,
    forest: &Forest<K>,
    options: TextOptions,
) -> fmt::Result {
    for step in forest.walk() {
        let marker = step.synonym.then(|| {
            if step.node.is_homotypic() {
                SynonymMarker::Homotypic
            } else {
                SynonymMarker::Heterotypic
            }
        });
        write_line(out, step.node, step.depth, marker, options)?;
    }
    Ok(())
}

fn write_line<K: NodeKind>(
    out: &mut impl fmt::Write,
    node: &Node<K>,
    depth: usize,
    marker: Option<SynonymMarker>,
    options: TextOptions,
) -> fmt::Result {
    write!(out, "{:width$}", "", width = depth * INDENT_UNIT)?;
    if let Some(marker) = marker {
        out.write_char(marker.symbol())?;
    }
    if node.is_basionym() {
        out.write_char(BASIONYM_SYMBOL)?;
    }
    if node.is_extinct() {
        out.write_char(EXTINCT_SYMBOL)?;
    }
    if node.is_provisional() {
        out.write_char(PROVISIONAL_SYMBOL)?;
    }
    out.write_str(node.name())?;
    if let Some(rank) = node.rank_tag() {
        write!(out, " [{rank}]")?;
    }
    if !node.infos().is_empty() {
        write!(out, " {{{}}}", node.infos())?;
    }
    if options.comments {
        if let Some(comment) = node.comment() {
            write!(out, " # {comment}")?;
        }
    }
    out.write_char('\n')
}
