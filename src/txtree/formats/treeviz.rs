//! Treeviz formatter for forests
//!
//! Treeviz is a visual representation of the forest, meant for eyeballing large trees in a
//! terminal. It uses one line per node and draws the nesting with box characters:
//!
//! ```text
//! └─ Pinaceae [family]
//!   └─ Abies [genus]
//!     ├─ ≡ Abies pectinata DC.
//!     ├─ Abies alba Mill. [species] †
//!     └─ Abies nordmanniana
//! ```
//!
//! Synonyms are shown with their marker, followed by the children. Flags are appended as
//! icons after the label: `†` extinct, `$` basionym, `?` provisional.

use crate::txtree::ast::{Forest, Node, NodeKind};

/// Labels are cut to this many characters
const MAX_LABEL: usize = 60;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str<K: NodeKind>(forest: &Forest<K>) -> String {
    let mut result = String::new();
    let roots: Vec<_> = forest.roots().iter().map(|n| (n, None)).collect();
    append_nodes(&mut result, &roots, "");
    result
}

fn append_nodes<K: NodeKind>(result: &mut String, nodes: &[(&Node<K>, Option<&str>)], prefix: &str) {
    for (i, (node, marker)) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        append_node(result, node, *marker, prefix, is_last);
    }
}

fn append_node<K: NodeKind>(
    result: &mut String,
    node: &Node<K>,
    marker: Option<&str>,
    prefix: &str,
    is_last: bool,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let marker = marker.map(|m| format!("{m} ")).unwrap_or_default();

    result.push_str(&format!(
        "{}{} {}{}{}\n",
        prefix,
        connector,
        marker,
        truncate(&node.to_string(), MAX_LABEL),
        flag_icons(node)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let below: Vec<_> = node
        .synonyms()
        .iter()
        .map(|s| (s, Some(if s.is_homotypic() { "≡" } else { "=" })))
        .chain(node.children().iter().map(|c| (c, None)))
        .collect();
    append_nodes(result, &below, &new_prefix);
}

fn flag_icons<K: NodeKind>(node: &Node<K>) -> String {
    let mut icons = String::new();
    for (set, icon) in [
        (node.is_extinct(), " †"),
        (node.is_basionym(), " $"),
        (node.is_provisional(), " ?"),
    ] {
        if set {
            icons.push_str(icon);
        }
    }
    icons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txtree::parsing::parse_simple;

    #[test]
    fn test_treeviz() {
        let forest = parse_simple(
            "Abies [genus]\n  ≡Picea\n  †Abies alba [species]\n    =$Abies pectinata\n  Abies nordmanniana\nPinus\n",
        )
        .unwrap();
        insta::assert_snapshot!(to_treeviz_str(&forest), @r"
        ├─ Abies [genus]
        │ ├─ ≡ Picea
        │ ├─ Abies alba [species] †
        │ │ └─ = Abies pectinata $
        │ └─ Abies nordmanniana
        └─ Pinus
        ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Abies", 10), "Abies");
        assert_eq!(truncate("Abies alba", 5), "Abies…");
    }
}
