use crate::txtree::ast::{Forest, Node, NodeKind};

pub fn assert_forest<K: NodeKind>(forest: &Forest<K>) -> ForestAssertion<'_, K> {
    ForestAssertion { forest }
}

pub struct ForestAssertion<'a, K: NodeKind> {
    forest: &'a Forest<K>,
}

impl<'a, K: NodeKind> ForestAssertion<'a, K> {
    pub fn root_count(self, expected: usize) -> Self {
        let actual = self.forest.roots().len();
        assert_eq!(
            actual, expected,
            "forest: Expected {expected} roots, found {actual} roots"
        );
        self
    }

    /// Total number of nodes, synonyms included
    pub fn size(self, expected: usize) -> Self {
        let actual = self.forest.size();
        assert_eq!(
            actual, expected,
            "forest: Expected {expected} nodes, found {actual} nodes"
        );
        self
    }

    pub fn root<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a, K>) -> NodeAssertion<'a, K>,
    {
        let roots = self.forest.roots();
        assert!(
            index < roots.len(),
            "forest: Root index {} out of bounds (forest has {} roots)",
            index,
            roots.len()
        );
        assertion(NodeAssertion {
            node: &roots[index],
            context: format!("roots[{index}]"),
        });
        self
    }

    /// The names in flattened order
    pub fn flattened(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.forest.iter().map(|n| n.name()).collect();
        assert_eq!(actual, expected, "forest: Flattened names differ");
        self
    }
}

pub struct NodeAssertion<'a, K: NodeKind> {
    node: &'a Node<K>,
    context: String,
}

impl<'a, K: NodeKind> NodeAssertion<'a, K> {
    pub fn node(&self) -> &'a Node<K> {
        self.node
    }

    pub fn id(self, expected: usize) -> Self {
        assert_eq!(
            self.node.id(),
            expected,
            "{}: Expected id {}, found {}",
            self.context,
            expected,
            self.node.id()
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.node.name(),
            expected,
            "{}: Expected name '{}', found '{}'",
            self.context,
            expected,
            self.node.name()
        );
        self
    }

    pub fn rank_tag(self, expected: &str) -> Self {
        assert_eq!(
            self.node.rank_tag(),
            Some(expected),
            "{}: Expected rank '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn unranked(self) -> Self {
        assert!(
            self.node.rank().is_none(),
            "{}: Expected no rank, found {:?}",
            self.context,
            self.node.rank_tag()
        );
        self
    }

    pub fn basionym(self, expected: bool) -> Self {
        let actual = self.node.is_basionym();
        self.flag("basionym", actual, expected)
    }

    pub fn extinct(self, expected: bool) -> Self {
        let actual = self.node.is_extinct();
        self.flag("extinct", actual, expected)
    }

    pub fn provisional(self, expected: bool) -> Self {
        let actual = self.node.is_provisional();
        self.flag("provisional", actual, expected)
    }

    pub fn homotypic(self, expected: bool) -> Self {
        let actual = self.node.is_homotypic();
        self.flag("homotypic", actual, expected)
    }

    fn flag(self, label: &str, actual: bool, expected: bool) -> Self {
        assert_eq!(
            actual, expected,
            "{}: Expected {} to be {}",
            self.context, label, expected
        );
        self
    }

    pub fn comment(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.node.comment(),
            expected,
            "{}: Comment differs",
            self.context
        );
        self
    }

    pub fn info(self, key: &str, expected: &[&str]) -> Self {
        let actual = self.node.infos().get(key);
        assert!(
            actual.is_some(),
            "{}: Expected info key '{}', found keys {:?}",
            self.context,
            key,
            self.node.infos().keys().collect::<Vec<_>>()
        );
        assert_eq!(
            actual.unwrap_or_default(),
            expected,
            "{}: Values of info '{}' differ",
            self.context,
            key
        );
        self
    }

    pub fn info_count(self, expected: usize) -> Self {
        let actual = self.node.infos().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} info keys, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} children, found {} children",
            self.context, expected, actual
        );
        self
    }

    pub fn synonym_count(self, expected: usize) -> Self {
        let actual = self.node.synonyms().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} synonyms, found {} synonyms",
            self.context, expected, actual
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a, K>) -> NodeAssertion<'a, K>,
    {
        let nodes = self.node.children();
        self.nested("children", nodes, index, assertion)
    }

    pub fn synonym<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a, K>) -> NodeAssertion<'a, K>,
    {
        let nodes = self.node.synonyms();
        self.nested("synonyms", nodes, index, assertion)
    }

    fn nested<F>(self, label: &str, nodes: &'a [Node<K>], index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a, K>) -> NodeAssertion<'a, K>,
    {
        assert!(
            index < nodes.len(),
            "{}: {} index {} out of bounds (node has {})",
            self.context,
            label,
            index,
            nodes.len()
        );
        assertion(NodeAssertion {
            node: &nodes[index],
            context: format!("{}:{}[{}]", self.context, label, index),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txtree::parsing::parse_simple;

    #[test]
    fn test_fluent_assertions() {
        let forest = parse_simple("A [genus]\n  =$B {ID=1,2}\n  †C # gone\n").unwrap();
        assert_forest(&forest)
            .root_count(1)
            .size(3)
            .flattened(&["A", "B", "C"])
            .root(0, |a| {
                a.id(1)
                    .name("A")
                    .rank_tag("genus")
                    .synonym_count(1)
                    .child_count(1)
                    .synonym(0, |b| b.name("B").basionym(true).unranked().info("ID", &["1", "2"]))
                    .child(0, |c| c.extinct(true).comment(Some("gone")).info_count(0))
            });
    }

    #[test]
    #[should_panic(expected = "roots[0]:children[0]: Expected name 'X', found 'B'")]
    fn test_failure_names_the_path() {
        let forest = parse_simple("A\n  B\n").unwrap();
        assert_forest(&forest).root(0, |a| a.child(0, |b| b.name("X")));
    }
}
