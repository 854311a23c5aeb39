use crate::hierarchy::{NodeId, Tree};
use crate::index::{normalize_name, NameIndex};

pub const LINEAGE_SEPARATOR: &str = " → ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,
    /// Names from the root down to this node.
    pub lineage: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NoMatch,
    SingleMatch(NodeId),
    AmbiguousMatch(Vec<Candidate>),
}

impl Resolution {
    /// Final pick for a resolution. Out-of-range or missing selections
    /// on an ambiguous match resolve to nothing.
    pub fn select(&self, selection: Option<usize>) -> Option<NodeId> {
        match self {
            Resolution::NoMatch => None,
            Resolution::SingleMatch(id) => Some(*id),
            Resolution::AmbiguousMatch(candidates) => {
                selection.and_then(|i| candidates.get(i)).map(|c| c.node)
            }
        }
    }
}

pub fn resolve(tree: &Tree, index: &NameIndex, query: &str) -> Resolution {
    if normalize_name(query).is_empty() {
        return Resolution::NoMatch;
    }
    match index.lookup(query) {
        [] => Resolution::NoMatch,
        [only] => Resolution::SingleMatch(*only),
        many => Resolution::AmbiguousMatch(
            many.iter()
                .map(|&node| Candidate {
                    node,
                    lineage: lineage_label(tree, node),
                })
                .collect(),
        ),
    }
}

/// Root-first path ending at `id`.
pub fn lineage(tree: &Tree, id: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut cur = tree.node(id).map(|n| n.id);
    while let Some(node) = cur {
        out.push(node);
        cur = tree.parent(node);
    }
    out.reverse();
    out
}

pub fn lineage_label(tree: &Tree, id: NodeId) -> String {
    lineage(tree, id)
        .into_iter()
        .filter_map(|n| tree.node(n))
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(LINEAGE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LayoutConfig;
    use crate::PersonRecord;

    fn sams() -> Tree {
        let rec = PersonRecord::new("Root").with_children(vec![
            PersonRecord::new("Sam"),
            PersonRecord::new("Ann").with_children(vec![PersonRecord::new("Sam")]),
        ]);
        Tree::build(&rec, &LayoutConfig::default())
    }

    #[test]
    fn single_match_is_auto_selected() {
        let tree = sams();
        let index = NameIndex::build(&tree);
        let res = resolve(&tree, &index, "ANN");
        assert_eq!(res, Resolution::SingleMatch(NodeId(2)));
        assert_eq!(res.select(None), Some(NodeId(2)));
    }

    #[test]
    fn ambiguous_match_carries_lineages_in_index_order() {
        let tree = sams();
        let index = NameIndex::build(&tree);
        let Resolution::AmbiguousMatch(candidates) = resolve(&tree, &index, " sam ") else {
            panic!("expected ambiguous match");
        };
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].node, NodeId(1));
        assert_eq!(candidates[0].lineage, "Root → Sam");
        assert_eq!(candidates[1].node, NodeId(3));
        assert_eq!(candidates[1].lineage, "Root → Ann → Sam");
    }

    #[test]
    fn ambiguous_selection_out_of_range_or_cancelled_is_none() {
        let tree = sams();
        let index = NameIndex::build(&tree);
        let res = resolve(&tree, &index, "sam");
        assert_eq!(res.select(Some(1)), Some(NodeId(3)));
        assert_eq!(res.select(Some(2)), None);
        assert_eq!(res.select(None), None);
    }

    #[test]
    fn blank_and_absent_queries_do_not_match() {
        let tree = sams();
        let index = NameIndex::build(&tree);
        assert_eq!(resolve(&tree, &index, "   "), Resolution::NoMatch);
        assert_eq!(resolve(&tree, &index, "zzz"), Resolution::NoMatch);
        assert_eq!(resolve(&tree, &index, "zzz").select(Some(0)), None);
    }

    #[test]
    fn lineage_reversed_walks_up_to_root() {
        let tree = sams();
        let mut path = lineage(&tree, NodeId(3));
        path.reverse();
        let mut walk = vec![NodeId(3)];
        let mut cur = NodeId(3);
        while let Some(p) = tree.parent(cur) {
            walk.push(p);
            cur = p;
        }
        assert_eq!(path, walk);
    }
}
