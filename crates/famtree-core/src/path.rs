use std::collections::HashSet;

use crate::hierarchy::{Link, NodeId, Tree};

/// Every node from `id` up to and including the root. O(depth).
pub fn ancestor_chain(tree: &Tree, id: NodeId) -> HashSet<NodeId> {
    let mut set = HashSet::new();
    let mut cur = tree.node(id).map(|n| n.id);
    while let Some(node) = cur {
        set.insert(node);
        cur = tree.parent(node);
    }
    set
}

pub fn edge_on_path(link: Link, chain: &HashSet<NodeId>) -> bool {
    chain.contains(&link.parent) && chain.contains(&link.child)
}

/// What the renderer should emphasise. Always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    on_path_nodes: HashSet<NodeId>,
    on_path_links: HashSet<Link>,
    target: Option<NodeId>,
}

impl HighlightState {
    pub fn for_target(tree: &Tree, target: NodeId) -> Self {
        if tree.node(target).is_none() {
            return Self::default();
        }
        let on_path_nodes = ancestor_chain(tree, target);
        let on_path_links = tree
            .links()
            .iter()
            .copied()
            .filter(|l| edge_on_path(*l, &on_path_nodes))
            .collect();
        Self {
            on_path_nodes,
            on_path_links,
            target: Some(target),
        }
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub fn on_path_nodes(&self) -> &HashSet<NodeId> {
        &self.on_path_nodes
    }

    pub fn on_path_links(&self) -> &HashSet<Link> {
        &self.on_path_links
    }

    pub fn is_node_on_path(&self, id: NodeId) -> bool {
        self.on_path_nodes.contains(&id)
    }

    pub fn is_link_on_path(&self, link: Link) -> bool {
        self.on_path_links.contains(&link)
    }

    pub fn is_target(&self, id: NodeId) -> bool {
        self.target == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }
}
