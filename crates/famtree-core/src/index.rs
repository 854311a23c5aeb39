use std::collections::HashMap;

use crate::hierarchy::{NodeId, Tree};

/// Index key for a name: surrounding whitespace trimmed, lower-cased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive name lookup. Built once per tree and never patched;
/// rebuild it together with the tree.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    by_name: HashMap<String, Vec<NodeId>>,
}

impl NameIndex {
    pub fn build(tree: &Tree) -> Self {
        let mut by_name: HashMap<String, Vec<NodeId>> = HashMap::new();
        for node in tree.nodes() {
            let key = normalize_name(&node.name);
            if key.is_empty() {
                continue;
            }
            by_name.entry(key).or_default().push(node.id);
        }
        Self { by_name }
    }

    /// Nodes whose normalized name equals the normalized query, in tree order.
    pub fn lookup(&self, query: &str) -> &[NodeId] {
        self.by_name
            .get(&normalize_name(query))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
