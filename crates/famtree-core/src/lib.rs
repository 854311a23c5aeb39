use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

pub mod hierarchy;
pub mod index;
pub mod path;
pub mod render;
pub mod resolve;
pub mod settings;
pub mod view;
pub mod viewport;

pub use hierarchy::{link_curve, Link, NodeId, Point, Tree, TreeNode};
pub use index::{normalize_name, NameIndex};
pub use path::{ancestor_chain, edge_on_path, HighlightState};
pub use render::{tooltip_lines, LinkStyle, NodeStyle, TreeRenderer};
pub use resolve::{lineage, lineage_label, resolve, Candidate, Resolution, LINEAGE_SEPARATOR};
pub use settings::{LayoutConfig, ViewSettings};
pub use view::{ChoiceOutcome, SearchOutcome, TreeView};
pub use viewport::{Animation, Gesture, ViewportController, ViewportTransform};

/// One person in the input document. Children are owned in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub died: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PersonRecord>,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<PersonRecord>) -> Self {
        self.children = children;
        self
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

pub fn load_dataset(path: &Path) -> anyhow::Result<PersonRecord> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    PersonRecord::from_json_str(&contents)
        .with_context(|| format!("failed to parse dataset {}", path.display()))
}
