use crate::hierarchy::{Link, Point, TreeNode};
use crate::viewport::ViewportTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    Normal,
    OnPath,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Normal,
    OnPath,
}

/// Drawing backend. Positions are drawing coordinates; the backend maps
/// them to the screen with the transform it was last given.
pub trait TreeRenderer {
    fn set_transform(&mut self, transform: ViewportTransform);

    fn draw_link(&mut self, link: Link, from: Point, to: Point, style: LinkStyle);

    fn draw_node(&mut self, node: &TreeNode, at: Point, style: NodeStyle);

    /// Free-standing annotation on a link (the child's comment).
    fn draw_link_label(&mut self, _link: Link, _at: Point, _text: &str) {}
}

pub fn tooltip_lines(node: &TreeNode) -> Vec<String> {
    let mut lines = vec![node.name.clone()];
    if node.born.is_some() || node.died.is_some() {
        lines.push(format!(
            "Born: {} • Died: {}",
            node.born.as_deref().unwrap_or("—"),
            node.died.as_deref().unwrap_or("—")
        ));
    } else {
        lines.push("Hover to explore • Use search to show lineage".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{NodeId, Tree};
    use crate::settings::LayoutConfig;
    use crate::PersonRecord;

    fn node(born: Option<&str>, died: Option<&str>) -> TreeNode {
        let rec = PersonRecord {
            name: "Ada".to_string(),
            born: born.map(str::to_string),
            died: died.map(str::to_string),
            ..PersonRecord::default()
        };
        let tree = Tree::build(&rec, &LayoutConfig::default());
        tree.node(NodeId(0)).cloned().expect("root")
    }

    #[test]
    fn tooltip_shows_dates_with_dash_for_missing() {
        let lines = tooltip_lines(&node(Some("1815"), None));
        assert_eq!(lines, vec!["Ada".to_string(), "Born: 1815 • Died: —".to_string()]);
    }

    #[test]
    fn tooltip_without_dates_shows_hint() {
        let lines = tooltip_lines(&node(None, None));
        assert_eq!(lines[1], "Hover to explore • Use search to show lineage");
    }
}
