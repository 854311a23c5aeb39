use std::time::Duration;

use crate::hierarchy::{NodeId, Point, Tree};
use crate::index::{normalize_name, NameIndex};
use crate::path::HighlightState;
use crate::render::{LinkStyle, NodeStyle, TreeRenderer};
use crate::resolve::{resolve, Candidate, Resolution};
use crate::settings::ViewSettings;
use crate::viewport::{Gesture, ViewportController, ViewportTransform};
use crate::PersonRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank query; nothing happened and nothing should be shown.
    Ignored,
    /// Nothing indexed under the query. The host should tell the user.
    NotFound { query: String },
    Highlighted(NodeId),
    /// Several people share the name. Answer with [`TreeView::choose`].
    NeedsChoice(Vec<Candidate>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    Highlighted(NodeId),
    Dismissed,
}

/// One interactive tree view: the tree, its index, what is highlighted,
/// the viewport and an outstanding disambiguation, if any.
#[derive(Debug, Clone)]
pub struct TreeView {
    tree: Tree,
    index: NameIndex,
    highlight: HighlightState,
    viewport: ViewportController,
    pending: Option<Vec<Candidate>>,
    settings: ViewSettings,
}

impl TreeView {
    pub fn new(root: &PersonRecord, settings: ViewSettings, width: f32, height: f32) -> Self {
        let tree = Tree::build(root, &settings.layout);
        let index = NameIndex::build(&tree);
        let (min_scale, max_scale) = settings.scale_bounds();
        let mut viewport = ViewportController::new(width, height, min_scale, max_scale);
        viewport.set_transform(settings.initial_transform);
        Self {
            tree,
            index,
            highlight: HighlightState::default(),
            viewport,
            pending: None,
            settings,
        }
    }

    /// Replace the dataset. Highlight and pending choice refer to the old
    /// tree and are dropped; the viewport stays where it is.
    pub fn rebuild(&mut self, root: &PersonRecord) {
        self.tree = Tree::build(root, &self.settings.layout);
        self.index = NameIndex::build(&self.tree);
        self.highlight = HighlightState::default();
        self.pending = None;
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn transform(&self) -> ViewportTransform {
        self.viewport.transform()
    }

    pub fn pending_choice(&self) -> Option<&[Candidate]> {
        self.pending.as_deref()
    }

    pub fn search(&mut self, query: &str) -> SearchOutcome {
        if normalize_name(query).is_empty() {
            return SearchOutcome::Ignored;
        }
        match resolve(&self.tree, &self.index, query) {
            Resolution::NoMatch => {
                tracing::debug!(query = query.trim(), "search found no match");
                if self.settings.clear_highlight_on_miss {
                    self.highlight = HighlightState::default();
                }
                SearchOutcome::NotFound {
                    query: query.trim().to_string(),
                }
            }
            Resolution::SingleMatch(id) => {
                self.pending = None;
                self.highlight_target(id);
                SearchOutcome::Highlighted(id)
            }
            Resolution::AmbiguousMatch(candidates) => {
                tracing::debug!(
                    query = query.trim(),
                    candidates = candidates.len(),
                    "search needs disambiguation"
                );
                self.pending = Some(candidates.clone());
                SearchOutcome::NeedsChoice(candidates)
            }
        }
    }

    /// Answer the outstanding disambiguation. `None` cancels; an index out of
    /// range is treated the same way. Either leaves the view untouched.
    pub fn choose(&mut self, selection: Option<usize>) -> ChoiceOutcome {
        let Some(candidates) = self.pending.take() else {
            return ChoiceOutcome::Dismissed;
        };
        match Resolution::AmbiguousMatch(candidates).select(selection) {
            Some(id) => {
                self.highlight_target(id);
                ChoiceOutcome::Highlighted(id)
            }
            None => {
                tracing::debug!(?selection, "disambiguation dismissed");
                ChoiceOutcome::Dismissed
            }
        }
    }

    /// Highlight the path to `id` and start centring the viewport on it.
    pub fn highlight_target(&mut self, id: NodeId) {
        let Some(anchor) = self.tree.anchor(id) else {
            return;
        };
        self.highlight = HighlightState::for_target(&self.tree, id);
        tracing::debug!(
            node = id.0,
            on_path = self.highlight.on_path_nodes().len(),
            "highlighted lineage"
        );
        self.viewport.center_on(
            anchor,
            self.settings.focus_scale,
            self.settings.center_duration(),
        );
    }

    pub fn reset(&mut self) {
        self.highlight = HighlightState::default();
        self.pending = None;
        self.viewport.reset(self.settings.reset_duration());
    }

    pub fn apply_user_transform(&mut self, gesture: Gesture) {
        self.viewport.apply_user_transform(gesture);
    }

    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.viewport.set_size(width, height);
    }

    /// Advance viewport animation to `now` (host clock). True if it moved.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.viewport.tick(now)
    }

    /// Nearest node within `radius` screen units of `screen`.
    pub fn node_at(&self, screen: Point, radius: f32) -> Option<NodeId> {
        let mut best: Option<(f32, NodeId)> = None;
        for node in self.tree.nodes() {
            let Some(anchor) = self.tree.anchor(node.id) else {
                continue;
            };
            let d = self.viewport.to_screen(anchor).distance(screen);
            if d < radius && best.map(|(bd, _)| d < bd).unwrap_or(true) {
                best = Some((d, node.id));
            }
        }
        best.map(|(_, id)| id)
    }

    pub fn node_style(&self, id: NodeId) -> NodeStyle {
        if self.highlight.is_target(id) {
            NodeStyle::Target
        } else if self.highlight.is_node_on_path(id) {
            NodeStyle::OnPath
        } else {
            NodeStyle::Normal
        }
    }

    /// Links first, then link labels, then nodes on top.
    pub fn render(&self, out: &mut impl TreeRenderer) {
        out.set_transform(self.viewport.transform());
        for &link in self.tree.links() {
            let (Some(from), Some(to)) = (self.tree.anchor(link.parent), self.tree.anchor(link.child))
            else {
                continue;
            };
            let style = if self.highlight.is_link_on_path(link) {
                LinkStyle::OnPath
            } else {
                LinkStyle::Normal
            };
            out.draw_link(link, from, to, style);
        }
        for &link in self.tree.links() {
            if let Some((at, text)) = self.tree.link_label_anchor(link) {
                out.draw_link_label(link, at, text);
            }
        }
        for node in self.tree.nodes() {
            let at = node.pos + self.tree.origin();
            out.draw_node(node, at, self.node_style(node.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> TreeView {
        let rec = PersonRecord::new("Root").with_children(vec![
            PersonRecord::new("Sam"),
            PersonRecord::new("Ann").with_children(vec![PersonRecord::new("Sam")]),
        ]);
        TreeView::new(&rec, ViewSettings::default(), 800.0, 600.0)
    }

    #[test]
    fn starts_at_initial_transform() {
        let v = view();
        assert_eq!(v.transform(), ViewportTransform::new(30.0, 10.0, 0.9));
        assert!(v.highlight().is_empty());
    }

    #[test]
    fn new_search_replaces_pending_choice() {
        let mut v = view();
        assert!(matches!(v.search("sam"), SearchOutcome::NeedsChoice(_)));
        assert_eq!(v.pending_choice().map(<[Candidate]>::len), Some(2));

        assert_eq!(v.search("ann"), SearchOutcome::Highlighted(NodeId(2)));
        assert!(v.pending_choice().is_none());
        assert_eq!(v.choose(Some(0)), ChoiceOutcome::Dismissed);
        assert!(v.highlight().is_target(NodeId(2)));
    }

    #[test]
    fn miss_can_optionally_clear_highlight() {
        let rec = PersonRecord::new("Root").with_children(vec![PersonRecord::new("Kid")]);
        let settings = ViewSettings {
            clear_highlight_on_miss: true,
            ..ViewSettings::default()
        };
        let mut v = TreeView::new(&rec, settings, 800.0, 600.0);
        v.search("kid");
        assert!(!v.highlight().is_empty());
        assert_eq!(
            v.search("nobody"),
            SearchOutcome::NotFound {
                query: "nobody".to_string()
            }
        );
        assert!(v.highlight().is_empty());
    }

    #[test]
    fn rebuild_drops_highlight_and_reindexes() {
        let mut v = view();
        v.search("ann");
        v.rebuild(&PersonRecord::new("Solo"));
        assert!(v.highlight().is_empty());
        assert_eq!(v.tree().len(), 1);
        assert!(matches!(v.search("ann"), SearchOutcome::NotFound { .. }));
        assert_eq!(v.search("solo"), SearchOutcome::Highlighted(NodeId(0)));
    }

    #[test]
    fn node_at_picks_nearest_in_screen_space() {
        let v = view();
        let anchor = v.tree().anchor(NodeId(2)).expect("anchor");
        let screen = v.viewport().to_screen(anchor);
        let probe = Point::new(screen.x + 3.0, screen.y - 2.0);
        assert_eq!(v.node_at(probe, 14.0), Some(NodeId(2)));
        assert_eq!(v.node_at(Point::new(-5000.0, -5000.0), 14.0), None);
    }
}
