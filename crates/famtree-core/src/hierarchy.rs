use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::{Add, Sub};

use crate::settings::LayoutConfig;
use crate::PersonRecord;

/// Link labels float this far above the link midpoint.
pub const LINK_LABEL_LIFT: f32 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A parent → child edge. Every non-root node owns exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub parent: NodeId,
    pub child: NodeId,
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    pub name: String,
    pub born: Option<String>,
    pub died: Option<String>,
    pub comment: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub depth: usize,
    /// Layout position: `x` runs along depth (left to right), `y` along
    /// sibling order. Fixed once the tree is built.
    pub pos: Point,
}

impl TreeNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "(no name)"
        } else {
            &self.name
        }
    }
}

/// Arena-backed person tree. Node ids are assigned breadth-first, so
/// `NodeId(0)` is always the root and arena order is traversal order.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    links: Vec<Link>,
    origin: Point,
}

impl Tree {
    /// Input must be tree-shaped; records reachable twice are not detected.
    pub fn build(root: &PersonRecord, cfg: &LayoutConfig) -> Self {
        let mut nodes: Vec<TreeNode> = Vec::new();
        let mut queue: VecDeque<(&PersonRecord, Option<NodeId>, usize)> = VecDeque::new();
        queue.push_back((root, None, 0));

        while let Some((rec, parent, depth)) = queue.pop_front() {
            let id = NodeId(nodes.len());
            if let Some(parent) = parent {
                nodes[parent.0].children.push(id);
            }
            nodes.push(TreeNode {
                id,
                name: rec.name.clone(),
                born: rec.born.clone(),
                died: rec.died.clone(),
                comment: rec.comment.clone(),
                parent,
                children: Vec::new(),
                depth,
                pos: Point::default(),
            });
            for child in &rec.children {
                queue.push_back((child, Some(id), depth + 1));
            }
        }

        let links = nodes
            .iter()
            .filter_map(|n| n.parent.map(|parent| Link { parent, child: n.id }))
            .collect();

        let mut tree = Self {
            nodes,
            links,
            origin: Point::new(cfg.origin_x, cfg.origin_y),
        };
        tree.layout(cfg);

        tracing::info!(
            nodes = tree.len(),
            links = tree.links.len(),
            max_depth = tree.max_depth(),
            "tree built"
        );
        tree
    }

    fn layout(&mut self, cfg: &LayoutConfig) {
        let mut slots = vec![0.0f32; self.nodes.len()];
        let mut cursor = 0.0;
        layout_subtree(&self.nodes, NodeId(0), &mut cursor, &mut slots);

        // Anchor the root on the origin's order axis.
        let root_slot = slots[0];
        for node in self.nodes.iter_mut() {
            node.pos = Point::new(
                node.depth as f32 * cfg.level_spacing,
                (slots[node.id.0] - root_slot) * cfg.sibling_spacing,
            );
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.node(id).map(|n| n.depth)
    }

    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Position in drawing coordinates (layout position shifted by the origin).
    pub fn anchor(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.pos + self.origin)
    }

    /// Label position for links whose child carries a non-blank comment.
    pub fn link_label_anchor(&self, link: Link) -> Option<(Point, &str)> {
        let child = self.node(link.child)?;
        let comment = child.comment.as_deref().map(str::trim)?;
        if comment.is_empty() {
            return None;
        }
        let a = self.anchor(link.parent)?;
        let b = self.anchor(link.child)?;
        let mid = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0 - LINK_LABEL_LIFT);
        Some((mid, comment))
    }

    /// Min/max drawing coordinates over all nodes.
    pub fn bounds(&self) -> (Point, Point) {
        let mut min = Point::new(f32::INFINITY, f32::INFINITY);
        let mut max = Point::new(f32::NEG_INFINITY, f32::NEG_INFINITY);
        for node in &self.nodes {
            let p = node.pos + self.origin;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        if !min.x.is_finite() {
            return (self.origin, self.origin);
        }
        (min, max)
    }
}

// Leaves take consecutive slots; a parent sits midway between its first and
// last child. Returns the slot assigned to `id`.
fn layout_subtree(nodes: &[TreeNode], id: NodeId, cursor: &mut f32, slots: &mut [f32]) -> f32 {
    let kids = &nodes[id.0].children;
    let slot = match (kids.first(), kids.last()) {
        (Some(&first), Some(&last)) => {
            let mut first_slot = 0.0;
            let mut last_slot = 0.0;
            for &kid in kids {
                let s = layout_subtree(nodes, kid, cursor, slots);
                if kid == first {
                    first_slot = s;
                }
                if kid == last {
                    last_slot = s;
                }
            }
            (first_slot + last_slot) / 2.0
        }
        _ => {
            let s = *cursor;
            *cursor += 1.0;
            s
        }
    };
    slots[id.0] = slot;
    slot
}

/// Control points of a horizontal cubic link from `from` to `to`.
pub fn link_curve(from: Point, to: Point) -> [Point; 4] {
    let mid_x = (from.x + to.x) / 2.0;
    [from, Point::new(mid_x, from.y), Point::new(mid_x, to.y), to]
}
