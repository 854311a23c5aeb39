use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::window::PrimaryWindow;
use famtree_core::{
    link_curve, Link, LinkStyle, NodeId, NodeStyle, Point, TreeNode, TreeRenderer,
    ViewportTransform,
};

use crate::app::resources::TreeState;
use crate::render::camera::{apply_camera, to_world};

const NODE_RADIUS: f32 = 7.0;
const CURVE_SEGMENTS: usize = 16;
const LABEL_DX: f32 = 12.0;
const LABEL_LIFT: f32 = 5.0;

const LINK_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.25);
const LINK_ON_PATH: Color = Color::srgb(1.0, 0.82, 0.4);
const NODE_COLOR: Color = Color::srgb(0.85, 0.75, 0.7);
const NODE_ON_PATH: Color = Color::srgb(1.0, 0.82, 0.4);
const NODE_TARGET: Color = Color::srgb(1.0, 0.45, 0.3);
const LABEL_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.92);
const COMMENT_COLOR: Color = Color::srgba(1.0, 0.9, 0.8, 0.7);

#[derive(Component)]
pub struct NodeLabel(pub NodeId);

#[derive(Component)]
pub struct LinkLabel;

struct GizmoRenderer<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    transform: ViewportTransform,
}

impl TreeRenderer for GizmoRenderer<'_, '_, '_> {
    fn set_transform(&mut self, transform: ViewportTransform) {
        self.transform = transform;
    }

    fn draw_link(&mut self, _link: Link, from: Point, to: Point, style: LinkStyle) {
        let color = match style {
            LinkStyle::Normal => LINK_COLOR,
            LinkStyle::OnPath => LINK_ON_PATH,
        };
        self.gizmos
            .linestrip_2d(curve_points(from, to).into_iter().map(to_world), color);
    }

    fn draw_node(&mut self, _node: &TreeNode, at: Point, style: NodeStyle) {
        let centre = to_world(at);
        match style {
            NodeStyle::Normal => self.gizmos.circle_2d(centre, NODE_RADIUS, NODE_COLOR),
            NodeStyle::OnPath => self.gizmos.circle_2d(centre, NODE_RADIUS, NODE_ON_PATH),
            NodeStyle::Target => {
                self.gizmos.circle_2d(centre, NODE_RADIUS, NODE_TARGET);
                self.gizmos
                    .circle_2d(centre, NODE_RADIUS + 4.0, NODE_TARGET)
            }
        };
    }
}

/// Sampled horizontal cubic between two drawing-space points.
pub fn curve_points(from: Point, to: Point) -> Vec<Point> {
    let [p0, p1, p2, p3] = link_curve(from, to);
    (0..=CURVE_SEGMENTS)
        .map(|i| {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            let u = 1.0 - t;
            let a = u * u * u;
            let b = 3.0 * u * u * t;
            let c = 3.0 * u * t * t;
            let d = t * t * t;
            Point::new(
                a * p0.x + b * p1.x + c * p2.x + d * p3.x,
                a * p0.y + b * p1.y + c * p2.y + d * p3.y,
            )
        })
        .collect()
}

pub fn draw_tree(
    st: Res<TreeState>,
    mut gizmos: Gizmos,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cam_q: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    let mut out = GizmoRenderer {
        gizmos: &mut gizmos,
        transform: ViewportTransform::IDENTITY,
    };
    st.view.render(&mut out);
    let transform = out.transform;

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((mut cam_tf, mut projection)) = cam_q.get_single_mut() else {
        return;
    };
    apply_camera(transform, window, &mut cam_tf, &mut projection);
}

pub fn sync_labels(
    mut commands: Commands,
    mut st: ResMut<TreeState>,
    existing: Query<Entity, Or<(With<NodeLabel>, With<LinkLabel>)>>,
) {
    if !st.ui.labels_dirty {
        return;
    }
    st.ui.labels_dirty = false;

    for e in existing.iter() {
        commands.entity(e).despawn_recursive();
    }

    let font_size = st.cfg.label_font_size;
    let tree = st.view.tree();
    for node in tree.nodes() {
        let Some(at) = tree.anchor(node.id) else {
            continue;
        };
        let pos = to_world(Point::new(at.x + LABEL_DX, at.y - LABEL_LIFT));
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    node.display_name(),
                    TextStyle {
                        font_size,
                        color: LABEL_COLOR,
                        ..default()
                    },
                ),
                text_anchor: Anchor::CenterLeft,
                transform: Transform::from_translation(pos.extend(1.0)),
                ..default()
            },
            NodeLabel(node.id),
        ));
    }

    if !st.cfg.show_link_comments {
        return;
    }
    for &link in tree.links() {
        let Some((at, text)) = tree.link_label_anchor(link) else {
            continue;
        };
        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    text,
                    TextStyle {
                        font_size: font_size * 0.85,
                        color: COMMENT_COLOR,
                        ..default()
                    },
                ),
                text_anchor: Anchor::Center,
                transform: Transform::from_translation(to_world(at).extend(2.0)),
                ..default()
            },
            LinkLabel,
        ));
    }
}

pub fn style_labels(st: Res<TreeState>, mut labels: Query<(&NodeLabel, &mut Text)>) {
    for (NodeLabel(id), mut text) in labels.iter_mut() {
        let color = match st.view.node_style(*id) {
            NodeStyle::Normal => LABEL_COLOR,
            NodeStyle::OnPath => NODE_ON_PATH,
            NodeStyle::Target => NODE_TARGET,
        };
        for section in text.sections.iter_mut() {
            if section.style.color != color {
                section.style.color = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_starts_and_ends_on_endpoints() {
        let from = Point::new(10.0, 20.0);
        let to = Point::new(270.0, 80.0);
        let pts = curve_points(from, to);
        assert_eq!(pts.len(), CURVE_SEGMENTS + 1);
        assert!(pts[0].distance(from) < 1e-4);
        assert!(pts[CURVE_SEGMENTS].distance(to) < 1e-3);
        let mid = pts[CURVE_SEGMENTS / 2];
        assert!((mid.x - 140.0).abs() < 1e-3);
        assert!((mid.y - 50.0).abs() < 1e-3);
    }
}
