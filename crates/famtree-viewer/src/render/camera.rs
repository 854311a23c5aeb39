use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use famtree_core::{Point, ViewportTransform};

use crate::app::resources::TreeState;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

/// Drawing coordinates grow downwards; bevy world y grows upwards.
pub fn to_world(p: Point) -> Vec2 {
    Vec2::new(p.x, -p.y)
}

/// Camera translation and orthographic scale that reproduce `t` on a
/// window of `width` x `height` logical pixels.
pub fn camera_pose(t: ViewportTransform, width: f32, height: f32) -> (Vec2, f32) {
    let centre = t.invert(Point::new(width / 2.0, height / 2.0));
    (to_world(centre), 1.0 / t.k)
}

pub fn tick_viewport(
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut st: ResMut<TreeState>,
) {
    if let Ok(window) = windows.get_single() {
        let (w, h) = st.view.viewport().size();
        if w != window.width() || h != window.height() {
            st.view.set_viewport_size(window.width(), window.height());
        }
    }
    st.view.tick(time.elapsed());
}

pub fn apply_camera(
    t: ViewportTransform,
    window: &Window,
    cam_tf: &mut Transform,
    projection: &mut OrthographicProjection,
) {
    let (pos, scale) = camera_pose(t, window.width(), window.height());
    cam_tf.translation.x = pos.x;
    cam_tf.translation.y = pos.y;
    projection.scale = scale;
}
