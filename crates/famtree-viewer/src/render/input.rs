use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;
use famtree_core::{Gesture, Point};

use crate::app::resources::TreeState;

const HOVER_RADIUS: f32 = 14.0;

pub fn wheel_zoom_factor(unit: MouseScrollUnit, y: f32) -> f32 {
    let exponent = match unit {
        MouseScrollUnit::Line => y * 0.25,
        MouseScrollUnit::Pixel => y * 0.002,
    };
    2f32.powf(exponent)
}

pub fn pan_zoom_input(
    buttons: Res<ButtonInput<MouseButton>>,
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut st: ResMut<TreeState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let ctx = contexts.ctx_mut();
    if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
        wheel.clear();
        st.ui.drag_last = None;
        return;
    }
    let cursor = window.cursor_position();

    for ev in wheel.read() {
        let Some(c) = cursor else {
            continue;
        };
        st.view.apply_user_transform(Gesture::Zoom {
            factor: wheel_zoom_factor(ev.unit, ev.y),
            anchor: Point::new(c.x, c.y),
        });
    }

    if !buttons.pressed(MouseButton::Left) {
        st.ui.drag_last = None;
        return;
    }
    let Some(c) = cursor else {
        return;
    };
    if let Some(last) = st.ui.drag_last {
        let d = c - last;
        if d != Vec2::ZERO {
            st.view.apply_user_transform(Gesture::Pan { dx: d.x, dy: d.y });
        }
    }
    st.ui.drag_last = Some(c);
}

pub fn hover_detection(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut st: ResMut<TreeState>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        st.ui.hovered = None;
        return;
    };
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }
    st.ui.hovered = st.view.node_at(Point::new(cursor.x, cursor.y), HOVER_RADIUS);
}
