use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::app::resources::TreeState;

pub fn handle_shortcuts(mut contexts: EguiContexts, mut st: ResMut<TreeState>) {
    let ctx = contexts.ctx_mut();
    let esc_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    let wants_keyboard = ctx.wants_keyboard_input();

    if esc_pressed {
        if st.ui.help_open {
            st.ui.help_open = false;
        } else if st.view.pending_choice().is_some() {
            st.view.choose(None);
        } else {
            st.view.reset();
            st.ui.query.clear();
            st.ui.notice = None;
        }
    }

    if wants_keyboard {
        return;
    }

    if ctx.input(|i| i.key_pressed(egui::Key::Questionmark)) {
        st.ui.help_open = !st.ui.help_open;
    }
    if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
        st.ui.reload_requested = true;
    }
}
