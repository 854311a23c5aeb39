use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};

use crate::app::resources::TreeState;

pub fn help_overlay(mut contexts: EguiContexts, st: Res<TreeState>) {
    if !st.ui.help_open {
        return;
    }

    egui::Window::new("Help / Shortcuts")
        .collapsible(false)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Enter — Search for the typed name");
            ui.label("Esc — Cancel a pending choice, otherwise reset the view");
            ui.label("Drag — Pan");
            ui.label("Wheel — Zoom around the cursor");
            ui.label("F5 — Reload the family file");
            ui.label("? — Toggle help");
        });
}
