use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};

use crate::app::resources::TreeState;

/// Disambiguation window shown while a search has several candidates.
pub fn search_overlay(mut contexts: EguiContexts, mut st: ResMut<TreeState>) {
    let Some(candidates) = st.view.pending_choice() else {
        return;
    };

    let mut picked: Option<usize> = None;
    let mut cancelled = false;
    egui::Window::new(format!("Found {} people with that name", candidates.len()))
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 60.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Pick one:");
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .max_height(260.0)
                .show(ui, |ui| {
                    for (i, c) in candidates.iter().enumerate() {
                        let label = format!("{}) {}", i + 1, c.lineage);
                        if ui.selectable_label(false, label).clicked() {
                            picked = Some(i);
                        }
                    }
                });
            ui.separator();
            if ui.button("Cancel (Esc)").clicked() {
                cancelled = true;
            }
        });

    if picked.is_some() || cancelled {
        st.view.choose(picked);
    }
}
