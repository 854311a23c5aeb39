use bevy::log::{info, warn};
use bevy::prelude::ResMut;
use bevy_egui::{egui, EguiContexts};
use famtree_core::{SearchOutcome, TreeView};

use crate::app::resources::TreeState;
use crate::util::config;

pub const NO_MATCH_NOTICE: &str = "No exact match found. Try the full name exactly as in the data.";

/// Run one search. Returns the notice to show, if any; `None` also means
/// any previous notice should be cleared.
pub fn run_search(view: &mut TreeView, query: &str) -> Option<String> {
    match view.search(query) {
        SearchOutcome::NotFound { .. } => Some(NO_MATCH_NOTICE.to_string()),
        SearchOutcome::Ignored | SearchOutcome::Highlighted(_) | SearchOutcome::NeedsChoice(_) => {
            None
        }
    }
}

pub fn ui_panel(mut contexts: EguiContexts, mut st: ResMut<TreeState>) {
    egui::TopBottomPanel::top("top").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.heading("Family Tree");
            ui.separator();

            ui.label("Name:");
            let resp = ui.add(
                egui::TextEdit::singleline(&mut st.ui.query)
                    .hint_text("Search a name…")
                    .desired_width(240.0),
            );
            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Search").clicked() || enter {
                let query = st.ui.query.clone();
                st.ui.notice = run_search(&mut st.view, &query);
            }
            if ui.button("Reset").clicked() {
                st.view.reset();
                st.ui.query.clear();
                st.ui.notice = None;
            }

            ui.separator();
            let mut show = st.cfg.show_link_comments;
            ui.checkbox(&mut show, "Comments");
            if show != st.cfg.show_link_comments {
                st.cfg.show_link_comments = show;
                st.ui.labels_dirty = true;
            }
            if ui.button("Save settings").clicked() {
                match config::save(&st.cfg) {
                    Ok(()) => info!("viewer settings saved"),
                    Err(err) => warn!("{err:#}"),
                }
            }
            if ui.button("Reload").clicked() {
                st.ui.reload_requested = true;
            }

            ui.separator();
            ui.label(format!("people: {}", st.view.tree().len()));
            let t = st.view.transform();
            ui.label(format!("zoom: {:.0}%", t.k * 100.0));
        });

        if let Some(notice) = st.ui.notice.as_deref() {
            ui.colored_label(egui::Color32::from_rgb(255, 170, 120), notice);
        }
    });
}
