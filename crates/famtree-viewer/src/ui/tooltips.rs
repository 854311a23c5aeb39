use bevy::prelude::Res;
use bevy_egui::{egui, EguiContexts};
use famtree_core::tooltip_lines;

use crate::app::resources::TreeState;

/// First line is the heading, the rest are muted.
pub fn render_tooltip(
    ctx: &egui::Context,
    id: &str,
    pos: egui::Pos2,
    lines: impl IntoIterator<Item = String>,
) {
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Tooltip)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            ui.group(|ui| {
                for (i, line) in lines.into_iter().enumerate() {
                    if i == 0 {
                        ui.label(egui::RichText::new(line).strong());
                    } else {
                        ui.label(egui::RichText::new(line).weak());
                    }
                }
            });
        });
}

pub fn hover_tooltip(mut contexts: EguiContexts, st: Res<TreeState>) {
    let Some(node) = st.ui.hovered.and_then(|id| st.view.tree().node(id)) else {
        return;
    };
    let ctx = contexts.ctx_mut();
    let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) else {
        return;
    };
    render_tooltip(
        ctx,
        "tooltip_node",
        pos + egui::vec2(14.0, 14.0),
        tooltip_lines(node),
    );
}
