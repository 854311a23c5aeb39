use bevy::prelude::*;

use crate::app::resources::TreeState;
use crate::util::config::ViewerConfig;

pub mod resources;

pub const INITIAL_WIDTH: f32 = 1280.0;
pub const INITIAL_HEIGHT: f32 = 800.0;

pub struct FamTreeViewerPlugin {
    pub cfg: ViewerConfig,
}

impl Plugin for FamTreeViewerPlugin {
    fn build(&self, app: &mut App) {
        let st = TreeState::new(self.cfg.clone(), INITIAL_WIDTH, INITIAL_HEIGHT);
        info!(
            people = st.view.tree().len(),
            names = st.view.index().len(),
            "family tree loaded"
        );
        app.insert_resource(st)
            .add_systems(Startup, crate::render::setup_scene)
            .add_systems(
                Update,
                (
                    reload_data,
                    crate::ui::handle_shortcuts,
                    crate::ui::ui_panel,
                    crate::ui::search_overlay,
                    crate::ui::help_overlay,
                    crate::render::pan_zoom_input,
                    crate::render::hover_detection,
                    crate::ui::hover_tooltip,
                    crate::render::tick_viewport,
                    crate::render::sync_labels,
                    crate::render::style_labels,
                    crate::render::draw_tree,
                )
                    .chain(),
            );
    }
}

fn reload_data(mut st: ResMut<TreeState>) {
    if !std::mem::take(&mut st.ui.reload_requested) {
        return;
    }
    st.reload();
    info!(people = st.view.tree().len(), "family tree reloaded");
}
