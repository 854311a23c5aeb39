mod app;
mod render;
mod ui;
mod util;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::app::{FamTreeViewerPlugin, INITIAL_HEIGHT, INITIAL_WIDTH};
use crate::util::config;

fn main() {
    let cfg = config::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window_title.clone(),
                resolution: (INITIAL_WIDTH, INITIAL_HEIGHT).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.17, 0.04, 0.04)))
        .add_plugins(EguiPlugin)
        .add_plugins(FamTreeViewerPlugin { cfg })
        .run();
}
