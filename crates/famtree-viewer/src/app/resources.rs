use bevy::prelude::{Resource, Vec2};
use famtree_core::{NodeId, PersonRecord, TreeView};

use crate::util::config::ViewerConfig;

const SAMPLE_DATA: &str = include_str!("../../data/family.json");

#[derive(Default)]
pub struct UiState {
    pub query: String,
    pub notice: Option<String>,
    pub hovered: Option<NodeId>,
    pub help_open: bool,
    pub drag_last: Option<Vec2>,
    pub labels_dirty: bool,
    pub reload_requested: bool,
}

#[derive(Resource)]
pub struct TreeState {
    pub view: TreeView,
    pub ui: UiState,
    pub cfg: ViewerConfig,
}

impl TreeState {
    pub fn new(cfg: ViewerConfig, width: f32, height: f32) -> Self {
        let record = load_record(&cfg);
        let view = TreeView::new(&record, cfg.view.clone(), width, height);
        Self {
            view,
            ui: UiState {
                labels_dirty: true,
                ..UiState::default()
            },
            cfg,
        }
    }

    pub fn reload(&mut self) {
        let record = load_record(&self.cfg);
        self.view.rebuild(&record);
        self.ui.hovered = None;
        self.ui.notice = None;
        self.ui.labels_dirty = true;
    }
}

pub fn load_record(cfg: &ViewerConfig) -> PersonRecord {
    if let Some(path) = cfg.data_path.as_deref() {
        match famtree_core::load_dataset(path) {
            Ok(record) => return record,
            Err(err) => bevy::log::warn!("{err:#}; showing bundled sample"),
        }
    }
    sample_record()
}

pub fn sample_record() -> PersonRecord {
    PersonRecord::from_json_str(SAMPLE_DATA).unwrap_or_default()
}
