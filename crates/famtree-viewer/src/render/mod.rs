pub mod camera;
pub mod input;
pub mod tree;

pub use camera::{setup_scene, tick_viewport};
pub use input::{hover_detection, pan_zoom_input};
pub use tree::{draw_tree, style_labels, sync_labels};
