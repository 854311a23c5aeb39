pub mod help;
pub mod panel;
pub mod search;
pub mod shortcuts;
pub mod tooltips;

pub use help::help_overlay;
pub use panel::ui_panel;
pub use search::search_overlay;
pub use shortcuts::handle_shortcuts;
pub use tooltips::hover_tooltip;
