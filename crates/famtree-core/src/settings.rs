use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::viewport::ViewportTransform;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between neighbouring leaves along the order axis.
    pub sibling_spacing: f32,
    /// Distance between generations along the depth axis.
    pub level_spacing: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sibling_spacing: 60.0,
            level_spacing: 260.0,
            origin_x: 160.0,
            origin_y: 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub min_scale: f32,
    pub max_scale: f32,
    pub focus_scale: f32,
    pub center_duration_ms: u64,
    pub reset_duration_ms: u64,
    pub clear_highlight_on_miss: bool,
    pub initial_transform: ViewportTransform,
    pub layout: LayoutConfig,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            min_scale: 0.2,
            max_scale: 3.0,
            focus_scale: 1.2,
            center_duration_ms: 650,
            reset_duration_ms: 450,
            clear_highlight_on_miss: false,
            initial_transform: ViewportTransform::new(30.0, 10.0, 0.9),
            layout: LayoutConfig::default(),
        }
    }
}

impl ViewSettings {
    pub fn center_duration(&self) -> Duration {
        Duration::from_millis(self.center_duration_ms)
    }

    pub fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms)
    }

    /// Ordered, positive scale bounds even if the config swapped them.
    pub fn scale_bounds(&self) -> (f32, f32) {
        let lo = self.min_scale.min(self.max_scale).max(f32::EPSILON);
        let hi = self.min_scale.max(self.max_scale).max(lo);
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: ViewSettings =
            serde_json::from_str(r#"{"focus_scale": 2.0, "layout": {"level_spacing": 100}}"#)
                .expect("parse settings");
        assert_eq!(cfg.focus_scale, 2.0);
        assert_eq!(cfg.layout.level_spacing, 100.0);
        assert_eq!(cfg.layout.sibling_spacing, 60.0);
        assert_eq!(cfg.center_duration(), Duration::from_millis(650));
    }

    #[test]
    fn scale_bounds_are_ordered() {
        let cfg = ViewSettings {
            min_scale: 4.0,
            max_scale: 0.5,
            ..ViewSettings::default()
        };
        assert_eq!(cfg.scale_bounds(), (0.5, 4.0));
    }
}
