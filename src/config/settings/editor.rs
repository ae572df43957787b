//! Editor session settings

use serde::{Deserialize, Serialize};

/// Editor session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Loaded images are downscaled so their longer side fits this many pixels
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// Number of recently opened files remembered
    #[serde(default = "default_max_recent_files")]
    pub max_recent_files: usize,

    /// Visible area used by "fit to window"
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,
}

fn default_max_dimension() -> u32 {
    2048
}

fn default_max_recent_files() -> usize {
    10
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            max_recent_files: default_max_recent_files(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}
