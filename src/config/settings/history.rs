//! Undo/redo history settings

use serde::{Deserialize, Serialize};

/// Undo/redo history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of undo steps kept; the oldest is dropped beyond this
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// JPEG quality (1-100) used for history snapshots
    /// Lower values save memory at the cost of fidelity after undo
    #[serde(default = "default_snapshot_quality")]
    pub snapshot_quality: u8,
}

fn default_max_depth() -> usize {
    20
}

fn default_snapshot_quality() -> u8 {
    90
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            snapshot_quality: default_snapshot_quality(),
        }
    }
}
