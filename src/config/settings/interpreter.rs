//! Voice command interpretation settings

use serde::{Deserialize, Serialize};

/// Voice command interpretation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterSettings {
    /// Minimum similarity (0-100, exclusive) for a fuzzy keyword match
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Number of utterances kept in the command history log
    #[serde(default = "default_command_log_size")]
    pub command_log_size: usize,
}

fn default_fuzzy_threshold() -> f64 {
    75.0
}

fn default_command_log_size() -> usize {
    15
}

impl Default for InterpreterSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            command_log_size: default_command_log_size(),
        }
    }
}
