//! Configuration loading and management

mod io;
mod settings;

pub use settings::{EditorSettings, HistorySettings, InterpreterSettings, VoiceSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Undo/redo history settings
    #[serde(default)]
    pub history: HistorySettings,

    /// Voice command interpretation settings
    #[serde(default)]
    pub interpreter: InterpreterSettings,

    /// Editor session settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Voice input/output settings
    #[serde(default)]
    pub voice: VoiceSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.history.max_depth, 20);
        assert_eq!(config.history.snapshot_quality, 90);
        assert_eq!(config.interpreter.fuzzy_threshold, 75.0);
        assert_eq!(config.interpreter.command_log_size, 15);
        assert_eq!(config.editor.max_dimension, 2048);
        assert!(!config.voice.enabled);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[history]
max_depth = 5

[voice]
enabled = true
language = "de"
"#,
        )
        .unwrap();
        assert_eq!(config.history.max_depth, 5);
        assert_eq!(config.history.snapshot_quality, 90);
        assert!(config.voice.enabled);
        assert_eq!(config.voice.language, "de");
        assert_eq!(config.voice.whisper_model, "base");
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[history]"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.editor.viewport_width, config.editor.viewport_width);
    }
}
