//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use voxedit::config::Config;

/// Default configuration content for voxedit init
pub const DEFAULT_CONFIG: &str = r#"# voxedit configuration
# =====================

# ============================================================================
# HISTORY - Undo/redo
# ============================================================================
#
#   max_depth        - Undo steps kept; the oldest is dropped beyond this (default: 20)
#   snapshot_quality - JPEG quality of stored snapshots, 1-100 (default: 90)

[history]
max_depth = 20
snapshot_quality = 90

# ============================================================================
# INTERPRETER - Turning utterances into commands
# ============================================================================
#
#   fuzzy_threshold  - Similarity (0-100) a command must beat to match (default: 75)
#   command_log_size - Utterances remembered for :history (default: 15)

[interpreter]
fuzzy_threshold = 75.0
command_log_size = 15

# ============================================================================
# EDITOR
# ============================================================================
#
#   max_dimension    - Larger images are downscaled on load (default: 2048)
#   max_recent_files - Recently opened files remembered (default: 10)
#   viewport_*       - Visible area used by "fit"

[editor]
max_dimension = 2048
max_recent_files = 10
viewport_width = 1280
viewport_height = 800

# ============================================================================
# VOICE - Requires sox (rec) and whisper-cpp (whisper-cli)
# ============================================================================
#
# Whisper models live in ~/.voxedit/whisper-models/ggml-<model>.bin

[voice]
enabled = false
listen_timeout_secs = 5.0
phrase_time_limit_secs = 5.0
stop_grace_ms = 1000
whisper_model = "base"
language = "en"
speech_rate = 165
speak_feedback = true
"#;

/// Write the default configuration file
pub async fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.history.max_depth, defaults.history.max_depth);
        assert_eq!(parsed.interpreter.fuzzy_threshold, defaults.interpreter.fuzzy_threshold);
        assert_eq!(parsed.editor.max_dimension, defaults.editor.max_dimension);
        assert_eq!(parsed.voice.speech_rate, defaults.voice.speech_rate);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        init_command(Some(path.clone()), false).await.unwrap();
        assert!(init_command(Some(path.clone()), false).await.is_err());
        init_command(Some(path), true).await.unwrap();
    }
}
