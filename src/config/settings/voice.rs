//! Voice input/output settings

use serde::{Deserialize, Serialize};

/// Voice input/output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSettings {
    /// Start the voice listener with interactive sessions
    #[serde(default)]
    pub enabled: bool,

    /// How long to wait for speech to start before listening again (seconds)
    #[serde(default = "default_listen_timeout")]
    pub listen_timeout_secs: f32,

    /// Maximum length of one spoken phrase (seconds)
    #[serde(default = "default_phrase_time_limit")]
    pub phrase_time_limit_secs: f32,

    /// Grace period for the listener thread to stop (milliseconds)
    #[serde(default = "default_stop_grace_ms")]
    pub stop_grace_ms: u64,

    /// Whisper model for transcription (tiny, base, small, medium, large)
    #[serde(default = "default_whisper_model")]
    pub whisper_model: String,

    /// Language for transcription (auto, en, de, fr, etc.)
    #[serde(default = "default_voice_language")]
    pub language: String,

    /// Text-to-speech rate in words per minute
    #[serde(default = "default_speech_rate")]
    pub speech_rate: u32,

    /// Speak confirmations ("Blur applied") aloud
    #[serde(default = "default_speak_feedback")]
    pub speak_feedback: bool,
}

fn default_listen_timeout() -> f32 {
    5.0
}

fn default_phrase_time_limit() -> f32 {
    5.0
}

fn default_stop_grace_ms() -> u64 {
    1000
}

fn default_whisper_model() -> String {
    "base".to_string()
}

fn default_voice_language() -> String {
    "en".to_string()
}

fn default_speech_rate() -> u32 {
    165
}

fn default_speak_feedback() -> bool {
    true
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            listen_timeout_secs: default_listen_timeout(),
            phrase_time_limit_secs: default_phrase_time_limit(),
            stop_grace_ms: default_stop_grace_ms(),
            whisper_model: default_whisper_model(),
            language: default_voice_language(),
            speech_rate: default_speech_rate(),
            speak_feedback: default_speak_feedback(),
        }
    }
}
