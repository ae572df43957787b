//! Voice layer types.

use std::fmt;

/// Listener state as last reported by the worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceState {
    /// Not started, or stopped
    #[default]
    Idle,
    /// Measuring ambient noise before the first listen
    Calibrating,
    /// Waiting for a phrase
    Listening,
    /// Turning captured audio into text
    Processing,
    /// Last attempt failed; the worker keeps retrying
    Error,
}

impl VoiceState {
    pub fn is_active(&self) -> bool {
        !matches!(self, VoiceState::Idle)
    }
}

impl fmt::Display for VoiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceState::Idle => write!(f, "Idle"),
            VoiceState::Calibrating => write!(f, "Calibrating..."),
            VoiceState::Listening => write!(f, "Listening..."),
            VoiceState::Processing => write!(f, "Processing..."),
            VoiceState::Error => write!(f, "Error"),
        }
    }
}

/// Events from the listener worker
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceEvent {
    StateChanged(VoiceState),
    /// A phrase was turned into text
    Recognized { text: String },
    Error { message: String },
}

/// Why a listen or speak attempt produced nothing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeechError {
    /// No speech started before the listen timeout
    #[error("Listening timed out")]
    Timeout,

    /// Audio was captured but could not be turned into text
    #[error("Could not understand audio")]
    Unintelligible,

    /// The recognition or synthesis backend failed
    #[error("Speech service error: {0}")]
    Service(String),

    #[error("Speech error: {0}")]
    Other(String),
}
