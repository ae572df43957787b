//! Voice control
//!
//! Spoken commands come in through a listener thread and spoken feedback goes
//! out through a speaker thread. Both talk to the control thread only through
//! channels, so the editor session never has to be shared.
//!
//! Architecture:
//! - SpeechRecognizer / SpeechSynthesizer: the external speech collaborators
//! - listener: listen, retry and back off until stopped
//! - speaker: speak queued messages one at a time
//! - VoiceManager: starts and stops both workers, collects their events
//!
//! Implementation:
//! - Uses `sox` (rec command) for audio capture
//! - Uses `whisper-cli` (from whisper-cpp) for transcription
//! - Uses `say` (macOS) or `espeak` for speech output

mod listener;
mod manager;
mod recognizer;
mod speaker;
mod synthesizer;
mod types;
mod whisper;
mod worker;

#[cfg(test)]
mod tests;

pub use listener::ListenerTiming;
pub use manager::VoiceManager;
pub use recognizer::{ScriptedRecognizer, SpeechRecognizer};
pub use synthesizer::{SilentSynthesizer, SpeechSynthesizer, SystemSynthesizer};
pub use types::{SpeechError, VoiceEvent, VoiceState};
pub use whisper::{WhisperRecognizer, clean_transcript};
pub use worker::Worker;
