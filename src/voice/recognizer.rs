//! Speech-to-text collaborators.

use std::collections::VecDeque;
use std::time::Duration;

use super::types::SpeechError;

/// Turns one spoken phrase into text
pub trait SpeechRecognizer: Send {
    /// Adjust for ambient noise; called once before the first listen
    fn calibrate(&mut self) -> Result<(), SpeechError> {
        Ok(())
    }

    /// Wait up to `timeout` for a phrase to start, capture at most
    /// `phrase_limit` of it, and return its text
    fn listen(&mut self, timeout: Duration, phrase_limit: Duration) -> Result<String, SpeechError>;
}

/// Replays a fixed list of results
///
/// Once the script runs out every listen times out, after a short pause so
/// the worker does not spin.
#[derive(Debug)]
pub struct ScriptedRecognizer {
    script: VecDeque<Result<String, SpeechError>>,
    idle_pause: Duration,
}

impl Default for ScriptedRecognizer {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl ScriptedRecognizer {
    pub fn new(script: impl IntoIterator<Item = Result<String, SpeechError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            idle_pause: Duration::from_millis(10),
        }
    }

    /// Script that recognizes each phrase in turn
    pub fn from_phrases<S: Into<String>>(phrases: impl IntoIterator<Item = S>) -> Self {
        Self::new(phrases.into_iter().map(|p| Ok(p.into())))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn listen(&mut self, timeout: Duration, _phrase_limit: Duration) -> Result<String, SpeechError> {
        match self.script.pop_front() {
            Some(result) => result,
            None => {
                std::thread::sleep(self.idle_pause.min(timeout));
                Err(SpeechError::Timeout)
            }
        }
    }
}
