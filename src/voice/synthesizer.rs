//! Text-to-speech collaborators.

use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};

use super::types::SpeechError;

/// Speaks one message, blocking until done
pub trait SpeechSynthesizer: Send {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// Uses the platform speech command (`say` on macOS, `espeak` elsewhere)
#[derive(Debug, Clone)]
pub struct SystemSynthesizer {
    /// Words per minute
    rate: u32,
}

impl SystemSynthesizer {
    pub fn new(rate: u32) -> Self {
        Self { rate }
    }

    #[cfg(target_os = "macos")]
    fn command(&self, text: &str) -> Command {
        let mut command = Command::new("say");
        command.args(["-r", &self.rate.to_string(), text]);
        command
    }

    #[cfg(not(target_os = "macos"))]
    fn command(&self, text: &str) -> Command {
        let mut command = Command::new("espeak");
        command.args(["-s", &self.rate.to_string(), text]);
        command
    }
}

impl SpeechSynthesizer for SystemSynthesizer {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        let status = self
            .command(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| SpeechError::Service(format!("Failed to run speech command: {}", e)))?;

        if !status.success() {
            return Err(SpeechError::Other(format!("Speech command exited with {}", status)));
        }
        Ok(())
    }
}

/// Speaks nothing; keeps a transcript of what it was asked to say
#[derive(Debug, Clone, Default)]
pub struct SilentSynthesizer {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl SilentSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first
    pub fn transcript(&self) -> Vec<String> {
        match self.spoken.lock() {
            Ok(spoken) => spoken.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SpeechSynthesizer for SilentSynthesizer {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        match self.spoken.lock() {
            Ok(mut spoken) => spoken.push(text.to_string()),
            Err(poisoned) => poisoned.into_inner().push(text.to_string()),
        }
        Ok(())
    }
}
