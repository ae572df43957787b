//! Speech recognition using sox and whisper-cpp.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::recognizer::SpeechRecognizer;
use super::types::SpeechError;
use crate::config::{Config, VoiceSettings};

/// Size of a WAV header; a file this small holds no audio
const WAV_HEADER_LEN: u64 = 44;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Records a phrase with `rec` and transcribes it with `whisper-cli`
#[derive(Debug, Clone)]
pub struct WhisperRecognizer {
    model_path: PathBuf,
    language: String,
    recording_path: PathBuf,
}

impl WhisperRecognizer {
    pub fn new(settings: &VoiceSettings) -> Self {
        let dir = Config::global_config_dir();
        Self {
            model_path: dir
                .join("whisper-models")
                .join(format!("ggml-{}.bin", settings.whisper_model)),
            language: settings.language.clone(),
            recording_path: dir.join("voice_recording.wav"),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Check that the external tools and the model are installed
    pub fn check_availability(&self) -> Result<(), SpeechError> {
        if !command_exists("rec") {
            return Err(SpeechError::Service(
                "sox not found. Install with: brew install sox".to_string(),
            ));
        }
        if !command_exists("whisper-cli") {
            return Err(SpeechError::Service(
                "whisper-cli not found. Install with: brew install whisper-cpp".to_string(),
            ));
        }
        if !self.model_path.exists() {
            return Err(SpeechError::Service(format!(
                "Whisper model not found at {}",
                self.model_path.display()
            )));
        }
        Ok(())
    }

    /// Capture one phrase into the recording file
    ///
    /// `rec` waits for sound, then stops after a second of silence or
    /// `phrase_limit`, whichever comes first.
    fn record(&self, timeout: Duration, phrase_limit: Duration) -> Result<(), SpeechError> {
        if let Some(parent) = self.recording_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SpeechError::Other(format!("Failed to create {}: {}", parent.display(), e)))?;
        }
        let _ = std::fs::remove_file(&self.recording_path);

        let mut child = Command::new("rec")
            .args([
                "-r",
                "16000", // whisper expects 16kHz mono
                "-c",
                "1",
                "-b",
                "16",
                self.recording_path.to_str().unwrap_or("voice_recording.wav"),
                "silence",
                "1",
                "0.1",
                "1%",
                "1",
                "1.0",
                "1%",
                "trim",
                "0",
                &format!("{:.1}", phrase_limit.as_secs_f32()),
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeechError::Service(format!("Failed to start recording: {}", e)))?;

        let deadline = Instant::now() + timeout + phrase_limit;
        loop {
            match child.try_wait() {
                Ok(Some(status)) if status.success() => break,
                Ok(Some(status)) => {
                    return Err(SpeechError::Service(format!("rec exited with {}", status)));
                }
                Ok(None) if Instant::now() >= deadline => {
                    terminate(child);
                    return Err(SpeechError::Timeout);
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    terminate(child);
                    return Err(SpeechError::Other(format!("Recording error: {}", e)));
                }
            }
        }

        let len = std::fs::metadata(&self.recording_path)
            .map(|m| m.len())
            .unwrap_or(0);
        if len <= WAV_HEADER_LEN {
            return Err(SpeechError::Timeout);
        }
        Ok(())
    }

    fn transcribe(&self) -> Result<String, SpeechError> {
        let output = Command::new("whisper-cli")
            .args([
                "-m",
                self.model_path.to_str().unwrap_or("model.bin"),
                "-f",
                self.recording_path.to_str().unwrap_or("voice_recording.wav"),
                "--no-timestamps",
                "-l",
                &self.language,
            ])
            .output()
            .map_err(|e| SpeechError::Service(format!("Failed to run whisper: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Service(format!("Whisper failed: {}", stderr.trim())));
        }

        let text = clean_transcript(&String::from_utf8_lossy(&output.stdout));
        if text.is_empty() {
            return Err(SpeechError::Unintelligible);
        }
        Ok(text)
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn listen(&mut self, timeout: Duration, phrase_limit: Duration) -> Result<String, SpeechError> {
        self.record(timeout, phrase_limit)?;
        let result = self.transcribe();
        let _ = std::fs::remove_file(&self.recording_path);
        if let Ok(text) = &result {
            debug!("Transcribed '{}'", text);
        }
        result
    }
}

/// Drop whisper's non-speech markers ("[BLANK_AUDIO]", "(wind blowing)") and
/// trailing punctuation
pub fn clean_transcript(raw: &str) -> String {
    let mut text = String::new();
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(['.', '!', '?', ','])
        .to_string()
}

fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// SIGTERM first so sox can finalize the file, then kill
fn terminate(mut child: Child) {
    #[cfg(unix)]
    {
        let _ = Command::new("kill")
            .args(["-TERM", &child.id().to_string()])
            .output();
        thread::sleep(Duration::from_millis(50));
    }
    let _ = child.kill();
    let _ = child.wait();
}
