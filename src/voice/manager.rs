//! Voice manager: owns the listener and speaker workers.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use tracing::{debug, info};

use super::listener::{ListenerTiming, run_listener};
use super::recognizer::SpeechRecognizer;
use super::speaker::run_speaker;
use super::synthesizer::SpeechSynthesizer;
use super::types::{VoiceEvent, VoiceState};
use super::worker::Worker;
use crate::config::VoiceSettings;

/// Runs speech recognition and synthesis off the control thread
///
/// The control thread calls [`VoiceManager::poll_events`] regularly and
/// hands text to speak to [`VoiceManager::speak`]; neither blocks.
pub struct VoiceManager {
    pub state: VoiceState,
    pub last_error: Option<String>,
    timing: ListenerTiming,
    listener_grace: Duration,
    speaker_grace: Duration,
    listener: Option<Worker>,
    speaker: Option<Worker>,
    event_rx: Option<Receiver<VoiceEvent>>,
    speech_tx: Option<Sender<String>>,
}

impl Default for VoiceManager {
    fn default() -> Self {
        Self::new(&VoiceSettings::default())
    }
}

impl VoiceManager {
    pub fn new(settings: &VoiceSettings) -> Self {
        let listener_grace = Duration::from_millis(settings.stop_grace_ms);
        Self {
            state: VoiceState::Idle,
            last_error: None,
            timing: ListenerTiming::from_settings(settings),
            listener_grace,
            // Speech in progress cannot be interrupted, so the speaker gets longer
            speaker_grace: listener_grace * 2,
            listener: None,
            speaker: None,
            event_rx: None,
            speech_tx: None,
        }
    }

    /// Override listen bounds and retry pauses
    pub fn with_timing(mut self, timing: ListenerTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Start both workers, replacing any running ones
    pub fn start(
        &mut self,
        recognizer: Box<dyn SpeechRecognizer>,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> std::io::Result<()> {
        self.stop();

        let (event_tx, event_rx) = mpsc::channel();
        let timing = self.timing;
        let listener = Worker::spawn("voice-listener", self.listener_grace, move |stop| {
            run_listener(recognizer, timing, event_tx, &stop);
        })?;

        let (speech_tx, speech_rx) = mpsc::channel::<String>();
        let speaker = Worker::spawn("voice-speaker", self.speaker_grace, move |stop| {
            run_speaker(synthesizer, speech_rx, &stop);
        })?;

        self.listener = Some(listener);
        self.speaker = Some(speaker);
        self.event_rx = Some(event_rx);
        self.speech_tx = Some(speech_tx);
        self.last_error = None;
        info!("Voice control activated");
        Ok(())
    }

    /// Stop both workers, waiting up to their grace periods
    pub fn stop(&mut self) {
        // Closing the queue lets the speaker exit without waiting for a poll
        self.speech_tx = None;
        let mut stopped = false;
        if let Some(mut listener) = self.listener.take() {
            listener.stop();
            stopped = true;
        }
        if let Some(mut speaker) = self.speaker.take() {
            speaker.stop();
            stopped = true;
        }
        self.event_rx = None;
        self.state = VoiceState::Idle;
        if stopped {
            info!("Voice control deactivated");
        }
    }

    pub fn is_running(&self) -> bool {
        self.listener.as_ref().is_some_and(Worker::is_running)
    }

    /// Queue `text` for speaking; dropped when the speaker is not running
    pub fn speak(&self, text: impl Into<String>) {
        let text = text.into();
        match &self.speech_tx {
            Some(tx) => {
                if tx.send(text).is_err() {
                    debug!("Speaker gone, message dropped");
                }
            }
            None => debug!("Voice inactive, not speaking '{}'", text),
        }
    }

    /// Drain pending events (non-blocking)
    pub fn poll_events(&mut self) -> Vec<VoiceEvent> {
        let mut events = Vec::new();
        let Some(rx) = &self.event_rx else {
            return events;
        };

        while let Ok(event) = rx.try_recv() {
            match &event {
                VoiceEvent::StateChanged(state) => self.state = *state,
                VoiceEvent::Recognized { .. } => self.last_error = None,
                VoiceEvent::Error { message } => self.last_error = Some(message.clone()),
            }
            events.push(event);
        }
        events
    }
}

impl Drop for VoiceManager {
    fn drop(&mut self) {
        self.stop();
    }
}
