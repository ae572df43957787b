//! Listener worker: recognizes phrases until stopped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::{debug, warn};

use super::recognizer::SpeechRecognizer;
use super::types::{SpeechError, VoiceEvent, VoiceState};
use super::worker::sleep_unless_stopped;
use crate::config::VoiceSettings;

/// Listen bounds and retry pauses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListenerTiming {
    pub listen_timeout: Duration,
    pub phrase_limit: Duration,
    /// Pause after the recognition service failed
    pub service_backoff: Duration,
    /// Pause after any other failure
    pub error_backoff: Duration,
}

impl Default for ListenerTiming {
    fn default() -> Self {
        Self::from_settings(&VoiceSettings::default())
    }
}

impl ListenerTiming {
    pub fn from_settings(settings: &VoiceSettings) -> Self {
        Self {
            listen_timeout: secs(settings.listen_timeout_secs),
            phrase_limit: secs(settings.phrase_time_limit_secs),
            service_backoff: Duration::from_secs(2),
            error_backoff: Duration::from_secs(1),
        }
    }
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::ZERO)
}

/// Body of the listener thread
///
/// Timeouts restart listening silently. Other failures are reported and
/// followed by a pause. Returns when `stop` is set or the event receiver is
/// gone.
pub fn run_listener(
    mut recognizer: Box<dyn SpeechRecognizer>,
    timing: ListenerTiming,
    events: Sender<VoiceEvent>,
    stop: &AtomicBool,
) {
    let send = |event: VoiceEvent| events.send(event).is_ok();

    if !send(VoiceEvent::StateChanged(VoiceState::Calibrating)) {
        return;
    }
    if let Err(e) = recognizer.calibrate() {
        warn!("Calibration failed: {}", e);
        if !send(VoiceEvent::Error {
            message: e.to_string(),
        }) {
            return;
        }
    }

    // Timeouts loop straight back to listening; only announce real changes
    let mut state = VoiceState::Calibrating;
    while !stop.load(Ordering::SeqCst) {
        if state != VoiceState::Listening {
            if !send(VoiceEvent::StateChanged(VoiceState::Listening)) {
                return;
            }
            state = VoiceState::Listening;
        }

        let result = recognizer.listen(timing.listen_timeout, timing.phrase_limit);
        if stop.load(Ordering::SeqCst) {
            break;
        }

        let (error, backoff) = match result {
            Ok(text) if !text.trim().is_empty() => {
                debug!("Heard '{}'", text);
                if !send(VoiceEvent::StateChanged(VoiceState::Processing))
                    || !send(VoiceEvent::Recognized {
                        text: text.trim().to_string(),
                    })
                {
                    return;
                }
                state = VoiceState::Processing;
                continue;
            }
            Ok(_) => (SpeechError::Unintelligible, None),
            Err(SpeechError::Timeout) => continue,
            Err(e @ SpeechError::Unintelligible) => (e, None),
            Err(e @ SpeechError::Service(_)) => (e, Some(timing.service_backoff)),
            Err(e @ SpeechError::Other(_)) => (e, Some(timing.error_backoff)),
        };

        if !send(VoiceEvent::StateChanged(VoiceState::Error))
            || !send(VoiceEvent::Error {
                message: error.to_string(),
            })
        {
            return;
        }
        state = VoiceState::Error;
        if let Some(pause) = backoff {
            warn!("{}; retrying in {:?}", error, pause);
            if !sleep_unless_stopped(pause, stop) {
                break;
            }
        }
    }

    let _ = events.send(VoiceEvent::StateChanged(VoiceState::Idle));
}
