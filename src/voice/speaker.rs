//! Speaker worker: speaks queued messages one at a time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use tracing::warn;

use super::synthesizer::SpeechSynthesizer;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Body of the speaker thread; returns on stop or when the queue closes
pub fn run_speaker(
    mut synthesizer: Box<dyn SpeechSynthesizer>,
    queue: Receiver<String>,
    stop: &AtomicBool,
) {
    while !stop.load(Ordering::SeqCst) {
        match queue.recv_timeout(POLL_INTERVAL) {
            Ok(text) => {
                if let Err(e) = synthesizer.speak(&text) {
                    warn!("Failed to speak '{}': {}", text, e);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}
