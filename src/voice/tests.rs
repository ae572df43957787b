//! Unit tests for the voice layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use super::worker::sleep_unless_stopped;
use super::*;

fn fast_timing() -> ListenerTiming {
    ListenerTiming {
        listen_timeout: Duration::from_millis(50),
        phrase_limit: Duration::from_millis(50),
        service_backoff: Duration::from_millis(30),
        error_backoff: Duration::from_millis(30),
    }
}

fn started(script: Vec<Result<String, SpeechError>>) -> VoiceManager {
    let mut manager = VoiceManager::default().with_timing(fast_timing());
    manager
        .start(
            Box::new(ScriptedRecognizer::new(script)),
            Box::new(SilentSynthesizer::new()),
        )
        .unwrap();
    manager
}

/// Poll until `done` holds for everything received so far (or 5s pass)
fn collect_until(manager: &mut VoiceManager, done: impl Fn(&[VoiceEvent]) -> bool) -> Vec<VoiceEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while Instant::now() < deadline {
        events.extend(manager.poll_events());
        if done(&events) {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
    events
}

fn recognized(events: &[VoiceEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            VoiceEvent::Recognized { text } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn errors(events: &[VoiceEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|e| match e {
            VoiceEvent::Error { message } => Some(message.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_listener_reports_phrases_and_skips_timeouts() {
    let mut manager = started(vec![
        Ok("blur".to_string()),
        Err(SpeechError::Timeout),
        Err(SpeechError::Unintelligible),
        Ok("  undo ".to_string()),
    ]);

    let events = collect_until(&mut manager, |events| recognized(events).len() == 2);
    assert_eq!(events.first(), Some(&VoiceEvent::StateChanged(VoiceState::Calibrating)));
    assert_eq!(recognized(&events), vec!["blur", "undo"]);
    assert_eq!(errors(&events), vec!["Could not understand audio"]);

    manager.stop();
}

#[test]
fn test_listener_recovers_after_service_error() {
    let mut manager = started(vec![
        Err(SpeechError::Service("offline".to_string())),
        Ok("sepia".to_string()),
    ]);

    let events = collect_until(&mut manager, |events| !recognized(events).is_empty());
    assert_eq!(errors(&events), vec!["Speech service error: offline"]);
    assert_eq!(recognized(&events), vec!["sepia"]);
    assert_eq!(manager.last_error, None);

    manager.stop();
}

#[test]
fn test_stop_joins_listener() {
    let mut manager = started(Vec::new());
    thread::sleep(Duration::from_millis(30));
    assert!(manager.is_running());

    manager.stop();
    assert!(!manager.is_running());
    assert_eq!(manager.state, VoiceState::Idle);
    assert!(manager.poll_events().is_empty());
}

#[test]
fn test_speaker_speaks_queued_messages() {
    let synthesizer = SilentSynthesizer::new();
    let transcript = synthesizer.clone();

    let mut manager = VoiceManager::default().with_timing(fast_timing());
    manager
        .start(Box::new(ScriptedRecognizer::default()), Box::new(synthesizer))
        .unwrap();
    manager.speak("Blur applied");
    manager.speak("Undo applied");

    let deadline = Instant::now() + Duration::from_secs(5);
    while transcript.transcript().len() < 2 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(transcript.transcript(), vec!["Blur applied", "Undo applied"]);
    manager.stop();
}

#[test]
fn test_speak_without_workers_is_dropped() {
    let manager = VoiceManager::default();
    manager.speak("nobody hears this");
    assert!(!manager.is_running());
}

#[test]
fn test_worker_stops_within_grace() {
    let mut worker = Worker::spawn("cooperative", Duration::from_secs(1), |stop| {
        while !stop.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(2));
        }
    })
    .unwrap();
    assert!(worker.stop());
    assert!(!worker.is_running());
}

#[test]
fn test_worker_overrunning_grace_is_detached() {
    let mut worker = Worker::spawn("stubborn", Duration::from_millis(20), |_stop| {
        thread::sleep(Duration::from_millis(300));
    })
    .unwrap();

    let started = Instant::now();
    assert!(!worker.stop());
    assert!(started.elapsed() < Duration::from_millis(250));
}

#[test]
fn test_sleep_unless_stopped_returns_early() {
    let stop = Arc::new(AtomicBool::new(true));
    let started = Instant::now();
    assert!(!sleep_unless_stopped(Duration::from_secs(2), &stop));
    assert!(started.elapsed() < Duration::from_millis(500));

    stop.store(false, Ordering::SeqCst);
    assert!(sleep_unless_stopped(Duration::from_millis(10), &stop));
}

#[test]
fn test_scripted_recognizer_times_out_when_exhausted() {
    let mut recognizer = ScriptedRecognizer::from_phrases(["zoom in"]);
    let wait = Duration::from_millis(5);
    assert_eq!(recognizer.listen(wait, wait), Ok("zoom in".to_string()));
    assert_eq!(recognizer.remaining(), 0);
    assert_eq!(recognizer.listen(wait, wait), Err(SpeechError::Timeout));
}

#[test]
fn test_state_display() {
    assert_eq!(VoiceState::Listening.to_string(), "Listening...");
    assert!(!VoiceState::Idle.is_active());
    assert!(VoiceState::Processing.is_active());
}
