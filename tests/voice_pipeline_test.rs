//! Integration tests driving an EditorSession from the voice listener

use std::thread;
use std::time::{Duration, Instant};

use image::{Rgb, RgbImage};

use voxedit::frame::Frame;
use voxedit::session::{EditorSession, SessionError};
use voxedit::voice::{
    ListenerTiming, ScriptedRecognizer, SilentSynthesizer, VoiceEvent, VoiceManager,
};
use voxedit::ChannelLayout;

fn fast_timing() -> ListenerTiming {
    ListenerTiming {
        listen_timeout: Duration::from_millis(20),
        phrase_limit: Duration::from_millis(20),
        service_backoff: Duration::from_millis(10),
        error_backoff: Duration::from_millis(10),
    }
}

#[test]
fn test_spoken_commands_drive_the_session() {
    let mut session = EditorSession::default();
    session.load_frame(Frame::from_rgb(RgbImage::from_pixel(
        24,
        16,
        Rgb([180, 90, 40]),
    )));

    let synthesizer = SilentSynthesizer::new();
    let spoken = synthesizer.clone();
    let mut voice = VoiceManager::default().with_timing(fast_timing());
    voice
        .start(
            Box::new(ScriptedRecognizer::from_phrases([
                "grey scale",
                "brightness by 20",
                "xyzzy",
                "undo",
            ])),
            Box::new(synthesizer),
        )
        .unwrap();

    let mut handled = 0;
    let mut unrecognized = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    while handled < 4 && Instant::now() < deadline {
        for event in voice.poll_events() {
            if let VoiceEvent::Recognized { text } = event {
                handled += 1;
                match session.handle_utterance(&text) {
                    Ok(feedback) if feedback.speak => voice.speak(feedback.message),
                    Ok(_) => {}
                    Err(SessionError::Unrecognized(text)) => unrecognized.push(text),
                    Err(e) => panic!("unexpected error: {}", e),
                }
            }
        }
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(handled, 4);
    assert_eq!(unrecognized, vec!["xyzzy".to_string()]);

    // Undo reverted the brightness move, not the grayscale conversion
    let frame = session.current().unwrap();
    assert_eq!(frame.layout(), ChannelLayout::Gray);
    assert_eq!(session.adjustment_values().brightness, 20);
    assert_eq!(session.history().undo_len(), 1);

    let log: Vec<&str> = session
        .command_log()
        .recent()
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(log, vec!["undo", "xyzzy", "brightness by 20", "grey scale"]);

    let deadline = Instant::now() + Duration::from_secs(5);
    while spoken.transcript().len() < 2 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(spoken.transcript(), vec!["Grayscale applied", "Undo applied"]);

    voice.stop();
    assert!(!voice.is_running());
}
