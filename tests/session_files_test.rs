//! Integration tests for loading and saving images through EditorSession

mod common;

use std::path::Path;

use image::GenericImageView;
use tempfile::TempDir;

use voxedit::config::Config;
use voxedit::session::{EditorSession, SessionError};
use voxedit::ChannelLayout;

use common::{write_gradient_png, write_rgba_png};

#[test]
fn test_load_edit_save_roundtrip() {
    let temp = TempDir::new().unwrap();
    let input = write_gradient_png(temp.path(), "input.png", 40, 30);
    let output = temp.path().join("output.png");

    let mut session = EditorSession::default();
    let feedback = session.load_image(&input).unwrap();
    assert_eq!(feedback.message, "Image loaded: input.png");
    assert_eq!(session.status_line(), "Image: 40×30 | Zoom: 100%");

    session.handle_utterance("flip horizontal").unwrap();
    assert!(session.is_dirty());

    session.save_image(&output).unwrap();
    assert!(!session.is_dirty());
    assert_eq!(session.path(), Some(output.as_path()));

    let saved = image::open(&output).unwrap();
    assert_eq!(saved.dimensions(), (40, 30));
    let expected = session.current().unwrap().as_dynamic().to_rgb8();
    assert_eq!(saved.to_rgb8(), expected);

    let recent: Vec<&Path> = session.recent_files().iter().collect();
    assert_eq!(recent, vec![output.as_path(), input.as_path()]);
}

#[test]
fn test_missing_file_leaves_session_empty() {
    let temp = TempDir::new().unwrap();
    let mut session = EditorSession::default();

    let err = session.load_image(temp.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, SessionError::Codec(_)));
    assert!(session.current().is_none());
    assert!(session.recent_files().is_empty());
}

#[test]
fn test_large_image_is_downscaled() {
    let temp = TempDir::new().unwrap();
    let input = write_gradient_png(temp.path(), "wide.png", 300, 150);

    let mut config = Config::default();
    config.editor.max_dimension = 100;
    let mut session = EditorSession::new(&config);
    session.load_image(&input).unwrap();

    let frame = session.current().unwrap();
    assert_eq!((frame.width(), frame.height()), (100, 50));
}

#[test]
fn test_rgba_saved_as_jpeg_drops_alpha() {
    let temp = TempDir::new().unwrap();
    let input = write_rgba_png(temp.path(), "alpha.png", [200, 100, 50, 120]);
    let output = temp.path().join("flat.jpg");

    let mut session = EditorSession::default();
    session.load_image(&input).unwrap();
    assert_eq!(session.current().unwrap().layout(), ChannelLayout::Rgba);

    session.handle_utterance("invert").unwrap();
    assert_eq!(session.current().unwrap().as_bytes()[3], 120);

    session.save_image(&output).unwrap();
    let saved = image::open(&output).unwrap();
    assert!(!saved.color().has_alpha());
}

#[test]
fn test_unknown_extension_fails_and_stays_dirty() {
    let temp = TempDir::new().unwrap();
    let input = write_gradient_png(temp.path(), "input.png", 10, 10);

    let mut session = EditorSession::default();
    session.load_image(&input).unwrap();
    session.handle_utterance("sepia").unwrap();

    let err = session.save_image(temp.path().join("out.unknown")).unwrap_err();
    assert!(matches!(err, SessionError::Codec(_)));
    assert!(session.is_dirty());
}

#[test]
fn test_reloading_discards_history() {
    let temp = TempDir::new().unwrap();
    let input = write_gradient_png(temp.path(), "input.png", 16, 16);

    let mut session = EditorSession::default();
    session.load_image(&input).unwrap();
    session.handle_utterance("blur").unwrap();
    session.handle_utterance("sharpen").unwrap();
    assert_eq!(session.history().undo_len(), 2);

    session.load_image(&input).unwrap();
    assert_eq!(session.history().undo_len(), 0);
    assert!(!session.is_dirty());
    assert!(matches!(session.undo(), Err(SessionError::EmptyHistory(_))));
    assert_eq!(session.recent_files().len(), 1);
}
