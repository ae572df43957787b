//! Session error type

use crate::history::{Direction, HistoryError};

/// Why a session operation did nothing
///
/// Every variant is recoverable: the session state is unchanged and the
/// message is meant for the status bar.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Nothing to {0}")]
    EmptyHistory(Direction),

    #[error("Command not recognized: {0}")]
    Unrecognized(String),

    #[error("No original image")]
    NoOriginal,

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HistoryError> for SessionError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::Empty(direction) => SessionError::EmptyHistory(direction),
            HistoryError::Codec(err) => SessionError::Codec(err),
            HistoryError::Alpha(err) => SessionError::Io(err),
        }
    }
}
