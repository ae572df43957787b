//! Undo/redo history with compressed snapshots
//!
//! Every mutating editor operation records the frame it is about to replace.
//! Frames are stored JPEG-compressed so a full stack of high-resolution
//! frames stays within a modest memory budget. The compression is lossy:
//! a frame restored from history is close to, but not necessarily identical
//! with, the frame that was recorded.
//!
//! Architecture:
//! - Snapshot: one compressed frame (JPEG color data, deflated alpha plane)
//! - HistoryManager: bounded undo stack + redo stack, dirty tracking

mod manager;
mod snapshot;


use std::fmt;

pub use manager::HistoryManager;
pub use snapshot::Snapshot;

/// Which stack an operation pops from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Undo,
    Redo,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Undo => write!(f, "undo"),
            Direction::Redo => write!(f, "redo"),
        }
    }
}

/// Error type for history operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Nothing to {0}")]
    Empty(Direction),

    #[error("Snapshot codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Snapshot alpha plane error: {0}")]
    Alpha(#[from] std::io::Error),
}
