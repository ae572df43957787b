//! voxedit - voice-controlled photo editing
//!
//! voxedit is the editing core of a photo editor that can be driven by
//! speech. Filters, color adjustments and geometric transforms are exposed
//! through an [`session::EditorSession`]; spoken or typed utterances are
//! fuzzy-matched to the same operations, so "grey scale" still converts the
//! image to grayscale.
//!
//! ## Modules
//!
//! - [`frame`]: 8-bit raster frames (gray, RGB, RGBA)
//! - [`history`]: bounded undo/redo with compressed snapshots
//! - [`interpreter`]: utterance to action resolution
//! - [`adjust`]: brightness, contrast, saturation and hue
//! - [`filters`]: zero-argument filters and transforms
//! - [`session`]: the editor session tying the above together
//! - [`voice`]: listener and speaker workers around external speech tools
//! - [`config`]: TOML configuration

pub mod adjust;
pub mod config;
pub mod filters;
pub mod frame;
pub mod history;
pub mod interpreter;
pub mod session;
pub mod voice;

pub use frame::{ChannelLayout, Frame};
pub use interpreter::{Action, Adjustment, EditCommand};
pub use session::{EditorSession, Feedback, SessionError, ShellRequest};
