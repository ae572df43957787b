//! Settings configuration types

mod editor;
mod history;
mod interpreter;
mod voice;

pub use editor::EditorSettings;
pub use history::HistorySettings;
pub use interpreter::InterpreterSettings;
pub use voice::VoiceSettings;
