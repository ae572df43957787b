//! User-facing results of session operations

use serde::Serialize;

use crate::interpreter::{Adjustment, EditCommand};

/// Something only the hosting shell can do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellRequest {
    ShowHelp,
    Exit,
}

/// Outcome of a successful session operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    /// Status bar text
    pub message: String,
    /// Whether the message should also be spoken
    pub speak: bool,
    /// Whether the displayed image or zoom changed
    pub refresh: bool,
    pub request: Option<ShellRequest>,
}

impl Feedback {
    /// Confirmation that is shown and spoken
    pub fn spoken(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            speak: true,
            refresh: true,
            request: None,
        }
    }

    /// Display-only status update
    pub fn status(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            speak: false,
            refresh: true,
            request: None,
        }
    }

    pub fn request(request: ShellRequest, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            speak: false,
            refresh: false,
            request: Some(request),
        }
    }
}

/// Help text listing every spoken command
pub fn help_text() -> String {
    let mut text = String::from("Commands:\n");
    for command in EditCommand::ALL {
        text.push_str("  ");
        text.push_str(command.keyword());
        text.push('\n');
    }
    text.push_str("Adjustments:\n");
    for adjustment in Adjustment::PRIORITY {
        let range = adjustment.range();
        text.push_str(&format!(
            "  {} by <n>   ({}..{}, default {})\n",
            adjustment,
            range.start(),
            range.end(),
            adjustment.identity()
        ));
    }
    text
}
