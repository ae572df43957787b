//! Action, EditCommand and Adjustment types
//!
//! The vocabulary is a closed set. Its order matters: when two keywords score
//! the same against an utterance, the one listed first in
//! [`EditCommand::ALL`] wins.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A zero-argument editor command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditCommand {
    Grayscale,
    Blur,
    Sharpen,
    EdgeDetect,
    Sepia,
    Invert,
    HistogramEqualize,
    AdaptiveThreshold,
    /// Quick saturation boost to 150%
    SaturationBoost,
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    FitToWindow,
    Undo,
    Redo,
    ResetImage,
    Help,
    Exit,
}

impl EditCommand {
    /// All commands in matching order
    pub const ALL: [EditCommand; 22] = [
        EditCommand::Grayscale,
        EditCommand::Blur,
        EditCommand::Sharpen,
        EditCommand::EdgeDetect,
        EditCommand::Sepia,
        EditCommand::Invert,
        EditCommand::HistogramEqualize,
        EditCommand::AdaptiveThreshold,
        EditCommand::SaturationBoost,
        EditCommand::RotateLeft,
        EditCommand::RotateRight,
        EditCommand::FlipHorizontal,
        EditCommand::FlipVertical,
        EditCommand::ZoomIn,
        EditCommand::ZoomOut,
        EditCommand::ResetZoom,
        EditCommand::FitToWindow,
        EditCommand::Undo,
        EditCommand::Redo,
        EditCommand::ResetImage,
        EditCommand::Help,
        EditCommand::Exit,
    ];

    /// Spoken keyword for this command (lowercase)
    pub fn keyword(self) -> &'static str {
        match self {
            EditCommand::Grayscale => "grayscale",
            EditCommand::Blur => "blur",
            EditCommand::Sharpen => "sharpen",
            EditCommand::EdgeDetect => "edge",
            EditCommand::Sepia => "sepia",
            EditCommand::Invert => "invert",
            EditCommand::HistogramEqualize => "histogram",
            EditCommand::AdaptiveThreshold => "adaptive",
            EditCommand::SaturationBoost => "saturation",
            EditCommand::RotateLeft => "rotate left",
            EditCommand::RotateRight => "rotate right",
            EditCommand::FlipHorizontal => "flip horizontal",
            EditCommand::FlipVertical => "flip vertical",
            EditCommand::ZoomIn => "zoom in",
            EditCommand::ZoomOut => "zoom out",
            EditCommand::ResetZoom => "reset zoom",
            EditCommand::FitToWindow => "fit",
            EditCommand::Undo => "undo",
            EditCommand::Redo => "redo",
            EditCommand::ResetImage => "reset",
            EditCommand::Help => "help",
            EditCommand::Exit => "exit",
        }
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A slider-style adjustment taking an integer parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    Brightness,
    Contrast,
    Saturation,
    Hue,
}

impl Adjustment {
    /// Order in which parameter patterns are tried
    pub const PRIORITY: [Adjustment; 4] = [
        Adjustment::Brightness,
        Adjustment::Contrast,
        Adjustment::Saturation,
        Adjustment::Hue,
    ];

    /// Accepted parameter range
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            Adjustment::Brightness => -100..=100,
            Adjustment::Contrast | Adjustment::Saturation => 0..=200,
            Adjustment::Hue => -180..=180,
        }
    }

    /// Parameter value that leaves the frame unchanged
    pub fn identity(self) -> i32 {
        match self {
            Adjustment::Brightness | Adjustment::Hue => 0,
            Adjustment::Contrast | Adjustment::Saturation => 100,
        }
    }

    /// Clamp `value` into [`Adjustment::range`]
    pub fn clamp(self, value: i64) -> i32 {
        let range = self.range();
        value.clamp(*range.start() as i64, *range.end() as i64) as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Adjustment::Brightness => "brightness",
            Adjustment::Contrast => "contrast",
            Adjustment::Saturation => "saturation",
            Adjustment::Hue => "hue",
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of interpreting an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// A zero-argument command
    Command { command: EditCommand },
    /// An adjustment with its (unclamped) spoken parameter
    Adjust { adjustment: Adjustment, value: i32 },
}

impl From<EditCommand> for Action {
    fn from(command: EditCommand) -> Self {
        Action::Command { command }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Command { command } => write!(f, "{}", command),
            Action::Adjust { adjustment, value } => write!(f, "{} {}", adjustment, value),
        }
    }
}
