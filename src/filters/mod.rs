//! Zero-argument image filters and transforms
//!
//! Every filter is a pure `&Frame -> Frame` function. The session records
//! history before calling one and swaps the result in afterwards.

mod spatial;
mod tone;

#[cfg(test)]
mod tests;

pub use spatial::{adaptive_threshold, blur, edge_detect, sharpen};
pub use tone::{equalize_histogram, grayscale, invert, sepia};

use crate::frame::Frame;
use crate::interpreter::EditCommand;

/// A filter or geometric transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Grayscale,
    Blur,
    Sharpen,
    EdgeDetect,
    Sepia,
    Invert,
    HistogramEqualize,
    AdaptiveThreshold,
    RotateLeft,
    RotateRight,
    FlipHorizontal,
    FlipVertical,
}

impl Filter {
    /// The filter a command runs, if it is a filter command
    pub fn from_command(command: EditCommand) -> Option<Self> {
        let filter = match command {
            EditCommand::Grayscale => Filter::Grayscale,
            EditCommand::Blur => Filter::Blur,
            EditCommand::Sharpen => Filter::Sharpen,
            EditCommand::EdgeDetect => Filter::EdgeDetect,
            EditCommand::Sepia => Filter::Sepia,
            EditCommand::Invert => Filter::Invert,
            EditCommand::HistogramEqualize => Filter::HistogramEqualize,
            EditCommand::AdaptiveThreshold => Filter::AdaptiveThreshold,
            EditCommand::RotateLeft => Filter::RotateLeft,
            EditCommand::RotateRight => Filter::RotateRight,
            EditCommand::FlipHorizontal => Filter::FlipHorizontal,
            EditCommand::FlipVertical => Filter::FlipVertical,
            _ => return None,
        };
        Some(filter)
    }

    /// Confirmation shown (and spoken) after the filter ran
    pub fn confirmation(self) -> &'static str {
        match self {
            Filter::Grayscale => "Grayscale applied",
            Filter::Blur => "Blur applied",
            Filter::Sharpen => "Sharpen applied",
            Filter::EdgeDetect => "Edge detection applied",
            Filter::Sepia => "Sepia applied",
            Filter::Invert => "Invert applied",
            Filter::HistogramEqualize => "Histogram equalization applied",
            Filter::AdaptiveThreshold => "Adaptive threshold applied",
            Filter::RotateLeft => "Rotated left",
            Filter::RotateRight => "Rotated right",
            Filter::FlipHorizontal => "Flipped horizontally",
            Filter::FlipVertical => "Flipped vertically",
        }
    }

    pub fn apply(self, frame: &Frame) -> Frame {
        match self {
            Filter::Grayscale => grayscale(frame),
            Filter::Blur => blur(frame),
            Filter::Sharpen => sharpen(frame),
            Filter::EdgeDetect => edge_detect(frame),
            Filter::Sepia => sepia(frame),
            Filter::Invert => invert(frame),
            Filter::HistogramEqualize => equalize_histogram(frame),
            Filter::AdaptiveThreshold => adaptive_threshold(frame),
            Filter::RotateLeft => Frame::from_dynamic(frame.as_dynamic().rotate270()),
            Filter::RotateRight => Frame::from_dynamic(frame.as_dynamic().rotate90()),
            Filter::FlipHorizontal => Frame::from_dynamic(frame.as_dynamic().fliph()),
            Filter::FlipVertical => Frame::from_dynamic(frame.as_dynamic().flipv()),
        }
    }
}
