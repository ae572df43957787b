//! Color adjustments
//!
//! Pure functions from (input frame, parameter) to a new frame, plus the
//! [`AdjustmentState`] that decides which input each adjustment reads.
//! Parameters are clamped to [`Adjustment::range`] before use.

mod baseline;
mod color;

pub use baseline::{AdjustmentState, AdjustmentValues};
pub use color::{HUE_PERIOD, Hsv, hsv_to_rgb, rgb_to_hsv, shift_hue};

use image::DynamicImage;

use crate::frame::Frame;
use crate::interpreter::Adjustment;

/// Add `value` to every color sample, saturating at 0 and 255
pub fn brightness(frame: &Frame, value: i32) -> Frame {
    let offset = Adjustment::Brightness.clamp(value as i64);
    frame.map_color_samples(|s| (s as i32 + offset).clamp(0, 255) as u8)
}

/// Scale every color sample by `value / 100`, saturating at 255
pub fn contrast(frame: &Frame, value: i32) -> Frame {
    let factor = Adjustment::Contrast.clamp(value as i64) as f32 / 100.0;
    frame.map_color_samples(|s| (s as f32 * factor).round().clamp(0.0, 255.0) as u8)
}

/// Scale the HSV saturation channel by `value / 100`
///
/// Grayscale frames are promoted to RGB first.
pub fn saturation(frame: &Frame, value: i32) -> Frame {
    let factor = Adjustment::Saturation.clamp(value as i64) as f32 / 100.0;
    map_hsv(frame, |hsv| Hsv {
        s: (hsv.s as f32 * factor).round().clamp(0.0, 255.0) as u8,
        ..hsv
    })
}

/// Rotate the HSV hue channel by `value` stored units, wrapping around
///
/// Grayscale frames are promoted to RGB first.
pub fn hue(frame: &Frame, value: i32) -> Frame {
    let delta = Adjustment::Hue.clamp(value as i64);
    map_hsv(frame, |hsv| Hsv {
        h: shift_hue(hsv.h, delta),
        ..hsv
    })
}

/// Apply any adjustment by kind
pub fn apply(adjustment: Adjustment, frame: &Frame, value: i32) -> Frame {
    match adjustment {
        Adjustment::Brightness => brightness(frame, value),
        Adjustment::Contrast => contrast(frame, value),
        Adjustment::Saturation => saturation(frame, value),
        Adjustment::Hue => hue(frame, value),
    }
}

fn map_hsv(frame: &Frame, f: impl Fn(Hsv) -> Hsv) -> Frame {
    match frame.to_color().into_dynamic() {
        DynamicImage::ImageRgb8(mut buf) => {
            for p in buf.pixels_mut() {
                let (r, g, b) = hsv_to_rgb(f(rgb_to_hsv(p.0[0], p.0[1], p.0[2])));
                p.0 = [r, g, b];
            }
            Frame::from_rgb(buf)
        }
        DynamicImage::ImageRgba8(mut buf) => {
            for p in buf.pixels_mut() {
                let (r, g, b) = hsv_to_rgb(f(rgb_to_hsv(p.0[0], p.0[1], p.0[2])));
                p.0 = [r, g, b, p.0[3]];
            }
            Frame::from_rgba(buf)
        }
        other => Frame::from_dynamic(other),
    }
}
