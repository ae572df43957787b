//! Per-pixel tone filters.

use image::DynamicImage;

use crate::frame::{ChannelLayout, Frame};

/// Luma only; alpha is dropped
pub fn grayscale(frame: &Frame) -> Frame {
    match frame.layout() {
        ChannelLayout::Gray => frame.clone(),
        _ => Frame::from_gray(frame.as_dynamic().to_luma8()),
    }
}

pub fn invert(frame: &Frame) -> Frame {
    frame.map_color_samples(|s| 255 - s)
}

/// Warm brown tint; grayscale input is promoted to RGB
pub fn sepia(frame: &Frame) -> Frame {
    let mut color = frame.to_color().into_dynamic();
    let samples: &mut [u8] = match &mut color {
        DynamicImage::ImageRgb8(buf) => &mut **buf,
        DynamicImage::ImageRgba8(buf) => &mut **buf,
        _ => return frame.to_color(),
    };
    let channels = if frame.layout().has_alpha() { 4 } else { 3 };

    for px in samples.chunks_exact_mut(channels) {
        let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
        px[0] = to_u8(0.393 * r + 0.769 * g + 0.189 * b);
        px[1] = to_u8(0.349 * r + 0.686 * g + 0.168 * b);
        px[2] = to_u8(0.272 * r + 0.534 * g + 0.131 * b);
    }
    Frame::from_dynamic(color)
}

/// Spread the intensity histogram over the full range
///
/// Grayscale frames are equalized directly. Color frames are equalized on the
/// luma of a YCrCb representation so hues stay put.
pub fn equalize_histogram(frame: &Frame) -> Frame {
    if frame.layout() == ChannelLayout::Gray {
        let mut gray = frame.as_dynamic().to_luma8();
        let lut = equalization_lut(gray.as_raw());
        for p in gray.pixels_mut() {
            p.0[0] = lut[p.0[0] as usize];
        }
        return Frame::from_gray(gray);
    }

    let mut color = frame.as_dynamic().clone();
    let channels = frame.layout().channels() as usize;
    let samples: &mut [u8] = match &mut color {
        DynamicImage::ImageRgb8(buf) => &mut **buf,
        DynamicImage::ImageRgba8(buf) => &mut **buf,
        _ => return frame.clone(),
    };

    let luma: Vec<u8> = samples
        .chunks_exact(channels)
        .map(|px| to_u8(luma_of(px[0], px[1], px[2])))
        .collect();
    let lut = equalization_lut(&luma);

    for px in samples.chunks_exact_mut(channels) {
        let (r, b) = (px[0] as f32, px[2] as f32);
        let y = luma_of(px[0], px[1], px[2]);
        let cr = (r - y) * 0.713;
        let cb = (b - y) * 0.564;
        let y = lut[to_u8(y) as usize] as f32;
        px[0] = to_u8(y + 1.403 * cr);
        px[1] = to_u8(y - 0.714 * cr - 0.344 * cb);
        px[2] = to_u8(y + 1.773 * cb);
    }
    Frame::from_dynamic(color)
}

/// Lookup table mapping each level to its equalized level
fn equalization_lut(samples: &[u8]) -> [u8; 256] {
    let mut histogram = [0usize; 256];
    for &s in samples {
        histogram[s as usize] += 1;
    }

    let mut lut = [0u8; 256];
    let total = samples.len();
    let Some(first) = histogram.iter().position(|&count| count > 0) else {
        return lut;
    };
    let cdf_min = histogram[first];
    if total == cdf_min {
        // Single level: leave it where it is
        for (level, slot) in lut.iter_mut().enumerate() {
            *slot = level as u8;
        }
        return lut;
    }

    let scale = 255.0 / (total - cdf_min) as f32;
    let mut cdf = 0usize;
    for (level, slot) in lut.iter_mut().enumerate() {
        cdf += histogram[level];
        *slot = to_u8(cdf.saturating_sub(cdf_min) as f32 * scale);
    }
    lut
}

fn luma_of(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
