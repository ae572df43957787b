//! Neighborhood filters: blur, sharpen, edges and adaptive threshold.

use image::{GrayImage, RgbImage, RgbaImage, imageops};

use crate::frame::{ChannelLayout, Frame};

/// Gaussian sigma matching a 15x15 kernel
const BLUR_SIGMA: f32 = 2.6;

/// Sigma matching an 11x11 neighborhood
const THRESHOLD_SIGMA: f32 = 2.0;
/// Subtracted from the neighborhood mean before comparing
const THRESHOLD_OFFSET: i32 = 2;

const EDGE_LOW: i32 = 100;
const EDGE_HIGH: i32 = 200;

const SHARPEN_KERNEL: [i32; 9] = [-1, -1, -1, -1, 9, -1, -1, -1, -1];

pub fn blur(frame: &Frame) -> Frame {
    Frame::from_dynamic(frame.as_dynamic().blur(BLUR_SIGMA))
}

/// 3x3 sharpen with replicated borders; alpha is left alone
pub fn sharpen(frame: &Frame) -> Frame {
    let (w, h) = (frame.width() as usize, frame.height() as usize);
    if w == 0 || h == 0 {
        return frame.clone();
    }
    let channels = frame.layout().channels() as usize;
    let color = frame.layout().color_channels() as usize;
    let src = frame.as_bytes();

    let mut out = src.to_vec();
    for y in 0..h {
        for x in 0..w {
            for c in 0..color {
                let mut acc = 0i32;
                for (k, weight) in SHARPEN_KERNEL.iter().enumerate() {
                    let sx = clamp_index(x as isize + (k % 3) as isize - 1, w);
                    let sy = clamp_index(y as isize + (k / 3) as isize - 1, h);
                    acc += weight * src[(sy * w + sx) * channels + c] as i32;
                }
                out[(y * w + x) * channels + c] = acc.clamp(0, 255) as u8;
            }
        }
    }

    rebuild(frame, out)
}

/// Binary edge map (Sobel gradients, thinning, hysteresis)
///
/// The result is always grayscale: 255 on edges, 0 elsewhere.
pub fn edge_detect(frame: &Frame) -> Frame {
    let gray = frame.as_dynamic().to_luma8();
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    if w == 0 || h == 0 {
        return Frame::from_gray(gray);
    }
    let src = gray.as_raw();
    let at = |x: isize, y: isize| src[clamp_index(y, h) * w + clamp_index(x, w)] as i32;

    let mut gradients = vec![(0i32, 0i32); w * h];
    let mut magnitude = vec![0i32; w * h];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let dx = (at(x + 1, y - 1) + 2 * at(x + 1, y) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2 * at(x - 1, y) + at(x - 1, y + 1));
            let dy = (at(x - 1, y + 1) + 2 * at(x, y + 1) + at(x + 1, y + 1))
                - (at(x - 1, y - 1) + 2 * at(x, y - 1) + at(x + 1, y - 1));
            let i = y as usize * w + x as usize;
            gradients[i] = (dx, dy);
            magnitude[i] = dx.abs() + dy.abs();
        }
    }

    let mag_at = |x: isize, y: isize| {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0
        } else {
            magnitude[y as usize * w + x as usize]
        }
    };

    // Keep only local maxima across the gradient direction
    let mut thin = vec![0i32; w * h];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let i = y as usize * w + x as usize;
            let m = magnitude[i];
            if m <= EDGE_LOW {
                continue;
            }
            let (dx, dy) = gradients[i];
            let (ax, ay) = (dx.abs() as i64, dy.abs() as i64);
            // tan(22.5) ~ 0.414, tan(67.5) ~ 2.414
            let (a, b) = if ay * 1000 <= ax * 414 {
                (mag_at(x - 1, y), mag_at(x + 1, y))
            } else if ay * 1000 >= ax * 2414 {
                (mag_at(x, y - 1), mag_at(x, y + 1))
            } else if (dx > 0) == (dy > 0) {
                (mag_at(x - 1, y - 1), mag_at(x + 1, y + 1))
            } else {
                (mag_at(x + 1, y - 1), mag_at(x - 1, y + 1))
            };
            if m > a && m >= b {
                thin[i] = m;
            }
        }
    }

    // Grow strong edges through connected weak ones
    let mut out = vec![0u8; w * h];
    let mut stack: Vec<usize> = (0..w * h).filter(|&i| thin[i] > EDGE_HIGH).collect();
    for &i in &stack {
        out[i] = 255;
    }
    while let Some(i) = stack.pop() {
        let (x, y) = ((i % w) as isize, (i / w) as isize);
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let j = ny as usize * w + nx as usize;
                if out[j] == 0 && thin[j] > EDGE_LOW {
                    out[j] = 255;
                    stack.push(j);
                }
            }
        }
    }

    match GrayImage::from_raw(w as u32, h as u32, out) {
        Some(edges) => Frame::from_gray(edges),
        None => Frame::from_gray(gray),
    }
}

/// Binarize each pixel against its Gaussian-weighted neighborhood mean
pub fn adaptive_threshold(frame: &Frame) -> Frame {
    let gray = frame.as_dynamic().to_luma8();
    let mean = imageops::blur(&gray, THRESHOLD_SIGMA);

    let mut out = gray;
    for (px, m) in out.pixels_mut().zip(mean.pixels()) {
        let threshold = m.0[0] as i32 - THRESHOLD_OFFSET;
        px.0[0] = if px.0[0] as i32 > threshold { 255 } else { 0 };
    }
    Frame::from_gray(out)
}

fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

fn rebuild(template: &Frame, samples: Vec<u8>) -> Frame {
    let (w, h) = (template.width(), template.height());
    let image = match template.layout() {
        ChannelLayout::Gray => GrayImage::from_raw(w, h, samples).map(Frame::from_gray),
        ChannelLayout::Rgb => RgbImage::from_raw(w, h, samples).map(Frame::from_rgb),
        ChannelLayout::Rgba => RgbaImage::from_raw(w, h, samples).map(Frame::from_rgba),
    };
    image.unwrap_or_else(|| template.clone())
}
