//! Compressed frame snapshots.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};

use super::HistoryError;
use crate::frame::{ChannelLayout, Frame};

/// An immutable compressed copy of one frame
///
/// Color data is JPEG encoded. JPEG has no alpha channel, so RGBA frames keep
/// their alpha plane separately, deflated without loss.
#[derive(Debug, Clone)]
pub struct Snapshot {
    layout: ChannelLayout,
    width: u32,
    height: u32,
    color: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl Snapshot {
    /// Compress `frame` at the given JPEG quality (1-100)
    pub fn capture(frame: &Frame, quality: u8) -> Result<Self, HistoryError> {
        let quality = quality.clamp(1, 100);
        let mut color = Vec::new();
        let mut alpha = None;

        match frame.as_dynamic() {
            DynamicImage::ImageLuma8(gray) => {
                gray.write_with_encoder(JpegEncoder::new_with_quality(&mut color, quality))?;
            }
            DynamicImage::ImageRgba8(rgba) => {
                let rgb = DynamicImage::ImageRgba8(rgba.clone()).to_rgb8();
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut color, quality))?;
                let plane: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                alpha = Some(deflate(&plane)?);
            }
            other => {
                let rgb = other.to_rgb8();
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut color, quality))?;
            }
        }

        Ok(Self {
            layout: frame.layout(),
            width: frame.width(),
            height: frame.height(),
            color,
            alpha,
        })
    }

    /// Decompress back into a frame
    pub fn restore(&self) -> Result<Frame, HistoryError> {
        let decoded = image::load_from_memory_with_format(&self.color, ImageFormat::Jpeg)?;

        let frame = match self.layout {
            ChannelLayout::Gray => Frame::from_gray(decoded.to_luma8()),
            ChannelLayout::Rgb => Frame::from_rgb(decoded.to_rgb8()),
            ChannelLayout::Rgba => {
                let plane = match &self.alpha {
                    Some(bytes) => inflate(bytes)?,
                    None => vec![u8::MAX; (self.width as usize) * (self.height as usize)],
                };
                let rgb = decoded.to_rgb8();
                let expected = (rgb.width() as usize) * (rgb.height() as usize);
                if plane.len() != expected {
                    return Err(HistoryError::Alpha(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!(
                            "alpha plane has {} samples, expected {}",
                            plane.len(),
                            expected
                        ),
                    )));
                }
                let mut rgba = RgbaImage::new(rgb.width(), rgb.height());
                for ((dst, src), a) in rgba.pixels_mut().zip(rgb.pixels()).zip(plane) {
                    dst.0 = [src.0[0], src.0[1], src.0[2], a];
                }
                Frame::from_rgba(rgba)
            }
        };

        Ok(frame)
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes held by this snapshot
    pub fn compressed_len(&self) -> usize {
        self.color.len() + self.alpha.as_ref().map_or(0, Vec::len)
    }
}

fn deflate(plane: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(plane)?;
    encoder.finish()
}

fn inflate(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(bytes);
    let mut plane = Vec::new();
    decoder.read_to_end(&mut plane)?;
    Ok(plane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba};

    #[test]
    fn test_alpha_plane_survives_exactly() {
        let mut rgba = RgbaImage::new(8, 8);
        for (x, y, p) in rgba.enumerate_pixels_mut() {
            *p = Rgba([120, 60, 30, (x * 32 + y) as u8]);
        }
        let frame = Frame::from_rgba(rgba.clone());

        let restored = Snapshot::capture(&frame, 90).unwrap().restore().unwrap();
        assert_eq!(restored.layout(), ChannelLayout::Rgba);
        let restored = restored.into_dynamic().to_rgba8();
        for (a, b) in rgba.pixels().zip(restored.pixels()) {
            assert_eq!(a.0[3], b.0[3]);
        }
    }

    #[test]
    fn test_gray_snapshot_keeps_layout() {
        let frame = Frame::from_gray(GrayImage::from_pixel(16, 16, Luma([128])));
        let snapshot = Snapshot::capture(&frame, 90).unwrap();
        assert_eq!(snapshot.layout(), ChannelLayout::Gray);
        assert_eq!(snapshot.dimensions(), (16, 16));

        let restored = snapshot.restore().unwrap();
        assert_eq!(restored.layout(), ChannelLayout::Gray);
        assert!(restored.as_bytes().iter().all(|v| v.abs_diff(128) <= 2));
    }

    #[test]
    fn test_snapshot_is_smaller_than_raw_frame() {
        let frame = Frame::from_gray(GrayImage::from_pixel(256, 256, Luma([40])));
        let snapshot = Snapshot::capture(&frame, 90).unwrap();
        assert!(snapshot.compressed_len() < frame.as_bytes().len());
    }
}
