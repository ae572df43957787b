//! Raster frames owned by the editor session.
//!
//! A [`Frame`] is always one of three 8-bit layouts: grayscale, RGB or RGBA.
//! Decoded images in any other layout are normalized on construction so the
//! rest of the crate only has to handle those three.

use std::fmt;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

/// Channel layout of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelLayout {
    Gray,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    /// Number of samples per pixel
    pub fn channels(self) -> u8 {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Number of color samples per pixel (alpha excluded)
    pub fn color_channels(self) -> u8 {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::Rgb | ChannelLayout::Rgba => 3,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ChannelLayout::Rgba)
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLayout::Gray => write!(f, "gray"),
            ChannelLayout::Rgb => write!(f, "rgb"),
            ChannelLayout::Rgba => write!(f, "rgba"),
        }
    }
}

/// An 8-bit pixel buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    image: DynamicImage,
}

impl Frame {
    /// Wrap a decoded image, converting it to one of the supported layouts
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let image = match image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => {
                image
            }
            other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
            other if other.color().channel_count() == 1 => DynamicImage::ImageLuma8(other.to_luma8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        };
        Self { image }
    }

    pub fn from_gray(image: GrayImage) -> Self {
        Self {
            image: DynamicImage::ImageLuma8(image),
        }
    }

    pub fn from_rgb(image: RgbImage) -> Self {
        Self {
            image: DynamicImage::ImageRgb8(image),
        }
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            image: DynamicImage::ImageRgba8(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn layout(&self) -> ChannelLayout {
        match self.image {
            DynamicImage::ImageLuma8(_) => ChannelLayout::Gray,
            DynamicImage::ImageRgba8(_) => ChannelLayout::Rgba,
            _ => ChannelLayout::Rgb,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Raw interleaved samples
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    /// Color view of the frame; grayscale is promoted, alpha is kept
    pub fn to_color(&self) -> Frame {
        match self.layout() {
            ChannelLayout::Gray => Frame::from_rgb(self.image.to_rgb8()),
            _ => self.clone(),
        }
    }

    /// Apply `f` to every color sample, leaving alpha untouched
    pub fn map_color_samples(&self, f: impl Fn(u8) -> u8) -> Frame {
        let mut image = self.image.clone();
        let channels = self.layout().channels() as usize;
        let color = self.layout().color_channels() as usize;
        let samples: &mut [u8] = match &mut image {
            DynamicImage::ImageLuma8(buf) => &mut **buf,
            DynamicImage::ImageRgb8(buf) => &mut **buf,
            DynamicImage::ImageRgba8(buf) => &mut **buf,
            // Construction guarantees one of the three layouts above
            _ => return self.clone(),
        };
        for pixel in samples.chunks_exact_mut(channels) {
            for sample in &mut pixel[..color] {
                *sample = f(*sample);
            }
        }
        Frame { image }
    }
}

impl From<DynamicImage> for Frame {
    fn from(image: DynamicImage) -> Self {
        Frame::from_dynamic(image)
    }
}
