//! Unit tests for filters.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

use super::*;
use crate::frame::ChannelLayout;

fn solid_rgb(w: u32, h: u32, px: [u8; 3]) -> Frame {
    Frame::from_rgb(RgbImage::from_pixel(w, h, Rgb(px)))
}

fn gray_at(frame: &Frame, x: u32, y: u32) -> u8 {
    frame.as_dynamic().to_luma8().get_pixel(x, y).0[0]
}

#[test]
fn test_only_filter_commands_map_to_filters() {
    assert_eq!(Filter::from_command(EditCommand::Blur), Some(Filter::Blur));
    assert_eq!(
        Filter::from_command(EditCommand::FlipVertical),
        Some(Filter::FlipVertical)
    );
    assert_eq!(Filter::from_command(EditCommand::SaturationBoost), None);
    assert_eq!(Filter::from_command(EditCommand::Undo), None);
    assert_eq!(Filter::from_command(EditCommand::ZoomIn), None);
}

#[test]
fn test_grayscale_yields_single_channel() {
    let out = grayscale(&solid_rgb(3, 2, [200, 10, 10]));
    assert_eq!(out.layout(), ChannelLayout::Gray);
    assert_eq!((out.width(), out.height()), (3, 2));

    let gray = Frame::from_gray(GrayImage::from_pixel(2, 2, Luma([42])));
    assert_eq!(grayscale(&gray), gray);
}

#[test]
fn test_invert_keeps_alpha() {
    assert_eq!(invert(&solid_rgb(1, 1, [10, 20, 30])).as_bytes(), &[245, 235, 225]);

    let rgba = Frame::from_rgba(RgbaImage::from_pixel(1, 1, Rgba([0, 255, 100, 9])));
    assert_eq!(invert(&rgba).as_bytes(), &[255, 0, 155, 9]);
}

#[test]
fn test_sepia_tints_and_promotes_gray() {
    assert_eq!(sepia(&solid_rgb(1, 1, [100, 100, 100])).as_bytes(), &[135, 120, 94]);

    let gray = Frame::from_gray(GrayImage::from_pixel(1, 1, Luma([100])));
    let out = sepia(&gray);
    assert_eq!(out.layout(), ChannelLayout::Rgb);
    assert_eq!(out.as_bytes(), &[135, 120, 94]);
}

#[test]
fn test_equalize_stretches_two_levels_to_extremes() {
    let mut img = GrayImage::from_pixel(4, 4, Luma([50]));
    for x in 0..4 {
        for y in 0..2 {
            img.put_pixel(x, y, Luma([100]));
        }
    }
    let out = equalize_histogram(&Frame::from_gray(img));
    assert_eq!(gray_at(&out, 0, 0), 255);
    assert_eq!(gray_at(&out, 0, 3), 0);
}

#[test]
fn test_equalize_single_level_is_unchanged() {
    let flat = Frame::from_gray(GrayImage::from_pixel(3, 3, Luma([77])));
    assert_eq!(equalize_histogram(&flat), flat);
}

#[test]
fn test_equalize_color_works_on_luma() {
    let mut img = RgbImage::from_pixel(2, 2, Rgb([50, 50, 50]));
    img.put_pixel(0, 0, Rgb([100, 100, 100]));
    img.put_pixel(1, 0, Rgb([100, 100, 100]));

    let out = equalize_histogram(&Frame::from_rgb(img));
    assert_eq!(out.layout(), ChannelLayout::Rgb);
    assert_eq!(&out.as_bytes()[..3], &[255, 255, 255]);
    assert_eq!(&out.as_bytes()[6..9], &[0, 0, 0]);
}

#[test]
fn test_rotate_and_flip() {
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Rgb([1, 1, 1]));
    img.put_pixel(1, 0, Rgb([2, 2, 2]));
    let frame = Frame::from_rgb(img);

    let left = Filter::RotateLeft.apply(&frame);
    assert_eq!((left.width(), left.height()), (1, 2));
    assert_eq!(left.as_bytes(), &[2, 2, 2, 1, 1, 1]);

    let right = Filter::RotateRight.apply(&frame);
    assert_eq!(right.as_bytes(), &[1, 1, 1, 2, 2, 2]);

    let flipped = Filter::FlipHorizontal.apply(&frame);
    assert_eq!(flipped.as_bytes(), &[2, 2, 2, 1, 1, 1]);
    assert_eq!(Filter::FlipVertical.apply(&frame), frame);
}

#[test]
fn test_edges_follow_a_vertical_step() {
    let img = GrayImage::from_fn(8, 6, |x, _| if x < 4 { Luma([0]) } else { Luma([255]) });
    let out = edge_detect(&Frame::from_gray(img));
    assert_eq!(out.layout(), ChannelLayout::Gray);

    for y in 0..6 {
        for x in 0..8 {
            let expected = if x == 3 { 255 } else { 0 };
            assert_eq!(gray_at(&out, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_edges_of_flat_image_are_empty() {
    let out = edge_detect(&solid_rgb(5, 5, [90, 120, 30]));
    assert!(out.as_bytes().iter().all(|&v| v == 0));
}

#[test]
fn test_adaptive_threshold_marks_dark_spot() {
    let mut img = GrayImage::from_pixel(21, 21, Luma([255]));
    img.put_pixel(10, 10, Luma([0]));
    let out = adaptive_threshold(&Frame::from_gray(img));

    assert_eq!(out.layout(), ChannelLayout::Gray);
    assert_eq!(gray_at(&out, 10, 10), 0);
    assert_eq!(gray_at(&out, 0, 0), 255);

    let flat = adaptive_threshold(&solid_rgb(6, 6, [100, 100, 100]));
    assert!(flat.as_bytes().iter().all(|&v| v == 255));
}

#[test]
fn test_blur_spreads_a_point() {
    let mut img = RgbImage::new(9, 9);
    img.put_pixel(4, 4, Rgb([255, 255, 255]));
    let out = blur(&Frame::from_rgb(img));

    assert_eq!(out.layout(), ChannelLayout::Rgb);
    assert!(gray_at(&out, 4, 4) < 255);
    assert!(gray_at(&out, 5, 4) > 0);
}

#[test]
fn test_sharpen_boosts_local_contrast() {
    let mut img = GrayImage::from_pixel(5, 5, Luma([40]));
    img.put_pixel(2, 2, Luma([50]));
    let out = sharpen(&Frame::from_gray(img));

    assert_eq!(gray_at(&out, 2, 2), 130);
    assert_eq!(gray_at(&out, 1, 2), 30);
    assert_eq!(gray_at(&out, 0, 0), 40);
}

#[test]
fn test_sharpen_keeps_alpha() {
    let frame = Frame::from_rgba(RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 128])));
    assert_eq!(sharpen(&frame), frame);
}
