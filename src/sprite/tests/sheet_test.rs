use crate::sprite::sheet::{RowSpec, EMBEDDED_SHEET};
use crate::sprite::{FrameRect, SheetError, SheetLayout, SpriteSheet, SKELETON_LAYOUT};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub fn png_bytes(image: &RgbaImage) -> Vec<u8> {
    let mut data = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
        .unwrap();
    data
}

/// 2x2 frames, everything on row 0.
pub fn tiny_layout() -> SheetLayout {
    let row = RowSpec {
        row: 0,
        frame_count: 1,
        ticks_per_frame: 1,
    };
    SheetLayout {
        frame_width: 2,
        frame_height: 2,
        attack: row,
        walk: row,
        idle: row,
    }
}

#[test]
fn test_layout_requirements() {
    assert_eq!(SKELETON_LAYOUT.attack_ticks(), 65);
    assert_eq!(SKELETON_LAYOUT.min_size(), (832, 256));
}

#[test]
fn test_embedded_sheet_decodes() {
    let sheet = SpriteSheet::embedded(&SKELETON_LAYOUT).unwrap();
    assert_eq!(sheet.dimensions(), (832, 256));
    assert!(!EMBEDDED_SHEET.is_empty());
}

#[test]
fn test_embedded_sheet_has_transparent_corners_and_a_skull() {
    let sheet = SpriteSheet::embedded(&SKELETON_LAYOUT).unwrap();
    let idle_first = FrameRect {
        x: 0,
        y: 192,
        width: 64,
        height: 64,
    };
    assert_eq!(sheet.frame_pixel(&idle_first, 0, 0), None);
    assert!(sheet.frame_pixel(&idle_first, 30, 15).is_some());
}

#[test]
fn test_garbage_is_a_decode_error() {
    let err = SpriteSheet::from_bytes(b"definitely not a png", &SKELETON_LAYOUT).unwrap_err();
    assert!(matches!(err, SheetError::Decode(_)), "got {err}");
}

#[test]
fn test_small_sheet_is_rejected() {
    let data = png_bytes(&RgbaImage::new(64, 64));
    let err = SpriteSheet::from_bytes(&data, &SKELETON_LAYOUT).unwrap_err();
    match err {
        SheetError::TooSmall {
            width,
            height,
            min_width,
            min_height,
        } => assert_eq!((width, height, min_width, min_height), (64, 64, 832, 256)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = SpriteSheet::from_path(
        std::path::Path::new("/definitely/not/here.png"),
        &SKELETON_LAYOUT,
    )
    .unwrap_err();
    assert!(matches!(err, SheetError::Io(..)));
    assert!(err.to_string().contains("/definitely/not/here.png"));
}

#[test]
fn test_frame_pixel_respects_alpha_and_bounds() {
    let mut image = RgbaImage::new(4, 2);
    image.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
    image.put_pixel(1, 0, Rgba([10, 20, 30, 40]));
    image.put_pixel(2, 1, Rgba([200, 100, 0, 255]));
    let sheet = SpriteSheet::from_bytes(&png_bytes(&image), &tiny_layout()).unwrap();

    let first = FrameRect {
        x: 0,
        y: 0,
        width: 2,
        height: 2,
    };
    let second = FrameRect { x: 2, ..first };

    assert_eq!(sheet.frame_pixel(&first, 0, 0), Some([10, 20, 30]));
    assert_eq!(sheet.frame_pixel(&first, 1, 0), None, "mostly transparent");
    assert_eq!(sheet.frame_pixel(&first, 2, 1), None, "outside the frame");
    assert_eq!(sheet.frame_pixel(&second, 0, 1), Some([200, 100, 0]));
}
