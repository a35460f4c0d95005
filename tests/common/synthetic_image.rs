use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Fully opaque RGBA image with fully transparent columns at `gaps`.
pub fn opaque_with_gaps(width: u32, height: u32, gaps: &[u32]) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if gaps.contains(&x) { 0 } else { 255 };
        Rgba([(x % 251) as u8, (y % 241) as u8, 90, alpha])
    }))
}

/// RGB image with a high-contrast vertical stripe pattern.
pub fn stripes_rgb(width: u32, height: u32, stripe: u32) -> DynamicImage {
    assert!(stripe > 0, "stripe width must be positive");

    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
        if (x / stripe) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    }))
}

/// Writes an 8-bit palette PNG (black, white) whose `tRNS` chunk makes black fully transparent.
/// Columns listed in `transparent` use the black entry, all others the opaque white one.
pub fn write_indexed_png(path: &Path, width: u32, height: u32, transparent: &[u32]) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![0, 0, 0, 255, 255, 255]);
    encoder.set_trns(vec![0, 255]);

    let data: Vec<u8> = (0..height)
        .flat_map(|_| (0..width).map(|x| if transparent.contains(&x) { 0 } else { 1 }))
        .collect();

    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&data).unwrap();
}
