use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::split::{self, Split};
use image::{ColorType, DynamicImage, ImageFormat};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Color layout of the file as stored, before the decoder expands palettes and `tRNS` chunks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceColor {
    /// Conventional short mode name (`RGBA`, `P`, `LA`, ...).
    pub mode: &'static str,
    /// Only a stored alpha channel counts; palette or color-key transparency does not.
    pub has_alpha: bool,
}

impl SourceColor {
    pub fn from_png_header(color: png::ColorType, depth: png::BitDepth) -> SourceColor {
        let (mode, has_alpha) = match color {
            png::ColorType::Grayscale => match depth {
                png::BitDepth::One => ("1", false),
                png::BitDepth::Sixteen => ("I", false),
                _ => ("L", false),
            },
            png::ColorType::RGB => ("RGB", false),
            png::ColorType::Indexed => ("P", false),
            png::ColorType::GrayscaleAlpha => ("LA", true),
            png::ColorType::RGBA => ("RGBA", true),
        };

        SourceColor { mode, has_alpha }
    }

    pub fn from_decoded(color: ColorType) -> SourceColor {
        let mode = match color {
            ColorType::L8 => "L",
            ColorType::L16 => "I;16",
            ColorType::La8 | ColorType::La16 => "LA",
            ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Bgr8 => "RGB",
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Bgra8 => "RGBA",
            _ if color.has_alpha() => "RGBA",
            _ => "RGB",
        };

        SourceColor {
            mode,
            has_alpha: color.has_alpha(),
        }
    }

    /// Reads the stored layout of `path`. PNGs are judged by their header, other formats by `decoded`.
    pub fn of_file(path: &Path, decoded: ColorType) -> Result<SourceColor, SplitError> {
        if ImageFormat::from_path(path).ok() != Some(ImageFormat::Png) {
            return Ok(SourceColor::from_decoded(decoded));
        }

        let header_error = |source: png::DecodingError| SplitError::PngHeader {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(|err| header_error(err.into()))?;
        let (_, reader) = png::Decoder::new(BufReader::new(file))
            .read_info()
            .map_err(header_error)?;
        let info = reader.info();

        debug!(
            "{} stored as {:?} at {:?}",
            path.display(),
            info.color_type,
            info.bit_depth
        );
        Ok(SourceColor::from_png_header(info.color_type, info.bit_depth))
    }
}

/// A decoded source image together with how it was stored.
pub struct Source {
    pub image: DynamicImage,
    pub color: SourceColor,
}

impl Source {
    /// Wraps an in-memory image; its decoded color type is taken as the stored one.
    pub fn from_image(image: DynamicImage) -> Source {
        let color = SourceColor::from_decoded(image.color());
        Source { image, color }
    }

    /// Finds the split column, scoring opacity only if the stored layout has an alpha channel.
    pub fn split(&self, config: &SplitConfig) -> Split {
        split::scan(&self.image, self.color.has_alpha, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_and_color_key_pngs_have_no_alpha() {
        let indexed = SourceColor::from_png_header(png::ColorType::Indexed, png::BitDepth::Eight);
        assert_eq!(indexed, SourceColor { mode: "P", has_alpha: false });

        let rgb = SourceColor::from_png_header(png::ColorType::RGB, png::BitDepth::Eight);
        assert!(!rgb.has_alpha);
    }

    #[test]
    fn png_modes_follow_header() {
        let mode = |color, depth| SourceColor::from_png_header(color, depth).mode;

        assert_eq!(mode(png::ColorType::RGBA, png::BitDepth::Eight), "RGBA");
        assert_eq!(mode(png::ColorType::RGBA, png::BitDepth::Sixteen), "RGBA");
        assert_eq!(mode(png::ColorType::GrayscaleAlpha, png::BitDepth::Eight), "LA");
        assert_eq!(mode(png::ColorType::Grayscale, png::BitDepth::One), "1");
        assert_eq!(mode(png::ColorType::Grayscale, png::BitDepth::Four), "L");
        assert_eq!(mode(png::ColorType::Grayscale, png::BitDepth::Sixteen), "I");
    }

    #[test]
    fn decoded_modes() {
        assert_eq!(SourceColor::from_decoded(ColorType::Rgba8).mode, "RGBA");
        assert_eq!(SourceColor::from_decoded(ColorType::Rgb8).mode, "RGB");
        assert_eq!(SourceColor::from_decoded(ColorType::La8).mode, "LA");
        assert_eq!(SourceColor::from_decoded(ColorType::L8).mode, "L");
        assert!(SourceColor::from_decoded(ColorType::La16).has_alpha);
        assert!(!SourceColor::from_decoded(ColorType::Rgb16).has_alpha);
    }

    #[test]
    fn in_memory_source_trusts_decoded_alpha() {
        let image = DynamicImage::ImageRgba8(image::RgbaImage::from_fn(60, 3, |x, _| {
            image::Rgba([9, 9, 9, if x == 12 { 0 } else { 255 }])
        }));
        let source = Source::from_image(image);

        assert_eq!(source.color.mode, "RGBA");
        assert_eq!(source.split(&SplitConfig::default()).column, 12);
    }

    #[test]
    fn non_png_paths_use_decoded_color() {
        let color = SourceColor::of_file(Path::new("logo.jpg"), ColorType::Rgb8).unwrap();
        assert_eq!(color, SourceColor { mode: "RGB", has_alpha: false });
    }
}
