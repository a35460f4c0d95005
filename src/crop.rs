use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::split::Split;
use image::{DynamicImage, GenericImageView};
use log::info;
use std::path::Path;

/// Cuts `image` at `column` into `[0, column)` and `[column, width)`, both at full height.
///
/// The pixels are copied as they are, so either half may be zero pixels wide.
pub fn split_halves(image: &DynamicImage, column: u32) -> (DynamicImage, DynamicImage) {
    let (width, height) = image.dimensions();
    let column = column.min(width);

    let left = image.crop_imm(0, 0, column, height);
    let right = image.crop_imm(column, 0, width - column, height);

    (left, right)
}

/// Writes both halves of `image` to the configured outputs, replacing existing files.
pub fn save_halves(image: &DynamicImage, split: &Split, config: &SplitConfig) -> Result<(), SplitError> {
    let (left, right) = split_halves(image, split.column);

    save(&left, &config.left_output)?;
    save(&right, &config.right_output)
}

fn save(image: &DynamicImage, path: &Path) -> Result<(), SplitError> {
    image.save(path).map_err(|source| SplitError::Image {
        path: path.to_path_buf(),
        source,
    })?;

    info!("wrote {}x{} to {}", image.width(), image.height(), path.display());
    Ok(())
}
