//! Splits a logo image into a left and a right half along the emptiest column near its center.

pub mod column;
pub mod config;
pub mod crop;
pub mod error;
pub mod source;
pub mod split;

pub use config::SplitConfig;
pub use error::SplitError;
pub use source::{Source, SourceColor};
pub use split::{find_split, Split};

use image::GenericImageView;
use log::{debug, error};

/// Decodes the configured source image. A missing file is reported before the decoder is involved.
pub fn load_source(config: &SplitConfig) -> Result<Source, SplitError> {
    if !config.source.exists() {
        error!("{} does not exist", config.source.display());
        return Err(SplitError::SourceMissing(config.source.clone()));
    }

    let image = image::open(&config.source).map_err(|source| SplitError::Image {
        path: config.source.clone(),
        source,
    })?;

    let color = SourceColor::of_file(&config.source, image.color())?;

    debug!(
        "loaded {} ({}x{}, decoded as {:?}, stored as {})",
        config.source.display(),
        image.width(),
        image.height(),
        image.color(),
        color.mode
    );
    Ok(Source { image, color })
}
