use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("source not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("image error on {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot read PNG header of {}", path.display())]
    PngHeader {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },
}
