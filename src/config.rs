use std::path::PathBuf;

pub const SOURCE_PATH: &str = "src/assets/mainlogo.png";
pub const LEFT_PATH: &str = "src/assets/mainlogo_left.png";
pub const RIGHT_PATH: &str = "src/assets/mainlogo_right.png";

/// Columns considered on each side of the center.
pub const SEARCH_RANGE: u32 = 400;

/// Alpha values above this count as content.
pub const ALPHA_THRESHOLD: u8 = 10;

/// Everything a split run needs. `Default` gives the fixed paths relative to the working directory.
#[derive(Clone, Debug)]
pub struct SplitConfig {
    pub source: PathBuf,
    pub left_output: PathBuf,
    pub right_output: PathBuf,
    pub search_range: u32,
    pub alpha_threshold: u8,
}

impl Default for SplitConfig {
    fn default() -> Self {
        SplitConfig {
            source: PathBuf::from(SOURCE_PATH),
            left_output: PathBuf::from(LEFT_PATH),
            right_output: PathBuf::from(RIGHT_PATH),
            search_range: SEARCH_RANGE,
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}
