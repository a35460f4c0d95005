use crate::column::ColumnImage;
use crate::config::SplitConfig;
use image::{DynamicImage, GenericImageView};
use log::debug;
use std::ops::Range;

/// Columns `[center - range, center + range)` clipped to `[0, width)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchWindow {
    columns: Range<u32>,
}

impl SearchWindow {
    pub fn around(center: u32, range: u32, width: u32) -> SearchWindow {
        let start = (i64::from(center) - i64::from(range)).max(0);
        let end = (i64::from(center) + i64::from(range)).min(i64::from(width));

        let columns = if start < end {
            start as u32..end as u32
        } else {
            0..0
        };

        SearchWindow { columns }
    }

    pub fn columns(&self) -> Range<u32> {
        self.columns.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.start >= self.columns.end
    }
}

/// Outcome of a scan: the chosen column, its content score (`None` when no column was scanned) and the image center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split {
    pub column: u32,
    pub score: Option<u32>,
    pub center: u32,
}

impl Split {
    /// Signed shift of the split from the center, negative means left of it.
    pub fn offset(&self) -> i64 {
        i64::from(self.column) - i64::from(self.center)
    }
}

/// Number of values in `column` strictly above `threshold`.
pub fn column_score(column: &[u8], threshold: u8) -> u32 {
    column.iter().filter(|&&alpha| alpha > threshold).count() as u32
}

enum ContentScore {
    Opacity {
        alpha: ColumnImage<u8>,
        threshold: u8,
    },
    /// Images without alpha have no content measure: every column scores 0.
    Unscored,
}

impl ContentScore {
    fn from_image(image: &DynamicImage, has_alpha: bool, threshold: u8) -> ContentScore {
        if has_alpha {
            ContentScore::Opacity {
                alpha: ColumnImage::from_image(&image.to_rgba8(), |rgba| rgba.0[3]),
                threshold,
            }
        } else {
            ContentScore::Unscored
        }
    }

    fn score(&self, x: u32) -> u32 {
        match self {
            ContentScore::Opacity { alpha, threshold } => {
                column_score(alpha.column(x as usize), *threshold)
            }
            ContentScore::Unscored => 0,
        }
    }
}

fn distance(a: u32, b: u32) -> u32 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Picks the lowest-scoring candidate out of `(column, score)` pairs visited left to right.
///
/// An equal score only wins if its column is strictly closer to `center`, so among equally
/// distant columns the first one visited is kept.
pub fn pick_column<I>(candidates: I, center: u32) -> (u32, Option<u32>)
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut best_split = center;
    let mut min_content: Option<u32> = None;

    for (x, score) in candidates {
        match min_content {
            Some(min) if score > min => {}
            Some(min) if score == min => {
                if distance(x, center) < distance(best_split, center) {
                    best_split = x;
                }
            }
            _ => {
                min_content = Some(score);
                best_split = x;
            }
        }
    }

    (best_split, min_content)
}

/// Finds the column near the horizontal center that cuts through the least content.
///
/// Opacity is scored whenever the decoded image carries alpha; see `Source::split` for files.
pub fn find_split(image: &DynamicImage, config: &SplitConfig) -> Split {
    scan(image, image.color().has_alpha(), config)
}

pub(crate) fn scan(image: &DynamicImage, has_alpha: bool, config: &SplitConfig) -> Split {
    let (width, height) = image.dimensions();
    let center = width / 2;
    let window = SearchWindow::around(center, config.search_range, width);

    debug!(
        "scanning columns {:?} of {}x{} image (center {})",
        window.columns(),
        width,
        height,
        center
    );

    let content = ContentScore::from_image(image, has_alpha, config.alpha_threshold);
    if let ContentScore::Unscored = content {
        debug!("no alpha channel, every column scores 0");
    }

    let (column, score) = pick_column(window.columns().map(|x| (x, content.score(x))), center);

    Split {
        column,
        score,
        center,
    }
}
