use image::GenericImageView;
use logo_split::{crop, load_source, SplitConfig, SplitError};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let config = SplitConfig::default();

    let source = match load_source(&config) {
        Ok(source) => source,
        Err(SplitError::SourceMissing(_)) => {
            println!("Source not found");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let (width, height) = source.image.dimensions();
    println!("Image Size: {}x{}, Mode: {}", width, height, source.color.mode);

    let split = source.split(&config);
    let score = match split.score {
        Some(score) => score.to_string(),
        None => "inf".to_string(),
    };
    println!("Optimal split found at x={} (Content score: {})", split.column, score);
    println!("Shift from center: {} px", split.offset());

    crop::save_halves(&source.image, &split, &config)?;
    println!("Saved adjusted images.");

    Ok(())
}
