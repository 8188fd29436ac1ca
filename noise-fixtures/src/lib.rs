//! Deterministic Gaussian noise images written as FITS test fixtures.
//!
//! The crate regenerates the legacy `noise.fits` and `01-noise.fits`
//! fixtures: a 200x200 array of normal deviates seeded with 3534, scaled by
//! 1.0 and 49.0 respectively, stored as the primary image of a FITS file.
//!
//! ```no_run
//! use noise_fixtures::{run, GenerationConfig, Preset};
//!
//! let config = GenerationConfig::from_preset(Preset::Noise);
//! let image = run(&config).unwrap();
//! assert_eq!(image.dim(), (200, 200));
//! ```

pub mod algo;
pub mod config;
pub mod image_proc;
pub mod image_size;
pub mod io;
pub mod shared_args;

pub use config::{ConfigError, GaussianMethod, GenerationConfig, Preset, FIXTURE_SEED};
pub use image_proc::{generate, NoiseImage, NoiseImageGenerator};
pub use image_size::ImageSize;
pub use io::{read_primary_image, write_noise_image, FitsError};

use algo::FieldStats;
use log::{debug, info};
use thiserror::Error;

/// Errors from a full generate-and-write run
#[derive(Error, Debug)]
pub enum NoiseFixtureError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fits(#[from] FitsError),
}

/// Generate the image described by `config` and write it to `config.output_path`.
///
/// Returns the in-memory image so callers can compare it with what landed on disk.
pub fn run(config: &GenerationConfig) -> Result<NoiseImage, NoiseFixtureError> {
    debug!("Resolved configuration: {config:?}");

    let generator = NoiseImageGenerator::new(config.clone())?;
    let image = generator.generate();

    info!(
        "Generated {} {} noise (seed={}, mean={}, scale={}): {}",
        image.size(),
        config.method,
        config.seed,
        config.mean,
        config.scale,
        FieldStats::from_view(&image.data())
    );

    write_noise_image(&image, &config.output_path)?;
    Ok(image)
}
