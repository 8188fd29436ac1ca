//! Generation parameters for noise fixtures.
//!
//! A [`GenerationConfig`] fully determines the bytes of a fixture file: the
//! same config always produces the same image. Configs come from a
//! [`Preset`] (the two legacy fixtures), a JSON file, or are built directly.

use crate::image_size::ImageSize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Seed shared by both legacy fixtures
pub const FIXTURE_SEED: u64 = 3534;

/// Errors raised while building or loading a [`GenerationConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("scale must be a finite value greater than zero, got {0}")]
    InvalidScale(f64),
    #[error("mean must be finite, got {0}")]
    InvalidMean(f64),
    #[error("image size {0} has no pixels")]
    EmptyImage(ImageSize),
    #[error("seed {0} does not fit in 32 bits, required by the legacy generator")]
    SeedOutOfRange(u64),
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Normal sampling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaussianMethod {
    /// MT19937 with the polar method, identical to NumPy's legacy `RandomState`
    #[default]
    Legacy,
    /// `StdRng` with `rand_distr::Normal`; stable only within one `rand` release
    Ziggurat,
}

impl fmt::Display for GaussianMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaussianMethod::Legacy => write!(f, "legacy"),
            GaussianMethod::Ziggurat => write!(f, "ziggurat"),
        }
    }
}

/// The legacy fixture definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Unit variance noise written to `noise.fits`
    Noise,
    /// Scale 49 noise written to `01-noise.fits`
    Noise01,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Noise, Preset::Noise01];

    pub fn scale(&self) -> f64 {
        match self {
            Preset::Noise => 1.0,
            Preset::Noise01 => 49.0,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Preset::Noise => "noise.fits",
            Preset::Noise01 => "01-noise.fits",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Noise => write!(f, "noise"),
            Preset::Noise01 => write!(f, "noise01"),
        }
    }
}

/// Parameters for one generated fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// PRNG seed
    pub seed: u64,
    /// Standard deviation of the noise
    pub scale: f64,
    /// Destination FITS file
    pub output_path: PathBuf,
    /// Mean of the noise
    #[serde(default)]
    pub mean: f64,
    #[serde(default)]
    pub size: ImageSize,
    #[serde(default)]
    pub method: GaussianMethod,
}

impl GenerationConfig {
    /// Zero-mean 200x200 legacy config
    pub fn new(seed: u64, scale: f64, output_path: impl Into<PathBuf>) -> Self {
        Self {
            seed,
            scale,
            output_path: output_path.into(),
            mean: 0.0,
            size: ImageSize::FIXTURE,
            method: GaussianMethod::Legacy,
        }
    }

    /// Config reproducing one of the legacy fixtures, written to its usual file name
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(FIXTURE_SEED, preset.scale(), preset.file_name())
    }

    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_method(mut self, method: GaussianMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Check every parameter against what the generators accept.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !self.mean.is_finite() {
            return Err(ConfigError::InvalidMean(self.mean));
        }
        if self.size.is_empty() {
            return Err(ConfigError::EmptyImage(self.size));
        }
        if self.method == GaussianMethod::Legacy && u32::try_from(self.seed).is_err() {
            return Err(ConfigError::SeedOutOfRange(self.seed));
        }
        Ok(())
    }

    /// Load from JSON file
    ///
    /// Only `seed`, `scale` and `output_path` are required; the rest default
    /// to the legacy fixture values. The loaded config is validated.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
