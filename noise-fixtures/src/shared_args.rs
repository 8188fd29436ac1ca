use crate::config::{ConfigError, GaussianMethod, GenerationConfig, Preset};
use crate::image_size::ImageSize;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Legacy fixture selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Seed 3534, scale 1.0, written to noise.fits
    Noise,
    /// Seed 3534, scale 49.0, written to 01-noise.fits
    #[value(name = "noise01")]
    Noise01,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Noise => Preset::Noise,
            PresetArg::Noise01 => Preset::Noise01,
        }
    }
}

/// Normal sampling algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// MT19937 + polar method, reproduces NumPy legacy seeding
    Legacy,
    /// rand StdRng + rand_distr Normal
    Ziggurat,
}

impl From<MethodArg> for GaussianMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Legacy => GaussianMethod::Legacy,
            MethodArg::Ziggurat => GaussianMethod::Ziggurat,
        }
    }
}

/// Arguments describing one generated image
///
/// Settings resolve in order: `--config` file if given, otherwise `--preset`,
/// then any individual flag overrides the value it names.
#[derive(Parser, Debug, Clone)]
pub struct GenerationArgs {
    /// Legacy fixture to start from
    #[arg(long, value_enum, default_value = "noise", conflicts_with = "config")]
    pub preset: PresetArg,

    /// JSON config file to start from instead of a preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// PRNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Standard deviation of the noise
    #[arg(long)]
    pub scale: Option<f64>,

    /// Mean of the noise
    #[arg(long, allow_hyphen_values = true)]
    pub mean: Option<f64>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Normal sampling algorithm
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,

    /// Output FITS path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerationArgs {
    /// Build and validate the config these arguments describe.
    pub fn resolve(&self) -> Result<GenerationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::load_from_file(path)?,
            None => GenerationConfig::from_preset(self.preset.into()),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(mean) = self.mean {
            config.mean = mean;
        }
        if self.width.is_some() || self.height.is_some() {
            config.size = ImageSize::from_width_height(
                self.width.unwrap_or(config.size.width),
                self.height.unwrap_or(config.size.height),
            );
        }
        if let Some(method) = self.method {
            config.method = method.into();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
