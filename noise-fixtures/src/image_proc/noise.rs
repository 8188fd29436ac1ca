//! Gaussian noise field generation.
//!
//! Produces deterministic 2D fields of normally distributed values for use as
//! test fixtures. Two samplers are available through [`GaussianMethod`]:
//!
//! ## Legacy
//! MT19937 with the polar method. Seeding and draw order follow NumPy's
//! legacy `RandomState`, so `seed = 3534, scale = 1.0` reproduces the
//! original `noise.fits` fixture value for value.
//!
//! ## Ziggurat
//! `StdRng` driving `rand_distr::Normal`. Fast and statistically sound, but
//! the stream is only stable within one `rand` release.
//!
//! Samples are always drawn sequentially in row-major order; the fill order
//! is part of the output contract.

use crate::algo::PolarGaussian;
use crate::config::{ConfigError, GaussianMethod, GenerationConfig};
use crate::image_size::ImageSize;
use ndarray::{Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// An immutable generated noise field.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseImage {
    data: Array2<f64>,
}

impl NoiseImage {
    /// Wrap an existing array, e.g. one read back from disk.
    pub fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::of_array(&self.data)
    }

    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}

/// `Normal(mean, std_dev)` for a strictly positive, finite `std_dev`.
///
/// `Normal::new` alone accepts negative standard deviations.
fn normal_distribution(mean: f64, std_dev: f64) -> Result<Normal<f64>, ConfigError> {
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return Err(ConfigError::InvalidScale(std_dev));
    }
    if !mean.is_finite() {
        return Err(ConfigError::InvalidMean(mean));
    }
    Normal::new(mean, std_dev).map_err(|_| ConfigError::InvalidScale(std_dev))
}

/// Generate a 2D array with the NumPy-compatible legacy sampler.
///
/// Equivalent to `np.random.seed(seed); np.random.normal(mean, std_dev, size)`.
pub fn legacy_normal_array(
    size: (usize, usize),
    mean: f64,
    std_dev: f64,
    seed: u32,
) -> Array2<f64> {
    let mut sampler = PolarGaussian::new(seed);
    // from_shape_fn visits indices in row-major order for the default layout
    Array2::from_shape_fn(size, |_| sampler.next_normal(mean, std_dev))
}

#[derive(Debug, Clone)]
enum Sampler {
    Legacy { seed: u32, mean: f64, scale: f64 },
    Ziggurat { seed: u64, normal: Normal<f64> },
}

/// Validated generator for a single [`GenerationConfig`].
#[derive(Debug, Clone)]
pub struct NoiseImageGenerator {
    size: ImageSize,
    sampler: Sampler,
}

impl NoiseImageGenerator {
    pub fn new(config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let sampler = match config.method {
            GaussianMethod::Legacy => Sampler::Legacy {
                seed: u32::try_from(config.seed)
                    .map_err(|_| ConfigError::SeedOutOfRange(config.seed))?,
                mean: config.mean,
                scale: config.scale,
            },
            GaussianMethod::Ziggurat => Sampler::Ziggurat {
                seed: config.seed,
                normal: normal_distribution(config.mean, config.scale)?,
            },
        };

        Ok(Self {
            size: config.size,
            sampler,
        })
    }

    /// Draw a fresh image. Every call returns identical data.
    pub fn generate(&self) -> NoiseImage {
        let shape = self.size.shape();
        let data = match &self.sampler {
            Sampler::Legacy { seed, mean, scale } => {
                legacy_normal_array(shape, *mean, *scale, *seed)
            }
            Sampler::Ziggurat { seed, normal } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                Array2::from_shape_fn(shape, |_| normal.sample(&mut rng))
            }
        };

        NoiseImage { data }
    }
}

/// Validate `config` and generate its image.
pub fn generate(config: &GenerationConfig) -> Result<NoiseImage, ConfigError> {
    Ok(NoiseImageGenerator::new(config.clone())?.generate())
}
