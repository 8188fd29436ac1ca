//! Marsaglia polar method for standard normal deviates.
//!
//! Each accepted point yields two independent deviates. The second one is
//! cached and returned by the following call, which is the behaviour of
//! NumPy's `legacy_gauss`. Combined with [`Mt19937`] this reproduces
//! `np.random.seed(n); np.random.normal(loc, scale, size)` bit for bit.

use super::mt19937::Mt19937;

/// Stateful standard normal sampler on top of MT19937.
#[derive(Debug, Clone)]
pub struct PolarGaussian {
    rng: Mt19937,
    cached: Option<f64>,
}

impl PolarGaussian {
    /// Create a sampler seeded with `init_genrand(seed)`.
    pub fn new(seed: u32) -> Self {
        Self::from_rng(Mt19937::new(seed))
    }

    /// Wrap an existing generator. The cache starts empty.
    pub fn from_rng(rng: Mt19937) -> Self {
        Self { rng, cached: None }
    }

    /// Draw one standard normal deviate.
    pub fn next_standard(&mut self) -> f64 {
        if let Some(value) = self.cached.take() {
            return value;
        }

        let (x1, x2, r2) = loop {
            let x1 = 2.0 * self.rng.next_f64() - 1.0;
            let x2 = 2.0 * self.rng.next_f64() - 1.0;
            let r2 = x1 * x1 + x2 * x2;
            if r2 < 1.0 && r2 != 0.0 {
                break (x1, x2, r2);
            }
        };

        let f = (-2.0 * r2.ln() / r2).sqrt();
        self.cached = Some(f * x1);
        f * x2
    }

    /// Draw one deviate from Normal(`mean`, `std_dev`).
    pub fn next_normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.next_standard()
    }
}
