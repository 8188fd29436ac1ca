//! MT19937 stream with NumPy `RandomState` conventions.
//!
//! `np.random.seed(n)` seeds the 32-bit Mersenne Twister with
//! `init_genrand(n)` and builds doubles from two consecutive words
//! (`genrand_res53`). [`Mt19937`] wraps `rand_mt::Mt`, which already
//! implements `init_genrand`/`genrand_int32`, and adds the double conversion.

use rand_mt::Mt;

/// Seed used by the reference implementation when none is supplied.
pub const DEFAULT_SEED: u32 = 5489;

/// MT19937 generator producing NumPy-compatible uniform doubles.
#[derive(Clone)]
pub struct Mt19937 {
    inner: Mt,
}

impl Mt19937 {
    /// Seed the generator with `init_genrand(seed)`.
    pub fn new(seed: u32) -> Self {
        Self {
            inner: Mt::new(seed),
        }
    }

    /// Next tempered 32-bit output (`genrand_int32`).
    pub fn next_word(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Uniform double in [0, 1) with 53 bits of resolution (`genrand_res53`).
    pub fn next_f64(&mut self) -> f64 {
        let a = (self.next_word() >> 5) as f64;
        let b = (self.next_word() >> 6) as f64;
        (a * 67_108_864.0 + b) / 9_007_199_254_740_992.0
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").finish_non_exhaustive()
    }
}
