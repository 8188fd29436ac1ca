//! Random number generation and statistics primitives.

pub mod mt19937;
pub mod polar;
pub mod stats;

pub use mt19937::Mt19937;
pub use polar::PolarGaussian;
pub use stats::{ks_critical_value, ks_test_normal, normal_cdf, FieldStats};
