//! Statistical summaries for checking generated noise fields

use ndarray::ArrayView2;
use scilib::math::basic::erf;
use std::f64::consts::SQRT_2;
use std::fmt;

/// Cumulative distribution function for standard normal distribution
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Kolmogorov-Smirnov distance between `field` and a normal distribution
/// with the field's own mean and standard deviation.
///
/// Location and scale are factored out, so only the shape of the
/// distribution is tested. Empty and constant fields score 1.0.
pub fn ks_test_normal(field: &ArrayView2<f64>) -> f64 {
    let stats = FieldStats::from_view(field);
    if stats.count == 0 || !(stats.std_dev > 1e-10) {
        return 1.0;
    }

    let mut sorted: Vec<f64> = field.iter().copied().collect();
    sorted.sort_by(f64::total_cmp);

    let n = stats.count as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let cdf = normal_cdf((value - stats.mean) / stats.std_dev);
            // Empirical CDF steps from i/n to (i+1)/n at this sample
            (cdf - i as f64 / n).max((i + 1) as f64 / n - cdf)
        })
        .fold(0.0, f64::max)
}

/// Asymptotic KS critical value `sqrt(-ln(alpha / 2) / 2) / sqrt(count)`.
pub fn ks_critical_value(count: usize, alpha: f64) -> f64 {
    (-0.5 * (alpha / 2.0).ln()).sqrt() / (count as f64).sqrt()
}

/// Summary statistics of a 2D field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by N)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl FieldStats {
    /// Compute statistics over every element of `field`.
    ///
    /// An empty field reports NaN for all moments.
    pub fn from_view(field: &ArrayView2<f64>) -> Self {
        let count = field.len();
        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = field.iter().sum::<f64>() / count as f64;
        let variance = field.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        let (min, max) = field
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

impl fmt::Display for FieldStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.6} std={:.6} min={:.6} max={:.6}",
            self.count, self.mean, self.std_dev, self.min, self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_normal_cdf_symmetry() {
        assert_relative_eq!(normal_cdf(0.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normal_cdf(1.5) + normal_cdf(-1.5), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normal_cdf(1.96), 0.975, epsilon = 1e-3);
    }

    #[test]
    fn test_ks_degenerate_inputs() {
        let empty = Array2::<f64>::zeros((0, 3));
        assert_eq!(ks_test_normal(&empty.view()), 1.0);

        let constant = Array2::from_elem((2, 3), 3.0);
        assert_eq!(ks_test_normal(&constant.view()), 1.0);
    }

    #[test]
    fn test_ks_uniform_grid_is_not_normal() {
        let uniform = Array2::from_shape_fn((100, 100), |(row, col)| (row * 100 + col) as f64);
        let ks = ks_test_normal(&uniform.view());
        assert!(ks > ks_critical_value(uniform.len(), 0.01), "KS statistic {ks}");
    }

    #[test]
    fn test_ks_critical_value_tabulated_coefficients() {
        // c(alpha) = 1.36 at 5% and 1.63 at 1%
        assert_relative_eq!(ks_critical_value(1, 0.05), 1.358_101_5, epsilon = 1e-6);
        assert_relative_eq!(ks_critical_value(10_000, 0.01), 0.016_276_24, epsilon = 1e-7);
    }

    #[test]
    fn test_field_stats_small_array() {
        let field = array![[1.0, 2.0], [3.0, 4.0]];
        let stats = FieldStats::from_view(&field.view());

        assert_eq!(stats.count, 4);
        assert_relative_eq!(stats.mean, 2.5);
        assert_relative_eq!(stats.std_dev, 1.25f64.sqrt());
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
    }

    #[test]
    fn test_field_stats_empty() {
        let field = Array2::<f64>::zeros((0, 5));
        let stats = FieldStats::from_view(&field.view());
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
    }

    #[test]
    fn test_field_stats_display() {
        let field = array![[0.0, 2.0]];
        let text = FieldStats::from_view(&field.view()).to_string();
        assert!(text.starts_with("n=2 mean=1.000000"));
    }
}
