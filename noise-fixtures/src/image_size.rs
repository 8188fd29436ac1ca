//! Image dimensions

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Image dimensions structure
///
/// Arrays built from an `ImageSize` have shape `(height, width)`: rows come
/// first, matching the row-major layout written to FITS (`NAXIS1 = width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl ImageSize {
    /// Shape of the legacy noise fixtures
    pub const FIXTURE: ImageSize = ImageSize {
        width: 200,
        height: 200,
    };

    pub fn from_width_height(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Size of an existing array, read from its `(rows, cols)` shape
    pub fn of_array<T>(array: &Array2<T>) -> Self {
        let (height, width) = array.dim();
        Self { width, height }
    }

    /// Get total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// `(height, width)` shape for ndarray constructors
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::FIXTURE
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
