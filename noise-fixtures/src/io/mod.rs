//! I/O utilities for fixture export and import

pub mod fits;

pub use fits::{read_primary_image, write_noise_image, FitsError};
