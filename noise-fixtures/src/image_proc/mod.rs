//! Image generation for noise fixtures

pub mod noise;

pub use noise::{generate, NoiseImage, NoiseImageGenerator};
