//! Gaussian noise FITS fixture generator
//!
//! Regenerates the `noise.fits` / `01-noise.fits` test fixtures, or any
//! variation of them, and inspects existing FITS primary images.
//!
//! # Usage
//!
//! ```bash
//! noise_fixture generate --preset noise01 --verify
//! noise_fixture presets --output-dir fixtures/
//! noise_fixture inspect noise.fits
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use noise_fixtures::algo::{ks_critical_value, ks_test_normal, FieldStats};
use noise_fixtures::shared_args::GenerationArgs;
use noise_fixtures::{read_primary_image, run, GenerationConfig, NoiseImage, Preset};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "noise_fixture",
    about = "Generate deterministic Gaussian noise FITS fixtures",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a single noise image
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,

        /// Read the written file back and require an exact match
        #[arg(long)]
        verify: bool,
    },

    /// Regenerate every legacy fixture
    Presets {
        /// Directory receiving noise.fits and 01-noise.fits
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Print shape and statistics of a FITS primary image
    Inspect {
        /// FITS file to read
        path: PathBuf,
    },
}

fn verify_written(image: &NoiseImage, path: &Path) -> Result<()> {
    let on_disk = read_primary_image(path)
        .with_context(|| format!("Failed to read back {}", path.display()))?;

    let identical = on_disk.dim() == image.dim()
        && on_disk
            .iter()
            .zip(image.data().iter())
            .all(|(a, b)| a.to_bits() == b.to_bits());
    if !identical {
        bail!("{} does not match the generated image", path.display());
    }

    info!("Verified {} matches the generated image", path.display());
    Ok(())
}

fn generate(generation: &GenerationArgs, verify: bool) -> Result<()> {
    let config = generation.resolve().context("Invalid generation settings")?;
    let image = run(&config)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    if verify {
        verify_written(&image, &config.output_path)?;
    }
    Ok(())
}

fn presets(output_dir: &Path) -> Result<()> {
    for preset in Preset::ALL {
        let config = GenerationConfig::from_preset(preset)
            .with_output_path(output_dir.join(preset.file_name()));
        let image = run(&config).with_context(|| format!("Failed to generate preset {preset}"))?;
        verify_written(&image, &config.output_path)?;
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let data =
        read_primary_image(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (height, width) = data.dim();
    let stats = FieldStats::from_view(&data.view());

    let ks = ks_test_normal(&data.view());
    let ks_limit = ks_critical_value(data.len().max(1), 0.05);

    println!("File:     {}", path.display());
    println!("Shape:    {width}x{height}");
    println!("Mean:     {:.6}", stats.mean);
    println!("Std dev:  {:.6}", stats.std_dev);
    println!("Min:      {:.6}", stats.min);
    println!("Max:      {:.6}", stats.max);
    println!(
        "KS stat:  {:.6} ({} at 5%, critical {:.6})",
        ks,
        if ks < ks_limit { "normal" } else { "not normal" },
        ks_limit
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match &args.command {
        Command::Generate { generation, verify } => generate(generation, *verify),
        Command::Presets { output_dir } => presets(output_dir),
        Command::Inspect { path } => inspect(path),
    }
}
