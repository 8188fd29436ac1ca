use approx::assert_relative_eq;
use noise_fixtures::algo::FieldStats;
use noise_fixtures::io::fits::BLOCK_SIZE;
use noise_fixtures::{
    generate, read_primary_image, run, write_noise_image, GaussianMethod, GenerationConfig,
    ImageSize, NoiseImage, Preset,
};
use std::path::Path;
use tempfile::TempDir;

fn bits(values: impl Iterator<Item = f64>) -> Vec<u64> {
    values.map(f64::to_bits).collect()
}

fn assert_file_matches(path: &Path, image: &NoiseImage) {
    let on_disk = read_primary_image(path).unwrap();
    assert_eq!(on_disk.dim(), image.dim());
    assert_eq!(
        bits(on_disk.iter().copied()),
        bits(image.data().iter().copied())
    );
}

#[test]
fn test_noise_fixture_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noise.fits");
    let config = GenerationConfig::from_preset(Preset::Noise).with_output_path(&path);

    let image = run(&config).unwrap();

    assert_eq!(image.dim(), (200, 200));
    assert_file_matches(&path, &image);
}

#[test]
fn test_legacy_fixture_values() {
    // np.random.seed(3534); np.random.normal(loc=0.0, scale=1.0, size=(200, 200))
    let image = generate(&GenerationConfig::from_preset(Preset::Noise)).unwrap();
    let data = image.data();

    assert_relative_eq!(data[[0, 0]], 1.620_277_849_293_655, epsilon = 1e-12);
    assert_relative_eq!(data[[0, 1]], -0.105_313_247_037_621_42, epsilon = 1e-12);
    assert_relative_eq!(data[[0, 2]], 0.302_896_154_822_608_7, epsilon = 1e-12);
    assert_relative_eq!(data[[0, 3]], -0.663_335_938_867_821_2, epsilon = 1e-12);
    assert_relative_eq!(data[[199, 199]], 0.480_998_234_319_990_56, epsilon = 1e-12);

    let stats = FieldStats::from_view(&data);
    assert_relative_eq!(stats.mean, 0.000_117_616, epsilon = 1e-6);
    assert_relative_eq!(stats.std_dev, 0.995_184_68, epsilon = 1e-6);
}

#[test]
fn test_scaled_fixture_values() {
    let image = generate(&GenerationConfig::from_preset(Preset::Noise01)).unwrap();
    assert_relative_eq!(
        image.data()[[0, 0]],
        49.0 * 1.620_277_849_293_655,
        epsilon = 1e-10
    );
}

#[test]
fn test_both_presets_written() {
    let dir = TempDir::new().unwrap();

    for preset in Preset::ALL {
        let config = GenerationConfig::from_preset(preset)
            .with_output_path(dir.path().join(preset.file_name()));
        let image = run(&config).unwrap();
        assert_file_matches(&config.output_path, &image);
    }

    assert!(dir.path().join("noise.fits").exists());
    assert!(dir.path().join("01-noise.fits").exists());
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.fits");
    let second = dir.path().join("second.fits");

    let config = GenerationConfig::from_preset(Preset::Noise01);
    run(&config.clone().with_output_path(&first)).unwrap();
    run(&config.with_output_path(&second)).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 113 * BLOCK_SIZE);
    assert!(a.starts_with(b"SIMPLE  =                    T"));
}

#[test]
fn test_second_write_replaces_first() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noise.fits");

    let first = generate(&GenerationConfig::new(1, 1.0, &path)).unwrap();
    let second = generate(&GenerationConfig::new(2, 1.0, &path)).unwrap();

    write_noise_image(&first, &path).unwrap();
    let len_after_first = std::fs::metadata(&path).unwrap().len();
    write_noise_image(&second, &path).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), len_after_first);
    assert_file_matches(&path, &second);
    assert_ne!(read_primary_image(&path).unwrap(), first.data());
}

#[test]
fn test_smaller_image_truncates_larger_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("noise.fits");

    let large = generate(&GenerationConfig::new(1, 1.0, &path)).unwrap();
    let small = generate(
        &GenerationConfig::new(1, 1.0, &path).with_size(ImageSize::from_width_height(10, 10)),
    )
    .unwrap();

    write_noise_image(&large, &path).unwrap();
    write_noise_image(&small, &path).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), 2 * BLOCK_SIZE as u64);
    assert_file_matches(&path, &small);
}

#[test]
fn test_non_square_ziggurat_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.fits");
    let config = GenerationConfig::new(42, 3.0, &path)
        .with_size(ImageSize::from_width_height(123, 45))
        .with_method(GaussianMethod::Ziggurat)
        .with_mean(10.0);

    let image = run(&config).unwrap();
    assert_eq!(image.dim(), (45, 123));
    assert_file_matches(&path, &image);
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never.fits");

    assert!(run(&GenerationConfig::new(1, -1.0, &path)).is_err());
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing_dir").join("noise.fits");

    let result = run(&GenerationConfig::from_preset(Preset::Noise).with_output_path(&path));
    assert!(matches!(
        result,
        Err(noise_fixtures::NoiseFixtureError::Fits(
            noise_fixtures::FitsError::Io(_)
        ))
    ));
}
