//! FITS primary image encoding
//!
//! Writes a single primary HDU holding a 2D `f64` array (`BITPIX = -64`) with
//! the same mandatory cards astropy's `fits.writeto` emits. Files are read
//! back through `fitsio`. Rows are stored in array order: row 0 of the
//! ndarray is the first `NAXIS1`-long run of the data unit, as NumPy writers
//! do.

use crate::image_proc::noise::NoiseImage;
use fitsio::compat::fitsfile::FitsFile;
use fitsio::compat::hdu::FitsHdu;
use fitsio::compat::images::ReadImage;
use log::{debug, info};
use ndarray::{Array2, ArrayView2};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// FITS logical record length in bytes
pub const BLOCK_SIZE: usize = 2880;

/// Header card length in bytes
pub const CARD_SIZE: usize = 80;

/// Errors that can occur during FITS file operations
#[derive(Error, Debug)]
pub enum FitsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("FITS I/O error: {0}")]
    FitsIo(#[from] fitsio::compat::errors::Error),
    #[error("Invalid FITS header: {0}")]
    InvalidHeader(String),
    #[error("Unsupported BITPIX {0}, expected -64 or -32")]
    UnsupportedBitpix(i64),
    #[error("Unsupported NAXIS {0}, expected a 2D image")]
    UnsupportedAxes(i64),
}

fn pad_to_block(len: usize) -> usize {
    (BLOCK_SIZE - (len % BLOCK_SIZE)) % BLOCK_SIZE
}

fn value_card(keyword: &str, value: &str, comment: Option<&str>) -> String {
    let mut card = format!("{keyword:<8}= {value:>20}");
    if let Some(comment) = comment {
        card.push_str(" / ");
        card.push_str(comment);
    }
    card.truncate(CARD_SIZE);
    format!("{:<width$}", card, width = CARD_SIZE)
}

/// Header for a primary HDU of float64 pixels, padded to a whole block
fn primary_header(width: usize, height: usize) -> String {
    let mut header = String::with_capacity(BLOCK_SIZE);
    header.push_str(&value_card("SIMPLE", "T", Some("conforms to FITS standard")));
    header.push_str(&value_card("BITPIX", "-64", Some("array data type")));
    header.push_str(&value_card("NAXIS", "2", Some("number of array dimensions")));
    header.push_str(&value_card("NAXIS1", &width.to_string(), None));
    header.push_str(&value_card("NAXIS2", &height.to_string(), None));
    header.push_str(&value_card("EXTEND", "T", None));
    header.push_str(&format!("{:<width$}", "END", width = CARD_SIZE));

    let padding = pad_to_block(header.len());
    header.push_str(&" ".repeat(padding));
    header
}

/// Encode `data` as a complete primary HDU into `writer`.
pub fn write_primary_hdu<W: Write>(
    writer: &mut W,
    data: &ArrayView2<f64>,
) -> Result<(), FitsError> {
    let (height, width) = data.dim();
    writer.write_all(primary_header(width, height).as_bytes())?;

    // Logical iteration order is row-major whatever the memory layout
    for &value in data.iter() {
        writer.write_all(&value.to_be_bytes())?;
    }

    let data_len = width * height * std::mem::size_of::<f64>();
    writer.write_all(&vec![0u8; pad_to_block(data_len)])?;
    Ok(())
}

/// Write `image` to `path` as a FITS primary image.
///
/// An existing file at `path` is replaced.
pub fn write_noise_image<P: AsRef<Path>>(image: &NoiseImage, path: P) -> Result<(), FitsError> {
    let path = path.as_ref();
    if path.exists() {
        debug!("Overwriting existing file {}", path.display());
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_primary_hdu(&mut writer, &image.data())?;
    writer.flush()?;

    info!("Wrote {} noise image to {}", image.size(), path.display());
    Ok(())
}

fn axis_length(
    fptr: &FitsFile,
    hdu: &FitsHdu,
    keyword: &'static str,
) -> Result<usize, FitsError> {
    let value = hdu.read_key::<i64>(fptr, keyword)?;
    usize::try_from(value).map_err(|_| {
        FitsError::InvalidHeader(format!("{keyword} must be non-negative, found {value}"))
    })
}

/// Read the primary image of the FITS file at `path`.
///
/// Accepts `BITPIX = -64` or `-32` with `NAXIS = 2`; single precision data
/// are widened to `f64`. The first `NAXIS1`-long run of the data unit becomes
/// row 0, no vertical flip is applied.
pub fn read_primary_image<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, FitsError> {
    let fptr = FitsFile::open(&path)?;
    let hdu = fptr.hdu(0)?;

    let naxis = hdu.read_key::<i64>(&fptr, "NAXIS")?;
    if naxis != 2 {
        return Err(FitsError::UnsupportedAxes(naxis));
    }
    let bitpix = hdu.read_key::<i64>(&fptr, "BITPIX")?;
    if !matches!(bitpix, -64 | -32) {
        return Err(FitsError::UnsupportedBitpix(bitpix));
    }
    let width = axis_length(&fptr, &hdu, "NAXIS1")?;
    let height = axis_length(&fptr, &hdu, "NAXIS2")?;

    let pixels = f64::read_image(&fptr, &hdu)?;
    Array2::from_shape_vec((height, width), pixels).map_err(|e| {
        FitsError::InvalidHeader(format!("cannot reshape data unit to {width}x{height}: {e}"))
    })
}
