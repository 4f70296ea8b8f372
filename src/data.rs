//! Preprocessing adapter between a raw dataset provider and the core.
//!
//! The provider hands over byte-valued pixel grids; the core wants a
//! `(features, examples)` matrix of `f32` in [0, 1]. This module is that thin
//! bridge; acquiring or decoding the dataset itself is someone else's job.

use crate::{Error, Matrix, Result};

/// Scale applied to raw pixel bytes.
pub const PIXEL_SCALE: f32 = 255.0;

/// Turn flat example-major pixel bytes into a `(pixels_per_image, examples)`
/// matrix with values divided by 255.
///
/// `raw` holds the images back to back, each `pixels_per_image` bytes long
/// (784 for 28x28 grids). Columns of the result are examples, matching the
/// layout the forward pass expects.
pub fn flatten_and_scale(raw: &[u8], pixels_per_image: usize) -> Result<Matrix> {
    if pixels_per_image == 0 {
        return Err(Error::InvalidConfig(
            "pixels_per_image must be > 0".to_owned(),
        ));
    }
    if raw.len() % pixels_per_image != 0 {
        return Err(Error::InvalidData(format!(
            "{} pixel bytes do not divide into images of {pixels_per_image} pixels",
            raw.len()
        )));
    }

    let examples = raw.len() / pixels_per_image;
    Ok(Matrix::from_fn(pixels_per_image, examples, |r, c| {
        f32::from(raw[c * pixels_per_image + r]) / PIXEL_SCALE
    }))
}
