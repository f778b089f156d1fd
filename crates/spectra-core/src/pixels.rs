// ─────────────────────────────────────────────────────────────────────
// Spectra — Pixel Buffers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversion between interleaved RGBA buffers and grids.
//!
//! Buffers are tightly packed, row-major, four bytes per pixel
//! (`R, G, B, A`), the layout of an HTML canvas `ImageData`.

use ndarray::Array2;
use spectra_types::error::{SpectraError, SpectraResult};

pub const CHANNELS: usize = 4;

fn buffer_len(width: usize, height: usize) -> SpectraResult<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            SpectraError::InvalidInput(format!("{width}x{height} RGBA buffer overflows usize"))
        })
}

/// Average R, G and B of every pixel into a grayscale grid.
///
/// The average is rounded to an integer intensity, as it would be after
/// a round trip through an 8-bit buffer. Alpha is ignored.
pub fn grayscale_from_rgba(width: usize, height: usize, rgba: &[u8]) -> SpectraResult<Array2<f64>> {
    if width == 0 || height == 0 {
        return Err(SpectraError::InvalidInput(format!(
            "image must be at least 1x1, got {width}x{height}"
        )));
    }
    let expected = buffer_len(width, height)?;
    if rgba.len() != expected {
        return Err(SpectraError::InvalidInput(format!(
            "{width}x{height} image needs {expected} RGBA bytes, got {}",
            rgba.len()
        )));
    }

    let gray: Vec<f64> = rgba
        .chunks_exact(CHANNELS)
        .map(|px| {
            let sum = f64::from(px[0]) + f64::from(px[1]) + f64::from(px[2]);
            (sum / 3.0).round()
        })
        .collect();
    Array2::from_shape_vec((height, width), gray)
        .map_err(|e| SpectraError::InvalidInput(format!("grayscale reshape failed: {e}")))
}

/// Write display pixels into a new RGBA buffer.
///
/// Each intensity is replicated into R, G and B; alpha is copied from
/// `source_rgba`, which must have the same dimensions as `display`.
pub fn display_to_rgba(display: &Array2<u8>, source_rgba: &[u8]) -> SpectraResult<Vec<u8>> {
    let (height, width) = display.dim();
    let expected = buffer_len(width, height)?;
    if source_rgba.len() != expected {
        return Err(SpectraError::InvalidInput(format!(
            "{width}x{height} display needs {expected} source RGBA bytes, got {}",
            source_rgba.len()
        )));
    }

    let mut out = Vec::with_capacity(expected);
    for (&pix, src) in display.iter().zip(source_rgba.chunks_exact(CHANNELS)) {
        out.extend_from_slice(&[pix, pix, pix, src[3]]);
    }
    Ok(out)
}
