// ─────────────────────────────────────────────────────────────────────
// Spectra — Display
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Normalized spectrum → 8-bit pixels.

use ndarray::Array2;
use spectra_types::error::{SpectraError, SpectraResult};

/// One pixel: `round(v)` saturated to `[0, 255]`, NaN → 0.
pub fn to_pixel(v: f64) -> u8 {
    v.round() as u8
}

/// Multiply by `scale_factor`, round, and saturate into `u8`.
///
/// Values above 255 after scaling clip to white, matching a clamped
/// 8-bit canvas buffer.
pub fn to_display(normalized: &Array2<f64>, scale_factor: f64) -> SpectraResult<Array2<u8>> {
    if !scale_factor.is_finite() || scale_factor < 0.0 {
        return Err(SpectraError::ConfigError(format!(
            "scale_factor must be finite and >= 0, got {scale_factor}"
        )));
    }
    Ok(normalized.mapv(|v| to_pixel(v * scale_factor)))
}
