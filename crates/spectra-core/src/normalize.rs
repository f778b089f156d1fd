// ─────────────────────────────────────────────────────────────────────
// Spectra — Normalize
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear rescale of a magnitude grid onto the 8-bit display range.

use ndarray::Array2;
use spectra_types::error::{SpectraError, SpectraResult};
use spectra_types::grid::{ensure_finite, ensure_non_empty};
use tracing::debug;

/// Upper end of the display range; normalized values lie in [0, DISPLAY_MAX].
pub const DISPLAY_MAX: f64 = 255.0;

/// Extrema of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// All values equal; there is nothing to stretch.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Minimum and maximum over the grid, `None` when it has no cells.
pub fn value_range(grid: &Array2<f64>) -> Option<ValueRange> {
    let mut iter = grid.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(ValueRange { min: first, max: first }, |r, v| ValueRange {
        min: r.min.min(v),
        max: r.max.max(v),
    }))
}

/// Map `[min, max]` linearly onto `[0, 255]`.
///
/// A flat grid (min == max) maps to all zeros instead of dividing by zero.
/// The result is left unrounded; display scaling and rounding happen in
/// [`crate::display`].
pub fn normalize(grid: &Array2<f64>) -> SpectraResult<Array2<f64>> {
    ensure_non_empty(grid, "normalize input")?;
    ensure_finite(grid, "normalize input")?;
    let range = value_range(grid).ok_or_else(|| {
        SpectraError::InvalidInput("normalize input has no cells".to_string())
    })?;

    if range.is_degenerate() {
        debug!(value = range.min, "flat magnitude grid, normalizing to zero");
        return Ok(Array2::zeros(grid.raw_dim()));
    }

    let span = range.span();
    Ok(grid.mapv(|v| (v - range.min) / span * DISPLAY_MAX))
}
