// ─────────────────────────────────────────────────────────────────────
// Spectra — Grids
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Grid data model shared by every stage.
//!
//! A grid is an `Array2` of shape `[height, width]`: row index first,
//! column index second, row-major storage. Complex spectra are kept as two
//! parallel real grids so each axis pass can read and write plain `f64`
//! lines.

use crate::error::{SpectraError, SpectraResult};
use ndarray::Array2;
use num_complex::Complex64;

/// Complex spectrum stored as parallel real and imaginary grids.
///
/// Both halves always share the same shape; construction checks this.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    re: Array2<f64>,
    im: Array2<f64>,
}

impl ComplexGrid {
    pub fn new(re: Array2<f64>, im: Array2<f64>) -> SpectraResult<Self> {
        if re.dim() != im.dim() {
            return Err(SpectraError::InvalidInput(format!(
                "real part is {:?} but imaginary part is {:?}",
                re.dim(),
                im.dim()
            )));
        }
        Ok(ComplexGrid { re, im })
    }

    pub fn zeros(height: usize, width: usize) -> Self {
        ComplexGrid {
            re: Array2::zeros((height, width)),
            im: Array2::zeros((height, width)),
        }
    }

    /// Lift a real grid into the complex plane with a zero imaginary part.
    pub fn from_real(grid: &Array2<f64>) -> Self {
        ComplexGrid {
            re: grid.clone(),
            im: Array2::zeros(grid.raw_dim()),
        }
    }

    pub fn from_complex(data: &Array2<Complex64>) -> Self {
        ComplexGrid {
            re: data.mapv(|c| c.re),
            im: data.mapv(|c| c.im),
        }
    }

    pub fn to_complex(&self) -> Array2<Complex64> {
        Array2::from_shape_fn(self.re.raw_dim(), |idx| {
            Complex64::new(self.re[idx], self.im[idx])
        })
    }

    /// `(height, width)`
    pub fn dim(&self) -> (usize, usize) {
        self.re.dim()
    }

    pub fn height(&self) -> usize {
        self.re.nrows()
    }

    pub fn width(&self) -> usize {
        self.re.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn re(&self) -> &Array2<f64> {
        &self.re
    }

    pub fn im(&self) -> &Array2<f64> {
        &self.im
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Complex64> {
        let re = self.re.get([row, col])?;
        let im = self.im.get([row, col])?;
        Some(Complex64::new(*re, *im))
    }

    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>) {
        (self.re, self.im)
    }
}

/// Reject grids with no cells.
pub fn ensure_non_empty<T>(grid: &Array2<T>, what: &str) -> SpectraResult<()> {
    if grid.is_empty() {
        return Err(SpectraError::InvalidInput(format!(
            "{what} must have at least one cell, got shape {:?}",
            grid.dim()
        )));
    }
    Ok(())
}

/// Reject grids holding NaN or infinite samples.
pub fn ensure_finite(grid: &Array2<f64>, what: &str) -> SpectraResult<()> {
    if let Some(((row, col), v)) = grid.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(SpectraError::InvalidInput(format!(
            "{what} holds non-finite sample {v} at row={row}, col={col}"
        )));
    }
    Ok(())
}
