// ─────────────────────────────────────────────────────────────────────
// Spectra — Magnitude
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Complex spectrum → rounded magnitude grid.

use ndarray::{Array2, Zip};
use spectra_types::grid::ComplexGrid;

/// Per-cell `|X| = sqrt(re² + im²)`, rounded to the nearest integer.
///
/// With `sqrt_compress` the magnitude gets a second square root before
/// rounding, which flattens the huge DC term against the rest of the
/// spectrum. Rounding is half away from zero; magnitudes are never
/// negative so this is plain round-half-up.
pub fn magnitude(spectrum: &ComplexGrid, sqrt_compress: bool) -> Array2<f64> {
    let mut mag = Array2::zeros(spectrum.re().raw_dim());
    Zip::from(&mut mag)
        .and(spectrum.re())
        .and(spectrum.im())
        .for_each(|m, &re, &im| {
            let mut v = (re * re + im * im).sqrt();
            if sqrt_compress {
                v = v.sqrt();
            }
            *m = v.round();
        });
    mag
}
