// ─────────────────────────────────────────────────────────────────────
// Spectra — Scalar DFT
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Direct evaluation of the forward DFT.
//!
//! X[k] = Σ_n x[n] · exp(-2πi·k·n/N), with no 1/N factor. Every output bin
//! visits every input sample, so a length-N line costs O(N²). Display
//! scaling happens downstream via normalization, never here.

use crate::transform::LineTransform;
use spectra_types::error::{SpectraError, SpectraResult};
use std::f64::consts::PI;

/// Forward DFT of the complex signal `real + i·imag`.
///
/// Returns `(real', imag')`, both of length N. Fails on an empty signal or
/// when the two halves differ in length.
pub fn dft(real: &[f64], imag: &[f64]) -> SpectraResult<(Vec<f64>, Vec<f64>)> {
    let n = real.len();
    if n == 0 {
        return Err(SpectraError::InvalidInput(
            "DFT requires a signal of length >= 1".to_string(),
        ));
    }
    if imag.len() != n {
        return Err(SpectraError::InvalidInput(format!(
            "DFT real part has length {n} but imaginary part has length {}",
            imag.len()
        )));
    }

    let mut out_re = vec![0.0; n];
    let mut out_im = vec![0.0; n];
    let nf = n as f64;

    for k in 0..n {
        let mut acc_re = 0.0;
        let mut acc_im = 0.0;
        for (idx, (&xr, &xi)) in real.iter().zip(imag).enumerate() {
            let angle = -2.0 * PI * (k as f64) * (idx as f64) / nf;
            let (sin, cos) = angle.sin_cos();
            acc_re += xr * cos - xi * sin;
            acc_im += xr * sin + xi * cos;
        }
        out_re[k] = acc_re;
        out_im[k] = acc_im;
    }

    Ok((out_re, out_im))
}

/// Line transform backed by [`dft`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDft;

impl LineTransform for NaiveDft {
    fn apply(&self, real: &[f64], imag: &[f64]) -> SpectraResult<(Vec<f64>, Vec<f64>)> {
        dft(real, imag)
    }
}
