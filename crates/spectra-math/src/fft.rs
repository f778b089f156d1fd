//! Planned FFT engine around rustfft.
//!
//! Same convention as [`crate::dft::dft`]:
//! - forward transform only
//! - unnormalized (no 1/N factor)
//!
//! rustfft handles arbitrary lengths (mixed radix, Rader, Bluestein), so
//! any grid shape the naive engine accepts is accepted here too.

use crate::transform::{transform_2d_with, LineTransform, NoHook, TransformOptions};
use ndarray::Array2;
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner, Length};
use spectra_types::config::Engine;
use spectra_types::error::{SpectraError, SpectraResult};
use spectra_types::grid::ComplexGrid;
use std::sync::Arc;

/// Forward FFT plan for one line length.
#[derive(Clone)]
pub struct FftLine {
    plan: Arc<dyn Fft<f64>>,
}

impl FftLine {
    pub fn forward(planner: &mut FftPlanner<f64>, len: usize) -> Self {
        FftLine {
            plan: planner.plan_fft_forward(len),
        }
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.len() == 0
    }
}

impl LineTransform for FftLine {
    fn apply(&self, real: &[f64], imag: &[f64]) -> SpectraResult<(Vec<f64>, Vec<f64>)> {
        let n = self.plan.len();
        if n == 0 || real.len() != n || imag.len() != n {
            return Err(SpectraError::InvalidInput(format!(
                "FFT planned for length {n} got real={} imag={}",
                real.len(),
                imag.len()
            )));
        }

        let mut buffer: Vec<Complex64> = real
            .iter()
            .zip(imag)
            .map(|(&re, &im)| Complex64::new(re, im))
            .collect();
        self.plan.process(&mut buffer);

        Ok(buffer.into_iter().map(|c| (c.re, c.im)).unzip())
    }
}

/// Forward 2D FFT of a real grid. Matches `numpy.fft.fft2()`.
pub fn fft_2d(grid: &Array2<f64>) -> SpectraResult<ComplexGrid> {
    let options = TransformOptions {
        engine: Engine::Fast,
        ..TransformOptions::default()
    };
    transform_2d_with(grid, &options, &NoHook)
}
