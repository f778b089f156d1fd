// ─────────────────────────────────────────────────────────────────────
// Spectra — Separable 2D Transform
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Separable 2D DFT driver.
//!
//! The 2D DFT factors into 1D DFTs along each axis:
//!   X[u, v] = Σ_r Σ_c x[r, c] · e^{-2πi·v·c/W} · e^{-2πi·u·r/H}
//! so transforming every row, then every column of the intermediate result,
//! gives the full spectrum. The two passes commute.
//!
//! Each pass reads whole lines from its input grids and writes whole lines
//! into freshly allocated output grids, so lines are independent and may be
//! computed on the rayon pool.

use crate::dft::NaiveDft;
use crate::fft::FftLine;
use ndarray::{aview1, Array2, Axis};
use rayon::prelude::*;
use rustfft::FftPlanner;
use spectra_types::config::Engine;
use spectra_types::error::{SpectraError, SpectraResult};
use spectra_types::grid::{ensure_finite, ensure_non_empty, ComplexGrid};

/// A 1D transform applied to one line (row or column) at a time.
pub trait LineTransform: Sync {
    fn apply(&self, real: &[f64], imag: &[f64]) -> SpectraResult<(Vec<f64>, Vec<f64>)>;
}

/// One axis sweep of the separable transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Rows,
    Columns,
}

impl Pass {
    fn axis(self) -> Axis {
        match self {
            Pass::Rows => Axis(0),
            Pass::Columns => Axis(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassOrder {
    #[default]
    RowsFirst,
    ColumnsFirst,
}

impl PassOrder {
    fn passes(self) -> [Pass; 2] {
        match self {
            PassOrder::RowsFirst => [Pass::Rows, Pass::Columns],
            PassOrder::ColumnsFirst => [Pass::Columns, Pass::Rows],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub engine: Engine,
    pub order: PassOrder,
    pub parallel: bool,
}

/// Cooperative cancellation and progress seam.
///
/// `is_cancelled` is polled before every line; `line_done` fires after
/// every line with the number of lines in the current pass. With `parallel` set both are called from pool threads.
pub trait TransformHook: Sync {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn line_done(&self, _pass: Pass, _total: usize) {}
}

/// Hook that never cancels and ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl TransformHook for NoHook {}

/// Forward 2D DFT of a real grid with the naive engine, rows then columns.
pub fn transform_2d(grid: &Array2<f64>) -> SpectraResult<ComplexGrid> {
    transform_2d_with(grid, &TransformOptions::default(), &NoHook)
}

/// Forward 2D DFT with explicit engine, pass order and parallelism.
pub fn transform_2d_with(
    grid: &Array2<f64>,
    options: &TransformOptions,
    hook: &dyn TransformHook,
) -> SpectraResult<ComplexGrid> {
    ensure_non_empty(grid, "transform input")?;
    ensure_finite(grid, "transform input")?;

    let (height, width) = grid.dim();
    let mut planner = FftPlanner::new();

    let mut re = grid.clone();
    let mut im = Array2::zeros(grid.raw_dim());
    for pass in options.order.passes() {
        let line_len = match pass {
            Pass::Rows => width,
            Pass::Columns => height,
        };
        let kernel: Box<dyn LineTransform> = match options.engine {
            Engine::Naive => Box::new(NaiveDft),
            Engine::Fast => Box::new(FftLine::forward(&mut planner, line_len)),
        };
        (re, im) = run_pass(&re, &im, pass, kernel.as_ref(), options.parallel, hook)?;
    }

    ComplexGrid::new(re, im)
}

/// Transform every line of `pass` and assemble the results into new grids.
fn run_pass(
    re: &Array2<f64>,
    im: &Array2<f64>,
    pass: Pass,
    kernel: &dyn LineTransform,
    parallel: bool,
    hook: &dyn TransformHook,
) -> SpectraResult<(Array2<f64>, Array2<f64>)> {
    let axis = pass.axis();
    let lines = re.len_of(axis);

    let transform_line = |idx: usize| -> SpectraResult<(Vec<f64>, Vec<f64>)> {
        if hook.is_cancelled() {
            return Err(SpectraError::Cancelled);
        }
        let line_re = re.index_axis(axis, idx).to_vec();
        let line_im = im.index_axis(axis, idx).to_vec();
        let out = kernel.apply(&line_re, &line_im)?;
        hook.line_done(pass, lines);
        Ok(out)
    };

    let results: Vec<(Vec<f64>, Vec<f64>)> = if parallel {
        (0..lines)
            .into_par_iter()
            .map(transform_line)
            .collect::<SpectraResult<Vec<_>>>()?
    } else {
        (0..lines)
            .map(transform_line)
            .collect::<SpectraResult<Vec<_>>>()?
    };

    let mut out_re = Array2::zeros(re.raw_dim());
    let mut out_im = Array2::zeros(im.raw_dim());
    for (idx, (line_re, line_im)) in results.iter().enumerate() {
        out_re.index_axis_mut(axis, idx).assign(&aview1(line_re));
        out_im.index_axis_mut(axis, idx).assign(&aview1(line_im));
    }

    Ok((out_re, out_im))
}
