// ─────────────────────────────────────────────────────────────────────
// Spectra — Spectrum Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Grayscale grid → centered, normalized magnitude spectrum.
//!
//! transform (rows, then columns) → magnitude → normalize → center → display.
//! Every stage returns a new grid; the caller's input is never written.

use crate::center::center_spectrum_with;
use crate::display::to_display;
use crate::magnitude::magnitude;
use crate::normalize::{normalize, value_range, ValueRange};
use crate::pixels::{display_to_rgba, grayscale_from_rgba};
use ndarray::Array2;
use spectra_math::{transform_2d_with, NoHook, TransformHook, TransformOptions};
use spectra_types::config::{Engine, SpectrumConfig};
use spectra_types::error::{SpectraError, SpectraResult};
use std::time::Instant;
use tracing::{debug, info};

/// Summary of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumReport {
    pub width: usize,
    pub height: usize,
    pub engine: Engine,
    /// Extrema of the rounded magnitude grid before normalization; `None`
    /// when every magnitude was equal and the output is all zeros.
    pub magnitude_range: Option<ValueRange>,
    pub elapsed_ms: f64,
}

impl SpectrumReport {
    pub fn is_degenerate(&self) -> bool {
        self.magnitude_range.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct SpectrumOutput {
    /// Centered values in [0, 255] before `scale_factor` and rounding.
    pub normalized: Array2<f64>,
    /// Centered 8-bit pixels after `scale_factor`, rounding and saturation.
    pub display: Array2<u8>,
    pub report: SpectrumReport,
}

/// Configured spectrum pipeline. Stateless between runs; one instance can
/// serve any number of grids.
#[derive(Debug, Clone, Default)]
pub struct SpectrumPipeline {
    config: SpectrumConfig,
}

impl SpectrumPipeline {
    pub fn new(config: SpectrumConfig) -> SpectraResult<Self> {
        config.validate()?;
        Ok(SpectrumPipeline { config })
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            engine: self.config.engine,
            parallel: self.config.parallel,
            ..TransformOptions::default()
        }
    }

    pub fn run(&self, grid: &Array2<f64>) -> SpectraResult<SpectrumOutput> {
        self.run_with_hook(grid, &NoHook)
    }

    /// Run with a cancellation/progress hook polled by the transform passes.
    pub fn run_with_hook(
        &self,
        grid: &Array2<f64>,
        hook: &dyn TransformHook,
    ) -> SpectraResult<SpectrumOutput> {
        let started = Instant::now();
        let (height, width) = grid.dim();

        let spectrum = transform_2d_with(grid, &self.transform_options(), hook)?;
        debug!(width, height, engine = ?self.config.engine, "transform done");

        let mag = magnitude(&spectrum, self.config.sqrt_compress);
        let range = value_range(&mag).ok_or_else(|| {
            SpectraError::InvalidInput("magnitude grid has no cells".to_string())
        })?;
        let normalized = center_spectrum_with(&normalize(&mag)?, self.config.center_mode)?;
        let display = to_display(&normalized, self.config.scale_factor)?;

        let report = SpectrumReport {
            width,
            height,
            engine: self.config.engine,
            magnitude_range: (!range.is_degenerate()).then_some(range),
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        info!(
            width,
            height,
            min = range.min,
            max = range.max,
            degenerate = report.is_degenerate(),
            elapsed_ms = report.elapsed_ms,
            "spectrum computed"
        );

        Ok(SpectrumOutput {
            normalized,
            display,
            report,
        })
    }

    /// RGBA in, RGBA out: grayscale conversion, spectrum, then the display
    /// grid replicated into R, G and B with the source alpha kept.
    pub fn run_rgba(&self, width: usize, height: usize, rgba: &[u8]) -> SpectraResult<Vec<u8>> {
        let gray = grayscale_from_rgba(width, height, rgba)?;
        let output = self.run(&gray)?;
        display_to_rgba(&output.display, rgba)
    }
}
