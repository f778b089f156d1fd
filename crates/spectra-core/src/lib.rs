// ─────────────────────────────────────────────────────────────────────
// Spectra — Spectrum Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Centered magnitude spectrum of a grayscale image.
//!
//! Stages: magnitude, normalize, center, display
//! Boundary: pixels (RGBA buffers)
//! Drivers: pipeline (synchronous), job (worker thread)

pub mod center;
pub mod display;
pub mod job;
pub mod magnitude;
pub mod normalize;
pub mod pipeline;
pub mod pixels;
pub mod telemetry;

pub use job::SpectrumJob;
pub use pipeline::{SpectrumOutput, SpectrumPipeline, SpectrumReport};
