// ─────────────────────────────────────────────────────────────────────
// Spectra — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{SpectraError, SpectraResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which 1-D transform the separable driver runs on each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Direct O(N²) evaluation of the DFT sum. Reference path.
    #[default]
    Naive,
    /// Planned FFT via rustfft.
    Fast,
}

/// How the quadrant swap treats odd dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CenterMode {
    /// Swap index `i` with `i + half`; an odd trailing index stays put.
    /// Applying it twice is the identity for every size.
    #[default]
    Involutive,
    /// Literal floor-based mapping of the browser tool, which duplicates
    /// the middle line and drops the last one on odd sizes.
    Reference,
}

/// Options recognised by the spectrum pipeline.
/// Every field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumConfig {
    /// Take a second square root of the magnitude to compress dynamic range.
    #[serde(default = "default_sqrt_compress")]
    pub sqrt_compress: bool,
    /// Multiplier applied to normalized values before rounding to pixels.
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    #[serde(default)]
    pub engine: Engine,
    /// Transform the lines of each pass on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub center_mode: CenterMode,
}

fn default_sqrt_compress() -> bool {
    true
}
fn default_scale_factor() -> f64 {
    1.0
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        SpectrumConfig {
            sqrt_compress: default_sqrt_compress(),
            scale_factor: default_scale_factor(),
            engine: Engine::default(),
            parallel: false,
            center_mode: CenterMode::default(),
        }
    }
}

impl SpectrumConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: impl AsRef<Path>) -> SpectraResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SpectraResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor < 0.0 {
            return Err(SpectraError::ConfigError(format!(
                "scale_factor must be finite and >= 0, got {}",
                self.scale_factor
            )));
        }
        Ok(())
    }
}
