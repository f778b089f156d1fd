//! Fourier transforms for the Spectra pipeline.
//!
//! `dft` is the reference O(N²) engine, `fft` the planned rustfft engine,
//! and `transform` drives either one across the rows and columns of a grid.

pub mod dft;
pub mod fft;
pub mod transform;

pub use transform::{
    transform_2d, transform_2d_with, LineTransform, NoHook, Pass, PassOrder, TransformHook,
    TransformOptions,
};
