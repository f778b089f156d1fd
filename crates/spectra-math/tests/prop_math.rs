// ─────────────────────────────────────────────────────────────────────
// Spectra — Property-Based Tests (proptest) for spectra-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for spectra-math using proptest.
//!
//! Covers: scalar DFT on zero/constant/linear inputs, Parseval's identity,
//! separability (pass order), naive vs fast agreement, serial vs parallel.

use ndarray::Array2;
use proptest::prelude::*;
use spectra_math::dft::dft;
use spectra_math::fft::fft_2d;
use spectra_math::{transform_2d, transform_2d_with, NoHook, PassOrder, TransformOptions};
use spectra_types::config::Engine;
use spectra_types::grid::ComplexGrid;

fn grid_strategy(max_side: usize) -> impl Strategy<Value = Array2<f64>> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(h, w)| {
        prop::collection::vec(0.0f64..=255.0, h * w)
            .prop_map(move |cells| Array2::from_shape_vec((h, w), cells).unwrap())
    })
}

fn max_abs_diff(a: &ComplexGrid, b: &ComplexGrid) -> f64 {
    let re = a
        .re()
        .iter()
        .zip(b.re().iter())
        .map(|(x, y)| (x - y).abs());
    let im = a
        .im()
        .iter()
        .zip(b.im().iter())
        .map(|(x, y)| (x - y).abs());
    re.chain(im).fold(0.0, f64::max)
}

// ── Scalar DFT Properties ────────────────────────────────────────────

proptest! {
    /// DFT of an all-zero signal is all zeros, for every length.
    #[test]
    fn dft_zero_signal(n in 1usize..64) {
        let (re, im) = dft(&vec![0.0; n], &vec![0.0; n]).unwrap();
        prop_assert_eq!(re.len(), n);
        prop_assert_eq!(im.len(), n);
        for k in 0..n {
            prop_assert_eq!(re[k], 0.0);
            prop_assert_eq!(im[k], 0.0);
        }
    }

    /// Constant signal v → (N·v, 0) at k = 0 and (0, 0) elsewhere.
    #[test]
    fn dft_constant_signal(n in 1usize..48, v in -255.0f64..255.0) {
        let (re, im) = dft(&vec![v; n], &vec![0.0; n]).unwrap();
        let tol = 1e-9 * (n as f64) * v.abs().max(1.0);

        prop_assert!((re[0] - n as f64 * v).abs() < tol,
            "DC = {}, expected {}", re[0], n as f64 * v);
        prop_assert!(im[0].abs() < tol);
        for k in 1..n {
            prop_assert!(re[k].abs() < tol && im[k].abs() < tol,
                "bin {} = ({}, {}) should vanish", k, re[k], im[k]);
        }
    }

    /// DFT is linear: dft(a·x + y) = a·dft(x) + dft(y).
    #[test]
    fn dft_linear(
        x in prop::collection::vec(-100.0f64..100.0, 1..24),
        a in -3.0f64..3.0,
    ) {
        let n = x.len();
        let y: Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();
        let combo: Vec<f64> = x.iter().zip(&y).map(|(xi, yi)| a * xi + yi).collect();
        let zeros = vec![0.0; n];

        let (cr, ci) = dft(&combo, &zeros).unwrap();
        let (xr, xi) = dft(&x, &zeros).unwrap();
        let (yr, yi) = dft(&y, &zeros).unwrap();
        for k in 0..n {
            prop_assert!((cr[k] - (a * xr[k] + yr[k])).abs() < 1e-8);
            prop_assert!((ci[k] - (a * xi[k] + yi[k])).abs() < 1e-8);
        }
    }

    /// Parseval: Σ|X|² = N·Σ|x|² for the unnormalized transform.
    #[test]
    fn dft_parseval(x in prop::collection::vec(-50.0f64..50.0, 1..32)) {
        let n = x.len();
        let (re, im) = dft(&x, &vec![0.0; n]).unwrap();
        let energy_time: f64 = x.iter().map(|v| v * v).sum();
        let energy_freq: f64 = re.iter().zip(&im).map(|(r, i)| r * r + i * i).sum();
        let expected = n as f64 * energy_time;
        prop_assert!((energy_freq - expected).abs() <= 1e-8 * expected.max(1.0),
            "Σ|X|² = {}, N·Σ|x|² = {}", energy_freq, expected);
    }

    /// Real input gives a conjugate-symmetric spectrum: X[N-k] = conj(X[k]).
    #[test]
    fn dft_real_input_hermitian(x in prop::collection::vec(0.0f64..255.0, 2..24)) {
        let n = x.len();
        let (re, im) = dft(&x, &vec![0.0; n]).unwrap();
        for k in 1..n {
            prop_assert!((re[k] - re[n - k]).abs() < 1e-8);
            prop_assert!((im[k] + im[n - k]).abs() < 1e-8);
        }
    }
}

// ── Separable 2D Driver Properties ───────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Rows-then-columns equals columns-then-rows.
    #[test]
    fn transform_pass_order_commutes(grid in grid_strategy(8)) {
        let rows_first = transform_2d(&grid).unwrap();
        let cols_first = transform_2d_with(
            &grid,
            &TransformOptions { order: PassOrder::ColumnsFirst, ..TransformOptions::default() },
            &NoHook,
        ).unwrap();
        let diff = max_abs_diff(&rows_first, &cols_first);
        prop_assert!(diff < 1e-7, "pass order changed the spectrum by {}", diff);
    }

    /// Output shape matches input shape.
    #[test]
    fn transform_preserves_shape(grid in grid_strategy(10)) {
        let spectrum = transform_2d(&grid).unwrap();
        prop_assert_eq!(spectrum.dim(), grid.dim());
    }

    /// DC term equals the sum of all samples.
    #[test]
    fn transform_dc_is_sum(grid in grid_strategy(8)) {
        let spectrum = transform_2d(&grid).unwrap();
        let dc = spectrum.get(0, 0).unwrap();
        let sum: f64 = grid.iter().sum();
        prop_assert!((dc.re - sum).abs() < 1e-8 * sum.max(1.0));
        prop_assert!(dc.im.abs() < 1e-7);
    }

    /// The rustfft engine agrees with the reference engine.
    #[test]
    fn fast_matches_naive(grid in grid_strategy(12)) {
        let naive = transform_2d(&grid).unwrap();
        let fast = fft_2d(&grid).unwrap();
        let scale = grid.iter().fold(1.0f64, |m, v| m.max(v.abs())) * grid.len() as f64;
        let diff = max_abs_diff(&naive, &fast);
        prop_assert!(diff <= 1e-9 * scale, "naive vs fast differ by {}", diff);
    }

    /// Parallel line evaluation is bit-identical to serial.
    #[test]
    fn parallel_matches_serial(grid in grid_strategy(10), fast in any::<bool>()) {
        let engine = if fast { Engine::Fast } else { Engine::Naive };
        let serial = transform_2d_with(
            &grid,
            &TransformOptions { engine, ..TransformOptions::default() },
            &NoHook,
        ).unwrap();
        let parallel = transform_2d_with(
            &grid,
            &TransformOptions { engine, parallel: true, ..TransformOptions::default() },
            &NoHook,
        ).unwrap();
        prop_assert_eq!(serial, parallel);
    }
}
