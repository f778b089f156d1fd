// ─────────────────────────────────────────────────────────────────────
// Spectra — Quadrant Swap
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Quadrant swap that moves the DC term from the corner to the center.
//!
//! Horizontal pass first, then vertical. Along an axis of length `len`,
//! with `half = len / 2`, output index `i` reads input index
//! `source_index(i, len, mode)`:
//!
//! | mode         | `i < half`  | `half <= i < 2·half` | `i == 2·half` (odd len) |
//! |--------------|-------------|----------------------|-------------------------|
//! | `Involutive` | `i + half`  | `i - half`           | `i`                     |
//! | `Reference`  | `i + half`  | `i - half`           | `i - half`              |
//!
//! On even lengths both modes are the same permutation.

use ndarray::Array2;
use spectra_types::config::CenterMode;
use spectra_types::error::SpectraResult;
use spectra_types::grid::ensure_non_empty;

/// Input index read by output index `idx` on an axis of length `len`.
pub fn source_index(idx: usize, len: usize, mode: CenterMode) -> usize {
    let half = len / 2;
    match mode {
        CenterMode::Involutive if idx >= 2 * half => idx,
        _ if idx >= half => idx - half,
        _ => idx + half,
    }
}

/// `(row, col)` where the DC term lands after centering a `height × width` grid.
pub fn dc_position(height: usize, width: usize) -> (usize, usize) {
    (height / 2, width / 2)
}

/// Center a spectrum with [`CenterMode::Involutive`].
pub fn center_spectrum<T: Clone>(grid: &Array2<T>) -> SpectraResult<Array2<T>> {
    center_spectrum_with(grid, CenterMode::Involutive)
}

pub fn center_spectrum_with<T: Clone>(
    grid: &Array2<T>,
    mode: CenterMode,
) -> SpectraResult<Array2<T>> {
    ensure_non_empty(grid, "spectrum")?;
    let (height, width) = grid.dim();

    let swapped = Array2::from_shape_fn((height, width), |(r, c)| {
        grid[[r, source_index(c, width, mode)]].clone()
    });
    Ok(Array2::from_shape_fn((height, width), |(r, c)| {
        swapped[[source_index(r, height, mode), c]].clone()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use spectra_types::error::SpectraError;

    fn indexed(h: usize, w: usize) -> Array2<usize> {
        Array2::from_shape_fn((h, w), |(r, c)| r * w + c)
    }

    #[test]
    fn test_even_swap_exchanges_quadrants() {
        let g = array![
            [1, 1, 2, 2],
            [1, 1, 2, 2],
            [3, 3, 4, 4],
            [3, 3, 4, 4],
        ];
        let expected = array![
            [4, 4, 3, 3],
            [4, 4, 3, 3],
            [2, 2, 1, 1],
            [2, 2, 1, 1],
        ];
        assert_eq!(center_spectrum(&g).unwrap(), expected);
        assert_eq!(
            center_spectrum_with(&g, CenterMode::Reference).unwrap(),
            expected
        );
    }

    #[test]
    fn test_dc_moves_to_center() {
        for (h, w) in [(4, 4), (5, 3), (1, 6), (7, 1), (2, 9)] {
            let mut g = Array2::zeros((h, w));
            g[[0, 0]] = 1u8;
            for mode in [CenterMode::Involutive, CenterMode::Reference] {
                let c = center_spectrum_with(&g, mode).unwrap();
                let (dr, dc) = dc_position(h, w);
                assert_eq!(c[[dr, dc]], 1, "{h}x{w} {mode:?}");
            }
        }
    }

    #[test]
    fn test_involutive_odd_mapping() {
        let src: Vec<usize> = (0..5)
            .map(|i| source_index(i, 5, CenterMode::Involutive))
            .collect();
        assert_eq!(src, vec![2, 3, 0, 1, 4]);
    }

    #[test]
    fn test_reference_odd_mapping_duplicates() {
        // Column 2 is read twice and column 4 never, as in the browser tool.
        let src: Vec<usize> = (0..5)
            .map(|i| source_index(i, 5, CenterMode::Reference))
            .collect();
        assert_eq!(src, vec![2, 3, 0, 1, 2]);

        let g = array![[10, 11, 12, 13, 14]];
        let c = center_spectrum_with(&g, CenterMode::Reference).unwrap();
        assert_eq!(c, array![[12, 13, 10, 11, 12]]);
    }

    #[test]
    fn test_involution_on_odd_grid() {
        let g = indexed(5, 7);
        let once = center_spectrum(&g).unwrap();
        assert_ne!(once, g);
        assert_eq!(center_spectrum(&once).unwrap(), g);
    }

    #[test]
    fn test_single_cell_unchanged() {
        let g = array![[9.5]];
        assert_eq!(center_spectrum(&g).unwrap(), g);
        assert_eq!(center_spectrum_with(&g, CenterMode::Reference).unwrap(), g);
    }

    #[test]
    fn test_empty_rejected() {
        let g = Array2::<f64>::zeros((0, 3));
        assert!(matches!(
            center_spectrum(&g),
            Err(SpectraError::InvalidInput(_))
        ));
    }
}
