//! Checks the catalog tables against kernels rebuilt by a least-squares
//! polynomial fit over the same window.

use approx::assert_abs_diff_eq;
use nalgebra::{DMatrix, DVector};
use savgol_signature::{catalog, SavitzkyGolayFilter};

/// Smoothing kernel for offsets `-left..=right` and a polynomial of `order`.
fn least_squares_kernel(order: usize, left: usize, right: usize) -> Vec<f64> {
    // Offsets scaled into [-1, 1] keep the normal equations well conditioned;
    // the fitted value at offset 0 does not depend on the scale.
    let scale = left.max(right).max(1) as f64;
    let offsets: Vec<f64> = (-(left as isize)..=right as isize)
        .map(|o| o as f64 / scale)
        .collect();

    // Vandermonde matrix: one row per sample, one column per power
    let mut vandermonde = DMatrix::<f64>::zeros(offsets.len(), order + 1);
    for (i, &x) in offsets.iter().enumerate() {
        for j in 0..=order {
            vandermonde[(i, j)] = x.powi(j as i32);
        }
    }

    // The value at offset 0 is the constant term: solve A^T A c = e_0
    let ata = vandermonde.transpose() * &vandermonde;
    let mut rhs = DVector::<f64>::zeros(order + 1);
    rhs[0] = 1.0;
    let poly = ata.lu().solve(&rhs).expect("window is wider than the polynomial order");

    offsets
        .iter()
        .map(|&x| (0..=order).map(|j| poly[j] * x.powi(j as i32)).sum())
        .collect()
}

fn assert_matches_least_squares(filter: &SavitzkyGolayFilter, epsilon: f64) {
    let expected = least_squares_kernel(filter.order(), filter.left_width(), filter.right_width());
    assert_eq!(expected.len(), filter.window_len(), "{filter}");
    for (k, (&actual, &wanted)) in filter.coefficients().iter().zip(&expected).enumerate() {
        assert!((actual - wanted).abs() <= epsilon, "{filter} tap {k}: {actual} vs {wanted}");
    }
}

#[test]
fn test_generated_tables_match_to_six_decimals() {
    for filter in &catalog::filters()[..9] {
        assert_matches_least_squares(filter, 1e-6);
    }
}

#[test]
fn test_tabulated_tables_match_to_three_decimals() {
    for filter in &catalog::filters()[9..] {
        assert_matches_least_squares(filter, 1e-3);
    }
}

#[test]
fn test_quadratic_preserved_in_interior() {
    // Order >= 2 kernels reproduce a quadratic exactly, up to table rounding.
    let xs: Vec<f64> = (0..120).map(|i| i as f64 * 0.1).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 0.5 * x * x - x + 2.0).collect();

    let filter = catalog::find("SG:2-15-15").unwrap();
    let smoothed = filter.smooth_values(&ys);
    for i in 15..ys.len() - 15 {
        assert_abs_diff_eq!(smoothed[i], ys[i], epsilon = 1e-3);
    }
}
