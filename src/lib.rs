//! # Savitzky-Golay Signature Smoothing
//!
//! Smoothing of sampled curves ("signatures", ordered `(x, y)` points) with
//! Savitzky-Golay FIR filters built from precomputed convolution coefficients.
//!
//! A filter is a coefficient vector plus a left/right window width. Applying it
//! to a curve produces a new curve in which every point whose abscissa lies in
//! a caller-given closed range is replaced by the weighted sum of its
//! neighbours. All other points pass through unchanged.
//!
//! ## Features
//!
//! - Symmetric and asymmetric windows
//! - Smoothing restricted to an abscissa sub-range
//! - A fixed catalog of preconfigured filters, addressed as `SG:M-nL-nR`
//! - Any curve type that implements [`Curve`] and [`CurveBuilder`]
//! - CSV reading and writing of signatures
//!
//! Near either end of a curve, taps that fall outside the data are dropped
//! without renormalizing the rest of the kernel.
//!
//! ## Example
//!
//! ```rust
//! use savgol_signature::{catalog, Signature};
//!
//! let sig: Signature = (0..50).map(|i| (i as f64, (i as f64 * 0.2).sin())).collect();
//! let filter = catalog::find("SG:2-5-5").expect("catalog entry");
//! let smoothed = filter.apply(&sig, 10.0, 40.0).expect("in-memory signature");
//! assert_eq!(smoothed.len(), sig.len());
//! ```

pub mod catalog;
mod csv_utils;
mod curve;
mod error;
mod filter;

pub use csv_utils::{read_signature, read_signature_from_path, write_signature, write_signature_to_path};
pub use curve::{Curve, CurveBuilder, CurveError, Datapoint, Signature};
pub use error::{Result, SavitzkyGolayError};
pub use filter::{FilterName, SavitzkyGolayFilter};

/// Smooths every point of `signature` with the named catalog filter.
///
/// # Example
///
/// ```rust
/// use savgol_signature::{smooth, Signature};
///
/// let sig: Signature = (0..20).map(|i| (i as f64, 1.0)).collect();
/// let smoothed = smooth(&sig, "SG:2-2-2").expect("known filter");
/// assert!((smoothed.ys()[10] - 1.0).abs() < 1e-9);
/// ```
pub fn smooth(signature: &Signature, filter_name: &str) -> Result<Signature> {
    catalog::find(filter_name)?.apply_all(signature)
}
