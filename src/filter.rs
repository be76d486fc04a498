use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::curve::{Curve, CurveBuilder, Datapoint};
use crate::error::{Result, SavitzkyGolayError};

/// A Savitzky-Golay smoothing filter defined by precomputed convolution
/// coefficients.
///
/// The point at index `i` is replaced by
/// `sum(coefficients[k] * y[i - left_width + k])` for `k` in
/// `0..=left_width + right_width`. Offsets that fall before the first or after
/// the last sample are skipped and the remaining weights are not renormalized,
/// so points within `left_width`/`right_width` of either end of the curve are
/// smoothed with a truncated kernel. Existing results depend on this.
///
/// A filter is immutable once built and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SavitzkyGolayFilter {
    /// Polynomial degree the coefficients were fitted to. Informative only.
    order: usize,
    left_width: usize,
    right_width: usize,
    coefficients: Cow<'static, [f64]>,
}

impl SavitzkyGolayFilter {
    /// Creates a filter from its geometry and coefficients.
    ///
    /// # Arguments
    ///
    /// * `order` - Polynomial order the coefficients were derived from
    /// * `left_width` - Number of samples used before the current one
    /// * `right_width` - Number of samples used after the current one
    /// * `coefficients` - Exactly `left_width + 1 + right_width` weights, the
    ///   first one applying to the leftmost sample
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol_signature::SavitzkyGolayFilter;
    ///
    /// let filter = SavitzkyGolayFilter::new(2, 2, 2, vec![-0.086, 0.343, 0.486, 0.343, -0.086])
    ///     .expect("five coefficients for a 2-2 window");
    /// assert_eq!(filter.to_string(), "SG:2-2-2");
    /// ```
    pub fn new(
        order: usize,
        left_width: usize,
        right_width: usize,
        coefficients: impl Into<Cow<'static, [f64]>>,
    ) -> Result<Self> {
        let coefficients = coefficients.into();
        // A window wider than usize::MAX can never match a real table.
        let expected = expected_window_len(left_width, right_width);
        if expected != Some(coefficients.len()) {
            return Err(SavitzkyGolayError::InvalidCoefficients {
                expected: expected.unwrap_or(usize::MAX),
                actual: coefficients.len(),
            });
        }

        Ok(Self {
            order,
            left_width,
            right_width,
            coefficients,
        })
    }

    /// Creates a filter over a `'static` coefficient table.
    ///
    /// Same invariant as [`SavitzkyGolayFilter::new`], but checked during
    /// constant evaluation: a table of the wrong length used in a `const` or
    /// `static` fails to compile.
    ///
    /// # Panics
    ///
    /// When called at runtime with a table whose length is not
    /// `left_width + 1 + right_width`. Use [`SavitzkyGolayFilter::new`] for
    /// coefficients that are not compile-time constants.
    pub const fn from_static(
        order: usize,
        left_width: usize,
        right_width: usize,
        coefficients: &'static [f64],
    ) -> Self {
        let matches = match expected_window_len(left_width, right_width) {
            Some(expected) => expected == coefficients.len(),
            None => false,
        };
        assert!(matches, "coefficients.len() != left_width + 1 + right_width");
        Self {
            order,
            left_width,
            right_width,
            coefficients: Cow::Borrowed(coefficients),
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn left_width(&self) -> usize {
        self.left_width
    }

    pub fn right_width(&self) -> usize {
        self.right_width
    }

    /// Total number of taps, `left_width + 1 + right_width`.
    pub fn window_len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The `(order, left_width, right_width)` triple identifying this filter.
    pub fn name(&self) -> FilterName {
        FilterName {
            order: self.order,
            left_width: self.left_width,
            right_width: self.right_width,
        }
    }

    /// Smooths the points of `curve` whose abscissa lies in `[from, to]`.
    ///
    /// Both ends of the range are inclusive. Points outside it are copied
    /// unchanged. The result always has as many points as the input, in the
    /// same order, and the input is never modified.
    ///
    /// # Errors
    ///
    /// [`SavitzkyGolayError::OperationFailed`] if the curve cannot answer a
    /// `get` for an index below its own `size`. No partial result is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol_signature::{SavitzkyGolayFilter, Signature};
    ///
    /// let filter = SavitzkyGolayFilter::new(0, 1, 1, vec![1.0 / 3.0; 3]).unwrap();
    /// let sig: Signature = vec![(0.0, 3.0), (1.0, 6.0), (2.0, 9.0)].into_iter().collect();
    /// let smoothed = filter.apply(&sig, 1.0, 1.0).unwrap();
    /// assert_eq!(smoothed.ys()[0], 3.0); // outside the range
    /// assert!((smoothed.ys()[1] - 6.0).abs() < 1e-12);
    /// ```
    pub fn apply<C>(&self, curve: &C, from: f64, to: f64) -> Result<C>
    where
        C: Curve + CurveBuilder,
    {
        let size = curve.size();
        let mut smoothed_count = 0usize;
        let mut output = C::with_capacity(size);

        for i in 0..size {
            let Datapoint { x, mut y } = curve.get(i)?;

            if from <= x && x <= to {
                y = self.convolve_at(i, size, |n| curve.get(n).map(|p| p.y))?;
                smoothed_count += 1;
            }

            output.push(Datapoint::new(x, y));
        }

        debug!(
            filter = %self,
            size,
            from,
            to,
            smoothed = smoothed_count,
            "applied Savitzky-Golay filter"
        );

        Ok(output)
    }

    /// Smooths every point of `curve`, regardless of abscissa.
    pub fn apply_all<C>(&self, curve: &C) -> Result<C>
    where
        C: Curve + CurveBuilder,
    {
        self.apply(curve, f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Smooths a bare sequence of ordinates, treating every sample as in range.
    ///
    /// Uses the same truncated kernel at both ends as [`SavitzkyGolayFilter::apply`].
    pub fn smooth_values(&self, ys: &[f64]) -> Vec<f64> {
        (0..ys.len())
            .map(|i| {
                self.convolve_at(i, ys.len(), |n| Ok::<_, Infallible>(ys[n]))
                    .unwrap_or_else(|never| match never {})
            })
            .collect()
    }

    /// Weighted sum around `center`; `sample` is only called for `0 <= n < size`.
    fn convolve_at<F, E>(&self, center: usize, size: usize, mut sample: F) -> std::result::Result<f64, E>
    where
        F: FnMut(usize) -> std::result::Result<f64, E>,
    {
        let first = center as isize - self.left_width as isize;
        let mut sum = 0.0;

        for (k, &coeff) in self.coefficients.iter().enumerate() {
            let n = first + k as isize;
            if n >= 0 && (n as usize) < size {
                sum += coeff * sample(n as usize)?;
            }
        }

        Ok(sum)
    }
}

/// `left_width + 1 + right_width`, or `None` on overflow.
const fn expected_window_len(left_width: usize, right_width: usize) -> Option<usize> {
    match left_width.checked_add(1) {
        Some(n) => n.checked_add(right_width),
        None => None,
    }
}

impl fmt::Display for SavitzkyGolayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name(), f)
    }
}

/// The `SG:M-nL-nR` identifier of a filter: polynomial order, left width and
/// right width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterName {
    pub order: usize,
    pub left_width: usize,
    pub right_width: usize,
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SG:{}-{}-{}", self.order, self.left_width, self.right_width)
    }
}

impl FromStr for FilterName {
    type Err = SavitzkyGolayError;

    /// Parses `SG:M-nL-nR`; the `SG:` prefix may be omitted.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SavitzkyGolayError::InvalidFilterName(s.to_string());
        let trimmed = s.trim();
        let triple = trimmed.strip_prefix("SG:").unwrap_or(trimmed);

        let mut parts = triple.split('-').map(|p| p.trim().parse::<usize>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(order)), Some(Ok(left_width)), Some(Ok(right_width)), None) => Ok(Self {
                order,
                left_width,
                right_width,
            }),
            _ => Err(invalid()),
        }
    }
}
