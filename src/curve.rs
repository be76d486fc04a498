//! Curves ("signatures"): ordered sequences of (x, y) sample points.
//!
//! The filter only needs three capabilities from a curve: its size, indexed
//! access to a point, and a way to build a new curve point by point. Those are
//! the [`Curve`] and [`CurveBuilder`] traits. [`Signature`] is the crate's own
//! implementation; `Vec<Datapoint>` works too.

use thiserror::Error;

/// A single sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Datapoint {
    /// Abscissa
    pub x: f64,
    /// Ordinate
    pub y: f64,
}

impl Datapoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Datapoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Failures reported by a curve implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Index {index} out of bounds for curve of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Mismatched lengths: {xs} abscissae but {ys} ordinates")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("Malformed curve: {0}")]
    Malformed(String),
}

/// Read access to an ordered, index-addressable sequence of points.
pub trait Curve {
    /// Number of points.
    fn size(&self) -> usize;

    /// Point at `index`, for `0 <= index < size()`.
    fn get(&self, index: usize) -> Result<Datapoint, CurveError>;
}

/// Construction of a new curve by appending points in index order.
pub trait CurveBuilder: Sized {
    fn with_capacity(capacity: usize) -> Self;

    fn push(&mut self, point: Datapoint);
}

impl Curve for [Datapoint] {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<Datapoint, CurveError> {
        <[Datapoint]>::get(self, index)
            .copied()
            .ok_or(CurveError::IndexOutOfBounds { index, size: self.len() })
    }
}

impl Curve for Vec<Datapoint> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Result<Datapoint, CurveError> {
        Curve::get(self.as_slice(), index)
    }
}

impl CurveBuilder for Vec<Datapoint> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn push(&mut self, point: Datapoint) {
        Vec::push(self, point);
    }
}

/// An owned curve of (x, y) points, kept in insertion order.
///
/// The abscissae are expected to be non-decreasing, but nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    points: Vec<Datapoint>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Builds a signature from parallel abscissa and ordinate slices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use savgol_signature::Signature;
    ///
    /// let sig = Signature::from_xy(&[0.0, 1.0, 2.0], &[1.0, 4.0, 9.0]).expect("same lengths");
    /// assert_eq!(sig.len(), 3);
    /// ```
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        if xs.len() != ys.len() {
            return Err(CurveError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(xs.iter().zip(ys).map(|(&x, &y)| Datapoint::new(x, y)).collect())
    }

    /// Appends a point at the end.
    pub fn add_datapoint(&mut self, x: f64, y: f64) {
        self.points.push(Datapoint::new(x, y));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Datapoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Datapoint> {
        self.points.iter()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl Curve for Signature {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn get(&self, index: usize) -> Result<Datapoint, CurveError> {
        Curve::get(self.points.as_slice(), index)
    }
}

impl CurveBuilder for Signature {
    fn with_capacity(capacity: usize) -> Self {
        Signature::with_capacity(capacity)
    }

    fn push(&mut self, point: Datapoint) {
        self.points.push(point);
    }
}

impl FromIterator<Datapoint> for Signature {
    fn from_iter<I: IntoIterator<Item = Datapoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(f64, f64)> for Signature {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter().map(Datapoint::from).collect()
    }
}

impl<'a> IntoIterator for &'a Signature {
    type Item = &'a Datapoint;
    type IntoIter = std::slice::Iter<'a, Datapoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xy_pairs_points_in_order() {
        let sig = Signature::from_xy(&[0.0, 0.5, 1.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_eq!(sig.size(), 3);
        assert_eq!(sig.get(1).unwrap(), Datapoint::new(0.5, 2.0));
        assert_eq!(sig.xs(), vec![0.0, 0.5, 1.0]);
        assert_eq!(sig.ys(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_from_xy_length_mismatch() {
        let err = Signature::from_xy(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert_eq!(err, CurveError::LengthMismatch { xs: 2, ys: 1 });
    }

    #[test]
    fn test_get_out_of_bounds() {
        let mut sig = Signature::new();
        sig.add_datapoint(1.0, 2.0);
        assert_eq!(
            sig.get(1),
            Err(CurveError::IndexOutOfBounds { index: 1, size: 1 })
        );
    }

    #[test]
    fn test_vec_is_a_curve() {
        let mut points = <Vec<Datapoint> as CurveBuilder>::with_capacity(2);
        CurveBuilder::push(&mut points, Datapoint::new(0.0, 1.0));
        CurveBuilder::push(&mut points, Datapoint::new(1.0, 2.0));
        assert_eq!(points.size(), 2);
        assert_eq!(Curve::get(&points, 0).unwrap().y, 1.0);
        assert!(Curve::get(&points, 2).is_err());
    }

    #[test]
    fn test_collect_from_tuples() {
        let sig: Signature = vec![(0.0, 1.0), (1.0, 2.0)].into_iter().collect();
        assert_eq!(sig.points(), &[Datapoint::new(0.0, 1.0), Datapoint::new(1.0, 2.0)]);
        assert_eq!((&sig).into_iter().count(), 2);
    }
}
