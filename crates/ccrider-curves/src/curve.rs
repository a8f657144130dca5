//! Piecewise curve with exact evaluation.

use serde::Serialize;

use crate::builder::build_segments;
use crate::error::CurveError;
use crate::interpolate::sliced;
use crate::segment::Segment;

/// Piecewise cubic curve through evenly spaced control points.
///
/// The curve keeps the source points next to the built segments so that
/// evaluation at the bounds can return them verbatim. A `Curve` is immutable;
/// changing a point means building a new one.
///
/// # Example
///
/// ```
/// use ccrider_curves::Curve;
///
/// let curve = Curve::new(&[0.0, 0.8, 1.0])?;
/// assert_eq!(curve.segments().len(), 2);
/// assert_eq!(curve.at(0.0), 0.0);
/// assert_eq!(curve.at(1.0), 1.0);
/// # Ok::<(), ccrider_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Curve {
    points: Vec<f32>,
    segments: Vec<Segment>,
}

impl Curve {
    /// Build a curve through `points`.
    ///
    /// # Errors
    ///
    /// * [`CurveError::TooFewPoints`] if fewer than two points are given
    /// * [`CurveError::NonFinitePoint`] if any point is NaN or infinite
    pub fn new(points: &[f32]) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                count: points.len(),
            });
        }

        if let Some((index, &value)) = points.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(CurveError::NonFinitePoint { index, value });
        }

        Ok(Self {
            points: points.to_vec(),
            segments: build_segments(points),
        })
    }

    /// Straight line from 0 to 1.
    pub fn linear() -> Self {
        let points = vec![0.0, 1.0];
        let segments = build_segments(&points);
        Self { points, segments }
    }

    /// Control points the curve was built from.
    pub fn points(&self) -> &[f32] {
        &self.points
    }

    /// Built segments, one fewer than the points.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Exact evaluation at `t`.
    ///
    /// `t <= 0` returns the first point and `t >= 1` the last point, bit for
    /// bit. In between, the segment containing `t` is evaluated with the
    /// closed-form cubic and clamped to `[0,1]`. NaN input evaluates like 0.
    pub fn at(&self, t: f32) -> f32 {
        let first = self.points.first().copied().unwrap_or(0.0);
        let last = self.points.last().copied().unwrap_or(first);

        if t >= 1.0 {
            return last;
        }
        if t <= 0.0 || t.is_nan() {
            return first;
        }

        let (index, remainder) = sliced(t, self.segments.len() + 1);
        match self.segments.get(index).or_else(|| self.segments.last()) {
            Some(segment) => segment.evaluate(remainder),
            None => first,
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::linear()
    }
}
