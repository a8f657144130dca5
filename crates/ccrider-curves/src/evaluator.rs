//! Memoized curve evaluation.

use crate::curve::Curve;
use crate::error::CurveError;
use crate::interpolate::{lerp, sliced};
use crate::lut::LookupTable;

/// A curve paired with its own lookup table.
///
/// The evaluator owns both, so rebuilding a curve always means building a new
/// evaluator with an empty table. Production lookups go through
/// [`memoized_at`](Self::memoized_at): the two table entries bracketing the
/// input are computed on first use, cached, and linearly interpolated.
///
/// # Cost
///
/// - First lookup near an input: up to two exact segment evaluations
/// - Every later lookup in the same table cell: two reads and one lerp
/// - [`warm`](Self::warm) fills every entry up front
///
/// # Example
///
/// ```
/// use ccrider_curves::{Curve, CurveEvaluator};
///
/// let mut evaluator = CurveEvaluator::new(Curve::new(&[0.0, 1.0])?);
/// let output = evaluator.memoized_at(0.5);
/// assert!((output - 0.5).abs() < 1.0 / 128.0);
/// # Ok::<(), ccrider_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CurveEvaluator {
    curve: Curve,
    table: LookupTable,
}

impl CurveEvaluator {
    /// Wrap `curve` with a table of [`LookupTable::DEFAULT_RESOLUTION`] entries.
    pub fn new(curve: Curve) -> Self {
        Self {
            curve,
            table: LookupTable::new(LookupTable::DEFAULT_RESOLUTION),
        }
    }

    /// Wrap `curve` with a table of `resolution` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidResolution`] if `resolution < 2`.
    pub fn with_resolution(curve: Curve, resolution: usize) -> Result<Self, CurveError> {
        if resolution < LookupTable::MIN_RESOLUTION {
            return Err(CurveError::InvalidResolution(resolution));
        }

        Ok(Self {
            curve,
            table: LookupTable::new(resolution),
        })
    }

    /// Build the curve through `points` and wrap it.
    ///
    /// # Errors
    ///
    /// Propagates [`Curve::new`] and [`with_resolution`](Self::with_resolution)
    /// failures.
    pub fn from_points(points: &[f32], resolution: usize) -> Result<Self, CurveError> {
        Self::with_resolution(Curve::new(points)?, resolution)
    }

    /// The evaluated curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The lookup table in its current fill state.
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Exact evaluation, bypassing the table.
    #[inline]
    pub fn at(&self, t: f32) -> f32 {
        self.curve.at(t)
    }

    /// Table-backed evaluation.
    ///
    /// `t` is clamped to `[0,1]` (NaN counts as 0). An input on the last
    /// table entry returns that entry directly; anything else interpolates
    /// between its two bracketing entries. Inputs of exactly 0 and 1 return
    /// the curve's end points unchanged.
    pub fn memoized_at(&mut self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.table.resolution() - 1;

        let (index, remainder) = sliced(t, self.table.resolution());
        let index = index.min(last);
        let value = self.sample(index);

        if index == last {
            return value;
        }

        let next = self.sample(index + 1);
        lerp(remainder, value, next)
    }

    /// Compute every table entry now.
    pub fn warm(&mut self) {
        for index in 0..self.table.resolution() {
            self.sample(index);
        }
    }

    /// Give back the curve, dropping the table.
    pub fn into_curve(self) -> Curve {
        self.curve
    }

    fn sample(&mut self, index: usize) -> f32 {
        let curve = &self.curve;
        self.table.get_or_insert_with(index, |input| curve.at(input))
    }
}

impl From<Curve> for CurveEvaluator {
    fn from(curve: Curve) -> Self {
        Self::new(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    #[test]
    fn test_rejects_tiny_resolution() {
        assert_eq!(
            CurveEvaluator::with_resolution(Curve::linear(), 1),
            Err(CurveError::InvalidResolution(1))
        );
        assert!(CurveEvaluator::with_resolution(Curve::linear(), 2).is_ok());
    }

    #[test]
    fn test_endpoints_are_exact() {
        let mut evaluator = must(CurveEvaluator::from_points(&[0.37, 0.1, 0.91], 128));
        assert_eq!(evaluator.memoized_at(0.0).to_bits(), 0.37f32.to_bits());
        assert_eq!(evaluator.memoized_at(1.0).to_bits(), 0.91f32.to_bits());
    }

    #[test]
    fn test_straight_line_midpoint() {
        let mut evaluator = must(CurveEvaluator::from_points(&[0.0, 1.0], 128));
        let value = evaluator.memoized_at(0.5);
        assert!((value - 0.5).abs() < 1.0 / 128.0, "got {value}");
    }

    #[test]
    fn test_table_fills_lazily() {
        let mut evaluator = CurveEvaluator::new(Curve::linear());
        assert_eq!(evaluator.table().filled(), 0);

        evaluator.memoized_at(0.5);
        assert_eq!(evaluator.table().filled(), 2);

        evaluator.memoized_at(1.0);
        assert_eq!(evaluator.table().filled(), 3);

        evaluator.warm();
        assert!(evaluator.table().is_warm());
        assert!(evaluator.table().is_monotonic());
    }

    #[test]
    fn test_repeated_lookup_is_bit_identical() {
        let mut evaluator = must(CurveEvaluator::from_points(&[0.2, 0.9, 0.4, 0.6], 128));
        for step in 0..=200 {
            let t = step as f32 / 200.0;
            let first = evaluator.memoized_at(t);
            let second = evaluator.memoized_at(t);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn test_memoized_tracks_exact() {
        let mut evaluator = must(CurveEvaluator::from_points(&[0.0, 0.7, 0.3, 1.0], 128));
        for step in 0..=500 {
            let t = step as f32 / 500.0;
            let exact = evaluator.at(t);
            let memoized = evaluator.memoized_at(t);
            assert!(
                (exact - memoized).abs() < 0.01,
                "t={t}: exact={exact} memoized={memoized}"
            );
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let mut evaluator = must(CurveEvaluator::from_points(&[0.25, 0.75], 16));
        assert_eq!(evaluator.memoized_at(-1.0).to_bits(), 0.25f32.to_bits());
        assert_eq!(evaluator.memoized_at(2.0).to_bits(), 0.75f32.to_bits());
        assert_eq!(evaluator.memoized_at(f32::NAN).to_bits(), 0.25f32.to_bits());
        assert_eq!(
            evaluator.memoized_at(f32::INFINITY).to_bits(),
            0.75f32.to_bits()
        );
    }

    #[test]
    fn test_into_curve_returns_source() {
        let curve = must(Curve::new(&[0.1, 0.2, 0.3]));
        let evaluator = CurveEvaluator::from(curve.clone());
        assert_eq!(evaluator.into_curve(), curve);
    }
}
