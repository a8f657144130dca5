//! Error types for curve construction.

use thiserror::Error;

/// Error type for curve operations.
///
/// Evaluation never fails; these errors only come out of the constructors
/// that validate their input up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Fewer than two control points were supplied.
    #[error("Curve needs at least 2 control points, got {count}")]
    TooFewPoints {
        /// Number of points that were supplied.
        count: usize,
    },

    /// A control point is NaN or infinite.
    #[error("Control point {index} is not finite: {value}")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
        /// The invalid value.
        value: f32,
    },

    /// Lookup table resolution is too small to interpolate.
    #[error("Lookup table resolution must be at least 2, got {0}")]
    InvalidResolution(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_too_few_points() {
        let msg = CurveError::TooFewPoints { count: 1 }.to_string();
        assert!(msg.contains("at least 2"));
        assert!(msg.contains("got 1"));
    }

    #[test]
    fn test_error_display_non_finite() {
        let err = CurveError::NonFinitePoint {
            index: 3,
            value: f32::NAN,
        };
        let msg = format!("{err}");
        assert!(msg.contains("Control point 3"));
        assert!(msg.contains("NaN"));
    }

    #[test]
    fn test_error_display_resolution() {
        let msg = CurveError::InvalidResolution(1).to_string();
        assert!(msg.contains("at least 2"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = CurveError::InvalidResolution(0);
        let _: &dyn std::error::Error = &err;
    }
}
