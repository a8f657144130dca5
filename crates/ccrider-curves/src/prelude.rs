//! Prelude for the curves crate.
//!
//! ```
//! use ccrider_curves::prelude::*;
//!
//! let mut evaluator = CurveEvaluator::from_points(&[0.0, 0.5, 1.0], 128)?;
//! assert!((evaluator.memoized_at(0.5) - 0.5).abs() < 0.01);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::builder::build_segments;
pub use crate::curve::Curve;
pub use crate::error::CurveError;
pub use crate::evaluator::CurveEvaluator;
pub use crate::interpolate::{cubic_bernstein, de_casteljau, interpolate, lerp, sliced};
pub use crate::lut::LookupTable;
pub use crate::segment::Segment;
