//! Auto-Tangent Curves for CC Rider
//!
//! This crate turns a short list of evenly spaced control values into a
//! smooth piecewise cubic Bezier curve and evaluates it quickly.
//!
//! # Overview
//!
//! - **Builder**: derives tangent handles from neighbouring slopes, flattening
//!   them at peaks and valleys so the curve never overshoots there
//! - **Curve**: exact evaluation with verbatim endpoints
//! - **Evaluator**: lazily filled lookup table with linear interpolation
//!   between bracketing entries
//! - **Interpolation**: De Casteljau and the closed-form cubic it specializes
//!
//! # Evaluation paths
//!
//! ## Exact: `Curve::at()`
//! Selects the segment containing `t` and evaluates its cubic. Used to fill
//! the table and whenever an exact value is needed.
//!
//! ## Memoized: `CurveEvaluator::memoized_at()`
//! O(1) after the two bracketing entries have been computed once. This is
//! the path used for every incoming controller value.
//!
//! # Example
//!
//! ```
//! use ccrider_curves::{Curve, CurveEvaluator};
//!
//! // Build the curve when the points change
//! let curve = Curve::new(&[0.0, 0.8, 1.0])?;
//!
//! // Evaluate through the table for every input value
//! let mut evaluator = CurveEvaluator::new(curve);
//! let output = evaluator.memoized_at(64.0 / 127.0);
//! assert!(output > 0.5 && output <= 1.0);
//! # Ok::<(), ccrider_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod builder;
pub mod curve;
pub mod error;
pub mod evaluator;
pub mod interpolate;
pub mod lut;
pub mod prelude;
pub mod segment;

pub use builder::build_segments;
pub use curve::Curve;
pub use error::CurveError;
pub use evaluator::CurveEvaluator;
pub use lut::LookupTable;
pub use segment::Segment;
