//! One cubic Bezier piece of a piecewise curve.

use serde::{Deserialize, Serialize};

use crate::interpolate::interpolate;

/// Cubic Bezier segment spanning two consecutive control points.
///
/// `start` and `end` are the control points themselves; `start_handle` and
/// `end_handle` are the tangent handles derived by the builder.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    /// Value at the start of the segment (`p0`).
    pub start: f32,
    /// Outgoing handle of `start` (`h0`).
    pub start_handle: f32,
    /// Incoming handle of `end` (`h1`).
    pub end_handle: f32,
    /// Value at the end of the segment (`p1`).
    pub end: f32,
}

impl Segment {
    /// Create a segment from its four control values.
    pub const fn new(start: f32, start_handle: f32, end_handle: f32, end: f32) -> Self {
        Self {
            start,
            start_handle,
            end_handle,
            end,
        }
    }

    /// Control values in Bezier order `[p0, h0, h1, p1]`.
    #[inline]
    pub fn control_values(&self) -> [f32; 4] {
        [self.start, self.start_handle, self.end_handle, self.end]
    }

    /// Evaluate the segment at local parameter `t` in `[0,1]`.
    ///
    /// The result is clamped to `[0,1]`.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        interpolate(t, &self.control_values())
    }
}
