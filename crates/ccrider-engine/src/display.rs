//! Conversion between the collaborator's display units and normalized values.

use serde::{Deserialize, Serialize};

/// Display range of a point slider.
///
/// Sliders show values in `[0, max]` (a percentage by default) and snap to
/// `steps` evenly spaced notches. Rider points are stored normalized to
/// `[0,1]`; this type converts between the two and reproduces the slider's
/// snapping so that a value echoed back by the host compares equal.
///
/// # Examples
///
/// ```
/// use ccrider_engine::DisplayRange;
///
/// let range = DisplayRange::PERCENT;
/// assert!((range.to_normalized(25.0) - 0.25).abs() < 1e-6);
/// assert!((range.quantize(33.0) - 32.8125).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DisplayRange {
    /// Largest display value.
    pub max: f32,
    /// Number of slider notches across the range.
    pub steps: u32,
}

impl DisplayRange {
    /// 0-100 % with 128 notches.
    pub const PERCENT: Self = Self {
        max: 100.0,
        steps: 128,
    };

    /// Creates a display range.
    pub fn new(max: f32, steps: u32) -> Self {
        Self { max, steps }
    }

    /// Clamp a display value into `[0, max]`.
    #[inline]
    pub fn clamp(&self, display: f32) -> f32 {
        display.clamp(0.0, self.max)
    }

    /// Display units to `[0,1]`.
    #[inline]
    pub fn to_normalized(&self, display: f32) -> f32 {
        self.clamp(display) / self.max
    }

    /// `[0,1]` to display units.
    #[inline]
    pub fn to_display(&self, normalized: f32) -> f32 {
        normalized * self.max
    }

    /// Snap a display value to the nearest slider notch.
    ///
    /// With zero steps the value is only clamped.
    pub fn quantize(&self, display: f32) -> f32 {
        let display = self.clamp(display);
        if self.steps == 0 {
            return display;
        }

        let steps = self.steps as f32;
        let normalized = display / self.max;
        (normalized * steps).round() / steps * self.max
    }
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self::PERCENT
    }
}
