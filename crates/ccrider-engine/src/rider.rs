//! Stateful mapping from one input value to one curve-shaped output.

use ccrider_curves::CurveEvaluator;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::RiderConfig;
use crate::display::DisplayRange;
use crate::error::EngineError;
use crate::points::ControlPointSet;
use crate::sink::OutputSink;

/// Whether a rider can currently produce output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiderState {
    /// Fewer than two active points, or an active point is undefined.
    NoCurve,
    /// The active points define a curve.
    HasCurve,
}

/// One output shaped by a curve through its control points.
///
/// The host drives a rider through three calls:
///
/// - [`on_point_changed`](Self::on_point_changed) when a point slider moves
/// - [`on_active_count_changed`](Self::on_active_count_changed) when the
///   number of points changes
/// - [`set_input`](Self::set_input) for every incoming controller value
///
/// Each call either does nothing (the value did not really change, or the
/// rider is not ready) or re-evaluates the curve at the current input and
/// emits the result to the rider's [`OutputSink`]. The emitted value is also
/// returned.
///
/// The built curve is cached as an owned evaluator and replaced wholesale
/// whenever the points change. When the point count changes, the previous
/// curve is kept as a backup and the new points are sampled from it, so the
/// shape survives the change.
///
/// # Examples
///
/// ```
/// use ccrider_engine::{RecordingSink, Rider, RiderConfig};
///
/// let mut rider = Rider::new(&RiderConfig::new("expression"), RecordingSink::new())?;
///
/// // Default layout is a straight ramp through 3 points.
/// let output = rider.set_input(0.5);
/// assert!(output.is_some_and(|v| (v - 0.5).abs() < 0.01));
///
/// // Raise the middle point to 80 %.
/// rider.on_point_changed(1, 80.0);
/// assert!(rider.sink().last().is_some_and(|v| (v - 0.8).abs() < 0.01));
/// # Ok::<(), ccrider_engine::EngineError>(())
/// ```
#[derive(Debug)]
pub struct Rider<S: OutputSink> {
    key: String,
    points: ControlPointSet,
    display: DisplayRange,
    epsilon: f32,
    table_resolution: usize,
    input: Option<f32>,
    curve: Option<CurveEvaluator>,
    backup: Option<CurveEvaluator>,
    generation: u64,
    sink: S,
}

impl<S: OutputSink> Rider<S> {
    /// Create a rider from validated settings.
    ///
    /// Points start as a ramp over the configured active count; any
    /// `config.points` (display units) overwrite the leading slots.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `config` fails
    /// [`RiderConfig::validate`].
    pub fn new(config: &RiderConfig, sink: S) -> Result<Self, EngineError> {
        config.validate()?;

        let display = config.display_range();
        let mut points = ControlPointSet::ramp(config.max_points, config.default_active_count);
        for (index, value) in config.points.iter().enumerate() {
            points.set(index, display.to_normalized(*value));
        }

        Ok(Self {
            key: config.key.clone(),
            points,
            display,
            epsilon: config.epsilon,
            table_resolution: config.table_resolution,
            input: None,
            curve: None,
            backup: None,
            generation: 0,
            sink,
        })
    }

    /// Sets the active count at start-up without resampling the points or
    /// refreshing the display. Slots past the ramp keep their full value.
    pub(crate) fn start_with_active_count(&mut self, count: usize) {
        self.points.set_active_count(count);
        self.curve = None;
    }

    /// Name of this rider's output.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current state.
    pub fn state(&self) -> RiderState {
        if self.points.is_complete() {
            RiderState::HasCurve
        } else {
            RiderState::NoCurve
        }
    }

    /// The control points.
    pub fn points(&self) -> &ControlPointSet {
        &self.points
    }

    /// Normalized point value at `index`.
    pub fn point(&self, index: usize) -> Option<f32> {
        self.points.get(index)
    }

    /// Point value at `index` as the slider shows it.
    pub fn display_value(&self, index: usize) -> Option<f32> {
        self.points
            .get(index)
            .map(|value| self.display.quantize(self.display.to_display(value)))
    }

    /// True if the slider for `index` should be shown.
    pub fn is_point_visible(&self, index: usize) -> bool {
        self.points.is_active(index)
    }

    /// Number of points shaping the curve.
    pub fn active_count(&self) -> usize {
        self.points.active_count()
    }

    /// Most recent input, if any has arrived.
    pub fn input(&self) -> Option<f32> {
        self.input
    }

    /// Display range of the point sliders.
    pub fn display(&self) -> DisplayRange {
        self.display
    }

    /// No-op tolerance.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Number of curves built so far. Changes every time the cache is rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a backup curve from an earlier point count is held.
    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    /// The output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Evaluate the current curve at `t` without emitting.
    ///
    /// Returns `None` in [`RiderState::NoCurve`].
    pub fn evaluate(&mut self, t: f32) -> Option<f32> {
        self.ensure_curve().map(|curve| curve.memoized_at(t))
    }

    /// The host reports a point slider value in display units.
    ///
    /// The incoming value is compared unquantized against the stored point,
    /// both as stored and as the slider shows it. A match within `epsilon`
    /// is ignored, which absorbs the host echoing back values the rider
    /// wrote while still accepting edits finer than one slider notch.
    /// Changing an active point drops the cached and backup curves and
    /// flushes. Non-finite values and indices past the capacity are ignored.
    pub fn on_point_changed(&mut self, index: usize, display_value: f32) -> Option<f32> {
        if !display_value.is_finite() {
            warn!(key = %self.key, index, "ignoring non-finite point value");
            return None;
        }
        if index >= self.points.capacity() {
            warn!(
                key = %self.key,
                index,
                capacity = self.points.capacity(),
                "ignoring point past capacity"
            );
            return None;
        }

        let requested = self.display.clamp(display_value);
        if let Some(stored) = self.points.get(index) {
            let exact = self.display.to_display(stored);
            let shown = self.display.quantize(exact);
            if (requested - shown).abs() < self.epsilon || (requested - exact).abs() < self.epsilon {
                return None;
            }
        }

        self.points.set(index, self.display.to_normalized(display_value));

        if !self.points.is_active(index) {
            return None;
        }

        self.curve = None;
        self.backup = None;
        self.flush()
    }

    /// The host changes the number of active points.
    ///
    /// The count is clamped to the capacity. The curve in effect before the
    /// first of a series of count changes is kept as a backup, and the new
    /// points are sampled evenly from it, so shrinking and growing again
    /// returns close to the original shape. Counts below two leave the rider
    /// in [`RiderState::NoCurve`].
    pub fn on_active_count_changed(&mut self, count: usize) -> Option<f32> {
        let count = count.min(self.points.capacity());
        if count == self.points.active_count() {
            return None;
        }

        if self.backup.is_none() {
            self.ensure_curve();
            self.backup = self.curve.take();
        }

        self.points.set_active_count(count);

        if count >= 2 && self.points.defined_count() >= 2 {
            if let Some(backup) = self.backup.as_mut() {
                let last = (count - 1) as f32;
                for index in 0..count {
                    let value = backup.memoized_at(index as f32 / last);
                    self.points.set(index, value);
                }
                debug!(key = %self.key, count, "resampled control points from backup curve");
            }
        }

        self.curve = None;
        self.sink.refresh_display();
        self.flush()
    }

    /// A new input value in `[0,1]` arrives.
    ///
    /// The value is clamped. Non-finite values, and values within `epsilon`
    /// of the current input, are ignored.
    pub fn set_input(&mut self, value: f32) -> Option<f32> {
        if !value.is_finite() {
            warn!(key = %self.key, "ignoring non-finite input");
            return None;
        }

        let value = value.clamp(0.0, 1.0);
        if let Some(current) = self.input
            && (current - value).abs() < self.epsilon
        {
            return None;
        }

        self.input = Some(value);
        self.flush()
    }

    fn ensure_curve(&mut self) -> Option<&mut CurveEvaluator> {
        if self.curve.is_none() {
            let values = self.points.active_values()?;
            match CurveEvaluator::from_points(&values, self.table_resolution) {
                Ok(evaluator) => {
                    self.generation += 1;
                    debug!(
                        key = %self.key,
                        points = values.len(),
                        generation = self.generation,
                        "built curve"
                    );
                    self.curve = Some(evaluator);
                }
                Err(e) => {
                    debug!(key = %self.key, error = %e, "curve unavailable");
                    return None;
                }
            }
        }
        self.curve.as_mut()
    }

    fn flush(&mut self) -> Option<f32> {
        let input = self.input?;
        let value = self.ensure_curve()?.memoized_at(input);
        trace!(key = %self.key, input, value, "emit");
        self.sink.emit(value);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    fn rider(config: RiderConfig) -> Rider<RecordingSink> {
        match Rider::new(&config, RecordingSink::new()) {
            Ok(rider) => rider,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Rider::new(&RiderConfig::new("e").with_active_count(0), RecordingSink::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_no_output_before_input() {
        let mut rider = rider(RiderConfig::new("e"));
        assert_eq!(rider.state(), RiderState::HasCurve);
        assert!(rider.on_point_changed(1, 70.0).is_none());
        assert_eq!(rider.sink().emit_count(), 0);
    }

    #[test]
    fn test_input_within_configured_epsilon_is_ignored() {
        let mut rider = rider(RiderConfig::new("e").with_epsilon(0.1));
        assert_eq!(rider.epsilon().to_bits(), 0.1f32.to_bits());

        assert!(rider.set_input(0.2).is_some());
        assert!(rider.set_input(0.25).is_none());
        assert!(rider.set_input(0.31).is_some());
        assert_eq!(rider.sink().emit_count(), 2);
    }

    #[test]
    fn test_input_emits_and_dedupes() {
        let mut rider = rider(RiderConfig::new("e"));
        assert!(rider.set_input(0.25).is_some());
        assert!(rider.set_input(0.2505).is_none());
        assert!(rider.set_input(0.3).is_some());
        assert_eq!(rider.sink().emit_count(), 2);
    }

    #[test]
    fn test_input_is_clamped_and_non_finite_ignored() {
        let mut rider = rider(RiderConfig::new("e"));
        let high = rider.set_input(4.0);
        assert_eq!(rider.input().map(f32::to_bits), Some(1.0f32.to_bits()));
        assert_eq!(high.map(f32::to_bits), Some(1.0f32.to_bits()));

        assert!(rider.set_input(f32::NAN).is_none());
        assert_eq!(rider.input().map(f32::to_bits), Some(1.0f32.to_bits()));
    }

    #[test]
    fn test_config_points_override_ramp() {
        let rider = rider(RiderConfig::new("e").with_points(vec![100.0, 0.0]));
        assert_eq!(rider.point(0).map(f32::to_bits), Some(1.0f32.to_bits()));
        assert_eq!(rider.point(1).map(f32::to_bits), Some(0.0f32.to_bits()));
        assert_eq!(rider.point(2).map(f32::to_bits), Some(1.0f32.to_bits()));
    }

    #[test]
    fn test_inactive_point_change_is_silent() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.set_input(0.5);
        let generation = rider.generation();

        assert!(rider.on_point_changed(5, 10.0).is_none());
        assert_eq!(rider.generation(), generation);
        assert!(!rider.is_point_visible(5));
        assert!(rider.point(5).is_some_and(|v| (v - 0.1).abs() < 1e-6));
    }

    #[test]
    fn test_point_past_capacity_is_ignored() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.set_input(0.5);
        assert!(rider.on_point_changed(42, 50.0).is_none());
        assert!(rider.on_point_changed(1, f32::INFINITY).is_none());
        assert_eq!(rider.sink().emit_count(), 1);
    }

    #[test]
    fn test_point_change_rebuilds_curve() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.set_input(0.5);
        assert_eq!(rider.generation(), 1);

        let value = rider.on_point_changed(1, 25.0);
        assert_eq!(rider.generation(), 2);
        assert!(value.is_some_and(|v| (v - 0.25).abs() < 0.01));
    }

    #[test]
    fn test_display_value_is_quantized() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.on_point_changed(1, 33.0);
        assert!(rider.display_value(1).is_some_and(|v| (v - 32.8125).abs() < 1e-3));
        assert!(rider.point(1).is_some_and(|v| (v - 0.33).abs() < 1e-6));
    }

    #[test]
    fn test_count_change_refreshes_display_and_keeps_backup() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.set_input(0.5);

        rider.on_active_count_changed(5);
        assert_eq!(rider.active_count(), 5);
        assert!(rider.has_backup());
        assert_eq!(rider.sink().refresh_count(), 1);
        assert!(rider.is_point_visible(4));

        // a point edit ends the resampling series
        rider.on_point_changed(0, 10.0);
        assert!(!rider.has_backup());
    }

    #[test]
    fn test_unchanged_count_is_noop() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.set_input(0.5);
        assert!(rider.on_active_count_changed(3).is_none());
        assert_eq!(rider.sink().refresh_count(), 0);
        assert!(!rider.has_backup());
    }

    #[test]
    fn test_count_is_clamped_to_capacity() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.on_active_count_changed(50);
        assert_eq!(rider.active_count(), 9);
    }

    #[test]
    fn test_ramp_resamples_to_ramp() {
        let mut rider = rider(RiderConfig::new("e"));
        rider.on_active_count_changed(5);
        for index in 0..5 {
            let expected = index as f32 / 4.0;
            assert!(
                rider.point(index).is_some_and(|v| (v - expected).abs() < 0.01),
                "point {index}: {:?}",
                rider.point(index)
            );
        }
    }

    #[test]
    fn test_evaluate_does_not_emit() {
        let mut rider = rider(RiderConfig::new("e"));
        assert!(rider.evaluate(0.5).is_some());
        assert_eq!(rider.sink().emit_count(), 0);

        rider.on_active_count_changed(1);
        assert!(rider.evaluate(0.5).is_none());
    }
}
