//! Several riders driven by one input.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::rider::Rider;
use crate::sink::OutputSink;

/// A bank of riders sharing one input and one active point count.
///
/// Every rider keeps its own points, curve and sink. Input values and point
/// count changes fan out to all of them; point edits address one rider by
/// key.
///
/// # Examples
///
/// ```
/// use ccrider_engine::{EngineConfig, RecordingSink, RiderBank};
///
/// let mut bank = RiderBank::new(&EngineConfig::default(), |_| RecordingSink::new())?;
/// let outputs = bank.set_input(0.5);
/// assert_eq!(outputs.len(), 2);
/// # Ok::<(), ccrider_engine::EngineError>(())
/// ```
#[derive(Debug)]
pub struct RiderBank<S: OutputSink> {
    riders: Vec<Rider<S>>,
    curve_resolution: usize,
}

impl<S: OutputSink> RiderBank<S> {
    /// Build one rider per configured entry, asking `make_sink` for each
    /// rider's sink by key.
    ///
    /// Each rider lays its ramp out over its own `default_active_count` and
    /// then starts with `curve_resolution` active points, without
    /// resampling. With a resolution of 5 and the default of 3 the points
    /// start at `[0, 0.5, 1, 1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of `config`.
    pub fn new<F>(config: &EngineConfig, mut make_sink: F) -> Result<Self, EngineError>
    where
        F: FnMut(&str) -> S,
    {
        config.validate()?;

        let mut riders = Vec::with_capacity(config.riders.len());
        for rider_config in &config.riders {
            let mut rider = Rider::new(rider_config, make_sink(&rider_config.key))?;
            rider.start_with_active_count(config.curve_resolution);
            riders.push(rider);
        }

        info!(
            riders = riders.len(),
            curve_resolution = config.curve_resolution,
            "rider bank ready"
        );

        Ok(Self {
            riders,
            curve_resolution: config.curve_resolution,
        })
    }

    /// Number of riders.
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    /// True if the bank holds no riders.
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    /// Active point count shared by every rider.
    pub fn curve_resolution(&self) -> usize {
        self.curve_resolution
    }

    /// All riders in configuration order.
    pub fn riders(&self) -> &[Rider<S>] {
        &self.riders
    }

    /// Rider by key.
    pub fn rider(&self, key: &str) -> Option<&Rider<S>> {
        self.riders.iter().find(|rider| rider.key() == key)
    }

    /// Mutable rider by key.
    pub fn rider_mut(&mut self, key: &str) -> Option<&mut Rider<S>> {
        self.riders.iter_mut().find(|rider| rider.key() == key)
    }

    /// Feed an input value to every rider.
    ///
    /// Returns `(key, value)` for each rider that emitted.
    pub fn set_input(&mut self, value: f32) -> Vec<(&str, f32)> {
        self.riders
            .iter_mut()
            .filter_map(|rider| {
                let output = rider.set_input(value)?;
                let rider: &Rider<S> = rider;
                Some((rider.key(), output))
            })
            .collect()
    }

    /// Change the active point count of every rider.
    ///
    /// Returns `(key, value)` for each rider that emitted.
    pub fn set_curve_resolution(&mut self, count: usize) -> Vec<(&str, f32)> {
        debug!(count, "changing curve resolution");
        self.curve_resolution = count;
        self.riders
            .iter_mut()
            .filter_map(|rider| {
                let output = rider.on_active_count_changed(count)?;
                let rider: &Rider<S> = rider;
                Some((rider.key(), output))
            })
            .collect()
    }

    /// Forward a point edit to the rider named `key`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownRider`] if no rider has that key.
    pub fn on_point_changed(
        &mut self,
        key: &str,
        index: usize,
        display_value: f32,
    ) -> Result<Option<f32>, EngineError> {
        let rider = self
            .rider_mut(key)
            .ok_or_else(|| EngineError::UnknownRider(key.to_string()))?;
        Ok(rider.on_point_changed(index, display_value))
    }
}
