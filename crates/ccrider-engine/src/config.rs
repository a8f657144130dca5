//! Rider and bank configuration.
//!
//! Configuration is plain serde data with defaults for every field, so a file
//! only needs to name what it changes. Call [`EngineConfig::validate`] (the
//! loaders do) before building riders from it.

use std::collections::HashSet;
use std::path::Path;

use ccrider_curves::LookupTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::DisplayRange;
use crate::error::EngineError;

/// Most points a default rider can show.
pub const MAX_CONTROL_POINTS: usize = 9;

/// Active points of a freshly created rider.
pub const DEFAULT_ACTIVE_COUNT: usize = 3;

/// Tolerance for treating two values as the same.
pub const DEFAULT_EPSILON: f32 = 0.001;

/// Upper bound on configurable point capacity.
pub const POINT_CAPACITY_LIMIT: usize = 64;

/// Settings for one rider.
///
/// # Examples
///
/// ```
/// use ccrider_engine::RiderConfig;
///
/// let config = RiderConfig::new("expression");
/// assert_eq!(config.max_points, 9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiderConfig {
    /// Unique name of the rider's output.
    pub key: String,
    /// Number of active points at creation.
    pub default_active_count: usize,
    /// Point capacity.
    pub max_points: usize,
    /// Largest display value of a point slider.
    pub display_max: f32,
    /// Notches on a point slider.
    pub display_steps: u32,
    /// Tolerance for no-op point and input writes.
    pub epsilon: f32,
    /// Lookup table entries per curve.
    pub table_resolution: usize,
    /// Initial point values in display units; the ramp fills the rest.
    pub points: Vec<f32>,
}

impl Default for RiderConfig {
    fn default() -> Self {
        Self {
            key: "output".to_string(),
            default_active_count: DEFAULT_ACTIVE_COUNT,
            max_points: MAX_CONTROL_POINTS,
            display_max: DisplayRange::PERCENT.max,
            display_steps: DisplayRange::PERCENT.steps,
            epsilon: DEFAULT_EPSILON,
            table_resolution: LookupTable::DEFAULT_RESOLUTION,
            points: Vec::new(),
        }
    }
}

impl RiderConfig {
    /// Default settings under the given key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Sets the initial point values in display units.
    pub fn with_points(mut self, points: impl Into<Vec<f32>>) -> Self {
        self.points = points.into();
        self
    }

    /// Sets the number of active points at creation.
    pub fn with_active_count(mut self, count: usize) -> Self {
        self.default_active_count = count;
        self
    }

    /// Sets the no-op tolerance.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Display range derived from `display_max` and `display_steps`.
    pub fn display_range(&self) -> DisplayRange {
        DisplayRange::new(self.display_max, self.display_steps)
    }

    /// Check every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.key.trim().is_empty() {
            return Err(EngineError::config("rider key must not be empty"));
        }
        if !(2..=POINT_CAPACITY_LIMIT).contains(&self.max_points) {
            return Err(EngineError::config(format!(
                "{}: max_points must be in 2..={POINT_CAPACITY_LIMIT}, got {}",
                self.key, self.max_points
            )));
        }
        if !(2..=self.max_points).contains(&self.default_active_count) {
            return Err(EngineError::config(format!(
                "{}: default_active_count must be in 2..={}, got {}",
                self.key, self.max_points, self.default_active_count
            )));
        }
        if !(self.display_max.is_finite() && self.display_max > 0.0) {
            return Err(EngineError::config(format!(
                "{}: display_max must be positive, got {}",
                self.key, self.display_max
            )));
        }
        if self.display_steps == 0 {
            return Err(EngineError::config(format!(
                "{}: display_steps must be at least 1",
                self.key
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(EngineError::config(format!(
                "{}: epsilon must be positive, got {}",
                self.key, self.epsilon
            )));
        }
        if self.table_resolution < LookupTable::MIN_RESOLUTION {
            return Err(EngineError::config(format!(
                "{}: table_resolution must be at least {}, got {}",
                self.key,
                LookupTable::MIN_RESOLUTION,
                self.table_resolution
            )));
        }
        if self.points.len() > self.max_points {
            return Err(EngineError::config(format!(
                "{}: {} points given but max_points is {}",
                self.key,
                self.points.len(),
                self.max_points
            )));
        }
        if let Some((index, value)) = self
            .points
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(EngineError::config(format!(
                "{}: point {index} is not finite: {value}",
                self.key
            )));
        }
        Ok(())
    }
}

/// Settings for a bank of riders driven by one input.
///
/// # Examples
///
/// ```
/// use ccrider_engine::EngineConfig;
///
/// let config = EngineConfig::from_yaml_str("curve_resolution: 4\nriders:\n  - key: e\n")?;
/// assert_eq!(config.curve_resolution, 4);
/// assert_eq!(config.riders[0].key, "e");
/// # Ok::<(), ccrider_engine::EngineError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Active point count shared by every rider.
    pub curve_resolution: usize,
    /// One entry per output.
    pub riders: Vec<RiderConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            curve_resolution: DEFAULT_ACTIVE_COUNT,
            riders: vec![RiderConfig::new("expression"), RiderConfig::new("dynamics")],
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first validation failure.
    pub fn from_json_str(text: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML configuration.
    ///
    /// # Errors
    ///
    /// Returns a parse error or the first validation failure.
    pub fn from_yaml_str(text: &str) -> Result<Self, EngineError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, picking the parser from its extension
    /// (`.json`, `.yaml` or `.yml`).
    ///
    /// # Errors
    ///
    /// Returns an I/O, format, parse or validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        debug!("Loading engine configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;

        match extension.as_str() {
            "json" => Self::from_json_str(&text),
            "yaml" | "yml" => Self::from_yaml_str(&text),
            other => Err(EngineError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Check the shared resolution and every rider.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field or a duplicated rider key.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.riders.is_empty() {
            return Err(EngineError::config("at least one rider is required"));
        }

        let mut keys = HashSet::new();
        for rider in &self.riders {
            rider.validate()?;
            if !keys.insert(rider.key.as_str()) {
                return Err(EngineError::DuplicateKey(rider.key.clone()));
            }
            if !(2..=rider.max_points).contains(&self.curve_resolution) {
                return Err(EngineError::config(format!(
                    "curve_resolution must be in 2..={} for rider {}, got {}",
                    rider.max_points, rider.key, self.curve_resolution
                )));
            }
        }
        Ok(())
    }
}
