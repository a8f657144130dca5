//! Ordered control points with an active prefix.

use serde::Serialize;

/// Fixed-capacity list of optional control points.
///
/// Only the first `active_count` points shape the curve. Points past that
/// keep their values so that raising the count again brings them back.
/// `None` marks a point the host has not reported yet.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ControlPointSet {
    values: Vec<Option<f32>>,
    active_count: usize,
}

impl ControlPointSet {
    /// Creates a set of `capacity` undefined points.
    pub fn new(capacity: usize, active_count: usize) -> Self {
        Self {
            values: vec![None; capacity],
            active_count: active_count.min(capacity),
        }
    }

    /// Creates the default layout: a rising ramp across the first
    /// `active_count` points, with every later point at 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccrider_engine::ControlPointSet;
    ///
    /// let points = ControlPointSet::ramp(9, 3);
    /// assert_eq!(points.active_values(), Some(vec![0.0, 0.5, 1.0]));
    /// assert_eq!(points.get(8), Some(1.0));
    /// ```
    pub fn ramp(capacity: usize, active_count: usize) -> Self {
        let last = active_count.max(2) - 1;
        let values = (0..capacity)
            .map(|index| Some((index as f32 / last as f32).min(1.0)))
            .collect();

        Self {
            values,
            active_count: active_count.min(capacity),
        }
    }

    /// Maximum number of points.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Number of leading points that shape the curve.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Sets the active count, clamped to the capacity. Returns the stored count.
    pub fn set_active_count(&mut self, count: usize) -> usize {
        self.active_count = count.min(self.capacity());
        self.active_count
    }

    /// Point at `index`, if defined.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied().flatten()
    }

    /// Stores a point. Returns `false` if `index` is past the capacity.
    pub fn set(&mut self, index: usize, value: f32) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                true
            }
            None => false,
        }
    }

    /// True if `index` is inside the active prefix.
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        index < self.active_count
    }

    /// Number of defined points, active or not.
    pub fn defined_count(&self) -> usize {
        self.values.iter().flatten().count()
    }

    /// True when a curve can be built: at least two active points, all defined.
    pub fn is_complete(&self) -> bool {
        self.active_count >= 2
            && self
                .values
                .iter()
                .take(self.active_count)
                .all(Option::is_some)
    }

    /// Values of the active points, or `None` if no curve can be built.
    pub fn active_values(&self) -> Option<Vec<f32>> {
        if self.active_count < 2 {
            return None;
        }

        self.values.iter().take(self.active_count).copied().collect()
    }

    /// All points in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<f32>> + '_ {
        self.values.iter().copied()
    }
}
