//! Lazily filled lookup table of curve samples.

use serde::Serialize;

/// Memoized samples of one curve at evenly spaced inputs.
///
/// Entry `i` caches the exact curve value at `i / (resolution - 1)`. Entries
/// start empty and are filled on first use by the owning
/// [`CurveEvaluator`](crate::CurveEvaluator); a table is never shared between
/// curves and never reset, so a stale entry cannot exist.
///
/// 128 entries match the 0-127 range of a MIDI controller value.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LookupTable {
    samples: Vec<Option<f32>>,
}

impl LookupTable {
    /// Default number of entries.
    pub const DEFAULT_RESOLUTION: usize = 128;

    /// Smallest resolution that still has a pair of entries to interpolate.
    pub const MIN_RESOLUTION: usize = 2;

    pub(crate) fn new(resolution: usize) -> Self {
        Self {
            samples: vec![None; resolution],
        }
    }

    /// Number of entries.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.samples.len()
    }

    /// Input value that entry `index` samples.
    #[inline]
    pub fn input_at(&self, index: usize) -> f32 {
        let last = self.resolution().saturating_sub(1).max(1);
        index as f32 / last as f32
    }

    /// Cached sample at `index`, if it has been computed.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.samples.get(index).copied().flatten()
    }

    /// Number of entries computed so far.
    pub fn filled(&self) -> usize {
        self.samples.iter().filter(|sample| sample.is_some()).count()
    }

    /// True once every entry has been computed.
    pub fn is_warm(&self) -> bool {
        self.samples.iter().all(Option::is_some)
    }

    /// All entries in order, `None` where not yet computed.
    pub fn samples(&self) -> &[Option<f32>] {
        &self.samples
    }

    /// Check that the computed entries never decrease.
    ///
    /// Empty entries are skipped.
    pub fn is_monotonic(&self) -> bool {
        let mut previous = f32::NEG_INFINITY;
        for value in self.samples.iter().flatten() {
            if *value < previous {
                return false;
            }
            previous = *value;
        }
        true
    }

    /// Smallest computed entry.
    pub fn min_value(&self) -> Option<f32> {
        self.samples.iter().flatten().copied().reduce(f32::min)
    }

    /// Largest computed entry.
    pub fn max_value(&self) -> Option<f32> {
        self.samples.iter().flatten().copied().reduce(f32::max)
    }

    /// Return entry `index`, computing it from its input with `sample` if empty.
    pub(crate) fn get_or_insert_with<F>(&mut self, index: usize, sample: F) -> f32
    where
        F: FnOnce(f32) -> f32,
    {
        let input = self.input_at(index);
        match self.samples.get_mut(index) {
            Some(slot) => match *slot {
                Some(value) => value,
                None => *slot.insert(sample(input)),
            },
            None => sample(input),
        }
    }
}
