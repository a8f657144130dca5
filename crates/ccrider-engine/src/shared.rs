//! Thread-safe handle for hosts that call a rider from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::RiderConfig;
use crate::error::EngineError;
use crate::rider::{Rider, RiderState};
use crate::sink::OutputSink;

/// Cloneable handle to a rider behind a mutex.
///
/// Hosts often deliver controller input on one thread and UI edits on
/// another. Each call locks the rider for its whole duration, so the three
/// entry points are serialized and a sink never sees interleaved emits.
///
/// # Examples
///
/// ```
/// use ccrider_engine::{RecordingSink, RiderConfig, SharedRider};
///
/// let rider = SharedRider::new(&RiderConfig::new("expression"), RecordingSink::new())?;
/// let handle = rider.clone();
/// std::thread::spawn(move || {
///     handle.set_input(0.5);
/// })
/// .join()
/// .ok();
/// assert_eq!(rider.with(|r| r.sink().emit_count()), 1);
/// # Ok::<(), ccrider_engine::EngineError>(())
/// ```
#[derive(Debug)]
pub struct SharedRider<S: OutputSink> {
    inner: Arc<Mutex<Rider<S>>>,
}

impl<S: OutputSink> Clone for SharedRider<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: OutputSink> SharedRider<S> {
    /// Build a rider and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the validation failure of `config`.
    pub fn new(config: &RiderConfig, sink: S) -> Result<Self, EngineError> {
        Ok(Self::from_rider(Rider::new(config, sink)?))
    }

    /// Wrap an existing rider.
    pub fn from_rider(rider: Rider<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rider)),
        }
    }

    /// See [`Rider::on_point_changed`].
    pub fn on_point_changed(&self, index: usize, display_value: f32) -> Option<f32> {
        self.inner.lock().on_point_changed(index, display_value)
    }

    /// See [`Rider::on_active_count_changed`].
    pub fn on_active_count_changed(&self, count: usize) -> Option<f32> {
        self.inner.lock().on_active_count_changed(count)
    }

    /// See [`Rider::set_input`].
    pub fn set_input(&self, value: f32) -> Option<f32> {
        self.inner.lock().set_input(value)
    }

    /// Current state.
    pub fn state(&self) -> RiderState {
        self.inner.lock().state()
    }

    /// Run `f` with the rider locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut Rider<S>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
