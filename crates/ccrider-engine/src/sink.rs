//! Output boundary between a rider and its host.

/// Receives what a rider produces.
///
/// The host turns emitted values into whatever its protocol needs (a
/// controller message, a plugin parameter) and decides on any further
/// rate limiting. `refresh_display` asks the host to re-read every display
/// value, which a rider requests after it rewrites its own points.
pub trait OutputSink {
    /// A new output value in `[0,1]`.
    fn emit(&mut self, value: f32);

    /// Point values or visibility changed without a host write.
    fn refresh_display(&mut self) {}
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn emit(&mut self, value: f32) {
        (**self).emit(value);
    }

    fn refresh_display(&mut self) {
        (**self).refresh_display();
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _value: f32) {}
}

/// Sink that forwards each emitted value to a closure.
///
/// ```
/// use ccrider_engine::{FnSink, OutputSink};
///
/// let mut total = 0.0f32;
/// let mut sink = FnSink(|value: f32| total += value);
/// sink.emit(0.25);
/// sink.emit(0.5);
/// drop(sink);
/// assert!((total - 0.75).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F: FnMut(f32)> OutputSink for FnSink<F> {
    fn emit(&mut self, value: f32) {
        (self.0)(value);
    }
}

/// Sink that records every call, for tests and offline tools.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    emitted: Vec<f32>,
    refreshes: usize,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every value emitted so far, oldest first.
    pub fn emitted(&self) -> &[f32] {
        &self.emitted
    }

    /// Most recent emitted value.
    pub fn last(&self) -> Option<f32> {
        self.emitted.last().copied()
    }

    /// Number of emitted values.
    pub fn emit_count(&self) -> usize {
        self.emitted.len()
    }

    /// Number of display refresh requests.
    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.emitted.clear();
        self.refreshes = 0;
    }
}

impl OutputSink for RecordingSink {
    fn emit(&mut self, value: f32) {
        self.emitted.push(value);
    }

    fn refresh_display(&mut self) {
        self.refreshes += 1;
    }
}
