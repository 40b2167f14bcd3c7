//! Output sink abstraction.
//!
//! A sink is anything that consumes the timer's boolean output: a GPIO pin
//! driver, a console renderer, a test probe. The timer is generic over the
//! sink, so calls are statically dispatched.

/// Consumer of the timer's on/off output.
///
/// `set` is called once per `update` and once per `reset`, even when the
/// level has not changed, so implementations must tolerate repeated
/// identical writes.
pub trait OutputSink {
    /// Drive the output to `state` (`true` = on).
    fn set(&mut self, state: bool);
}

/// Borrowed sinks let the caller keep ownership of the device.
impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn set(&mut self, state: bool) {
        (**self).set(state);
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn set(&mut self, state: bool) {
        (**self).set(state);
    }
}

/// Sink wrapping a closure.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FnSink<F>(F);

/// Build a sink from a `FnMut(bool)` closure.
///
/// ```
/// use blink_core::output::{from_fn, OutputSink};
///
/// let mut writes = Vec::new();
/// let mut sink = from_fn(|state| writes.push(state));
/// sink.set(true);
/// drop(sink);
/// assert_eq!(writes, [true]);
/// ```
pub fn from_fn<F: FnMut(bool)>(f: F) -> FnSink<F> {
    FnSink(f)
}

impl<F: FnMut(bool)> OutputSink for FnSink<F> {
    fn set(&mut self, state: bool) {
        (self.0)(state);
    }
}

/// Sink that remembers every write.
///
/// Stands in for a pin in tests and simulations.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    state: bool,
    history: Vec<bool>,
}

impl RecordingSink {
    /// Create an empty recorder (state off, no writes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written state, `false` before the first write.
    #[must_use]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Number of `set` calls seen.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.history.len()
    }

    /// Every written state, oldest first.
    #[must_use]
    pub fn history(&self) -> &[bool] {
        &self.history
    }

    /// Forget all writes.
    pub fn clear(&mut self) {
        self.state = false;
        self.history.clear();
    }
}

impl OutputSink for RecordingSink {
    fn set(&mut self, state: bool) {
        self.state = state;
        self.history.push(state);
    }
}
