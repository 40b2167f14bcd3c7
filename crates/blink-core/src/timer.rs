//! Blink timer: toggles an output between an on and an off duration.
//!
//! The timer is a two-state machine driven by an external millisecond
//! counter. Each [`BlinkTimer::update`] measures the time since the last
//! toggle and flips the output once the duration of the current state has
//! elapsed. The counter is 32-bit and may wrap; elapsed time is measured on
//! the circular timeline, so a wrap between two calls is transparent.
//!
//! ```text
//!            off_duration   on_duration   off_duration
//!           |<---------->|<----------->|<---------->|
//!                        +-------------+            +----
//! OUTPUT                 |             |            |
//!        ----------------+             +------------+
//!           ^            ^             ^            ^
//!        t = 0        toggle        toggle       toggle
//! ```

use blink_common::{Millis, OutputLevel};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::output::OutputSink;

/// Time elapsed from `since` to `now` on the wrapping 32-bit timeline.
///
/// When `now < since` the counter is assumed to have wrapped exactly once,
/// giving `(u32::MAX - since) + now + 1`, which is what `wrapping_sub`
/// computes.
#[must_use]
#[inline]
pub fn elapsed_since(since: Millis, now: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Snapshot of a [`BlinkTimer`]'s state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// How long the output stays on, in milliseconds.
    pub on_duration: Millis,
    /// How long the output stays off, in milliseconds.
    pub off_duration: Millis,
    /// Timestamp of the most recent toggle.
    pub last_toggle_time: Millis,
    /// Current output state.
    pub is_on: bool,
}

impl TimerState {
    /// Current output as an [`OutputLevel`].
    #[must_use]
    pub fn level(&self) -> OutputLevel {
        OutputLevel::from(self.is_on)
    }
}

/// Blink timer driving an [`OutputSink`].
///
/// Starts OFF with the last toggle at time zero. Pass `&mut sink` to keep
/// ownership of the sink outside the timer.
///
/// # Example
///
/// ```
/// use blink_core::output::RecordingSink;
/// use blink_core::timer::BlinkTimer;
///
/// let mut pin = RecordingSink::new();
/// let mut timer = BlinkTimer::new(&mut pin, 1000, 500);
///
/// timer.update(0);
/// assert!(!timer.is_on());
///
/// timer.update(500); // off_duration elapsed
/// assert!(timer.is_on());
///
/// timer.update(1500); // on_duration elapsed
/// assert!(!timer.is_on());
///
/// assert_eq!(pin.write_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BlinkTimer<S> {
    output: S,
    on_duration: Millis,
    off_duration: Millis,
    last_toggle_time: Millis,
    is_on: bool,
}

impl<S: OutputSink> BlinkTimer<S> {
    /// Create a timer in the OFF state.
    ///
    /// Durations are in milliseconds and may be zero, in which case every
    /// `update` toggles. The sink is not written until the first
    /// `update` or `reset`.
    pub fn new(output: S, on_duration: Millis, off_duration: Millis) -> Self {
        Self {
            output,
            on_duration,
            off_duration,
            last_toggle_time: 0,
            is_on: false,
        }
    }

    /// Advance the state machine to `current_time` and write the output.
    ///
    /// Toggles when the time since the last toggle reaches the duration of
    /// the current state. The sink is written on every call, toggled or not.
    pub fn update(&mut self, current_time: Millis) {
        let elapsed = elapsed_since(self.last_toggle_time, current_time);
        let target = if self.is_on {
            self.on_duration
        } else {
            self.off_duration
        };

        if elapsed >= target {
            self.is_on = !self.is_on;
            self.last_toggle_time = current_time;
            trace!(
                state = %self.level(),
                at_ms = current_time,
                elapsed_ms = elapsed,
                "output toggled"
            );
        }

        self.output.set(self.is_on);
    }

    /// Return to the initial state and drive the output off.
    ///
    /// Durations are kept.
    pub fn reset(&mut self) {
        self.last_toggle_time = 0;
        self.is_on = false;
        self.output.set(false);
        debug!("blink timer reset");
    }
}

impl<S> BlinkTimer<S> {
    /// Configured on duration in milliseconds.
    #[must_use]
    pub fn on_duration(&self) -> Millis {
        self.on_duration
    }

    /// Configured off duration in milliseconds.
    #[must_use]
    pub fn off_duration(&self) -> Millis {
        self.off_duration
    }

    /// Current output state.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Current output as an [`OutputLevel`].
    #[must_use]
    pub fn level(&self) -> OutputLevel {
        OutputLevel::from(self.is_on)
    }

    /// Timestamp of the most recent toggle.
    #[must_use]
    pub fn last_toggle_time(&self) -> Millis {
        self.last_toggle_time
    }

    /// Snapshot of the timer state.
    #[must_use]
    pub fn state(&self) -> TimerState {
        TimerState {
            on_duration: self.on_duration,
            off_duration: self.off_duration,
            last_toggle_time: self.last_toggle_time,
            is_on: self.is_on,
        }
    }

    /// Borrow the sink.
    #[must_use]
    pub fn output(&self) -> &S {
        &self.output
    }

    /// Mutably borrow the sink.
    pub fn output_mut(&mut self) -> &mut S {
        &mut self.output
    }

    /// Consume the timer, returning the sink.
    pub fn into_output(self) -> S {
        self.output
    }
}
