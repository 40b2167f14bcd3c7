//! Millisecond time sources.
//!
//! The blink timer never reads a clock itself; callers sample a
//! [`TimeSource`] and hand the reading to `update`. Readings are 32-bit and
//! wrap modulo 2^32 (roughly every 49.7 days).

use std::cell::Cell;
use std::time::Instant;

/// Millisecond timestamp on the wrapping 32-bit timeline.
pub type Millis = u32;

/// A monotonically increasing (mod 2^32) millisecond counter.
pub trait TimeSource {
    /// Current reading in milliseconds.
    fn millis(&self) -> Millis;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn millis(&self) -> Millis {
        (**self).millis()
    }
}

/// Wall-clock time source counting milliseconds since creation.
///
/// Backed by [`Instant`], so it never goes backwards. The reading is
/// truncated to 32 bits and wraps like a microcontroller `millis()`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    /// Create a clock reading zero now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart counting from zero.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Instant the clock counts from.
    #[must_use]
    pub fn start(&self) -> Instant {
        self.start
    }
}

impl TimeSource for MonotonicClock {
    #[allow(clippy::cast_possible_truncation)]
    fn millis(&self) -> Millis {
        // Truncation is the wraparound.
        self.start.elapsed().as_millis() as Millis
    }
}

/// Manually driven time source for tests and simulations.
///
/// Interior mutability lets a test hold a shared reference for reading
/// while advancing the clock between calls.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    /// Create a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading `start`.
    #[must_use]
    pub fn starting_at(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move time forward by `ms`, wrapping past `u32::MAX`.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Jump to an absolute reading.
    pub fn set(&self, ms: Millis) {
        self.now.set(ms);
    }

    /// Back to zero.
    pub fn reset(&self) {
        self.now.set(0);
    }
}

impl TimeSource for ManualClock {
    fn millis(&self) -> Millis {
        self.now.get()
    }
}
