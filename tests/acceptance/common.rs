//! Common utilities for acceptance tests.
//!
//! Provides helpers for:
//! - Polling a timer from a manual clock
//! - Extracting toggle edges from a recorded output

#![allow(dead_code)] // Not every helper is used by every test module

use blink_common::{ManualClock, Millis, TimeSource};
use blink_core::{BlinkTimer, OutputSink, RecordingSink};

/// A toggle observed on the output: the time it happened and the new level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Clock reading of the update that toggled.
    pub at: Millis,
    /// Output level after the toggle.
    pub on: bool,
}

/// Timer wired to a recording pin and a manual clock.
pub struct Rig {
    pub clock: ManualClock,
    pub timer: BlinkTimer<RecordingSink>,
}

impl Rig {
    /// Rig with the clock at zero.
    pub fn new(on: Millis, off: Millis) -> Self {
        Self::starting_at(0, on, off)
    }

    /// Rig with the clock at `start`.
    pub fn starting_at(start: Millis, on: Millis, off: Millis) -> Self {
        Self {
            clock: ManualClock::starting_at(start),
            timer: BlinkTimer::new(RecordingSink::new(), on, off),
        }
    }

    /// Update with the current reading.
    pub fn tick(&mut self) -> bool {
        self.timer.update(self.clock.millis());
        self.pin_state()
    }

    /// Advance the clock by `ms`, then update.
    pub fn advance(&mut self, ms: Millis) -> bool {
        self.clock.advance(ms);
        self.tick()
    }

    /// Last level written to the pin.
    pub fn pin_state(&self) -> bool {
        self.timer.output().state()
    }

    /// Number of pin writes so far.
    pub fn writes(&self) -> usize {
        self.timer.output().write_count()
    }
}

/// Poll `timer` every `step` ms for `count` updates, recording toggles.
pub fn poll<S: OutputSink>(
    timer: &mut BlinkTimer<S>,
    clock: &ManualClock,
    step: Millis,
    count: usize,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for _ in 0..count {
        let before = timer.is_on();
        let now = clock.millis();
        timer.update(now);
        if timer.is_on() != before {
            edges.push(Edge {
                at: now,
                on: timer.is_on(),
            });
        }
        clock.advance(step);
    }
    edges
}
