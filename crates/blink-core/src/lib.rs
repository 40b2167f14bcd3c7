//! Blink timer core.
//!
//! - **Timer** ([`timer`]): [`BlinkTimer`], the on/off state machine
//! - **Output** ([`output`]): the [`OutputSink`] capability and stock sinks
//!
//! The timer never reads a clock. Sample a
//! [`TimeSource`](blink_common::TimeSource) in the caller's loop and pass
//! the reading to [`BlinkTimer::update`].
//!
//! # Example
//!
//! ```
//! use blink_common::{ManualClock, TimeSource};
//! use blink_core::{BlinkTimer, RecordingSink};
//!
//! let clock = ManualClock::new();
//! let mut timer = BlinkTimer::new(RecordingSink::new(), 100, 100);
//!
//! for _ in 0..4 {
//!     clock.advance(100);
//!     timer.update(clock.millis());
//! }
//!
//! assert_eq!(timer.output().history(), &[true, false, true, false]);
//! ```

pub mod output;
pub mod timer;

// Re-export main types for convenience
pub use output::{from_fn, FnSink, OutputSink, RecordingSink};
pub use timer::{elapsed_since, BlinkTimer, TimerState};
