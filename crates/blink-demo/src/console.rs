//! Console rendering of the blink output.
//!
//! Every write prints a timestamped line, green when on and red when off.

use blink_common::{MonotonicClock, OutputLevel, TimeSource};
use blink_core::OutputSink;
use std::io::{self, Write};
use tracing::warn;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// LED rendered as text lines on a writer.
#[derive(Debug)]
pub struct ConsoleLed<W: Write> {
    out: W,
    clock: MonotonicClock,
    color: bool,
    level: OutputLevel,
}

impl ConsoleLed<io::Stdout> {
    /// Console LED on standard output.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleLed<W> {
    /// Console LED writing to `out`.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            clock: MonotonicClock::new(),
            color,
            level: OutputLevel::Off,
        }
    }

    /// Last rendered level.
    pub fn level(&self) -> OutputLevel {
        self.level
    }

    /// Restart the timestamp shown in front of each line.
    pub fn reset_time(&mut self) {
        self.clock.reset();
    }

    /// Consume the LED, returning the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self) -> io::Result<()> {
        let label = match self.level {
            OutputLevel::On => "███ ON ███",
            OutputLevel::Off => "▓▓▓ OFF ▓▓▓",
        };
        write!(self.out, "[{}ms] LED: ", self.clock.millis())?;
        if self.color {
            let color = if self.level.is_on() { GREEN } else { RED };
            writeln!(self.out, "{color}{label}{RESET}")?;
        } else {
            writeln!(self.out, "{label}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> OutputSink for ConsoleLed<W> {
    fn set(&mut self, state: bool) {
        self.level = OutputLevel::from(state);
        if let Err(e) = self.render() {
            warn!(error = %e, "failed to render LED state");
        }
    }
}
