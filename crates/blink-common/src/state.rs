//! Binary output level shared by the timer, its sinks and the logs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level of a binary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputLevel {
    /// Output inactive; the initial level.
    #[default]
    Off,
    /// Output active.
    On,
}

impl fmt::Display for OutputLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::On => write!(f, "ON"),
        }
    }
}

impl OutputLevel {
    /// The opposite level.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Returns `true` for [`OutputLevel::On`].
    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

impl From<bool> for OutputLevel {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl From<OutputLevel> for bool {
    fn from(level: OutputLevel) -> Self {
        level.is_on()
    }
}
