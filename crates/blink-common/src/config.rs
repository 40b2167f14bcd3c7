//! Configuration for the blink timer and its demo loop.
//!
//! Supports TOML deserialization with humantime durations (`"1s"`,
//! `"500ms"`). Missing fields fall back to the demo defaults: one second
//! on, half a second off, polled every 50 ms for ten seconds.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level blink configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    /// How long the output stays on.
    #[serde(with = "humantime_serde")]
    pub on_duration: Duration,

    /// How long the output stays off.
    #[serde(with = "humantime_serde")]
    pub off_duration: Duration,

    /// Interval between two `update` calls in the polling loop.
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,

    /// Total run time of the polling loop.
    #[serde(with = "humantime_serde")]
    pub run_for: Duration,

    /// Render console output with ANSI colours.
    pub color: bool,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            on_duration: Duration::from_millis(1000),
            off_duration: Duration::from_millis(500),
            poll_interval: Duration::from_millis(50),
            run_for: Duration::from_secs(10),
            color: true,
        }
    }
}

impl BlinkConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Serialize configuration to TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Check that every duration is representable on the 32-bit
    /// millisecond timeline and that the loop actually sleeps.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        self.on_duration_ms()?;
        self.off_duration_ms()?;
        self.run_for_ms()?;
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// On duration in whole milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DurationOutOfRange`] past `u32::MAX` ms.
    pub fn on_duration_ms(&self) -> ConfigResult<u32> {
        to_millis("on_duration", self.on_duration)
    }

    /// Off duration in whole milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DurationOutOfRange`] past `u32::MAX` ms.
    pub fn off_duration_ms(&self) -> ConfigResult<u32> {
        to_millis("off_duration", self.off_duration)
    }

    /// Run time in whole milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DurationOutOfRange`] past `u32::MAX` ms.
    pub fn run_for_ms(&self) -> ConfigResult<u32> {
        to_millis("run_for", self.run_for)
    }
}

fn to_millis(field: &'static str, value: Duration) -> ConfigResult<u32> {
    u32::try_from(value.as_millis()).map_err(|_| ConfigError::DurationOutOfRange { field, value })
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Duration does not fit the 32-bit millisecond counter.
    #[error("{field} of {value:?} exceeds the 32-bit millisecond range")]
    DurationOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Configured value.
        value: Duration,
    },

    /// Polling loop would spin without sleeping.
    #[error("poll_interval must be greater than zero")]
    ZeroPollInterval,
}

/// Convenience type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serde helper module for `Duration` using humantime format.
mod humantime_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = humantime::format_duration(*duration).to_string();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
