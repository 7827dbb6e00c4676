//! Device configuration: timer durations, backlight levels and wake policy.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What to do with the round in progress when the device wakes from sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum WakePolicy {
    /// Keep the board and phase; re-arm whatever the phase needs.
    #[default]
    #[display("resume")]
    Resume,
    /// Discard the round and start a fresh one.
    #[display("restart")]
    Restart,
}

impl std::str::FromStr for WakePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resume" => Ok(WakePolicy::Resume),
            "restart" => Ok(WakePolicy::Restart),
            other => Err(ConfigError::new(format!("Unknown wake policy: {}", other))),
        }
    }
}

/// Configuration for the game lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Delay before the computer answers a human move.
    #[serde(default = "default_move_delay_ms")]
    move_delay_ms: u64,

    /// Pause after a round ends before the replay prompt appears.
    #[serde(default = "default_round_over_pause_ms")]
    round_over_pause_ms: u64,

    /// Idle time before the backlight dims.
    #[serde(default = "default_dim_after_ms")]
    dim_after_ms: u64,

    /// Time spent dimmed before the device sleeps.
    #[serde(default = "default_sleep_after_dim_ms")]
    sleep_after_dim_ms: u64,

    /// Backlight level during active play.
    #[serde(default = "default_full_brightness")]
    full_brightness: u8,

    /// Backlight floor reached by the dim sequence.
    #[serde(default = "default_dim_brightness")]
    dim_brightness: u8,

    /// Behavior on wake from sleep.
    #[serde(default)]
    wake_policy: WakePolicy,
}

#[instrument]
fn default_move_delay_ms() -> u64 {
    1500
}

#[instrument]
fn default_round_over_pause_ms() -> u64 {
    1500
}

#[instrument]
fn default_dim_after_ms() -> u64 {
    30_000
}

#[instrument]
fn default_sleep_after_dim_ms() -> u64 {
    30_000
}

#[instrument]
fn default_full_brightness() -> u8 {
    255
}

#[instrument]
fn default_dim_brightness() -> u8 {
    50
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            move_delay_ms: default_move_delay_ms(),
            round_over_pause_ms: default_round_over_pause_ms(),
            dim_after_ms: default_dim_after_ms(),
            sleep_after_dim_ms: default_sleep_after_dim_ms(),
            full_brightness: default_full_brightness(),
            dim_brightness: default_dim_brightness(),
            wake_policy: WakePolicy::default(),
        }
    }
}

impl DeviceConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(wake_policy = %config.wake_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different wake policy.
    pub fn with_wake_policy(mut self, wake_policy: WakePolicy) -> Self {
        self.wake_policy = wake_policy;
        self
    }

    /// Checks that durations are non-zero and the dim floor is below full.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("move_delay_ms", self.move_delay_ms),
            ("round_over_pause_ms", self.round_over_pause_ms),
            ("dim_after_ms", self.dim_after_ms),
            ("sleep_after_dim_ms", self.sleep_after_dim_ms),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::new(format!("{} must be greater than zero", name)));
        }
        if self.dim_brightness > self.full_brightness {
            return Err(ConfigError::new(format!(
                "dim_brightness ({}) exceeds full_brightness ({})",
                self.dim_brightness, self.full_brightness
            )));
        }
        Ok(())
    }

    /// Delay before the computer answers.
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Pause before the replay prompt.
    pub fn round_over_pause(&self) -> Duration {
        Duration::from_millis(self.round_over_pause_ms)
    }

    /// Idle time before dimming.
    pub fn dim_after(&self) -> Duration {
        Duration::from_millis(self.dim_after_ms)
    }

    /// Dimmed time before sleeping.
    pub fn sleep_after_dim(&self) -> Duration {
        Duration::from_millis(self.sleep_after_dim_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
