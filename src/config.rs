//! Engine configuration.
//!
//! # Defaults
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `slot_minutes` | 30 | Grid step for slots and start/end options |
//! | `fallback_close` | 23:30 | End-option bound when the weekday close is unknown |

use serde::{Deserialize, Serialize};

use crate::models::{TimeOfDay, MINUTES_PER_DAY};

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`EngineConfig`].
    #[error("invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The slot size is zero or does not divide a day evenly.
    #[error("slot size must divide a day evenly, got {0} minutes")]
    InvalidSlotMinutes(u16),
}

/// Tunables for slot generation and option filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Slot grid step in minutes.
    pub slot_minutes: u16,
    /// Latest end time offered when the weekday row gives no close time.
    pub fallback_close: TimeOfDay,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            fallback_close: TimeOfDay::LAST_HALF_HOUR,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slot grid step.
    pub fn with_slot_minutes(mut self, slot_minutes: u16) -> Self {
        self.slot_minutes = slot_minutes;
        self
    }

    /// Sets the fallback close bound.
    pub fn with_fallback_close(mut self, fallback_close: TimeOfDay) -> Self {
        self.fallback_close = fallback_close;
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the slot size tiles a day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_minutes == 0 || MINUTES_PER_DAY % self.slot_minutes != 0 {
            return Err(ConfigError::InvalidSlotMinutes(self.slot_minutes));
        }
        Ok(())
    }

    /// Grid step usable with `step_by` (never zero).
    #[inline]
    pub(crate) fn step(&self) -> usize {
        self.slot_minutes.max(1) as usize
    }
}
