//! Timing configuration
//!
//! The defaults reproduce the bench firmware's feel: a 20 ms timer tick, a
//! 5 ms debounce window and press-and-hold repeats that speed up by a factor
//! of ten every 20 repeats.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest number of ×10 escalations that still fits an `i16` step
pub const MAX_TIERS_LIMIT: u8 = 4;

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period must be at least 1 ms
    ZeroTickPeriod,
    /// Repeat interval must be at least 1 ms
    ZeroRepeatInterval,
    /// An acceleration tier needs at least one repeat
    ZeroRepeatsPerTier,
    /// Step would overflow after this many escalations
    TooManyTiers,
}

/// Button and editor timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiTiming {
    /// Continuous release required before a button counts as settled (ms)
    pub debounce_ms: u32,
    /// Delay from the first step to the first repeat while held (ms)
    pub first_repeat_ms: u32,
    /// Interval between further repeats (ms)
    pub repeat_ms: u32,
    /// Repeats at one step size before the step is multiplied by ten
    pub repeats_per_tier: u8,
    /// Maximum number of ×10 escalations
    pub max_tiers: u8,
}

impl UiTiming {
    pub const fn new() -> Self {
        Self {
            debounce_ms: 5,
            first_repeat_ms: 350,
            repeat_ms: 200,
            repeats_per_tier: 20,
            max_tiers: 3,
        }
    }

    /// Check the values are usable by the editor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repeat_ms == 0 {
            return Err(ConfigError::ZeroRepeatInterval);
        }
        if self.repeats_per_tier == 0 {
            return Err(ConfigError::ZeroRepeatsPerTier);
        }
        if self.max_tiers > MAX_TIERS_LIMIT {
            return Err(ConfigError::TooManyTiers);
        }
        Ok(())
    }
}

impl Default for UiTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock tick configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Period of the hardware tick (ms)
    pub tick_ms: u32,
}

impl ClockConfig {
    pub const fn new() -> Self {
        Self { tick_ms: 20 }
    }

    pub const fn with_tick_ms(tick_ms: u32) -> Self {
        Self { tick_ms }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let timing = UiTiming::default();
        assert_eq!(timing.debounce_ms, 5);
        assert_eq!(timing.first_repeat_ms, 350);
        assert_eq!(timing.repeat_ms, 200);
        assert_eq!(timing.repeats_per_tier, 20);
        assert_eq!(timing.max_tiers, 3);
        assert!(timing.validate().is_ok());

        let clock = ClockConfig::default();
        assert_eq!(clock.tick_ms, 20);
        assert!(clock.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_intervals() {
        let timing = UiTiming {
            repeat_ms: 0,
            ..UiTiming::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::ZeroRepeatInterval));

        let timing = UiTiming {
            repeats_per_tier: 0,
            ..UiTiming::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::ZeroRepeatsPerTier));

        assert_eq!(
            ClockConfig::with_tick_ms(0).validate(),
            Err(ConfigError::ZeroTickPeriod)
        );
    }

    #[test]
    fn test_rejects_overflowing_tiers() {
        let timing = UiTiming {
            max_tiers: MAX_TIERS_LIMIT,
            ..UiTiming::default()
        };
        assert!(timing.validate().is_ok());

        let timing = UiTiming {
            max_tiers: MAX_TIERS_LIMIT + 1,
            ..UiTiming::default()
        };
        assert_eq!(timing.validate(), Err(ConfigError::TooManyTiers));
    }
}
