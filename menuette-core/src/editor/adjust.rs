//! Clamped arithmetic and hold-to-repeat acceleration

use crate::config::UiTiming;

/// Add `step` to `value` and clamp the result into `[lower, upper]`
///
/// The addition saturates at the `i16` range for signed values and at
/// `0..=65535` for unsigned ones, where the bounds are compared as `u16`.
/// Bounds are applied upper first, so an inverted range yields `lower`.
pub fn adjust_value(value: i16, step: i16, lower: i16, upper: i16, signed: bool) -> i16 {
    if signed {
        value.saturating_add(step).min(upper).max(lower)
    } else {
        let sum = (value as u16).saturating_add_signed(step);
        sum.min(upper as u16).max(lower as u16) as i16
    }
}

/// Step size for a held button
///
/// Every `repeats_per_tier` repeats the step grows tenfold, at most
/// `max_tiers` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Accelerator {
    step: i16,
    repeats: u8,
    tier: u8,
    repeats_per_tier: u8,
    max_tiers: u8,
}

impl Accelerator {
    /// Start at a step of one in the direction of `direction`'s sign
    pub fn new(direction: i16, timing: &UiTiming) -> Self {
        Self {
            step: direction.signum(),
            repeats: 0,
            tier: 0,
            repeats_per_tier: timing.repeats_per_tier.max(1),
            max_tiers: timing.max_tiers,
        }
    }

    pub fn step(&self) -> i16 {
        self.step
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// Step for the next repeat, escalating once a tier is used up
    pub fn next_step(&mut self) -> i16 {
        let step = self.step;
        self.repeats = self.repeats.saturating_add(1);
        if self.repeats >= self.repeats_per_tier {
            self.repeats = 0;
            if self.tier < self.max_tiers {
                self.tier += 1;
                self.step = self.step.saturating_mul(10);
                trace!("edit step now {=i16}", self.step);
            }
        }
        step
    }
}
