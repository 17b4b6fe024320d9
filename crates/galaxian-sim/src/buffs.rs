//! Buff clock: timed enhancements, shield charges, and drone pacing.

use serde::{Deserialize, Serialize};

use galaxian_core::enums::{ShieldTier, TimedBuff};
use galaxian_core::state::{ActiveBuffView, BuffView};

const BUFF_COUNT: usize = TimedBuff::ALL.len();

/// Per-run enhancement state. Timestamps are simulation milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuffClock {
    until: [f64; BUFF_COUNT],
    /// Charges on the one-hit tier.
    pub shield_single: u32,
    /// Charges on the strong tier. Consumed before `shield_single`.
    pub shield_double: u32,
    /// Active drone time not yet spent on shots (seconds).
    pub drone_accum: f32,
}

impl BuffClock {
    /// A buff is active iff `now < until`.
    pub fn is_active(&self, buff: TimedBuff, now: f64) -> bool {
        now < self.until[buff as usize]
    }

    pub fn until(&self, buff: TimedBuff) -> f64 {
        self.until[buff as usize]
    }

    pub fn remaining_ms(&self, buff: TimedBuff, now: f64) -> f64 {
        (self.until[buff as usize] - now).max(0.0)
    }

    /// Extend a buff by `duration_ms` from `max(until, now)`.
    /// Returns the new expiry, which is never earlier than the old one.
    pub fn extend(&mut self, buff: TimedBuff, now: f64, duration_ms: f64) -> f64 {
        let slot = &mut self.until[buff as usize];
        *slot = slot.max(now) + duration_ms.max(0.0);
        *slot
    }

    pub fn add_shield(&mut self, tier: ShieldTier, charges: u32) {
        match tier {
            ShieldTier::Single => self.shield_single += charges,
            ShieldTier::Double => self.shield_double += charges,
        }
    }

    /// Spend one shield charge on an incoming hit. The strong tier goes
    /// first. Returns the tier that absorbed it, or `None` if unshielded.
    pub fn absorb_hit(&mut self) -> Option<ShieldTier> {
        if self.shield_double > 0 {
            self.shield_double -= 1;
            Some(ShieldTier::Double)
        } else if self.shield_single > 0 {
            self.shield_single -= 1;
            Some(ShieldTier::Single)
        } else {
            None
        }
    }

    /// Multiplier on hostile motion and fire chance.
    pub fn hostile_time_scale(&self, now: f64, freeze_factor: f32) -> f32 {
        if self.is_active(TimedBuff::Freeze, now) {
            freeze_factor
        } else {
            1.0
        }
    }

    pub fn view(&self, now: f64) -> BuffView {
        BuffView {
            active: TimedBuff::ALL
                .iter()
                .filter(|&&b| self.is_active(b, now))
                .map(|&buff| ActiveBuffView {
                    buff,
                    remaining_ms: self.remaining_ms(buff, now),
                })
                .collect(),
            shield_single: self.shield_single,
            shield_double: self.shield_double,
        }
    }
}
