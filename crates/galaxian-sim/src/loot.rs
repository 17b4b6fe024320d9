//! Power-up catalog and weighted picker.

use rand::Rng;

use galaxian_core::config::{total_weight, PowerUpWeight};
use galaxian_core::enums::PowerUpKind;
use galaxian_core::error::ConfigError;

/// Validated (kind, weight) table.
#[derive(Debug, Clone)]
pub struct PowerUpTable {
    entries: Vec<PowerUpWeight>,
    total: f32,
}

impl PowerUpTable {
    /// Fails fast on an empty table, bad weights, or a zero total.
    pub fn new(entries: &[PowerUpWeight]) -> Result<Self, ConfigError> {
        let total = total_weight(entries)?;
        Ok(Self {
            entries: entries.to_vec(),
            total,
        })
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn entries(&self) -> &[PowerUpWeight] {
        &self.entries
    }

    /// Draw `r` uniformly in `[0, total)` and pick by linear subtraction.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> PowerUpKind {
        let roll = rng.gen_range(0.0..self.total);
        self.pick_with(roll)
    }

    /// Subtract weights from `roll` until the remainder is ≤ 0.
    /// Zero-weight rows are never chosen.
    pub fn pick_with(&self, roll: f32) -> PowerUpKind {
        let mut remainder = roll;
        let mut last = None;
        for entry in self.entries.iter().filter(|e| e.weight > 0.0) {
            remainder -= entry.weight;
            if remainder <= 0.0 {
                return entry.kind;
            }
            last = Some(entry.kind);
        }
        // Float slop past the final boundary. `new` guarantees a positive row.
        last.unwrap_or(PowerUpKind::Rapid)
    }
}
