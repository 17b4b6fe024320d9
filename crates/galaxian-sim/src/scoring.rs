//! The single scoring entry point. Every award goes through `award` so
//! the double-score multiplier applies uniformly.

use galaxian_core::components::Player;
use galaxian_core::config::ScoringConfig;
use galaxian_core::enums::TimedBuff;

use crate::buffs::BuffClock;

/// Add `raw` points (doubled while double-score is active) and return
/// what was actually added.
pub fn award(
    player: &mut Player,
    buffs: &BuffClock,
    cfg: &ScoringConfig,
    now: f64,
    raw: u64,
) -> u64 {
    let points = if buffs.is_active(TimedBuff::DoubleScore, now) {
        raw.saturating_mul(cfg.double_score_multiplier)
    } else {
        raw
    };
    player.score = player.score.saturating_add(points);
    points
}
