//! Archetype-specific bullet profiles and fire-selection tables.

use galaxian_core::constants::*;
use galaxian_core::enums::{BossPattern, EnemyBulletKind};

/// Size and speed of an enemy bullet archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletProfile {
    /// Speed along the travel direction (px/s).
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

/// Share of formation shots per archetype. Sums to 1.
pub const FORMATION_FIRE_TABLE: [(EnemyBulletKind, f32); 5] = [
    (EnemyBulletKind::Normal, 0.55),
    (EnemyBulletKind::Needle, 0.15),
    (EnemyBulletKind::Heavy, 0.14),
    (EnemyBulletKind::Zigzag, 0.09),
    (EnemyBulletKind::Aimed, 0.07),
];

/// Share of boss volleys per pattern. Sums to 1.
pub const BOSS_PATTERN_TABLE: [(BossPattern, f32); 3] = [
    (BossPattern::Single, 0.55),
    (BossPattern::AimedSpread, 0.25),
    (BossPattern::AimedBurst, 0.20),
];

/// Get the profile for a given archetype.
pub fn bullet_profile(kind: EnemyBulletKind) -> BulletProfile {
    match kind {
        EnemyBulletKind::Normal => BulletProfile {
            speed: NORMAL_BULLET_SPEED,
            width: 4.0,
            height: 10.0,
        },
        EnemyBulletKind::Needle => BulletProfile {
            speed: NEEDLE_BULLET_SPEED,
            width: 2.0,
            height: 14.0,
        },
        EnemyBulletKind::Heavy => BulletProfile {
            speed: HEAVY_BULLET_SPEED,
            width: 10.0,
            height: 12.0,
        },
        EnemyBulletKind::Zigzag => BulletProfile {
            speed: ZIGZAG_BULLET_SPEED,
            width: 6.0,
            height: 10.0,
        },
        EnemyBulletKind::Aimed => BulletProfile {
            speed: AIMED_BULLET_SPEED,
            width: 6.0,
            height: 6.0,
        },
    }
}

/// Walk a cumulative table with a roll in `[0, 1)`.
/// Rolls past the last boundary (float slop) land on the final entry.
pub fn pick_cumulative<T: Copy>(table: &[(T, f32)], roll: f32) -> T {
    let mut acc = 0.0;
    for &(item, share) in table {
        acc += share;
        if roll < acc {
            return item;
        }
    }
    table[table.len() - 1].0
}

/// Archetype for a formation shot.
pub fn pick_bullet_kind(roll: f32) -> EnemyBulletKind {
    pick_cumulative(&FORMATION_FIRE_TABLE, roll)
}

/// Pattern for a boss volley.
pub fn pick_boss_pattern(roll: f32) -> BossPattern {
    pick_cumulative(&BOSS_PATTERN_TABLE, roll)
}

/// Bullets in one boss volley.
pub fn volley_size(pattern: BossPattern) -> usize {
    match pattern {
        BossPattern::Single => 1,
        BossPattern::AimedSpread => 3,
        BossPattern::AimedBurst => 5,
    }
}
