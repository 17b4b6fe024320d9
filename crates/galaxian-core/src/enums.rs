//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Run-level state machine.
///
/// `Idle → Playing → (Paused ⇄ Playing) → GameOver → Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Sub-state of `Playing`: what population the current wave consists of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveKind {
    Formation,
    Boss,
}

/// Enemy bullet archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyBulletKind {
    /// Straight down at normal speed.
    Normal,
    /// Thin and fast, straight down.
    Needle,
    /// Slow and wide.
    Heavy,
    /// Weaves horizontally around the column it was fired from.
    Zigzag,
    /// Flies toward where the player was when it was fired.
    Aimed,
}

/// Boss volley pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPattern {
    Single,
    /// Three bullets fanned around the player direction.
    AimedSpread,
    /// Five bullets fanned around the player direction.
    AimedBurst,
}

/// Every pickup the loot table can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    Rapid,
    Multi,
    Spread,
    Beam,
    Drone,
    Freeze,
    Magnet,
    DoubleScore,
    Pierce,
    SuperSpeed,
    /// One-hit shield charge.
    Shield,
    /// Two charges on the strong shield tier.
    MegaShield,
    ExtraLife,
}

/// Timed player enhancements tracked by expiry timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimedBuff {
    Rapid,
    Multi,
    Spread,
    Beam,
    Drone,
    Freeze,
    Magnet,
    DoubleScore,
    Pierce,
    SuperSpeed,
}

/// Shield tier that absorbed a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShieldTier {
    /// Charges granted by `PowerUpKind::Shield`.
    Single,
    /// Charges granted by `PowerUpKind::MegaShield`. Consumed first.
    Double,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 13] = [
        PowerUpKind::Rapid,
        PowerUpKind::Multi,
        PowerUpKind::Spread,
        PowerUpKind::Beam,
        PowerUpKind::Drone,
        PowerUpKind::Freeze,
        PowerUpKind::Magnet,
        PowerUpKind::DoubleScore,
        PowerUpKind::Pierce,
        PowerUpKind::SuperSpeed,
        PowerUpKind::Shield,
        PowerUpKind::MegaShield,
        PowerUpKind::ExtraLife,
    ];

    /// The timed buff this pickup extends, if any.
    pub fn timed_buff(self) -> Option<TimedBuff> {
        match self {
            PowerUpKind::Rapid => Some(TimedBuff::Rapid),
            PowerUpKind::Multi => Some(TimedBuff::Multi),
            PowerUpKind::Spread => Some(TimedBuff::Spread),
            PowerUpKind::Beam => Some(TimedBuff::Beam),
            PowerUpKind::Drone => Some(TimedBuff::Drone),
            PowerUpKind::Freeze => Some(TimedBuff::Freeze),
            PowerUpKind::Magnet => Some(TimedBuff::Magnet),
            PowerUpKind::DoubleScore => Some(TimedBuff::DoubleScore),
            PowerUpKind::Pierce => Some(TimedBuff::Pierce),
            PowerUpKind::SuperSpeed => Some(TimedBuff::SuperSpeed),
            PowerUpKind::Shield | PowerUpKind::MegaShield | PowerUpKind::ExtraLife => None,
        }
    }
}

impl TimedBuff {
    pub const ALL: [TimedBuff; 10] = [
        TimedBuff::Rapid,
        TimedBuff::Multi,
        TimedBuff::Spread,
        TimedBuff::Beam,
        TimedBuff::Drone,
        TimedBuff::Freeze,
        TimedBuff::Magnet,
        TimedBuff::DoubleScore,
        TimedBuff::Pierce,
        TimedBuff::SuperSpeed,
    ];
}
