//! Events emitted by the engine for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    WaveStarted { wave: u32, kind: WaveKind },
    WaveCleared { wave: u32 },
    ShotFired { beam: bool },
    EnemyDestroyed { x: f32, y: f32 },
    SwooperDestroyed { x: f32, y: f32 },
    BossHit { hp: u32 },
    BossDefeated { wave: u32, bonus: u64 },
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpCollected { kind: PowerUpKind },
    ShieldAbsorbed { tier: ShieldTier },
    PlayerHit { lives: u32 },
    GameOver { score: u64, wave: u32 },
}
