//! Game state snapshot — everything a renderer or HUD needs after a frame.

use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{FieldSize, SimTime};

/// Complete visible state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub field: FieldSize,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: Player,
    pub enemies: Vec<FormationEnemy>,
    pub boss: Option<Boss>,
    pub swoopers: Vec<Swooper>,
    pub player_shots: Vec<PlayerShot>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub powerups: Vec<PowerUp>,
    pub buffs: BuffView,
    pub stars: Vec<Star>,
    pub auto_fire: AutoFireView,
    pub events: Vec<GameEvent>,
    /// Set once the run has ended, for high-score persistence.
    pub summary: Option<RunSummary>,
}

/// Counters for the heads-up display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub lives: u32,
    pub wave: u32,
    pub wave_kind: Option<WaveKind>,
    pub paused: bool,
}

/// Remaining time on each active buff plus shield charges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuffView {
    pub active: Vec<ActiveBuffView>,
    pub shield_single: u32,
    pub shield_double: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveBuffView {
    pub buff: TimedBuff,
    pub remaining_ms: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoFireView {
    pub enabled: bool,
    /// Enabled but held back by pause or lost focus.
    pub suspended: bool,
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub name: String,
    pub score: u64,
    pub wave: u32,
}
