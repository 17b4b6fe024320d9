//! Entity records for every population the engine simulates.
//!
//! Components are plain data. Behavior lives in `galaxian-behavior`
//! and in the sim systems. Dead entities keep their slot until the
//! end-of-frame compaction so indices stay stable during collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Rect;

/// The player's ship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Simulation time (ms) before which the ship cannot shoot.
    pub can_shoot_at: f64,
    pub lives: u32,
    pub score: u64,
    /// Cosmetic ship name, carried into the run summary.
    pub name: String,
}

/// A member of the marching grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationEnemy {
    pub rect: Rect,
    /// Visual variant for renderers. Never read by game logic.
    pub img_idx: usize,
    pub alive: bool,
}

/// The single high-HP enemy of a boss wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub rect: Rect,
    pub hp: u32,
    pub max_hp: u32,
    /// Seconds of (freeze-scaled) oscillation elapsed.
    pub t: f32,
    /// Center of the horizontal weave.
    pub base_x: f32,
    /// Center of the vertical bob.
    pub base_y: f32,
    /// Fractional beam damage not yet applied to `hp`.
    pub beam_damage: f32,
    pub alive: bool,
}

/// An independently spawned diving enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swooper {
    pub rect: Rect,
    /// Horizontal center the weave oscillates around.
    pub base_x: f32,
    pub amplitude: f32,
    /// Angular frequency, radians per second.
    pub frequency: f32,
    pub t: f32,
    pub img_idx: usize,
    pub alive: bool,
}

/// A player-owned projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerShot {
    pub rect: Rect,
    pub kind: ShotKind,
    /// Consumed this frame; removed at compaction.
    pub spent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShotKind {
    /// Moving bullet. Each hit decrements `pierce` while it is positive,
    /// otherwise the bullet is spent.
    Bullet { velocity: Vec2, pierce: u32 },
    /// Full-height beam re-tested every frame until `life` (seconds) runs out.
    Beam { life: f32 },
}

/// A hostile projectile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub rect: Rect,
    pub motion: EnemyBulletMotion,
    pub spent: bool,
}

/// Per-archetype motion state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EnemyBulletMotion {
    Normal { vy: f32 },
    Needle { vy: f32 },
    Heavy { vy: f32 },
    /// `x = base_x + amplitude * sin(frequency * t)` (left edge).
    Zigzag {
        base_x: f32,
        vy: f32,
        amplitude: f32,
        frequency: f32,
        t: f32,
    },
    /// Fixed velocity toward the player's position at spawn time.
    Aimed { velocity: Vec2 },
}

/// A falling pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub vy: f32,
    pub kind: PowerUpKind,
    /// Cosmetic rotation, radians.
    pub spin: f32,
    pub collected: bool,
}

/// A background star. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Pixels per second.
    pub speed: f32,
}

impl EnemyBulletMotion {
    pub fn kind(&self) -> EnemyBulletKind {
        match self {
            EnemyBulletMotion::Normal { .. } => EnemyBulletKind::Normal,
            EnemyBulletMotion::Needle { .. } => EnemyBulletKind::Needle,
            EnemyBulletMotion::Heavy { .. } => EnemyBulletKind::Heavy,
            EnemyBulletMotion::Zigzag { .. } => EnemyBulletKind::Zigzag,
            EnemyBulletMotion::Aimed { .. } => EnemyBulletKind::Aimed,
        }
    }
}

impl PlayerShot {
    pub fn is_beam(&self) -> bool {
        matches!(self.kind, ShotKind::Beam { .. })
    }
}
