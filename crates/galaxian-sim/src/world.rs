//! The game world: every entity pool plus the run-level state the
//! systems read and write each frame.

use galaxian_behavior::motion::March;
use galaxian_core::commands::InputState;
use galaxian_core::components::*;
use galaxian_core::config::GameConfig;
use galaxian_core::enums::{GamePhase, WaveKind};
use galaxian_core::events::GameEvent;
use galaxian_core::state::RunSummary;
use galaxian_core::types::SimTime;

use crate::buffs::BuffClock;
use crate::world_setup;

/// All mutable simulation state for one game instance.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub config: GameConfig,
    pub time: SimTime,
    pub phase: GamePhase,
    /// Current wave number, 0 before the first wave.
    pub wave: u32,
    pub wave_kind: Option<WaveKind>,
    pub player: Player,
    pub input: InputState,
    /// One-shot fire request from a tap or the auto-fire task.
    pub fire_requested: bool,
    /// Formation members are never removed mid-wave; dead ones are skipped.
    pub enemies: Vec<FormationEnemy>,
    pub march: March,
    pub boss: Option<Boss>,
    pub swoopers: Vec<Swooper>,
    /// Seconds until the next swooper spawns.
    pub swooper_cooldown: f32,
    pub player_shots: Vec<PlayerShot>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub powerups: Vec<PowerUp>,
    /// Seconds until the next periodic power-up drop.
    pub powerup_timer: f32,
    pub buffs: BuffClock,
    pub stars: Vec<Star>,
    /// Events emitted since the last snapshot.
    pub events: Vec<GameEvent>,
    pub summary: Option<RunSummary>,
}

impl GameWorld {
    pub fn new(config: GameConfig) -> Self {
        let march = world_setup::initial_march(&config, 1);
        Self {
            config,
            time: SimTime::default(),
            phase: GamePhase::Idle,
            wave: 0,
            wave_kind: None,
            player: Player::default(),
            input: InputState::default(),
            fire_requested: false,
            enemies: Vec::new(),
            march,
            boss: None,
            swoopers: Vec::new(),
            swooper_cooldown: 0.0,
            player_shots: Vec::new(),
            enemy_bullets: Vec::new(),
            powerups: Vec::new(),
            powerup_timer: 0.0,
            buffs: BuffClock::default(),
            stars: Vec::new(),
            events: Vec::new(),
            summary: None,
        }
    }

    /// Current simulation time in milliseconds.
    pub fn now(&self) -> f64 {
        self.time.now_ms
    }

    /// Multiplier applied to hostile motion and fire chance this frame.
    pub fn hostile_scale(&self) -> f32 {
        self.buffs
            .hostile_time_scale(self.now(), self.config.buffs.freeze_factor)
    }

    /// Discard every run-scoped pool and counter. Stars survive.
    pub fn clear_run(&mut self) {
        self.time = SimTime::default();
        self.wave = 0;
        self.wave_kind = None;
        self.player = Player::default();
        self.input = InputState::default();
        self.fire_requested = false;
        self.enemies.clear();
        self.march = world_setup::initial_march(&self.config, 1);
        self.boss = None;
        self.swoopers.clear();
        self.swooper_cooldown = 0.0;
        self.player_shots.clear();
        self.enemy_bullets.clear();
        self.powerups.clear();
        self.powerup_timer = 0.0;
        self.buffs = BuffClock::default();
        self.summary = None;
    }

    /// A formation wave is clear once it had members and none are alive;
    /// a boss wave once its boss is dead.
    pub fn wave_cleared(&self) -> bool {
        match self.wave_kind {
            Some(WaveKind::Formation) => {
                !self.enemies.is_empty() && self.enemies.iter().all(|e| !e.alive)
            }
            Some(WaveKind::Boss) => self.boss.as_ref().is_some_and(|b| !b.alive),
            None => false,
        }
    }

    /// End the run. Only the first call has any effect.
    pub fn end_run(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.fire_requested = false;
        let summary = RunSummary {
            name: self.player.name.clone(),
            score: self.player.score,
            wave: self.wave,
        };
        tracing::info!(
            player = %summary.name,
            score = summary.score,
            wave = summary.wave,
            "game over"
        );
        self.events.push(GameEvent::GameOver {
            score: summary.score,
            wave: summary.wave,
        });
        self.summary = Some(summary);
    }
}
