//! Game engine: the per-frame driver.
//!
//! `GameEngine` owns one `GameWorld`, its seeded RNG and loot table,
//! processes queued commands, runs every system in a fixed order with a
//! clamped delta, and produces `GameStateSnapshot`s. Completely headless;
//! any number of engines can run side by side.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use galaxian_core::commands::PlayerCommand;
use galaxian_core::config::GameConfig;
use galaxian_core::constants::{MAX_FRAME_SECS, STAR_COUNT};
use galaxian_core::enums::GamePhase;
use galaxian_core::error::ConfigError;
use galaxian_core::state::GameStateSnapshot;
use galaxian_core::types::SimTime;

use crate::autofire::AutoFire;
use crate::loot::PowerUpTable;
use crate::systems;
use crate::world::GameWorld;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same run.
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

pub struct GameEngine {
    world: GameWorld,
    rng: ChaCha8Rng,
    loot: PowerUpTable,
    autofire: AutoFire,
    command_queue: VecDeque<PlayerCommand>,
    last_timestamp_ms: Option<f64>,
}

impl GameEngine {
    /// Validate the configuration and build an idle engine.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        if let Err(err) = config.game.validate() {
            tracing::warn!(%err, "rejected game config");
            return Err(err);
        }
        let loot = PowerUpTable::new(&config.game.powerups.table)?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let autofire = AutoFire::new(config.game.player.auto_fire_interval_ms);

        let mut world = GameWorld::new(config.game);
        world.stars = world_setup::scatter_stars(&mut rng, &world.config.field, STAR_COUNT);
        tracing::debug!(seed = config.seed, "engine created");

        Ok(Self {
            world,
            rng,
            loot,
            autofire,
            command_queue: VecDeque::new(),
            last_timestamp_ms: None,
        })
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one frame at host time `timestamp_ms` and return the snapshot.
    ///
    /// The delta since the previous frame is clamped to `MAX_FRAME_SECS`;
    /// the first frame has a zero delta. The simulation only advances
    /// while playing.
    pub fn frame(&mut self, timestamp_ms: f64) -> GameStateSnapshot {
        let dt = match self.last_timestamp_ms {
            Some(prev) => frame_delta(prev, timestamp_ms),
            None => 0.0,
        };
        if self.last_timestamp_ms.map_or(true, |prev| timestamp_ms > prev) {
            self.last_timestamp_ms = Some(timestamp_ms);
        }

        self.process_commands(timestamp_ms);
        if self.autofire.poll(timestamp_ms) {
            self.world.fire_requested = true;
        }

        if self.world.phase == GamePhase::Playing && dt > 0.0 {
            self.run_systems(dt);
            self.world.time.advance(dt);
            self.autofire
                .set_playing(self.world.phase == GamePhase::Playing, timestamp_ms);
        }

        let events = std::mem::take(&mut self.world.events);
        systems::snapshot::build_snapshot(&self.world, &self.autofire, events)
    }

    /// Advance by `dt_secs` of host time. Convenience for fixed-step hosts.
    pub fn step(&mut self, dt_secs: f32) -> GameStateSnapshot {
        let prev = *self.last_timestamp_ms.get_or_insert(0.0);
        self.frame(prev + f64::from(dt_secs) * 1000.0)
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn time(&self) -> SimTime {
        self.world.time
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Mutable world access for scenario setup.
    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    pub fn loot(&self) -> &PowerUpTable {
        &self.loot
    }

    pub fn auto_fire(&self) -> &AutoFire {
        &self.autofire
    }

    fn process_commands(&mut self, now_ms: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now_ms);
        }
        self.autofire
            .set_playing(self.world.phase == GamePhase::Playing, now_ms);
    }

    fn handle_command(&mut self, command: PlayerCommand, now_ms: f64) {
        let phase = self.world.phase;
        match command {
            PlayerCommand::StartRun { name } => {
                if phase == GamePhase::Idle {
                    self.start_run(&name);
                }
            }
            PlayerCommand::Restart => {
                if phase == GamePhase::GameOver {
                    let name = self.world.player.name.clone();
                    self.start_run(&name);
                }
            }
            PlayerCommand::ReturnToIdle => {
                if phase == GamePhase::GameOver {
                    self.world.clear_run();
                    self.world.phase = GamePhase::Idle;
                }
            }
            PlayerCommand::Pause => {
                if phase == GamePhase::Playing {
                    self.pause();
                }
            }
            PlayerCommand::Resume => {
                if phase == GamePhase::Paused {
                    self.world.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::TogglePause => match phase {
                GamePhase::Playing => self.pause(),
                GamePhase::Paused => self.world.phase = GamePhase::Playing,
                _ => {}
            },
            PlayerCommand::SetInput { input } => {
                self.world.input = input;
            }
            PlayerCommand::FireTap => {
                if phase == GamePhase::Playing {
                    self.world.fire_requested = true;
                }
            }
            PlayerCommand::SetAutoFire { enabled } => {
                self.autofire.set_enabled(enabled, now_ms);
            }
            PlayerCommand::Blur => {
                self.autofire.set_focused(false, now_ms);
                if phase == GamePhase::Playing {
                    self.pause();
                }
            }
            PlayerCommand::Focus => {
                self.autofire.set_focused(true, now_ms);
            }
        }
    }

    /// Pending taps are dropped so nothing fires on resume.
    fn pause(&mut self) {
        self.world.phase = GamePhase::Paused;
        self.world.fire_requested = false;
    }

    fn start_run(&mut self, name: &str) {
        let world = &mut self.world;
        world.clear_run();
        world.player = world_setup::spawn_player(&world.config.player, &world.config.field, name);
        world.swooper_cooldown = systems::swoopers::next_cooldown(world, &mut self.rng);
        world.powerup_timer = systems::powerups::next_timer(world, &mut self.rng);
        world.phase = GamePhase::Playing;
        systems::waves::spawn_wave(world, 1);
        tracing::info!(player = name, "run started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let hostile_dt = dt * self.world.hostile_scale();

        // 1. Player movement and shooting
        systems::player::run(&mut self.world, dt);
        // 2. Drone
        systems::drone::run(&mut self.world, dt);
        // 3. Projectile integration
        systems::projectiles::advance_player_shots(&mut self.world, dt);
        systems::projectiles::advance_enemy_bullets(&mut self.world, hostile_dt);
        // 4. Formation march, wrap, fire
        systems::formation::run(&mut self.world, &mut self.rng, hostile_dt);
        // 5. Boss weave and volleys
        systems::boss::run(&mut self.world, &mut self.rng, hostile_dt);
        // 6. Swoopers
        systems::swoopers::run(&mut self.world, &mut self.rng, dt, hostile_dt);
        // 7. Power-up drops, fall, pickup
        systems::powerups::run(&mut self.world, &mut self.rng, &self.loot, dt);
        // 8. Collision
        systems::collision::run(&mut self.world, &mut self.rng, &self.loot, dt);
        // 9. Wave advance
        systems::waves::run(&mut self.world);
        // 10. Compaction
        systems::cleanup::run(&mut self.world);
        // 11. Starfield
        systems::starfield::run(&mut self.world, dt);
    }
}

/// Seconds between two host timestamps, clamped to `[0, MAX_FRAME_SECS]`.
pub fn frame_delta(prev_ms: f64, now_ms: f64) -> f32 {
    let secs = (now_ms - prev_ms) / 1000.0;
    if secs.is_finite() {
        secs.clamp(0.0, f64::from(MAX_FRAME_SECS)) as f32
    } else {
        0.0
    }
}
