//! Wave director: builds each wave and advances once it is cleared.

use galaxian_core::enums::{GamePhase, WaveKind};
use galaxian_core::events::GameEvent;

use crate::world::GameWorld;
use crate::world_setup::{build_boss, build_formation, initial_march, is_boss_wave};

/// Advance to the next wave if the current one is cleared.
pub fn run(world: &mut GameWorld) {
    if world.phase != GamePhase::Playing || !world.wave_cleared() {
        return;
    }
    world.events.push(GameEvent::WaveCleared { wave: world.wave });
    let next = world.wave + 1;
    spawn_wave(world, next);
}

/// Replace the current hostiles with wave `wave`. Swoopers, pickups and
/// projectiles in flight carry over.
pub fn spawn_wave(world: &mut GameWorld, wave: u32) {
    world.wave = wave;
    world.enemies.clear();
    world.boss = None;
    world.march = initial_march(&world.config, wave);

    let kind = if is_boss_wave(&world.config.waves, wave) {
        let boss = build_boss(&world.config, wave);
        tracing::debug!(wave, hp = boss.max_hp, "boss wave");
        world.boss = Some(boss);
        WaveKind::Boss
    } else {
        world.enemies = build_formation(&world.config, wave);
        tracing::debug!(wave, enemies = world.enemies.len(), "formation wave");
        WaveKind::Formation
    };
    world.wave_kind = Some(kind);
    world.events.push(GameEvent::WaveStarted { wave, kind });
}
