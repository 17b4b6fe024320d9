//! Snapshot builder: copies the visible world into a `GameStateSnapshot`.

use galaxian_core::enums::GamePhase;
use galaxian_core::events::GameEvent;
use galaxian_core::state::{GameStateSnapshot, HudView};

use crate::autofire::AutoFire;
use crate::world::GameWorld;

/// Build a snapshot. Formation members are filtered to the living ones.
pub fn build_snapshot(
    world: &GameWorld,
    autofire: &AutoFire,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let now = world.time.now_ms;
    GameStateSnapshot {
        time: world.time,
        field: world.config.field,
        phase: world.phase,
        hud: HudView {
            score: world.player.score,
            lives: world.player.lives,
            wave: world.wave,
            wave_kind: world.wave_kind,
            paused: world.phase == GamePhase::Paused,
        },
        player: world.player.clone(),
        enemies: world.enemies.iter().filter(|e| e.alive).cloned().collect(),
        boss: world.boss.clone().filter(|b| b.alive),
        swoopers: world.swoopers.iter().filter(|s| s.alive).cloned().collect(),
        player_shots: world.player_shots.iter().filter(|s| !s.spent).cloned().collect(),
        enemy_bullets: world.enemy_bullets.iter().filter(|b| !b.spent).cloned().collect(),
        powerups: world.powerups.iter().filter(|p| !p.collected).cloned().collect(),
        buffs: world.buffs.view(now),
        stars: world.stars.clone(),
        auto_fire: autofire.view(),
        events,
        summary: world.summary.clone(),
    }
}
