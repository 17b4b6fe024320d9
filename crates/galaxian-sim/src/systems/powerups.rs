//! Power-up drops, fall and magnet pull, and pickup.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxian_core::enums::{PowerUpKind, ShieldTier, TimedBuff};
use galaxian_core::events::GameEvent;

use crate::loot::PowerUpTable;
use crate::world::GameWorld;
use crate::world_setup::{make_powerup, roll_range};

pub fn run(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable, dt: f32) {
    periodic_drop(world, rng, table, dt);
    advance(world, dt);
    collect(world);
}

/// Spawn a pickup of `kind` centered on `at`.
pub fn spawn(world: &mut GameWorld, kind: PowerUpKind, at: Vec2) {
    let powerup = make_powerup(&world.config, kind, at);
    world.powerups.push(powerup);
    world.events.push(GameEvent::PowerUpSpawned { kind });
}

/// Roll the kill-drop chances for a destroyed enemy at `at`. The
/// extra-life roll is independent and wins over the random drop.
pub fn roll_kill_drop(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable, at: Vec2) {
    let cfg = &world.config.powerups;
    let life = rng.gen_bool(cfg.life_drop_chance.clamp(0.0, 1.0));
    let random = rng.gen_bool(cfg.kill_drop_chance.clamp(0.0, 1.0));
    if life {
        spawn(world, PowerUpKind::ExtraLife, at);
    } else if random {
        let kind = table.pick(rng);
        spawn(world, kind, at);
    }
}

pub fn next_timer(world: &GameWorld, rng: &mut ChaCha8Rng) -> f32 {
    let cfg = &world.config.powerups;
    roll_range(rng, cfg.timer_min_secs, cfg.timer_max_secs)
}

fn periodic_drop(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable, dt: f32) {
    world.powerup_timer -= dt;
    if world.powerup_timer > 0.0 {
        return;
    }
    let half = world.config.powerups.size / 2.0;
    let x = roll_range(rng, half, world.config.field.width - half);
    let kind = table.pick(rng);
    spawn(world, kind, Vec2::new(x, -half));
    world.powerup_timer = next_timer(world, rng);
}

/// Fall straight down, or home on the ship while the magnet is active
/// and the pickup is within range.
fn advance(world: &mut GameWorld, dt: f32) {
    let cfg = &world.config.powerups;
    let magnet = world.buffs.is_active(TimedBuff::Magnet, world.time.now_ms);
    let ship = world.player.rect.center();
    for powerup in world.powerups.iter_mut().filter(|p| !p.collected) {
        powerup.spin += cfg.spin_rate * dt;
        let center = powerup.rect.center();
        let to_ship = ship - center;
        let distance = to_ship.length();
        if magnet && distance <= cfg.magnet_radius && distance > 0.0 {
            let step = (cfg.magnet_speed * dt).min(distance);
            powerup.rect.translate(to_ship / distance * step);
        } else {
            powerup.rect.y += powerup.vy * dt;
        }
    }
}

fn collect(world: &mut GameWorld) {
    let ship = world.player.rect;
    let mut picked = Vec::new();
    for powerup in world.powerups.iter_mut().filter(|p| !p.collected) {
        if powerup.rect.overlaps(&ship) {
            powerup.collected = true;
            picked.push(powerup.kind);
        }
    }
    for kind in picked {
        apply(world, kind);
    }
}

/// Apply a collected pickup's effect to the run.
pub fn apply(world: &mut GameWorld, kind: PowerUpKind) {
    let now = world.time.now_ms;
    if let Some(buff) = kind.timed_buff() {
        let duration = world.config.buffs.duration_ms(buff);
        world.buffs.extend(buff, now, duration);
    } else {
        match kind {
            PowerUpKind::Shield => world.buffs.add_shield(ShieldTier::Single, 1),
            PowerUpKind::MegaShield => world.buffs.add_shield(ShieldTier::Double, 2),
            PowerUpKind::ExtraLife => {
                world.player.lives = world.player.lives.saturating_add(1);
            }
            _ => {}
        }
    }
    tracing::debug!(?kind, "power-up collected");
    world.events.push(GameEvent::PowerUpCollected { kind });
}
