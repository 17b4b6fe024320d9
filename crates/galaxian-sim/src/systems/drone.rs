//! Drone: while active, fires homing-aimed bullets from above the ship
//! at a fixed interval.

use glam::Vec2;

use galaxian_core::components::{PlayerShot, ShotKind};
use galaxian_core::constants::{BULLET_H, BULLET_W};
use galaxian_core::enums::TimedBuff;
use galaxian_core::types::Rect;

use crate::world::GameWorld;

pub fn run(world: &mut GameWorld, dt: f32) {
    let now = world.time.now_ms;
    if !world.buffs.is_active(TimedBuff::Drone, now) {
        world.buffs.drone_accum = 0.0;
        return;
    }

    let interval = world.config.drone.fire_interval_secs;
    world.buffs.drone_accum += dt;
    while world.buffs.drone_accum >= interval {
        world.buffs.drone_accum -= interval;
        fire(world);
    }
}

fn fire(world: &mut GameWorld) {
    let cfg = &world.config.drone;
    let origin = Vec2::new(
        world.player.rect.center().x,
        world.player.rect.y - cfg.muzzle_offset,
    );
    let dir = nearest_hostile(world, origin)
        .and_then(|target| (target - origin).try_normalize())
        .unwrap_or(Vec2::NEG_Y);
    let pierce = u32::from(world.buffs.is_active(TimedBuff::Pierce, world.time.now_ms));
    world.player_shots.push(PlayerShot {
        rect: Rect::centered(origin, BULLET_W, BULLET_H),
        kind: ShotKind::Bullet {
            velocity: dir * cfg.bullet_speed,
            pierce,
        },
        spent: false,
    });
}

/// Center of the closest living formation enemy, swooper, or boss.
pub fn nearest_hostile(world: &GameWorld, from: Vec2) -> Option<Vec2> {
    let enemies = world
        .enemies
        .iter()
        .filter(|e| e.alive)
        .map(|e| e.rect.center());
    let swoopers = world
        .swoopers
        .iter()
        .filter(|s| s.alive)
        .map(|s| s.rect.center());
    let boss = world
        .boss
        .iter()
        .filter(|b| b.alive)
        .map(|b| b.rect.center());
    enemies
        .chain(swoopers)
        .chain(boss)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}
