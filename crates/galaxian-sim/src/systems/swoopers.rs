//! Swoopers: spawned on their own randomized cooldown regardless of the
//! current wave, then dive along a sinusoid.

use rand_chacha::ChaCha8Rng;

use galaxian_behavior::motion::advance_swooper;

use crate::world::GameWorld;
use crate::world_setup::{roll_range, spawn_swooper};

/// `dt` drives the spawn timer; `hostile_dt` is the freeze-scaled delta
/// for motion.
pub fn run(world: &mut GameWorld, rng: &mut ChaCha8Rng, dt: f32, hostile_dt: f32) {
    world.swooper_cooldown -= dt;
    if world.swooper_cooldown <= 0.0 {
        let swooper = spawn_swooper(rng, &world.config);
        world.swoopers.push(swooper);
        world.swooper_cooldown = next_cooldown(world, rng);
    }

    let drift = world.config.swoopers.drift;
    for swooper in world.swoopers.iter_mut().filter(|s| s.alive) {
        advance_swooper(swooper, hostile_dt, drift);
    }
}

pub fn next_cooldown(world: &GameWorld, rng: &mut ChaCha8Rng) -> f32 {
    let cfg = &world.config.swoopers;
    roll_range(rng, cfg.cooldown_min_secs, cfg.cooldown_max_secs)
}
