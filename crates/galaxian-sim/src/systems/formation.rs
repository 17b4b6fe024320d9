//! Formation wave: march, wrap, and probabilistic fire.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxian_behavior::motion::{below_wrap_line, march_formation, spawn_enemy_bullet};
use galaxian_behavior::profiles::pick_bullet_kind;

use crate::world::GameWorld;
use crate::world_setup::roll_range;

/// `dt` is the freeze-scaled delta.
pub fn run(world: &mut GameWorld, rng: &mut ChaCha8Rng, dt: f32) {
    if world.enemies.is_empty() {
        return;
    }
    let field = world.config.field;
    march_formation(&mut world.enemies, &mut world.march, dt, &field);
    wrap(world, rng);
    fire(world, rng, dt);
}

/// Members that sank past the wrap line reappear near the top.
fn wrap(world: &mut GameWorld, rng: &mut ChaCha8Rng) {
    let field = world.config.field;
    let cfg = &world.config.enemies;
    for enemy in world.enemies.iter_mut().filter(|e| e.alive) {
        if below_wrap_line(&enemy.rect, &field, cfg.wrap_fraction) {
            enemy.rect.y = roll_range(rng, cfg.wrap_min_y, cfg.wrap_max_y);
            enemy.rect.x = roll_range(
                rng,
                cfg.edge_margin,
                field.width - enemy.rect.w - cfg.edge_margin,
            );
        }
    }
}

/// Every living member rolls against `fire_rate * dt` each frame.
fn fire(world: &mut GameWorld, rng: &mut ChaCha8Rng, dt: f32) {
    let chance = (world.config.enemies.fire_rate * dt).clamp(0.0, 1.0);
    let target = world.player.rect.center();
    for enemy in world.enemies.iter().filter(|e| e.alive) {
        if rng.gen::<f32>() < chance {
            let kind = pick_bullet_kind(rng.gen());
            let muzzle = Vec2::new(enemy.rect.center().x, enemy.rect.bottom());
            world
                .enemy_bullets
                .push(spawn_enemy_bullet(kind, muzzle, target));
        }
    }
}
