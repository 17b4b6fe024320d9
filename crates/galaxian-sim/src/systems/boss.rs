//! Boss wave: weave and volley fire.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxian_behavior::motion::{advance_boss, fan_volley, spawn_enemy_bullet};
use galaxian_behavior::profiles::{pick_boss_pattern, volley_size};
use galaxian_core::enums::{BossPattern, EnemyBulletKind};

use crate::world::GameWorld;

/// `dt` is the freeze-scaled delta.
pub fn run(world: &mut GameWorld, rng: &mut ChaCha8Rng, dt: f32) {
    let cfg = &world.config.boss;
    let Some(boss) = world.boss.as_mut().filter(|b| b.alive) else {
        return;
    };
    advance_boss(boss, dt, cfg);

    let chance = (cfg.fire_rate * dt).clamp(0.0, 1.0);
    if rng.gen::<f32>() >= chance {
        return;
    }
    let muzzle = Vec2::new(boss.rect.center().x, boss.rect.bottom());
    let target = world.player.rect.center();
    let pattern = pick_boss_pattern(rng.gen());
    match pattern {
        BossPattern::Single => world.enemy_bullets.push(spawn_enemy_bullet(
            EnemyBulletKind::Normal,
            muzzle,
            target,
        )),
        BossPattern::AimedSpread | BossPattern::AimedBurst => {
            world.enemy_bullets.extend(fan_volley(
                volley_size(pattern),
                cfg.spread_step_deg,
                muzzle,
                target,
            ));
        }
    }
}
