//! Player controller: movement within the lower band and shot emission.

use glam::Vec2;

use galaxian_core::components::{PlayerShot, ShotKind};
use galaxian_core::config::GameConfig;
use galaxian_core::constants::{BULLET_H, BULLET_W};
use galaxian_core::enums::TimedBuff;
use galaxian_core::events::GameEvent;
use galaxian_core::types::Rect;

use crate::world::GameWorld;

/// Gap between the ship's nose and a fresh bullet.
const MUZZLE_GAP: f32 = 8.0;

/// Move the ship from held input, then shoot if fire is held or requested.
pub fn run(world: &mut GameWorld, dt: f32) {
    move_ship(world, dt);

    let wants_fire = world.input.fire || world.fire_requested;
    world.fire_requested = false;
    if wants_fire {
        try_shoot(world);
    }
}

fn move_ship(world: &mut GameWorld, dt: f32) {
    let cfg = &world.config.player;
    let input = world.input;
    let mut dir = Vec2::ZERO;
    if input.left {
        dir.x -= 1.0;
    }
    if input.right {
        dir.x += 1.0;
    }
    if input.up {
        dir.y -= 1.0;
    }
    if input.down {
        dir.y += 1.0;
    }

    let mut speed = cfg.speed;
    if world.buffs.is_active(TimedBuff::SuperSpeed, world.time.now_ms) {
        speed *= cfg.super_speed_multiplier;
    }

    let mut rect = world.player.rect;
    rect.translate(dir * speed * dt);
    world.player.rect = clamp_to_band(rect, &world.config);
}

/// Keep the ship inside its horizontal margins and the lower band.
pub fn clamp_to_band(mut rect: Rect, config: &GameConfig) -> Rect {
    let cfg = &config.player;
    let field = &config.field;
    let min_x = cfg.margin_x;
    let max_x = (field.width - rect.w - cfg.margin_x).max(min_x);
    let min_y = field.height * cfg.top_fraction;
    let max_y = (field.height - rect.h - cfg.margin_bottom).max(min_y);
    rect.x = rect.x.clamp(min_x, max_x);
    rect.y = rect.y.clamp(min_y, max_y);
    rect
}

/// Emit a volley if the cooldown has elapsed. Returns whether it fired.
pub fn try_shoot(world: &mut GameWorld) -> bool {
    let now = world.time.now_ms;
    if now < world.player.can_shoot_at {
        return false;
    }
    let cfg = &world.config.player;
    let buffs = &world.buffs;
    let ship = world.player.rect;
    let cx = ship.center().x;

    let beam = buffs.is_active(TimedBuff::Beam, now);
    let cooldown = if beam {
        cfg.beam_cooldown_ms
    } else if buffs.is_active(TimedBuff::Rapid, now) {
        cfg.rapid_cooldown_ms
    } else {
        cfg.cooldown_ms
    };

    if beam {
        world.player_shots.push(PlayerShot {
            rect: beam_rect(cx, cfg.beam_width, ship.y),
            kind: ShotKind::Beam {
                life: cfg.beam_life_secs,
            },
            spent: false,
        });
    } else {
        let pierce = u32::from(buffs.is_active(TimedBuff::Pierce, now));
        let speed = cfg.bullet_speed;
        let y = ship.y - MUZZLE_GAP;
        let mut volley: Vec<(f32, Vec2)> = Vec::new();
        if buffs.is_active(TimedBuff::Spread, now) {
            for angle in &cfg.spread_angles_deg {
                let a = angle.to_radians();
                volley.push((cx, Vec2::new(a.sin(), -a.cos()) * speed));
            }
        } else if buffs.is_active(TimedBuff::Multi, now) {
            let up = Vec2::new(0.0, -speed);
            volley.push((cx - cfg.multi_offset, up));
            volley.push((cx + cfg.multi_offset, up));
        } else {
            volley.push((cx, Vec2::new(0.0, -speed)));
        }
        for (x, velocity) in volley {
            world.player_shots.push(PlayerShot {
                rect: Rect::new(x - BULLET_W / 2.0, y, BULLET_W, BULLET_H),
                kind: ShotKind::Bullet { velocity, pierce },
                spent: false,
            });
        }
    }

    world.player.can_shoot_at = now + cooldown;
    world.events.push(GameEvent::ShotFired { beam });
    true
}

/// Column from the top of the field down to the ship's nose.
pub fn beam_rect(center_x: f32, width: f32, ship_top: f32) -> Rect {
    Rect::new(center_x - width / 2.0, 0.0, width, ship_top.max(0.0))
}
