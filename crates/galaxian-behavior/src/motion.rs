//! Motion rules for every hostile population.
//!
//! All `dt` arguments are effective seconds: the caller has already
//! applied the freeze factor.

use glam::Vec2;

use galaxian_core::components::{Boss, EnemyBullet, EnemyBulletMotion, FormationEnemy, Swooper};
use galaxian_core::config::BossConfig;
use galaxian_core::enums::EnemyBulletKind;
use galaxian_core::types::{FieldSize, Rect};

use crate::profiles::bullet_profile;

/// Shared march state of a formation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct March {
    /// +1 moving right, -1 moving left.
    pub direction: f32,
    /// Horizontal speed (px/s).
    pub speed: f32,
    /// Vertical drop applied to every living member on a bounce.
    pub drop: f32,
    /// Distance from each field edge that triggers a bounce.
    pub edge_margin: f32,
}

/// Move every living member horizontally, then bounce and drop the whole
/// formation if its living extent crossed an edge margin.
/// Returns true if the formation bounced.
pub fn march_formation(
    enemies: &mut [FormationEnemy],
    march: &mut March,
    dt: f32,
    field: &FieldSize,
) -> bool {
    let dx = march.direction * march.speed * dt;
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;

    for enemy in enemies.iter_mut().filter(|e| e.alive) {
        enemy.rect.x += dx;
        min_x = min_x.min(enemy.rect.x);
        max_x = max_x.max(enemy.rect.right());
    }

    // No living members: nothing to bounce.
    if min_x > max_x {
        return false;
    }

    let crossed_left = march.direction < 0.0 && min_x < march.edge_margin;
    let crossed_right = march.direction > 0.0 && max_x > field.width - march.edge_margin;
    if crossed_left || crossed_right {
        march.direction = -march.direction;
        for enemy in enemies.iter_mut().filter(|e| e.alive) {
            enemy.rect.y += march.drop;
        }
        return true;
    }
    false
}

/// True once an enemy has sunk past the wrap line.
pub fn below_wrap_line(rect: &Rect, field: &FieldSize, wrap_fraction: f32) -> bool {
    rect.y > field.height * wrap_fraction
}

/// Weave offset of the boss from its base point after `t` seconds.
pub fn boss_offset(t: f32, cfg: &BossConfig) -> Vec2 {
    Vec2::new(
        cfg.amplitude_x * (cfg.frequency_x * t).sin(),
        cfg.amplitude_y * (cfg.frequency_y * t).sin(),
    )
}

/// Advance the boss weave. The base point is the rectangle's center.
pub fn advance_boss(boss: &mut Boss, dt: f32, cfg: &BossConfig) {
    boss.t += dt;
    let center = Vec2::new(boss.base_x, boss.base_y) + boss_offset(boss.t, cfg);
    boss.rect = Rect::centered(center, boss.rect.w, boss.rect.h);
}

/// Advance a swooper along its sinusoidal dive.
pub fn advance_swooper(swooper: &mut Swooper, dt: f32, drift: f32) {
    swooper.t += dt;
    swooper.rect.y += drift * dt;
    let center_x = swooper.base_x + swooper.amplitude * (swooper.frequency * swooper.t).sin();
    swooper.rect.x = center_x - swooper.rect.w / 2.0;
}

/// Advance an enemy bullet by its archetype's motion rule.
pub fn advance_enemy_bullet(bullet: &mut EnemyBullet, dt: f32) {
    match &mut bullet.motion {
        EnemyBulletMotion::Normal { vy }
        | EnemyBulletMotion::Needle { vy }
        | EnemyBulletMotion::Heavy { vy } => {
            bullet.rect.y += *vy * dt;
        }
        EnemyBulletMotion::Zigzag {
            base_x,
            vy,
            amplitude,
            frequency,
            t,
        } => {
            *t += dt;
            bullet.rect.y += *vy * dt;
            bullet.rect.x = *base_x + *amplitude * (*frequency * *t).sin();
        }
        EnemyBulletMotion::Aimed { velocity } => {
            bullet.rect.translate(*velocity * dt);
        }
    }
}

/// Unit vector from `from` toward `to`. Straight down if they coincide.
pub fn aim(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).try_normalize().unwrap_or(Vec2::Y)
}

/// Create a bullet of `kind` centered on `muzzle`. `target` is only used
/// by the aimed archetype.
pub fn spawn_enemy_bullet(kind: EnemyBulletKind, muzzle: Vec2, target: Vec2) -> EnemyBullet {
    let profile = bullet_profile(kind);
    let rect = Rect::centered(muzzle, profile.width, profile.height);
    let motion = match kind {
        EnemyBulletKind::Normal => EnemyBulletMotion::Normal { vy: profile.speed },
        EnemyBulletKind::Needle => EnemyBulletMotion::Needle { vy: profile.speed },
        EnemyBulletKind::Heavy => EnemyBulletMotion::Heavy { vy: profile.speed },
        EnemyBulletKind::Zigzag => EnemyBulletMotion::Zigzag {
            base_x: rect.x,
            vy: profile.speed,
            amplitude: galaxian_core::constants::ZIGZAG_AMPLITUDE,
            frequency: galaxian_core::constants::ZIGZAG_FREQUENCY,
            t: 0.0,
        },
        EnemyBulletKind::Aimed => EnemyBulletMotion::Aimed {
            velocity: aim(muzzle, target) * profile.speed,
        },
    };
    EnemyBullet {
        rect,
        motion,
        spent: false,
    }
}

/// Aimed bullets fanned symmetrically around the direction to `target`,
/// `step_deg` apart.
pub fn fan_volley(count: usize, step_deg: f32, muzzle: Vec2, target: Vec2) -> Vec<EnemyBullet> {
    let profile = bullet_profile(EnemyBulletKind::Aimed);
    let heading = aim(muzzle, target);
    let mid = (count as f32 - 1.0) / 2.0;
    (0..count)
        .map(|i| {
            let angle = (i as f32 - mid) * step_deg.to_radians();
            let dir = Vec2::from_angle(angle).rotate(heading);
            EnemyBullet {
                rect: Rect::centered(muzzle, profile.width, profile.height),
                motion: EnemyBulletMotion::Aimed {
                    velocity: dir * profile.speed,
                },
                spent: false,
            }
        })
        .collect()
}
