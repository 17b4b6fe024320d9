//! Projectile integration for both sides.

use galaxian_behavior::motion::advance_enemy_bullet;
use galaxian_core::components::ShotKind;

use crate::systems::player::beam_rect;
use crate::world::GameWorld;

/// Move player bullets and age beams. Beams track the ship's column.
pub fn advance_player_shots(world: &mut GameWorld, dt: f32) {
    let ship = world.player.rect;
    let beam_width = world.config.player.beam_width;
    for shot in world.player_shots.iter_mut().filter(|s| !s.spent) {
        match &mut shot.kind {
            ShotKind::Bullet { velocity, .. } => shot.rect.translate(*velocity * dt),
            ShotKind::Beam { life } => {
                *life -= dt;
                shot.rect = beam_rect(ship.center().x, beam_width, ship.y);
            }
        }
    }
}

/// Move hostile bullets by their archetype rule. `dt` is freeze-scaled.
pub fn advance_enemy_bullets(world: &mut GameWorld, dt: f32) {
    for bullet in world.enemy_bullets.iter_mut().filter(|b| !b.spent) {
        advance_enemy_bullet(bullet, dt);
    }
}
