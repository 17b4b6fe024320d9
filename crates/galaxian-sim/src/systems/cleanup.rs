//! End-of-frame compaction of the transient pools.
//!
//! Formation members are left in place; the wave director clears them.

use galaxian_core::components::ShotKind;
use galaxian_core::constants::CULL_MARGIN;

use crate::world::GameWorld;

pub fn run(world: &mut GameWorld) {
    let field = world.config.field;

    world.player_shots.retain(|shot| {
        !shot.spent
            && match shot.kind {
                ShotKind::Bullet { .. } => !shot.rect.outside(&field, CULL_MARGIN),
                ShotKind::Beam { life } => life > 0.0,
            }
    });
    world
        .enemy_bullets
        .retain(|b| !b.spent && !b.rect.outside(&field, CULL_MARGIN));
    world
        .powerups
        .retain(|p| !p.collected && p.rect.y <= field.height + CULL_MARGIN);
    world
        .swoopers
        .retain(|s| s.alive && s.rect.y <= field.height);
}
