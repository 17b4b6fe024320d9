//! Background starfield scroll.

use crate::world::GameWorld;

pub fn run(world: &mut GameWorld, dt: f32) {
    let height = world.config.field.height;
    for star in &mut world.stars {
        star.y += star.speed * dt;
        if star.y > height {
            star.y -= height;
        }
    }
}
