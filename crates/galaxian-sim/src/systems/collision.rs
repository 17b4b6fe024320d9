//! Collision resolver.
//!
//! Runs after movement, in a fixed order: player shots against the boss,
//! then the formation, then swoopers, then hostile bullets against the
//! ship. Bullets are consumed per their pierce count; beams are lethal on
//! contact with formation members and swoopers and deal damage over time
//! to the boss.

use glam::Vec2;
use rand_chacha::ChaCha8Rng;

use galaxian_core::components::{PlayerShot, ShotKind};
use galaxian_core::enums::PowerUpKind;
use galaxian_core::events::GameEvent;

use crate::loot::PowerUpTable;
use crate::scoring::award;
use crate::systems::powerups;
use crate::world::GameWorld;
use crate::world_setup::player_start;

/// Horizontal spacing of the pickups a defeated boss releases.
const BOSS_DROP_SPACING: f32 = 30.0;

pub fn run(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable, dt: f32) {
    shots_vs_boss(world, rng, table, dt);
    shots_vs_formation(world, rng, table);
    shots_vs_swoopers(world, rng, table);
    bullets_vs_player(world);
}

/// Register one hit on a bullet: burn a pierce charge or spend it.
fn consume(shot: &mut PlayerShot) {
    if let ShotKind::Bullet { pierce, .. } = &mut shot.kind {
        if *pierce > 0 {
            *pierce -= 1;
        } else {
            shot.spent = true;
        }
    }
}

fn shots_vs_boss(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable, dt: f32) {
    let now = world.time.now_ms;
    let scoring = &world.config.scoring;
    let beam_dps = world.config.boss.beam_dps;
    let Some(boss) = world.boss.as_mut().filter(|b| b.alive) else {
        return;
    };

    for shot in world.player_shots.iter_mut().filter(|s| !s.spent) {
        if boss.hp == 0 {
            break;
        }
        if !shot.rect.overlaps(&boss.rect) {
            continue;
        }
        match shot.kind {
            ShotKind::Bullet { .. } => {
                boss.hp -= 1;
                consume(shot);
                award(&mut world.player, &world.buffs, scoring, now, scoring.boss_hit);
                world.events.push(GameEvent::BossHit { hp: boss.hp });
            }
            ShotKind::Beam { .. } => {
                boss.beam_damage += beam_dps * dt;
                let whole = boss.beam_damage.floor();
                if whole >= 1.0 {
                    boss.beam_damage -= whole;
                    let dealt = (whole as u32).min(boss.hp);
                    boss.hp -= dealt;
                    award(
                        &mut world.player,
                        &world.buffs,
                        scoring,
                        now,
                        scoring.beam_boss_hit * u64::from(dealt),
                    );
                    world.events.push(GameEvent::BossHit { hp: boss.hp });
                }
            }
        }
    }

    if boss.hp == 0 {
        boss.alive = false;
        let center = boss.rect.center();
        defeat_boss(world, rng, table, center);
    }
}

/// Bonus, then one guaranteed extra life plus random drops.
fn defeat_boss(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable, at: Vec2) {
    let now = world.time.now_ms;
    let scoring = &world.config.scoring;
    let bonus = award(
        &mut world.player,
        &world.buffs,
        scoring,
        now,
        scoring.boss_defeat_bonus,
    );
    tracing::debug!(wave = world.wave, bonus, "boss defeated");
    world.events.push(GameEvent::BossDefeated {
        wave: world.wave,
        bonus,
    });

    powerups::spawn(world, PowerUpKind::ExtraLife, at);
    let drops = world.config.powerups.boss_random_drops;
    let mid = (drops as f32 - 1.0) / 2.0;
    for i in 0..drops {
        let kind = table.pick(rng);
        let dx = (i as f32 - mid) * BOSS_DROP_SPACING;
        powerups::spawn(world, kind, at + Vec2::new(dx, 0.0));
    }
}

fn shots_vs_formation(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable) {
    let now = world.time.now_ms;
    let mut kills = Vec::new();
    for shot in world.player_shots.iter_mut().filter(|s| !s.spent) {
        for enemy in world.enemies.iter_mut().filter(|e| e.alive) {
            if !shot.rect.overlaps(&enemy.rect) {
                continue;
            }
            enemy.alive = false;
            kills.push(enemy.rect.center());
            consume(shot);
            if shot.spent {
                break;
            }
        }
    }

    let points = world.config.scoring.enemy_kill;
    for at in kills {
        award(&mut world.player, &world.buffs, &world.config.scoring, now, points);
        world.events.push(GameEvent::EnemyDestroyed { x: at.x, y: at.y });
        powerups::roll_kill_drop(world, rng, table, at);
    }
}

fn shots_vs_swoopers(world: &mut GameWorld, rng: &mut ChaCha8Rng, table: &PowerUpTable) {
    let now = world.time.now_ms;
    let mut kills = Vec::new();
    for shot in world.player_shots.iter_mut().filter(|s| !s.spent) {
        for swooper in world.swoopers.iter_mut().filter(|s| s.alive) {
            if !shot.rect.overlaps(&swooper.rect) {
                continue;
            }
            swooper.alive = false;
            kills.push(swooper.rect.center());
            consume(shot);
            if shot.spent {
                break;
            }
        }
    }

    let points = world.config.scoring.swooper_kill;
    for at in kills {
        award(&mut world.player, &world.buffs, &world.config.scoring, now, points);
        world.events.push(GameEvent::SwooperDestroyed { x: at.x, y: at.y });
        powerups::roll_kill_drop(world, rng, table, at);
    }
}

/// Bullets are resolved one at a time against the ship's current rect,
/// so a respawn moves the ship out of the rest of the volley.
fn bullets_vs_player(world: &mut GameWorld) {
    for i in 0..world.enemy_bullets.len() {
        let ship = world.player.rect;
        let bullet = &mut world.enemy_bullets[i];
        if bullet.spent || !bullet.rect.overlaps(&ship) {
            continue;
        }
        bullet.spent = true;
        if hit_player(world) {
            break;
        }
    }
}

/// Apply one hostile hit. Shields absorb first; otherwise a life is lost
/// and the ship respawns at its start position. Returns true once the
/// run has ended.
pub fn hit_player(world: &mut GameWorld) -> bool {
    if let Some(tier) = world.buffs.absorb_hit() {
        world.events.push(GameEvent::ShieldAbsorbed { tier });
        return false;
    }

    world.player.lives = world.player.lives.saturating_sub(1);
    world.events.push(GameEvent::PlayerHit {
        lives: world.player.lives,
    });
    if world.player.lives == 0 {
        world.end_run();
        return true;
    }
    world.player.rect = player_start(&world.config.player, &world.config.field);
    false
}
