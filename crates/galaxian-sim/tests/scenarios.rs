//! End-to-end scenarios driven through the public engine API.

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use galaxian_behavior::motion::spawn_enemy_bullet;
use galaxian_core::commands::{InputState, PlayerCommand};
use galaxian_core::components::{EnemyBullet, FormationEnemy, PlayerShot, ShotKind, Swooper};
use galaxian_core::config::GameConfig;
use galaxian_core::constants::FRAME_SECS;
use galaxian_core::enums::*;
use galaxian_core::events::GameEvent;
use galaxian_core::state::GameStateSnapshot;
use galaxian_core::types::Rect;
use galaxian_sim::systems;
use galaxian_sim::world_setup::player_start;
use galaxian_sim::{GameEngine, GameWorld, SimConfig};

fn quiet_config() -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.enemies.fire_rate = 0.0;
    cfg.boss.fire_rate = 0.0;
    cfg.swoopers.cooldown_min_secs = 1.0e6;
    cfg.swoopers.cooldown_max_secs = 1.0e6;
    cfg.powerups.timer_min_secs = 1.0e6;
    cfg.powerups.timer_max_secs = 1.0e6;
    cfg.powerups.kill_drop_chance = 0.0;
    cfg.powerups.life_drop_chance = 0.0;
    cfg
}

fn started(seed: u64, game: GameConfig) -> GameEngine {
    let mut engine = GameEngine::new(SimConfig { seed, game }).expect("valid config");
    engine.queue_command(PlayerCommand::StartRun {
        name: "Ace".into(),
    });
    engine.step(FRAME_SECS);
    engine
}

fn bullet_at(center: Vec2, pierce: u32) -> PlayerShot {
    PlayerShot {
        rect: Rect::centered(center, 4.0, 10.0),
        kind: ShotKind::Bullet {
            velocity: Vec2::new(0.0, -600.0),
            pierce,
        },
        spent: false,
    }
}

fn hostile_at(center: Vec2) -> EnemyBullet {
    spawn_enemy_bullet(EnemyBulletKind::Normal, center, center)
}

fn count(snap: &GameStateSnapshot, pred: impl Fn(&GameEvent) -> bool) -> usize {
    snap.events.iter().filter(|e| pred(e)).count()
}

/// Run the collision pass alone, with no movement beforehand.
fn collide(engine: &mut GameEngine) {
    let table = engine.loot().clone();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    systems::collision::run(engine.world_mut(), &mut rng, &table, FRAME_SECS);
}

fn ship_center(world: &GameWorld) -> Vec2 {
    world.player.rect.center()
}

// ---- Waves ----

#[test]
fn clearing_first_formation_advances_to_wave_two() {
    let mut engine = started(1, quiet_config());
    let world = engine.world_mut();
    assert_eq!(world.enemies.len(), 21);
    let shots: Vec<PlayerShot> = world
        .enemies
        .iter()
        .map(|e| bullet_at(e.rect.center(), 0))
        .collect();
    world.player_shots.extend(shots);

    let snap = engine.step(FRAME_SECS);
    assert_eq!(
        count(&snap, |e| matches!(e, GameEvent::EnemyDestroyed { .. })),
        21
    );
    assert!(snap.events.contains(&GameEvent::WaveCleared { wave: 1 }));
    assert!(snap.events.contains(&GameEvent::WaveStarted {
        wave: 2,
        kind: WaveKind::Formation
    }));
    assert_eq!(snap.hud.wave, 2);
    assert_eq!(snap.hud.score, 21 * 50);
    assert_eq!(snap.enemies.len(), 21);
}

#[test]
fn partially_cleared_formation_keeps_wave() {
    let mut engine = started(1, quiet_config());
    for enemy in engine.world_mut().enemies.iter_mut().skip(1) {
        enemy.alive = false;
    }
    let snap = engine.step(FRAME_SECS);
    assert_eq!(snap.hud.wave, 1);
    assert_eq!(snap.enemies.len(), 1);
    // Dead members stay in the pool until the wave changes.
    assert_eq!(engine.world().enemies.len(), 21);
}

#[test]
fn formation_marches_and_drops_at_edge() {
    let mut engine = started(1, quiet_config());
    let y0 = engine.world().enemies[0].rect.y;
    // Push the grid against the right margin.
    let shift = 880.0 - engine.world().enemies[6].rect.right() - 0.1;
    for enemy in engine.world_mut().enemies.iter_mut() {
        enemy.rect.x += shift;
    }
    engine.step(FRAME_SECS);
    let world = engine.world();
    assert_eq!(world.march.direction, -1.0);
    assert_eq!(world.enemies[0].rect.y, y0 + 18.0);
}

#[test]
fn sunk_enemy_wraps_near_top() {
    let mut engine = started(1, quiet_config());
    engine.world_mut().enemies[0].rect.y = 500.0;
    engine.step(FRAME_SECS);
    let y = engine.world().enemies[0].rect.y;
    assert!((40.0..=120.0).contains(&y), "wrapped to {y}");
}

// ---- Boss ----

fn boss_engine() -> GameEngine {
    let mut engine = started(3, quiet_config());
    systems::waves::spawn_wave(engine.world_mut(), 10);
    engine
}

#[test]
fn wave_ten_is_a_boss_wave() {
    let engine = boss_engine();
    let world = engine.world();
    assert_eq!(world.wave_kind, Some(WaveKind::Boss));
    assert!(world.enemies.is_empty());
    let boss = world.boss.as_ref().expect("boss spawned");
    assert_eq!(boss.hp, 120);
    assert_eq!(boss.max_hp, 120);
}

#[test]
fn boss_survives_one_hit_short() {
    let mut engine = boss_engine();
    let center = engine.world().boss.as_ref().unwrap().rect.center();
    let shots: Vec<PlayerShot> = (0..119).map(|_| bullet_at(center, 0)).collect();
    engine.world_mut().player_shots.extend(shots);
    collide(&mut engine);

    let world = engine.world();
    let boss = world.boss.as_ref().unwrap();
    assert_eq!(boss.hp, 1);
    assert!(boss.alive);
    assert_eq!(world.player.score, 119 * 10);
    assert!(world.player_shots.iter().all(|s| s.spent));
}

#[test]
fn boss_dies_on_exact_hits_and_drops_loot() {
    let mut engine = boss_engine();
    let center = engine.world().boss.as_ref().unwrap().rect.center();
    let shots: Vec<PlayerShot> = (0..120).map(|_| bullet_at(center, 0)).collect();
    engine.world_mut().player_shots.extend(shots);
    collide(&mut engine);

    let world = engine.world();
    let boss = world.boss.as_ref().unwrap();
    assert_eq!(boss.hp, 0);
    assert!(!boss.alive);
    assert_eq!(world.player.score, 120 * 10 + 2000);
    assert_eq!(world.powerups.len(), 3);
    assert_eq!(world.powerups[0].kind, PowerUpKind::ExtraLife);
    assert!(world.events.contains(&GameEvent::BossDefeated {
        wave: 10,
        bonus: 2000
    }));
}

#[test]
fn boss_defeat_advances_to_next_wave() {
    let mut engine = boss_engine();
    let center = engine.world().boss.as_ref().unwrap().rect.center();
    let shots: Vec<PlayerShot> = (0..120).map(|_| bullet_at(center, 0)).collect();
    engine.world_mut().player_shots.extend(shots);

    let snap = engine.step(FRAME_SECS);
    assert!(snap.events.contains(&GameEvent::WaveStarted {
        wave: 11,
        kind: WaveKind::Formation
    }));
    assert_eq!(snap.hud.wave, 11);
    assert!(snap.boss.is_none());
    assert_eq!(snap.powerups.len(), 3);
}

#[test]
fn beam_damages_boss_over_time() {
    let mut cfg = quiet_config();
    cfg.boss.amplitude_x = 0.0;
    cfg.boss.amplitude_y = 0.0;
    let mut engine = started(3, cfg);
    systems::waves::spawn_wave(engine.world_mut(), 10);
    let now = engine.world().now();
    engine
        .world_mut()
        .buffs
        .extend(TimedBuff::Beam, now, 60_000.0);
    engine.queue_command(PlayerCommand::SetInput {
        input: InputState {
            fire: true,
            ..Default::default()
        },
    });
    for _ in 0..120 {
        engine.step(FRAME_SECS);
    }

    let world = engine.world();
    let boss = world.boss.as_ref().unwrap();
    let dealt = u64::from(boss.max_hp - boss.hp);
    assert!(dealt >= 5, "beam dealt {dealt}");
    assert!(boss.alive);
    assert_eq!(world.player.score, dealt * 2);
}

// ---- Collision details ----

fn stacked_enemies(engine: &mut GameEngine, n: usize) -> Vec2 {
    let rect = Rect::new(300.0, 200.0, 64.0, 48.0);
    let world = engine.world_mut();
    world.enemies = (0..n)
        .map(|_| FormationEnemy {
            rect,
            img_idx: 0,
            alive: true,
        })
        .collect();
    rect.center()
}

#[test]
fn plain_bullet_kills_one_enemy() {
    let mut engine = started(1, quiet_config());
    let center = stacked_enemies(&mut engine, 3);
    engine.world_mut().player_shots.push(bullet_at(center, 0));
    collide(&mut engine);

    let world = engine.world();
    assert_eq!(world.enemies.iter().filter(|e| !e.alive).count(), 1);
    assert!(world.player_shots[0].spent);
}

#[test]
fn pierce_bullet_hits_one_extra_target() {
    let mut engine = started(1, quiet_config());
    let center = stacked_enemies(&mut engine, 3);
    engine.world_mut().player_shots.push(bullet_at(center, 1));
    collide(&mut engine);

    let world = engine.world();
    assert_eq!(world.enemies.iter().filter(|e| !e.alive).count(), 2);
    assert!(world.player_shots[0].spent);
    assert_eq!(world.player.score, 100);
}

#[test]
fn beam_kills_everything_it_touches() {
    let mut engine = started(1, quiet_config());
    let center = stacked_enemies(&mut engine, 3);
    engine.world_mut().player_shots.push(PlayerShot {
        rect: Rect::new(center.x - 7.0, 0.0, 14.0, 500.0),
        kind: ShotKind::Beam { life: 0.12 },
        spent: false,
    });
    collide(&mut engine);

    let world = engine.world();
    assert!(world.enemies.iter().all(|e| !e.alive));
    assert!(!world.player_shots[0].spent);
}

#[test]
fn double_score_doubles_kill_award() {
    let mut engine = started(1, quiet_config());
    let center = stacked_enemies(&mut engine, 1);
    let now = engine.world().now();
    engine
        .world_mut()
        .buffs
        .extend(TimedBuff::DoubleScore, now, 10_000.0);
    engine.world_mut().player_shots.push(bullet_at(center, 0));
    collide(&mut engine);
    assert_eq!(engine.world().player.score, 100);
}

#[test]
fn swooper_kill_scores() {
    let mut cfg = quiet_config();
    cfg.swoopers.cooldown_min_secs = 0.05;
    cfg.swoopers.cooldown_max_secs = 0.05;
    let mut engine = started(4, cfg);
    for _ in 0..30 {
        engine.step(FRAME_SECS);
    }
    let swooper = engine.world().swoopers[0].clone();
    engine
        .world_mut()
        .player_shots
        .push(bullet_at(swooper.rect.center(), 0));
    let before = engine.world().player.score;
    collide(&mut engine);

    let world = engine.world();
    assert!(!world.swoopers[0].alive);
    assert_eq!(world.player.score - before, 150);
}

// ---- Player damage ----

#[test]
fn shields_absorb_three_hits_before_a_life() {
    let mut engine = started(1, quiet_config());
    engine.world_mut().buffs.add_shield(ShieldTier::Single, 1);
    engine.world_mut().buffs.add_shield(ShieldTier::Double, 2);

    let mut absorbed = Vec::new();
    for _ in 0..3 {
        let center = ship_center(engine.world());
        engine.world_mut().enemy_bullets.push(hostile_at(center));
        let snap = engine.step(FRAME_SECS);
        for event in &snap.events {
            if let GameEvent::ShieldAbsorbed { tier } = event {
                absorbed.push(*tier);
            }
        }
        assert_eq!(snap.hud.lives, 3);
    }
    assert_eq!(
        absorbed,
        vec![ShieldTier::Double, ShieldTier::Double, ShieldTier::Single]
    );

    let center = ship_center(engine.world());
    engine.world_mut().enemy_bullets.push(hostile_at(center));
    let snap = engine.step(FRAME_SECS);
    assert_eq!(snap.hud.lives, 2);
    assert!(snap.events.contains(&GameEvent::PlayerHit { lives: 2 }));
}

#[test]
fn last_life_ends_run_exactly_once() {
    let mut engine = started(1, quiet_config());
    engine.world_mut().player.lives = 1;
    let center = ship_center(engine.world());
    for _ in 0..3 {
        engine.world_mut().enemy_bullets.push(hostile_at(center));
    }

    let snap = engine.step(FRAME_SECS);
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.hud.lives, 0);
    assert_eq!(
        count(&snap, |e| matches!(e, GameEvent::GameOver { .. })),
        1
    );
    let summary = snap.summary.expect("summary on game over");
    assert_eq!(summary.name, "Ace");
    assert_eq!(summary.wave, 1);

    engine.world_mut().enemy_bullets.push(hostile_at(center));
    for _ in 0..10 {
        let snap = engine.step(FRAME_SECS);
        assert_eq!(snap.phase, GamePhase::GameOver);
        assert_eq!(
            count(&snap, |e| matches!(e, GameEvent::GameOver { .. })),
            0
        );
    }
    assert_eq!(engine.world().player.lives, 0);
}

// ---- Buff effects ----

#[test]
fn freeze_slows_march_by_factor() {
    let mut normal = started(8, quiet_config());
    let mut frozen = started(8, quiet_config());
    let now = frozen.world().now();
    frozen
        .world_mut()
        .buffs
        .extend(TimedBuff::Freeze, now, 1.0e9);

    let x_normal = normal.world().enemies[0].rect.x;
    let x_frozen = frozen.world().enemies[0].rect.x;
    for _ in 0..30 {
        normal.step(FRAME_SECS);
        frozen.step(FRAME_SECS);
    }
    let dx_normal = normal.world().enemies[0].rect.x - x_normal;
    let dx_frozen = frozen.world().enemies[0].rect.x - x_frozen;
    assert!(dx_normal > 0.0);
    assert!((dx_frozen / dx_normal - 0.55).abs() < 1e-3);
}

#[test]
fn pickup_applies_effects() {
    let mut engine = started(1, quiet_config());
    let center = ship_center(engine.world());
    {
        let world = engine.world_mut();
        systems::powerups::spawn(world, PowerUpKind::Multi, center);
        systems::powerups::spawn(world, PowerUpKind::ExtraLife, center);
        systems::powerups::spawn(world, PowerUpKind::MegaShield, center);
        systems::powerups::spawn(world, PowerUpKind::Shield, center);
    }
    let snap = engine.step(FRAME_SECS);

    assert_eq!(
        count(&snap, |e| matches!(e, GameEvent::PowerUpCollected { .. })),
        4
    );
    assert!(snap.powerups.is_empty());
    assert_eq!(snap.hud.lives, 4);
    assert_eq!(snap.buffs.shield_single, 1);
    assert_eq!(snap.buffs.shield_double, 2);
    assert!(snap
        .buffs
        .active
        .iter()
        .any(|b| b.buff == TimedBuff::Multi && b.remaining_ms > 8900.0));
}

#[test]
fn magnet_pulls_nearby_pickups() {
    let mut engine = started(1, quiet_config());
    let ship = ship_center(engine.world());
    let spot = ship + Vec2::new(120.0, -120.0);
    systems::powerups::spawn(engine.world_mut(), PowerUpKind::Pierce, spot);
    engine.step(FRAME_SECS);
    // Without the magnet it only falls.
    let x_plain = engine.world().powerups[0].rect.center().x;
    assert!((x_plain - spot.x).abs() < 1e-3);

    let now = engine.world().now();
    engine
        .world_mut()
        .buffs
        .extend(TimedBuff::Magnet, now, 10_000.0);
    engine.step(FRAME_SECS);
    let x_pulled = engine.world().powerups[0].rect.center().x;
    assert!(x_pulled < x_plain);
}

#[test]
fn drone_fires_at_nearest_hostile() {
    let mut engine = started(1, quiet_config());
    let now = engine.world().now();
    engine
        .world_mut()
        .buffs
        .extend(TimedBuff::Drone, now, 10_000.0);
    for _ in 0..30 {
        engine.step(FRAME_SECS);
    }

    let world = engine.world();
    assert!(!world.player_shots.is_empty());
    for shot in &world.player_shots {
        match shot.kind {
            ShotKind::Bullet { velocity, .. } => {
                assert!((velocity.length() - 560.0).abs() < 0.1);
                assert!(velocity.y < 0.0);
            }
            ShotKind::Beam { .. } => panic!("drone never fires beams"),
        }
    }
}

#[test]
fn off_field_projectiles_are_removed() {
    let mut engine = started(1, quiet_config());
    engine
        .world_mut()
        .enemy_bullets
        .push(hostile_at(Vec2::new(100.0, 700.0)));
    engine
        .world_mut()
        .player_shots
        .push(bullet_at(Vec2::new(100.0, -100.0), 0));
    engine.step(FRAME_SECS);
    assert!(engine.world().enemy_bullets.is_empty());
    assert!(engine.world().player_shots.is_empty());
}

#[test]
fn periodic_drops_spawn_during_play() {
    let mut cfg = quiet_config();
    cfg.powerups.timer_min_secs = 0.5;
    cfg.powerups.timer_max_secs = 0.5;
    let mut engine = started(2, cfg);
    let mut spawned = 0;
    for _ in 0..120 {
        let snap = engine.step(FRAME_SECS);
        spawned += count(&snap, |e| matches!(e, GameEvent::PowerUpSpawned { .. }));
    }
    assert!(spawned >= 3, "only {spawned} periodic drops in two seconds");
}

#[test]
fn swooper_kill_can_drop_loot() {
    let mut cfg = quiet_config();
    cfg.swoopers.cooldown_min_secs = 0.05;
    cfg.swoopers.cooldown_max_secs = 0.05;
    cfg.powerups.kill_drop_chance = 1.0;
    let mut engine = started(4, cfg);
    for _ in 0..30 {
        engine.step(FRAME_SECS);
    }
    let swooper = engine.world().swoopers[0].clone();
    engine
        .world_mut()
        .player_shots
        .push(bullet_at(swooper.rect.center(), 0));
    let before = engine.world().powerups.len();
    collide(&mut engine);
    assert_eq!(engine.world().powerups.len(), before + 1);
}

#[test]
fn respawn_moves_ship_out_of_remaining_volley() {
    let mut engine = started(1, quiet_config());
    engine.world_mut().player.rect.x = 100.0;
    let center = ship_center(engine.world());
    engine.world_mut().enemy_bullets.push(hostile_at(center));
    engine.world_mut().enemy_bullets.push(hostile_at(center));

    let snap = engine.step(FRAME_SECS);
    assert_eq!(snap.hud.lives, 2);
    assert_eq!(
        count(&snap, |e| matches!(e, GameEvent::PlayerHit { .. })),
        1
    );
    let world = engine.world();
    assert_eq!(
        world.player.rect,
        player_start(&world.config.player, &world.config.field)
    );
    // The second bullet missed the respawned ship and is still in flight.
    assert_eq!(snap.enemy_bullets.len(), 1);
}

#[test]
fn live_boss_keeps_the_wave() {
    let mut engine = boss_engine();
    for _ in 0..30 {
        let snap = engine.step(FRAME_SECS);
        assert_eq!(snap.hud.wave, 10);
        assert_eq!(snap.hud.wave_kind, Some(WaveKind::Boss));
        assert_eq!(
            count(&snap, |e| matches!(e, GameEvent::WaveCleared { .. })),
            0
        );
    }
    let world = engine.world();
    assert!(world.enemies.is_empty());
    assert!(world.boss.as_ref().is_some_and(|b| b.alive));
    assert!(!world.wave_cleared());
}

#[test]
fn drone_catches_up_on_long_frames() {
    let mut cfg = quiet_config();
    cfg.drone.fire_interval_secs = 0.01;
    let mut engine = started(1, cfg);
    let now = engine.world().now();
    engine
        .world_mut()
        .buffs
        .extend(TimedBuff::Drone, now, 10_000.0);
    engine.world_mut().player_shots.clear();

    engine.step(0.05);
    assert!(
        engine.world().player_shots.len() >= 2,
        "drone fired {} shots",
        engine.world().player_shots.len()
    );
}

#[test]
fn expired_beam_is_removed() {
    let mut engine = started(1, quiet_config());
    let ship = engine.world().player.rect;
    engine.world_mut().player_shots.push(PlayerShot {
        rect: Rect::new(ship.center().x - 7.0, 0.0, 14.0, ship.y),
        kind: ShotKind::Beam { life: 0.12 },
        spent: false,
    });

    engine.step(FRAME_SECS);
    assert!(engine.world().player_shots.iter().any(|s| s.is_beam()));
    for _ in 0..10 {
        engine.step(FRAME_SECS);
    }
    assert!(!engine.world().player_shots.iter().any(|s| s.is_beam()));
}

#[test]
fn swoopers_below_field_are_removed() {
    let mut engine = started(1, quiet_config());
    let swooper = |y: f32| Swooper {
        rect: Rect::new(400.0, y, 44.0, 34.0),
        base_x: 422.0,
        amplitude: 0.0,
        frequency: 0.0,
        t: 0.0,
        img_idx: 0,
        alive: true,
    };
    engine.world_mut().swoopers = vec![swooper(650.0), swooper(300.0)];

    engine.step(FRAME_SECS);
    let swoopers = &engine.world().swoopers;
    assert_eq!(swoopers.len(), 1);
    assert!(swoopers[0].rect.y < 600.0);
}
