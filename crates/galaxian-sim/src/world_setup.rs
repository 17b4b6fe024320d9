//! Spawn factories for the player, waves, swoopers, pickups and stars.

use glam::Vec2;
use rand::Rng;

use galaxian_behavior::motion::March;
use galaxian_core::components::*;
use galaxian_core::config::{BossConfig, GameConfig, PlayerConfig, WaveConfig};
use galaxian_core::enums::PowerUpKind;
use galaxian_core::types::{FieldSize, Rect};

/// Draw from `[min, max]`, or return `min` if the range is empty.
pub fn roll_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

/// Where the ship sits at run start and after losing a life:
/// horizontally centered on the bottom of its movement band.
pub fn player_start(cfg: &PlayerConfig, field: &FieldSize) -> Rect {
    Rect::new(
        field.width / 2.0 - cfg.width / 2.0,
        field.height - cfg.height - cfg.margin_bottom,
        cfg.width,
        cfg.height,
    )
}

pub fn spawn_player(cfg: &PlayerConfig, field: &FieldSize, name: &str) -> Player {
    Player {
        rect: player_start(cfg, field),
        can_shoot_at: 0.0,
        lives: cfg.start_lives,
        score: 0,
        name: name.to_string(),
    }
}

/// Boss waves fall on multiples of the interval, starting at
/// `first_boss_wave`.
pub fn is_boss_wave(cfg: &WaveConfig, wave: u32) -> bool {
    wave >= cfg.first_boss_wave && wave % cfg.boss_interval == 0
}

pub fn boss_max_hp(cfg: &BossConfig, wave: u32) -> u32 {
    cfg.hp_base + (wave / cfg.hp_divisor) * cfg.hp_step
}

/// Rows grow by one every two waves, capped at what fits above the wrap
/// line.
pub fn formation_rows(cfg: &GameConfig, wave: u32) -> u32 {
    let grown = cfg.waves.base_rows + wave.saturating_sub(1) / 2;
    let e = &cfg.enemies;
    let wrap_line = cfg.field.height * e.wrap_fraction;
    let pitch = e.height + e.gap_y;
    let fit = if pitch > 0.0 {
        ((wrap_line - e.start_y) / pitch).floor() as i64 + 1
    } else {
        i64::from(grown)
    };
    let cap = fit.max(1).min(i64::from(u32::MAX)) as u32;
    grown.min(cap.max(cfg.waves.base_rows))
}

pub fn march_speed(cfg: &GameConfig, wave: u32) -> f32 {
    cfg.enemies.base_speed + wave.saturating_sub(1) as f32 * cfg.enemies.speed_per_wave
}

pub fn initial_march(cfg: &GameConfig, wave: u32) -> March {
    March {
        direction: 1.0,
        speed: march_speed(cfg, wave),
        drop: cfg.enemies.drop,
        edge_margin: cfg.enemies.edge_margin,
    }
}

/// Visual variant offset for a wave. Advances every few waves.
pub fn logo_offset(cfg: &WaveConfig, wave: u32) -> usize {
    (wave.saturating_sub(1) / cfg.logo_rotation_waves) as usize
}

/// Lay out a full grid for `wave`, every member alive.
pub fn build_formation(cfg: &GameConfig, wave: u32) -> Vec<FormationEnemy> {
    let e = &cfg.enemies;
    let rows = formation_rows(cfg, wave);
    let cols = cfg.waves.cols;
    let offset = logo_offset(&cfg.waves, wave);
    let mut enemies = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = e.start_x + col as f32 * (e.width + e.gap_x);
            let y = e.start_y + row as f32 * (e.height + e.gap_y);
            enemies.push(FormationEnemy {
                rect: Rect::new(x, y, e.width, e.height),
                img_idx: ((row * cols + col) as usize + offset) % cfg.waves.logo_count,
                alive: true,
            });
        }
    }
    enemies
}

pub fn build_boss(cfg: &GameConfig, wave: u32) -> Boss {
    let b = &cfg.boss;
    let w = cfg.field.width * b.width_fraction;
    let h = cfg.field.height * b.height_fraction;
    let base_x = cfg.field.width / 2.0;
    let base_y = b.base_y + h / 2.0;
    let hp = boss_max_hp(b, wave);
    Boss {
        rect: Rect::centered(Vec2::new(base_x, base_y), w, h),
        hp,
        max_hp: hp,
        t: 0.0,
        base_x,
        base_y,
        beam_damage: 0.0,
        alive: true,
    }
}

/// A swooper entering just above the top edge.
pub fn spawn_swooper<R: Rng>(rng: &mut R, cfg: &GameConfig) -> Swooper {
    let s = &cfg.swoopers;
    let amplitude = roll_range(rng, s.amplitude_min, s.amplitude_max);
    let frequency = roll_range(rng, s.frequency_min, s.frequency_max);
    let half = s.width / 2.0;
    let lo = amplitude + half;
    let hi = cfg.field.width - amplitude - half;
    let base_x = if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        cfg.field.width / 2.0
    };
    Swooper {
        rect: Rect::new(base_x - half, -s.height, s.width, s.height),
        base_x,
        amplitude,
        frequency,
        t: 0.0,
        img_idx: rng.gen_range(0..cfg.waves.logo_count),
        alive: true,
    }
}

pub fn make_powerup(cfg: &GameConfig, kind: PowerUpKind, center: Vec2) -> PowerUp {
    let size = cfg.powerups.size;
    PowerUp {
        rect: Rect::centered(center, size, size),
        vy: cfg.powerups.fall_speed,
        kind,
        spin: 0.0,
        collected: false,
    }
}

pub fn scatter_stars<R: Rng>(rng: &mut R, field: &FieldSize, count: usize) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..field.width),
            y: rng.gen_range(0.0..field.height),
            size: rng.gen_range(0.5..2.5),
            speed: rng.gen_range(15.0..60.0),
        })
        .collect()
}
