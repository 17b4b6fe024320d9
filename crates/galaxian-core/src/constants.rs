//! Engine constants and tuning defaults.
//!
//! Speeds are in pixels per second, durations in milliseconds unless the
//! name says otherwise. `GameConfig::default()` is built from these.

/// Nominal frame rate (Hz) the tuning was done at.
pub const TICK_RATE: u32 = 60;

/// Seconds per nominal frame.
pub const FRAME_SECS: f32 = 1.0 / TICK_RATE as f32;

/// Largest step the frame driver will integrate (50 ms).
pub const MAX_FRAME_SECS: f32 = 0.05;

// --- Field ---

pub const FIELD_WIDTH: f32 = 900.0;
pub const FIELD_HEIGHT: f32 = 600.0;

/// Extra room past the field edge before a bullet or pickup is culled.
pub const CULL_MARGIN: f32 = 20.0;

// --- Player ---

pub const PLAYER_W: f32 = 46.0;
pub const PLAYER_H: f32 = 32.0;
pub const PLAYER_SPEED: f32 = 360.0;
pub const SUPER_SPEED_MULTIPLIER: f32 = 1.5;
/// Horizontal inset from each field edge.
pub const PLAYER_MARGIN_X: f32 = 10.0;
/// Gap kept between the player and the bottom edge.
pub const PLAYER_MARGIN_BOTTOM: f32 = 10.0;
/// The player cannot fly above this fraction of the field height.
pub const PLAYER_TOP_FRACTION: f32 = 0.55;
pub const PLAYER_START_LIVES: u32 = 3;

pub const SHOT_COOLDOWN_MS: f64 = 240.0;
pub const RAPID_COOLDOWN_MS: f64 = 110.0;
pub const BEAM_COOLDOWN_MS: f64 = 160.0;

pub const BULLET_SPEED: f32 = 600.0;
pub const BULLET_W: f32 = 4.0;
pub const BULLET_H: f32 = 10.0;
/// Spread volley angles from vertical, degrees.
pub const SPREAD_ANGLES_DEG: [f32; 5] = [-20.0, -10.0, 0.0, 10.0, 20.0];
/// Horizontal offset of each multishot barrel from the ship center.
pub const MULTI_SHOT_OFFSET: f32 = 10.0;
pub const BEAM_W: f32 = 14.0;
pub const BEAM_LIFE_SECS: f32 = 0.12;

// --- Formation ---

pub const ENEMY_W: f32 = 64.0;
pub const ENEMY_H: f32 = 48.0;
pub const ENEMY_GAP_X: f32 = 18.0;
pub const ENEMY_GAP_Y: f32 = 20.0;
pub const FORMATION_BASE_ROWS: u32 = 3;
pub const FORMATION_COLS: u32 = 7;
pub const FORMATION_START_X: f32 = 60.0;
pub const FORMATION_START_Y: f32 = 80.0;
pub const FORMATION_BASE_SPEED: f32 = 36.0;
pub const FORMATION_SPEED_PER_WAVE: f32 = 7.2;
pub const FORMATION_DROP: f32 = 18.0;
pub const FORMATION_EDGE_MARGIN: f32 = 20.0;
/// Expected shots per second per living formation enemy.
pub const ENEMY_FIRE_RATE: f32 = 0.045;
/// Enemies whose top passes this fraction of the field height wrap to the top.
pub const ENEMY_WRAP_FRACTION: f32 = 0.78;
pub const ENEMY_WRAP_MIN_Y: f32 = 40.0;
pub const ENEMY_WRAP_MAX_Y: f32 = 120.0;

// --- Boss ---

pub const BOSS_INTERVAL: u32 = 10;
pub const FIRST_BOSS_WAVE: u32 = 10;
pub const BOSS_HP_BASE: u32 = 60;
pub const BOSS_HP_DIVISOR: u32 = 3;
pub const BOSS_HP_STEP: u32 = 20;
pub const BOSS_W_FRACTION: f32 = 0.22;
pub const BOSS_H_FRACTION: f32 = 0.16;
pub const BOSS_BASE_Y: f32 = 70.0;
pub const BOSS_AMPLITUDE_X: f32 = 260.0;
pub const BOSS_FREQUENCY_X: f32 = 0.6;
pub const BOSS_AMPLITUDE_Y: f32 = 24.0;
pub const BOSS_FREQUENCY_Y: f32 = 1.3;
/// Expected volleys per second.
pub const BOSS_FIRE_RATE: f32 = 1.4;
/// Angle between neighboring bullets of a boss spread/burst, degrees.
pub const BOSS_SPREAD_STEP_DEG: f32 = 12.0;
/// Beam damage against the boss, hit points per second.
pub const BEAM_BOSS_DPS: f32 = 12.0;

// --- Swoopers ---

pub const SWOOPER_W: f32 = 44.0;
pub const SWOOPER_H: f32 = 34.0;
pub const SWOOPER_COOLDOWN_MIN_SECS: f32 = 2.5;
pub const SWOOPER_COOLDOWN_MAX_SECS: f32 = 6.0;
pub const SWOOPER_DRIFT: f32 = 90.0;
pub const SWOOPER_AMPLITUDE_MIN: f32 = 60.0;
pub const SWOOPER_AMPLITUDE_MAX: f32 = 140.0;
pub const SWOOPER_FREQUENCY_MIN: f32 = 1.5;
pub const SWOOPER_FREQUENCY_MAX: f32 = 3.0;

// --- Enemy bullets ---

pub const NORMAL_BULLET_SPEED: f32 = 280.0;
pub const NEEDLE_BULLET_SPEED: f32 = 480.0;
pub const HEAVY_BULLET_SPEED: f32 = 170.0;
pub const ZIGZAG_BULLET_SPEED: f32 = 240.0;
pub const ZIGZAG_AMPLITUDE: f32 = 28.0;
pub const ZIGZAG_FREQUENCY: f32 = 8.0;
pub const AIMED_BULLET_SPEED: f32 = 300.0;

// --- Scoring ---

pub const ENEMY_KILL_SCORE: u64 = 50;
pub const SWOOPER_KILL_SCORE: u64 = 150;
pub const BOSS_HIT_SCORE: u64 = 10;
pub const BEAM_BOSS_HIT_SCORE: u64 = 2;
pub const BOSS_DEFEAT_BONUS: u64 = 2000;
pub const DOUBLE_SCORE_MULTIPLIER: u64 = 2;

// --- Power-ups ---

pub const POWERUP_SIZE: f32 = 26.0;
pub const POWERUP_FALL_SPEED: f32 = 110.0;
pub const POWERUP_SPIN_RATE: f32 = 3.0;
pub const POWERUP_TIMER_MIN_SECS: f32 = 8.0;
pub const POWERUP_TIMER_MAX_SECS: f32 = 14.0;
pub const POWERUP_KILL_DROP_CHANCE: f64 = 0.06;
pub const POWERUP_LIFE_DROP_CHANCE: f64 = 0.006;
pub const BOSS_RANDOM_DROPS: u32 = 2;
pub const MAGNET_RADIUS: f32 = 220.0;
pub const MAGNET_SPEED: f32 = 420.0;

// --- Buffs (ms) ---

pub const RAPID_DURATION_MS: f64 = 8000.0;
pub const MULTI_DURATION_MS: f64 = 9000.0;
pub const SPREAD_DURATION_MS: f64 = 8000.0;
pub const BEAM_DURATION_MS: f64 = 5000.0;
pub const DRONE_DURATION_MS: f64 = 10_000.0;
pub const FREEZE_DURATION_MS: f64 = 6000.0;
pub const MAGNET_DURATION_MS: f64 = 10_000.0;
pub const DOUBLE_SCORE_DURATION_MS: f64 = 10_000.0;
pub const PIERCE_DURATION_MS: f64 = 9000.0;
pub const SUPER_SPEED_DURATION_MS: f64 = 7000.0;
pub const FREEZE_FACTOR: f32 = 0.55;

// --- Drone ---

pub const DRONE_FIRE_INTERVAL_SECS: f32 = 0.35;
/// Vertical offset of drone shots above the player's top edge.
pub const DRONE_MUZZLE_OFFSET: f32 = 18.0;
pub const DRONE_BULLET_SPEED: f32 = 560.0;

// --- Cosmetics ---

pub const LOGO_COUNT: usize = 7;
pub const LOGO_ROTATION_WAVES: u32 = 5;
pub const STAR_COUNT: usize = 80;

// --- Auto-fire ---

pub const AUTO_FIRE_INTERVAL_MS: f64 = 120.0;
