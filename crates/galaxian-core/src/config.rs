//! Tunable game configuration.
//!
//! Every section defaults to the values in `constants`. Hosts may load a
//! `GameConfig` from JSON; the engine calls `validate` before using it.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::PowerUpKind;
use crate::error::ConfigError;
use crate::types::FieldSize;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field: FieldSize,
    pub player: PlayerConfig,
    pub waves: WaveConfig,
    pub enemies: EnemyConfig,
    pub boss: BossConfig,
    pub swoopers: SwooperConfig,
    pub powerups: PowerUpConfig,
    pub buffs: BuffConfig,
    pub drone: DroneConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub super_speed_multiplier: f32,
    pub margin_x: f32,
    pub margin_bottom: f32,
    pub top_fraction: f32,
    pub start_lives: u32,
    pub cooldown_ms: f64,
    pub rapid_cooldown_ms: f64,
    pub beam_cooldown_ms: f64,
    pub bullet_speed: f32,
    pub spread_angles_deg: Vec<f32>,
    pub multi_offset: f32,
    pub beam_width: f32,
    pub beam_life_secs: f32,
    pub auto_fire_interval_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub base_rows: u32,
    pub cols: u32,
    pub boss_interval: u32,
    pub first_boss_wave: u32,
    /// Number of distinct visual variants.
    pub logo_count: usize,
    /// The formation's variant offset advances every this many waves.
    pub logo_rotation_waves: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f32,
    pub height: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    pub start_x: f32,
    pub start_y: f32,
    pub base_speed: f32,
    pub speed_per_wave: f32,
    pub drop: f32,
    pub edge_margin: f32,
    pub fire_rate: f32,
    pub wrap_fraction: f32,
    pub wrap_min_y: f32,
    pub wrap_max_y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    pub hp_base: u32,
    pub hp_divisor: u32,
    pub hp_step: u32,
    pub width_fraction: f32,
    pub height_fraction: f32,
    pub base_y: f32,
    pub amplitude_x: f32,
    pub frequency_x: f32,
    pub amplitude_y: f32,
    pub frequency_y: f32,
    pub fire_rate: f32,
    pub spread_step_deg: f32,
    pub beam_dps: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwooperConfig {
    pub width: f32,
    pub height: f32,
    pub cooldown_min_secs: f32,
    pub cooldown_max_secs: f32,
    pub drift: f32,
    pub amplitude_min: f32,
    pub amplitude_max: f32,
    pub frequency_min: f32,
    pub frequency_max: f32,
}

/// One row of the loot table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUpWeight {
    pub kind: PowerUpKind,
    pub weight: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    pub table: Vec<PowerUpWeight>,
    pub size: f32,
    pub fall_speed: f32,
    pub spin_rate: f32,
    pub timer_min_secs: f32,
    pub timer_max_secs: f32,
    pub kill_drop_chance: f64,
    pub life_drop_chance: f64,
    pub boss_random_drops: u32,
    pub magnet_radius: f32,
    pub magnet_speed: f32,
}

/// Timed buff durations in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffConfig {
    pub rapid_ms: f64,
    pub multi_ms: f64,
    pub spread_ms: f64,
    pub beam_ms: f64,
    pub drone_ms: f64,
    pub freeze_ms: f64,
    pub magnet_ms: f64,
    pub double_score_ms: f64,
    pub pierce_ms: f64,
    pub super_speed_ms: f64,
    /// Motion/fire multiplier for hostiles while freeze is active.
    pub freeze_factor: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DroneConfig {
    pub fire_interval_secs: f32,
    pub muzzle_offset: f32,
    pub bullet_speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub enemy_kill: u64,
    pub swooper_kill: u64,
    pub boss_hit: u64,
    pub beam_boss_hit: u64,
    pub boss_defeat_bonus: u64,
    pub double_score_multiplier: u64,
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field.width > 0.0 && self.field.height > 0.0) {
            return Err(ConfigError::InvalidField {
                width: self.field.width,
                height: self.field.height,
            });
        }
        if self.waves.boss_interval == 0 {
            return Err(ConfigError::ZeroBossInterval);
        }
        if self.boss.hp_divisor == 0 {
            return Err(ConfigError::ZeroBossHpDivisor);
        }
        if self.waves.base_rows == 0 || self.waves.cols == 0 {
            return Err(ConfigError::EmptyFormation);
        }
        if self.waves.logo_count == 0 || self.waves.logo_rotation_waves == 0 {
            return Err(ConfigError::InvalidLogoCadence);
        }
        let factor = self.buffs.freeze_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::InvalidFreezeFactor(factor));
        }
        if !(self.drone.fire_interval_secs > 0.0) {
            return Err(ConfigError::InvalidDroneInterval(
                self.drone.fire_interval_secs,
            ));
        }
        check_range(
            "swooper cooldown",
            self.swoopers.cooldown_min_secs,
            self.swoopers.cooldown_max_secs,
        )?;
        check_range(
            "swooper amplitude",
            self.swoopers.amplitude_min,
            self.swoopers.amplitude_max,
        )?;
        check_range(
            "swooper frequency",
            self.swoopers.frequency_min,
            self.swoopers.frequency_max,
        )?;
        check_range(
            "power-up timer",
            self.powerups.timer_min_secs,
            self.powerups.timer_max_secs,
        )?;
        check_range(
            "enemy wrap band",
            self.enemies.wrap_min_y,
            self.enemies.wrap_max_y,
        )?;
        self.powerups.total_weight()?;
        Ok(())
    }
}

impl PowerUpConfig {
    /// Sum of all weights, failing on an empty table, a negative or
    /// non-finite weight, or a zero total.
    pub fn total_weight(&self) -> Result<f32, ConfigError> {
        total_weight(&self.table)
    }
}

/// Validate a weight table and return its total.
pub fn total_weight(table: &[PowerUpWeight]) -> Result<f32, ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::EmptyPowerUpTable);
    }
    let mut total = 0.0;
    for entry in table {
        if !entry.weight.is_finite() || entry.weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                kind: entry.kind,
                weight: entry.weight,
            });
        }
        total += entry.weight;
    }
    if total <= 0.0 {
        return Err(ConfigError::ZeroTotalWeight);
    }
    Ok(total)
}

fn check_range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}

/// Default loot weights. Beam is the rarest entry by a wide margin and
/// extra life the second rarest.
pub fn default_powerup_table() -> Vec<PowerUpWeight> {
    use PowerUpKind::*;
    [
        (Rapid, 14.0),
        (Multi, 12.0),
        (Spread, 10.0),
        (Beam, 2.0),
        (Drone, 8.0),
        (Freeze, 9.0),
        (Magnet, 10.0),
        (DoubleScore, 9.0),
        (Pierce, 10.0),
        (SuperSpeed, 10.0),
        (Shield, 12.0),
        (MegaShield, 8.0),
        (ExtraLife, 7.0),
    ]
    .into_iter()
    .map(|(kind, weight)| PowerUpWeight { kind, weight })
    .collect()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: PLAYER_W,
            height: PLAYER_H,
            speed: PLAYER_SPEED,
            super_speed_multiplier: SUPER_SPEED_MULTIPLIER,
            margin_x: PLAYER_MARGIN_X,
            margin_bottom: PLAYER_MARGIN_BOTTOM,
            top_fraction: PLAYER_TOP_FRACTION,
            start_lives: PLAYER_START_LIVES,
            cooldown_ms: SHOT_COOLDOWN_MS,
            rapid_cooldown_ms: RAPID_COOLDOWN_MS,
            beam_cooldown_ms: BEAM_COOLDOWN_MS,
            bullet_speed: BULLET_SPEED,
            spread_angles_deg: SPREAD_ANGLES_DEG.to_vec(),
            multi_offset: MULTI_SHOT_OFFSET,
            beam_width: BEAM_W,
            beam_life_secs: BEAM_LIFE_SECS,
            auto_fire_interval_ms: AUTO_FIRE_INTERVAL_MS,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            base_rows: FORMATION_BASE_ROWS,
            cols: FORMATION_COLS,
            boss_interval: BOSS_INTERVAL,
            first_boss_wave: FIRST_BOSS_WAVE,
            logo_count: LOGO_COUNT,
            logo_rotation_waves: LOGO_ROTATION_WAVES,
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: ENEMY_W,
            height: ENEMY_H,
            gap_x: ENEMY_GAP_X,
            gap_y: ENEMY_GAP_Y,
            start_x: FORMATION_START_X,
            start_y: FORMATION_START_Y,
            base_speed: FORMATION_BASE_SPEED,
            speed_per_wave: FORMATION_SPEED_PER_WAVE,
            drop: FORMATION_DROP,
            edge_margin: FORMATION_EDGE_MARGIN,
            fire_rate: ENEMY_FIRE_RATE,
            wrap_fraction: ENEMY_WRAP_FRACTION,
            wrap_min_y: ENEMY_WRAP_MIN_Y,
            wrap_max_y: ENEMY_WRAP_MAX_Y,
        }
    }
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            hp_base: BOSS_HP_BASE,
            hp_divisor: BOSS_HP_DIVISOR,
            hp_step: BOSS_HP_STEP,
            width_fraction: BOSS_W_FRACTION,
            height_fraction: BOSS_H_FRACTION,
            base_y: BOSS_BASE_Y,
            amplitude_x: BOSS_AMPLITUDE_X,
            frequency_x: BOSS_FREQUENCY_X,
            amplitude_y: BOSS_AMPLITUDE_Y,
            frequency_y: BOSS_FREQUENCY_Y,
            fire_rate: BOSS_FIRE_RATE,
            spread_step_deg: BOSS_SPREAD_STEP_DEG,
            beam_dps: BEAM_BOSS_DPS,
        }
    }
}

impl Default for SwooperConfig {
    fn default() -> Self {
        Self {
            width: SWOOPER_W,
            height: SWOOPER_H,
            cooldown_min_secs: SWOOPER_COOLDOWN_MIN_SECS,
            cooldown_max_secs: SWOOPER_COOLDOWN_MAX_SECS,
            drift: SWOOPER_DRIFT,
            amplitude_min: SWOOPER_AMPLITUDE_MIN,
            amplitude_max: SWOOPER_AMPLITUDE_MAX,
            frequency_min: SWOOPER_FREQUENCY_MIN,
            frequency_max: SWOOPER_FREQUENCY_MAX,
        }
    }
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            table: default_powerup_table(),
            size: POWERUP_SIZE,
            fall_speed: POWERUP_FALL_SPEED,
            spin_rate: POWERUP_SPIN_RATE,
            timer_min_secs: POWERUP_TIMER_MIN_SECS,
            timer_max_secs: POWERUP_TIMER_MAX_SECS,
            kill_drop_chance: POWERUP_KILL_DROP_CHANCE,
            life_drop_chance: POWERUP_LIFE_DROP_CHANCE,
            boss_random_drops: BOSS_RANDOM_DROPS,
            magnet_radius: MAGNET_RADIUS,
            magnet_speed: MAGNET_SPEED,
        }
    }
}

impl Default for BuffConfig {
    fn default() -> Self {
        Self {
            rapid_ms: RAPID_DURATION_MS,
            multi_ms: MULTI_DURATION_MS,
            spread_ms: SPREAD_DURATION_MS,
            beam_ms: BEAM_DURATION_MS,
            drone_ms: DRONE_DURATION_MS,
            freeze_ms: FREEZE_DURATION_MS,
            magnet_ms: MAGNET_DURATION_MS,
            double_score_ms: DOUBLE_SCORE_DURATION_MS,
            pierce_ms: PIERCE_DURATION_MS,
            super_speed_ms: SUPER_SPEED_DURATION_MS,
            freeze_factor: FREEZE_FACTOR,
        }
    }
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            fire_interval_secs: DRONE_FIRE_INTERVAL_SECS,
            muzzle_offset: DRONE_MUZZLE_OFFSET,
            bullet_speed: DRONE_BULLET_SPEED,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            enemy_kill: ENEMY_KILL_SCORE,
            swooper_kill: SWOOPER_KILL_SCORE,
            boss_hit: BOSS_HIT_SCORE,
            beam_boss_hit: BEAM_BOSS_HIT_SCORE,
            boss_defeat_bonus: BOSS_DEFEAT_BONUS,
            double_score_multiplier: DOUBLE_SCORE_MULTIPLIER,
        }
    }
}

impl BuffConfig {
    /// Duration of a timed buff in milliseconds.
    pub fn duration_ms(&self, buff: crate::enums::TimedBuff) -> f64 {
        use crate::enums::TimedBuff::*;
        match buff {
            Rapid => self.rapid_ms,
            Multi => self.multi_ms,
            Spread => self.spread_ms,
            Beam => self.beam_ms,
            Drone => self.drone_ms,
            Freeze => self.freeze_ms,
            Magnet => self.magnet_ms,
            DoubleScore => self.double_score_ms,
            Pierce => self.pierce_ms,
            SuperSpeed => self.super_speed_ms,
        }
    }
}
