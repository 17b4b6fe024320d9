//! Configuration errors. The engine rejects bad tuning up front instead
//! of misbehaving mid-run.

use thiserror::Error;

use crate::enums::PowerUpKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("power-up table is empty")]
    EmptyPowerUpTable,
    #[error("power-up weights sum to zero")]
    ZeroTotalWeight,
    #[error("power-up {kind:?} has invalid weight {weight}")]
    InvalidWeight { kind: PowerUpKind, weight: f32 },
    #[error("field size {width}x{height} is not positive")]
    InvalidField { width: f32, height: f32 },
    #[error("boss interval must be at least 1")]
    ZeroBossInterval,
    #[error("boss hp divisor must be at least 1")]
    ZeroBossHpDivisor,
    #[error("formation needs at least one row and one column")]
    EmptyFormation,
    #[error("freeze factor {0} outside (0, 1]")]
    InvalidFreezeFactor(f32),
    #[error("drone fire interval {0} must be positive")]
    InvalidDroneInterval(f32),
    #[error("{name}: min {min} exceeds max {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },
    #[error("logo count and rotation period must be at least 1")]
    InvalidLogoCadence,
}
