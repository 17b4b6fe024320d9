//! Hostile behavior for the Galaxian engine.
//!
//! Motion rules for the formation, boss, swoopers and enemy bullets, and
//! the fixed probability tables that pick bullet archetypes and boss
//! volleys. Pure functions on plain data: randomness arrives as rolls
//! in `[0, 1)` so every rule is testable without an RNG.

pub mod motion;
pub mod profiles;

pub use galaxian_core as core;
