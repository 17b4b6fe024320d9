//! Simulation engine for the Galaxian shooter.
//!
//! Owns the game world, runs systems once per frame with a clamped
//! delta, and produces `GameStateSnapshot`s for renderers and HUDs.
//! Headless and deterministic for a given seed and input sequence.

pub mod autofire;
pub mod buffs;
pub mod engine;
pub mod loot;
pub mod scoring;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use galaxian_core as core;
pub use world::GameWorld;
