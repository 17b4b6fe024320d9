//! Systems that operate on the game world each frame.
//!
//! Systems are plain functions over `&mut GameWorld`. They hold no state
//! of their own; everything lives in the world.

pub mod boss;
pub mod cleanup;
pub mod collision;
pub mod drone;
pub mod formation;
pub mod player;
pub mod powerups;
pub mod projectiles;
pub mod snapshot;
pub mod starfield;
pub mod swoopers;
pub mod waves;
