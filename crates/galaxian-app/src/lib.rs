//! Headless Galaxian host.
//!
//! Drives a `GameEngine` either on a real-time loop thread or as fast as
//! possible, feeds it input from a scripted pilot, and keeps a persistent
//! high-score table.

pub mod game_loop;
pub mod highscores;
pub mod pilot;
pub mod state;

pub use galaxian_core as core;
