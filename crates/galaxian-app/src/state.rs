//! Types shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use galaxian_core::commands::PlayerCommand;
use galaxian_core::state::GameStateSnapshot;

/// Latest snapshot published by the loop, for synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Messages sent to the game loop thread.
#[derive(Debug, Clone)]
pub enum GameLoopCommand {
    /// Forward a command to the engine.
    Player(PlayerCommand),
    Shutdown,
}
