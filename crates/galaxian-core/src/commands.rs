//! Player commands sent from the host to the engine.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// Held-key / pointer state. Any key mapping may produce it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Run lifecycle ---
    /// Begin a run from the idle screen.
    StartRun { name: String },
    /// Start over after a game over.
    Restart,
    /// Leave the game-over screen without starting a new run.
    ReturnToIdle,
    Pause,
    Resume,
    TogglePause,

    // --- Input ---
    /// Replace the held-input state.
    SetInput { input: InputState },
    /// Touch fire button: one immediate shot attempt.
    FireTap,
    /// Enable or disable the periodic auto-fire task.
    SetAutoFire { enabled: bool },

    // --- Host window lifecycle ---
    /// Host lost focus: pause and suspend auto-fire.
    Blur,
    /// Host regained focus: resume auto-fire. The run stays paused
    /// until an explicit `Resume`.
    Focus,
}
