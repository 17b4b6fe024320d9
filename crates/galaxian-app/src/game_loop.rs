//! Game loop thread: steps the engine at `TICK_RATE` against a monotonic
//! clock and publishes each snapshot.
//!
//! The engine is moved into the thread. Commands arrive over an `mpsc`
//! channel and are applied at the next frame boundary.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use galaxian_core::constants::TICK_RATE;
use galaxian_core::state::GameStateSnapshot;
use galaxian_sim::GameEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Handle to a running loop thread.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    pub latest: SharedSnapshot,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> Option<GameStateSnapshot> {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        if self.thread.join().is_err() {
            tracing::error!("game loop thread panicked");
        }
        self.latest.lock().ok().and_then(|lock| lock.clone())
    }
}

/// Spawn the loop on a named thread.
pub fn spawn_game_loop(engine: GameEngine, latest: SharedSnapshot) -> io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let shared = latest.clone();
    let thread = std::thread::Builder::new()
        .name("galaxian-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        latest,
        thread,
    })
}

/// Runs until `Shutdown` or the sender is dropped.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest: &SharedSnapshot,
) {
    let start = Instant::now();
    let mut next_frame = start;
    tracing::debug!("game loop started");

    loop {
        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::debug!("game loop stopping");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. One frame on the monotonic clock
        let timestamp_ms = start.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.frame(timestamp_ms);

        // 3. Publish
        if let Ok(mut lock) = latest.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame; skip ahead rather than burst
        next_frame += FRAME_DURATION;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else if now - next_frame > FRAME_DURATION * 2 {
            next_frame = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use galaxian_core::commands::PlayerCommand;
    use galaxian_core::enums::GamePhase;
    use galaxian_sim::SimConfig;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        tx.send(GameLoopCommand::Player(PlayerCommand::StartRun {
            name: "Ace".into(),
        }))
        .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartRun { .. })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_duration_constant() {
        assert_eq!(FRAME_DURATION.as_nanos(), 1_000_000_000u128 / 60);
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let engine = GameEngine::new(SimConfig::default()).unwrap();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let handle = spawn_game_loop(engine, latest).unwrap();
        handle
            .commands
            .send(GameLoopCommand::Player(PlayerCommand::StartRun {
                name: "Ace".into(),
            }))
            .unwrap();
        std::thread::sleep(Duration::from_millis(150));

        let snapshot = handle.shutdown().expect("loop published a snapshot");
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert!(snapshot.time.frame > 0);
    }
}
