use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use galaxian_app::game_loop::{spawn_game_loop, FRAME_DURATION};
use galaxian_app::highscores::HighScoreTable;
use galaxian_app::pilot::{run_headless, Pilot};
use galaxian_app::state::{GameLoopCommand, SharedSnapshot};
use galaxian_core::commands::PlayerCommand;
use galaxian_core::config::GameConfig;
use galaxian_core::enums::GamePhase;
use galaxian_core::state::{GameStateSnapshot, RunSummary};
use galaxian_sim::{GameEngine, SimConfig};

#[derive(Parser, Debug)]
#[command(name = "galaxian")]
#[command(about = "Headless Galaxian wave/combat engine with a scripted pilot")]
struct Cli {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Frame limit for the run
    #[arg(long, default_value_t = 18_000)]
    frames: u64,
    /// JSON game config; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// High-score table location
    #[arg(long, default_value = "highscores.json")]
    scores: PathBuf,
    /// Ship name recorded with the score
    #[arg(long, default_value = "PILOT")]
    name: String,
    /// Run on the real-time loop thread instead of stepping flat out
    #[arg(long)]
    realtime: bool,
    /// Let auto-fire do the shooting
    #[arg(long)]
    auto_fire: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let game = load_config(cli.config.as_ref())?;
    let engine = GameEngine::new(SimConfig {
        seed: cli.seed,
        game,
    })
    .context("invalid game config")?;
    let pilot = Pilot {
        hold_fire: !cli.auto_fire,
    };

    let snapshot = if cli.realtime {
        run_realtime(engine, &pilot, &cli)?
    } else {
        let mut engine = engine;
        run_headless(&mut engine, &pilot, &cli.name, cli.frames, cli.auto_fire)
    };

    let summary = snapshot.summary.clone().unwrap_or_else(|| RunSummary {
        name: cli.name.clone(),
        score: snapshot.hud.score,
        wave: snapshot.hud.wave,
    });
    println!(
        "{} scored {} reaching wave {} ({} frames{})",
        summary.name,
        summary.score,
        summary.wave,
        snapshot.time.frame,
        if snapshot.phase == GamePhase::GameOver {
            ", game over"
        } else {
            ""
        }
    );

    let mut table = HighScoreTable::load(&cli.scores)?;
    match table.record(&summary) {
        Some(rank) => println!("New high score: #{}", rank + 1),
        None => println!("No high score this time."),
    }
    table.save(&cli.scores)?;
    for (i, entry) in table.entries().iter().enumerate() {
        println!("{:>2}. {:<12} {:>8}  wave {}", i + 1, entry.name, entry.score, entry.wave);
    }
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed reading config {}", path.display()))?;
    GameConfig::from_json(&json).with_context(|| format!("failed parsing config {}", path.display()))
}

/// Drive the loop thread from the pilot, polling the shared snapshot once
/// per frame.
fn run_realtime(engine: GameEngine, pilot: &Pilot, cli: &Cli) -> Result<GameStateSnapshot> {
    let latest: SharedSnapshot = Arc::new(Mutex::new(None));
    let handle = spawn_game_loop(engine, latest).context("failed to spawn game loop thread")?;
    let send = |cmd: PlayerCommand| {
        handle
            .commands
            .send(GameLoopCommand::Player(cmd))
            .map_err(|_| anyhow!("game loop stopped"))
    };

    send(PlayerCommand::StartRun {
        name: cli.name.clone(),
    })?;
    send(PlayerCommand::SetAutoFire {
        enabled: cli.auto_fire,
    })?;

    for _ in 0..cli.frames {
        std::thread::sleep(FRAME_DURATION);
        let snapshot = handle.latest.lock().ok().and_then(|lock| lock.clone());
        let Some(snapshot) = snapshot else {
            continue;
        };
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        send(PlayerCommand::SetInput {
            input: pilot.input(&snapshot),
        })?;
    }

    let snapshot = handle
        .shutdown()
        .ok_or_else(|| anyhow!("game loop produced no snapshot"))?;
    tracing::debug!(frame = snapshot.time.frame, "realtime run finished");
    Ok(snapshot)
}
