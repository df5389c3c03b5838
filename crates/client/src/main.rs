//! Dungeon game client binary.
//!
//! Headless composition root that assembles:
//! 1. Configuration from the environment (and an optional TOML file)
//! 2. Levels from a directory, or the built-in arena
//! 3. Input from a JSON control script, or idle input
//! 4. The runtime, with a summary observer logging the HUD state
//!
//! # Examples
//!
//! ```bash
//! DUNGEON_LEVELS_DIR=./levels DUNGEON_SCRIPT=walk.json cargo run -p dungeon-client
//! ```
mod config;
mod levels;
mod logging;
mod observer;
mod script;

use anyhow::{Context, Result};
use game_content::ConfigLoader;
use game_core::GameConfig;
use runtime::{
    Event, IdleControlProvider, Runtime, RuntimeConfig, ScriptedControlProvider, Topic,
};
use tokio::sync::broadcast::error::RecvError;

use config::ClientConfig;
use observer::SummaryObserver;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let session_id = config.session_id();
    let _log_guard = logging::setup_logging(&session_id, &config.log_dir())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Session ID: {}", session_id);

    let mut game = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    config.apply_overrides(&mut game);
    tracing::info!(
        players = game.player_count(),
        generators = %game.generators,
        seed = game.seed,
        "game configured"
    );

    let levels = levels::select_levels(config.levels_dir.as_deref(), game.map)?;
    tracing::info!("{} level(s) available", levels.available());

    let runtime_config = RuntimeConfig {
        game,
        frame_rate_hz: config
            .frame_rate_hz
            .unwrap_or(RuntimeConfig::DEFAULT_FRAME_RATE_HZ),
        max_frames: Some(config.max_frames),
        ..RuntimeConfig::default()
    };

    let builder = Runtime::builder()
        .config(runtime_config)
        .levels(levels)
        .observer(SummaryObserver::new());
    let builder = match &config.script_path {
        Some(path) => {
            let steps = script::load_script(path)?;
            tracing::info!(
                "Playing script {} ({} frames)",
                path.display(),
                script::script_frames(&steps)
            );
            builder.control_provider(ScriptedControlProvider::from_steps(&steps))
        }
        None => builder.control_provider(IdleControlProvider),
    };
    let mut runtime = builder.build().context("Failed to build runtime")?;

    let mut sim_events = runtime.subscribe(Topic::Simulation);
    tokio::spawn(async move {
        loop {
            match sim_events.recv().await {
                Ok(Event::Sim(event)) => tracing::debug!(event = event.as_ref(), "{:?}", event),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Event log lagged, skipped {} events", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let frames = runtime.run().await?;

    for character in &runtime.state().characters {
        tracing::info!(
            "{} finished with score {} ({})",
            character.slot,
            character.score,
            character.state
        );
    }
    tracing::info!(frames, level = runtime.state().level, "Client shutdown complete");
    Ok(())
}
