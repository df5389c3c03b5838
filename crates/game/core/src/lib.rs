//! Deterministic dungeon simulation shared by every host.
//!
//! `game-core` owns the rules: the cell grid, characters and their arrows,
//! the fixed-cadence stepper with its ghost AI, camera windowing and the
//! read-only render boundary. It performs no I/O; hosts hand it decoded
//! level codes through [`env::LevelOracle`] and one [`ControlFrame`] per
//! tick. All state mutation flows through [`engine::GameEngine`].
pub mod config;
pub mod controls;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod view;

pub use config::{GameConfig, GeneratorMode};
pub use controls::{ActionFlags, ControlFrame, Controls, KeyBindings, KeySnapshot};
pub use engine::{EngineError, GameEngine, LevelError, MoveOutcome, SimEvent, TickOutcome};
pub use env::{
    GameEnv, GeneratorPolicy, GeneratorSite, InertGenerators, LevelOracle, LevelSnapshot,
    PcgRng, RngOracle, SpawningGenerators, generator_policy,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Cell, Character, Direction, GameState, Grid, GridError, Item, LevelDecodeError, LifeState,
    MapDimensions, PayloadRangeError, PixelPoint, Position, Projectile, Severity, Slot, Tick,
    TileRect, codes,
};
pub use view::{Camera, Frame, RenderView, ViewportSize, VisibleTile, tile_index};
