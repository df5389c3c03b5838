use crate::state::{MapDimensions, Position};
use crate::view::ViewportSize;

/// Which generator hook the AI pass runs for generator cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GeneratorMode {
    /// Generators sit still.
    #[default]
    Inert,
    /// Generators occasionally spawn a ghost next to themselves.
    Spawning,
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of player slots taking part (1..=MAX_PLAYERS).
    pub players: u8,
    /// Ticks between two move cycles.
    pub ticks_per_move: u32,
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    pub viewport: ViewportSize,
    /// Size every level is decoded to.
    pub map: MapDimensions,
    /// Level loaded by [`GameEngine::start`](crate::GameEngine::start).
    pub starting_level: u32,
    pub generators: GeneratorMode,
    /// Spawn chance per visit for [`GeneratorMode::Spawning`].
    pub spawn_chance_percent: u32,
    /// Session seed for deterministic random events.
    pub seed: u64,
    /// Spawn anchor used when a level has no up stairs.
    pub fallback_anchor: Position,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_PLAYERS: usize = 4;
    pub const MAX_HEALTH: u32 = 100;
    /// Highest level index; advancing past it stays on it.
    pub const MAX_LEVEL: u32 = 25;

    // ===== gameplay values =====
    pub const FOOD_HEALTH: u32 = 100;
    pub const MONEY_SCORE: u32 = 100;
    pub const ARROW_HIT_SCORE: u32 = 10;
    /// Bomb score per ghost, multiplied by `severity + 1`.
    pub const GHOST_BOMB_SCORE: u32 = 10;
    /// Ghost damage, multiplied by `severity + 1`.
    pub const GHOST_PAIN: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYERS: u8 = 1;
    pub const DEFAULT_TICKS_PER_MOVE: u32 = 4;
    pub const DEFAULT_TILE_SIZE: u32 = 16;
    pub const DEFAULT_VIEWPORT: ViewportSize = ViewportSize::new(320, 160);
    pub const DEFAULT_MAP: MapDimensions = MapDimensions::new(60, 30);
    pub const DEFAULT_SPAWN_CHANCE_PERCENT: u32 = 30;
    pub const DEFAULT_FALLBACK_ANCHOR: Position = Position::new(2, 2);

    pub fn new() -> Self {
        Self {
            players: Self::DEFAULT_PLAYERS,
            ticks_per_move: Self::DEFAULT_TICKS_PER_MOVE,
            tile_size: Self::DEFAULT_TILE_SIZE,
            viewport: Self::DEFAULT_VIEWPORT,
            map: Self::DEFAULT_MAP,
            starting_level: 0,
            generators: GeneratorMode::default(),
            spawn_chance_percent: Self::DEFAULT_SPAWN_CHANCE_PERCENT,
            seed: 0,
            fallback_anchor: Self::DEFAULT_FALLBACK_ANCHOR,
        }
    }

    pub fn with_players(players: u8) -> Self {
        Self {
            players,
            ..Self::new()
        }
    }

    /// Player count clamped to the supported range.
    pub fn player_count(&self) -> usize {
        usize::from(self.players).clamp(1, Self::MAX_PLAYERS)
    }

    /// Move cadence, never zero.
    pub fn move_cadence(&self) -> u32 {
        self.ticks_per_move.max(1)
    }

    /// Largest camera step per tick, in pixels.
    pub fn camera_speed(&self) -> i32 {
        (self.tile_size / self.move_cadence()).max(1) as i32
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
