//! Level data and configuration for the dungeon.
//!
//! This crate turns on-disk content into the values `game-core` consumes:
//! - nibble-packed level files decoded into cell codes
//! - directory-backed level catalogs
//! - a built-in arena for when no level files are available
//! - game configuration (TOML)
//!
//! Content is handed to the engine through `LevelOracle` and never appears in
//! game state.

pub mod levels;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use levels::{decode_level, encode_level, fallback_arena, fallback_levels};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LevelCatalog};
