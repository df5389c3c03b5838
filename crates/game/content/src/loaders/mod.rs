//! Content loaders for reading game data from files.
//!
//! Loaders turn level files and TOML configuration into the oracle and
//! config values the engine consumes.

pub mod config;
pub mod levels;

pub use config::ConfigLoader;
pub use levels::LevelCatalog;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Binary counterpart of [`read_file`].
pub(crate) fn read_bytes(path: &Path) -> LoadResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
