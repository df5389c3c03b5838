//! Level source selection.
use std::path::Path;

use anyhow::{Context, Result};
use game_content::{LevelCatalog, fallback_levels};
use game_core::{LevelSnapshot, MapDimensions};

/// Levels from `directory`, or the built-in arena when no directory is set
/// or it holds no level files.
pub fn select_levels(directory: Option<&Path>, dimensions: MapDimensions) -> Result<LevelSnapshot> {
    let Some(directory) = directory else {
        tracing::info!("No levels directory configured, using the built-in arena");
        return Ok(fallback_levels(dimensions));
    };

    let catalog = LevelCatalog::load(directory, dimensions)
        .with_context(|| format!("Failed to load levels from {}", directory.display()))?;
    if catalog.is_empty() {
        tracing::warn!(
            "No level files in {}, using the built-in arena",
            directory.display()
        );
        return Ok(fallback_levels(dimensions));
    }

    Ok(catalog.into_snapshot())
}
