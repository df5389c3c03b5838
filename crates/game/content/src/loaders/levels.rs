//! Directory-backed level catalog.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{GameConfig, LevelOracle, LevelSnapshot, MapDimensions};

use crate::levels::decode_level;
use crate::loaders::{LoadResult, read_bytes};

/// Levels read from a directory of `LEVEL.A`, `LEVEL.B`, … files.
///
/// Level `i` lives in the file whose extension is the letter `'A' + i`.
/// Names are matched case-insensitively, preferring the upper-case spelling
/// when both exist. Every level is decoded up front; gaps are allowed, but a
/// file that fails to decode aborts the load.
#[derive(Clone, Debug)]
pub struct LevelCatalog {
    directory: PathBuf,
    levels: LevelSnapshot,
}

impl LevelCatalog {
    /// Scans `directory` and decodes every level file it holds.
    pub fn load(directory: impl Into<PathBuf>, dimensions: MapDimensions) -> LoadResult<Self> {
        let directory = directory.into();
        let files = index_directory(&directory)?;

        let mut levels = LevelSnapshot::new(dimensions);
        for index in 0..=GameConfig::MAX_LEVEL {
            let name = Self::file_name(index);
            let Some(path) = files.get(&name.to_ascii_lowercase()) else {
                continue;
            };

            let bytes = read_bytes(path)?;
            let codes = decode_level(&bytes, dimensions)
                .with_context(|| format!("Failed to decode level {}", path.display()))?;
            tracing::debug!(level = index, path = %path.display(), "level file decoded");
            levels.insert(index, codes);
        }

        tracing::info!(
            directory = %directory.display(),
            levels = levels.available(),
            "level catalog loaded"
        );
        Ok(Self { directory, levels })
    }

    /// Canonical file name of level `index` (`LEVEL.A` for 0).
    pub fn file_name(index: u32) -> String {
        let letter = char::from(b'A' + (index % 26) as u8);
        format!("LEVEL.{letter}")
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of level files found.
    pub fn available(&self) -> usize {
        self.levels.available()
    }

    pub fn into_snapshot(self) -> LevelSnapshot {
        self.levels
    }
}

impl LevelOracle for LevelCatalog {
    fn dimensions(&self) -> MapDimensions {
        self.levels.dimensions()
    }

    fn level(&self, index: u32) -> Option<&[u8]> {
        self.levels.level(index)
    }

    fn level_count(&self) -> u32 {
        self.levels.level_count()
    }
}

/// Lower-cased file name to path for every regular file in `directory`.
fn index_directory(directory: &Path) -> LoadResult<HashMap<String, PathBuf>> {
    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("Failed to read level directory {}", directory.display()))?;

    let mut files = HashMap::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };

        let key = name.to_ascii_lowercase();
        let upper = name == name.to_ascii_uppercase();
        if upper || !files.contains_key(&key) {
            files.insert(key, entry.path());
        }
    }
    Ok(files)
}
