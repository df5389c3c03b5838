//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every key is optional; missing ones keep their [`GameConfig::default`]
/// value.
///
/// ```toml
/// players = 2
/// ticks_per_move = 4
/// generators = "spawning"
///
/// [viewport]
/// width = 320
/// height = 160
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GeneratorMode, MapDimensions, Position};

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let config = ConfigLoader::parse(
            r#"
            players = 3
            generators = "spawning"
            seed = 99

            [map]
            width = 40
            height = 20

            [fallback_anchor]
            x = 4
            y = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.players, 3);
        assert_eq!(config.generators, GeneratorMode::Spawning);
        assert_eq!(config.seed, 99);
        assert_eq!(config.map, MapDimensions::new(40, 20));
        assert_eq!(config.fallback_anchor, Position::new(4, 5));
        assert_eq!(config.ticks_per_move, GameConfig::DEFAULT_TICKS_PER_MOVE);
    }

    #[test]
    fn unknown_generator_mode_is_rejected() {
        let error = ConfigLoader::parse(r#"generators = "swarming""#).unwrap_err();
        assert!(error.to_string().contains("Failed to parse config TOML"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tile_size = 8\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.tile_size, 8);

        let missing = ConfigLoader::load(&dir.path().join("absent.toml"));
        assert!(missing.is_err());
    }
}
