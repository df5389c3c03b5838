//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use game_core::GameConfig;

/// Configuration required to assemble a headless session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub levels_dir: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
    pub max_frames: u64,
    pub frame_rate_hz: Option<u32>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub players: Option<u8>,
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            levels_dir: None,
            config_path: None,
            script_path: None,
            max_frames: Self::DEFAULT_MAX_FRAMES,
            frame_rate_hz: None,
            session_id: None,
            log_dir: None,
            players: None,
            seed: None,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_MAX_FRAMES: u64 = 600;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_LEVELS_DIR` - Directory holding `LEVEL.A`.. files (default: built-in arena)
    /// - `DUNGEON_CONFIG` - Game configuration TOML (default: built-in defaults)
    /// - `DUNGEON_SCRIPT` - JSON control script (default: idle input)
    /// - `DUNGEON_MAX_FRAMES` - Frames to run before stopping (default: 600)
    /// - `DUNGEON_FRAME_RATE` - Frames per second (default: 60)
    /// - `DUNGEON_SESSION_ID` - Session identifier for logs (default: auto-generated)
    /// - `DUNGEON_LOG_DIR` - Log root directory (default: platform cache dir)
    /// - `DUNGEON_PLAYERS` - Overrides the configured player count
    /// - `DUNGEON_SEED` - Overrides the configured session seed
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| read_var(&lookup, key).map(PathBuf::from);

        Self {
            levels_dir: path("DUNGEON_LEVELS_DIR"),
            config_path: path("DUNGEON_CONFIG"),
            script_path: path("DUNGEON_SCRIPT"),
            max_frames: parse_var(&lookup, "DUNGEON_MAX_FRAMES")
                .unwrap_or(Self::DEFAULT_MAX_FRAMES),
            frame_rate_hz: parse_var(&lookup, "DUNGEON_FRAME_RATE").map(|hz: u32| hz.max(1)),
            session_id: read_var(&lookup, "DUNGEON_SESSION_ID"),
            log_dir: path("DUNGEON_LOG_DIR"),
            players: parse_var(&lookup, "DUNGEON_PLAYERS"),
            seed: parse_var(&lookup, "DUNGEON_SEED"),
        }
    }

    /// Applies the environment overrides on top of a loaded game config.
    pub fn apply_overrides(&self, game: &mut GameConfig) {
        if let Some(players) = self.players {
            game.players = players;
        }
        if let Some(seed) = self.seed {
            game.seed = seed;
        }
    }

    /// Configured session id, or `session_<unix seconds>`.
    pub fn session_id(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        })
    }

    /// Configured log root, or the platform cache directory.
    ///
    /// - macOS: `~/Library/Caches/dungeon/logs`
    /// - Linux: `~/.cache/dungeon/logs` (or `$XDG_CACHE_HOME/dungeon/logs`)
    /// - Windows: `%LOCALAPPDATA%\dungeon\logs`
    /// - Fallback: `/tmp/dungeon/logs`
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "dungeon")
                .map(|dirs| dirs.cache_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from("/tmp/dungeon"))
                .join("logs")
        })
    }
}

fn read_var(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    read_var(lookup, key)?.parse().ok()
}
