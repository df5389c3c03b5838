//! Errors surfaced by the game engine.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GridError, LevelDecodeError};

/// Failure to load a level. The state is left as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    #[error("level {index} is not available")]
    Missing { index: u32 },

    #[error("level {index} is malformed: {source}")]
    Decode {
        index: u32,
        #[source]
        source: LevelDecodeError,
    },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LevelError::Missing { .. } => "LEVEL_MISSING",
            LevelError::Decode { source, .. } => source.error_code(),
        }
    }
}

/// Errors surfaced while stepping or loading through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("grid access failed: {0}")]
    Grid(#[from] GridError),

    #[error("level load failed: {0}")]
    Level(#[from] LevelError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::Grid(error) => error.severity(),
            EngineError::Level(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::Grid(error) => error.error_code(),
            EngineError::Level(error) => error.error_code(),
        }
    }
}
