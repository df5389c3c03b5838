//! Grid and level-data errors.
//!
//! Failed moves and blocked attacks are ordinary gameplay outcomes and never
//! show up here; these errors cover bad coordinates and malformed level data.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Cell, Position, Slot};

/// Errors raised by [`Grid`](crate::state::Grid) accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Coordinates outside `[0, width) × [0, height)`.
    #[error("position {position} is outside the grid (size: {width}x{height})")]
    OutOfRange {
        position: Position,
        width: u32,
        height: u32,
    },

    /// A searched-for cell is absent from the grid.
    #[error("no {0:?} cell on the grid")]
    NotFound(Cell),
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Callers stay inside the active rectangle; reaching this is a logic bug.
            GridError::OutOfRange { .. } => ErrorSeverity::Fatal,
            // Callers are expected to supply a fallback.
            GridError::NotFound(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::OutOfRange { .. } => "GRID_OUT_OF_RANGE",
            GridError::NotFound(_) => "GRID_NOT_FOUND",
        }
    }
}

/// Malformed level payload. Loading is refused and the grid left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelDecodeError {
    /// Decoded code array does not match the grid size.
    #[error("level holds {actual} cells, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A code outside the cell table.
    #[error("invalid cell code {code} at index {index}")]
    InvalidCode { index: usize, code: u8 },

    /// Packed payload has the wrong number of bytes.
    #[error("level payload holds {actual} bytes, expected {expected}")]
    ByteLength { expected: usize, actual: usize },

    /// Player markers are stamped by the engine and never come from level data.
    #[error("level data places {slot} at index {index}")]
    PlayerMarker { index: usize, slot: Slot },

    /// Two cells share a byte, so packed rows need an even width.
    #[error("map width {width} cannot be nibble-packed")]
    OddWidth { width: u32 },
}

impl GameError for LevelDecodeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LevelDecodeError::SizeMismatch { .. } => "LEVEL_SIZE_MISMATCH",
            LevelDecodeError::InvalidCode { .. } => "LEVEL_INVALID_CODE",
            LevelDecodeError::ByteLength { .. } => "LEVEL_BYTE_LENGTH",
            LevelDecodeError::OddWidth { .. } => "LEVEL_ODD_WIDTH",
            LevelDecodeError::PlayerMarker { .. } => "LEVEL_PLAYER_MARKER",
        }
    }
}
