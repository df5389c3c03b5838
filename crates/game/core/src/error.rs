//! Common error infrastructure for game-core.
//!
//! Domain errors (`GridError`, `LevelDecodeError`, `EngineError`, ...) live next
//! to the code that raises them and implement [`GameError`] so hosts can
//! classify them uniformly.
//!
//! Ordinary gameplay branching never produces an error: a blocked move or an
//! arrow hitting a wall is a plain outcome value.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller has a sensible fallback
/// - **Validation**: invalid external input, rejected without side effects
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: logic bug or corrupted state, the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: up stairs missing from a level
    Recoverable,

    /// Examples: malformed level payload, missing level file
    Validation,

    /// These indicate bugs and should be investigated.
    Internal,

    /// Examples: grid access outside the map
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
