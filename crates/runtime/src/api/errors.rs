//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine failures and missing wiring so clients can bubble them up with
//! consistent context.
use game_core::{EngineError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("control provider not set")]
    ProviderNotSet,

    #[error("runtime requires levels to be configured before building")]
    MissingLevels,

    #[error("control provider failed: {reason}")]
    ControlProviderFailed { reason: String },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Engine(error) => error.severity(),
            RuntimeError::ProviderNotSet | RuntimeError::MissingLevels => {
                ErrorSeverity::Validation
            }
            RuntimeError::ControlProviderFailed { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Engine(error) => error.error_code(),
            RuntimeError::ProviderNotSet => "RUNTIME_PROVIDER_NOT_SET",
            RuntimeError::MissingLevels => "RUNTIME_MISSING_LEVELS",
            RuntimeError::ControlProviderFailed { .. } => "RUNTIME_CONTROL_PROVIDER_FAILED",
        }
    }
}
