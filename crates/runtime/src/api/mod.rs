//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the orchestrator can stay focused on stepping the engine.

pub mod errors;
pub mod observers;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use observers::FrameObserver;
pub use providers::{ControlProvider, IdleControlProvider, ScriptStep, ScriptedControlProvider};
