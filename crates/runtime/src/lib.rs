//! Runtime orchestration for the dungeon simulation.
//!
//! This crate drives [`game_core::GameEngine`] at a fixed frame rate on tokio.
//! Consumers embed [`Runtime`] to step or run the simulation, plug input in
//! through [`ControlProvider`], read each frame through [`FrameObserver`], and
//! subscribe to events on the [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients implement or handle
//! - [`events`] provides the topic-based event bus
pub mod api;
pub mod events;
pub mod runtime;

pub use api::{
    ControlProvider, FrameObserver, IdleControlProvider, Result, RuntimeError,
    ScriptedControlProvider, ScriptStep,
};
pub use events::{Event, EventBus, SessionEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
