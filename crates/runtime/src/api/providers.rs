//! Asynchronous abstraction for sourcing player input.
//!
//! Runtime users plug in [`ControlProvider`] implementations so the simulation
//! can run with live input, scripted fixtures, or bots.
use std::collections::VecDeque;

use async_trait::async_trait;
use game_core::{ControlFrame, Controls, GameState, Slot};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::errors::Result;

/// Trait for providing one control frame per step.
///
/// Different implementations can handle:
/// - Keyboard or gamepad input
/// - Scripted/replayed input
/// - Testing fixtures
#[async_trait]
pub trait ControlProvider: Send + Sync {
    /// Controls for every slot for the next tick, given a read-only view of
    /// the current state.
    async fn provide_controls(&self, state: &GameState) -> Result<ControlFrame>;
}

/// A provider that never presses anything.
pub struct IdleControlProvider;

#[async_trait]
impl ControlProvider for IdleControlProvider {
    async fn provide_controls(&self, _state: &GameState) -> Result<ControlFrame> {
        Ok(ControlFrame::idle())
    }
}

/// One entry of a control script: `controls[i]` is held by slot `i` for
/// `repeat` consecutive frames. Missing slots stay idle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    pub repeat: u32,
    pub controls: Vec<Controls>,
}

impl ScriptStep {
    pub fn new(repeat: u32, controls: Vec<Controls>) -> Self {
        Self { repeat, controls }
    }

    fn frame(&self) -> ControlFrame {
        let mut frame = ControlFrame::idle();
        for (slot, controls) in Slot::ALL.iter().zip(&self.controls) {
            frame.set(*slot, *controls);
        }
        frame
    }
}

/// Plays back a fixed queue of frames, then idles.
pub struct ScriptedControlProvider {
    frames: Mutex<VecDeque<ControlFrame>>,
}

impl ScriptedControlProvider {
    pub fn new(frames: impl IntoIterator<Item = ControlFrame>) -> Self {
        Self {
            frames: Mutex::new(frames.into_iter().collect()),
        }
    }

    /// Expands script steps into one frame per tick.
    pub fn from_steps(steps: &[ScriptStep]) -> Self {
        Self::new(steps.iter().flat_map(|step| {
            let frame = step.frame();
            std::iter::repeat_n(frame, step.repeat as usize)
        }))
    }

    /// Frames left before the script runs dry.
    pub async fn remaining(&self) -> usize {
        self.frames.lock().await.len()
    }
}

#[async_trait]
impl ControlProvider for ScriptedControlProvider {
    async fn provide_controls(&self, _state: &GameState) -> Result<ControlFrame> {
        let next = self.frames.lock().await.pop_front();
        Ok(next.unwrap_or_else(ControlFrame::idle))
    }
}
