//! Read-only frame consumers.
use game_core::{GameState, RenderView};

/// Receives the world after every step.
///
/// Observers run synchronously between two steps and only ever see a shared
/// borrow, so they can never interleave with a mutation. Drawing, HUD updates
/// and recording all live behind this trait.
pub trait FrameObserver: Send {
    fn on_frame(&mut self, frame: u64, state: &GameState, view: &RenderView<'_>);
}
