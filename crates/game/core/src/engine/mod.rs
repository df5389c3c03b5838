//! Fixed-cadence stepper.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. Each host frame
//! calls [`GameEngine::tick`] once; every `ticks_per_move` ticks a move cycle
//! resolves all characters in slot order and then one AI pass over the
//! active rectangle. The camera is updated after every tick so the next read
//! sees a consistent frame.

mod enemies;
mod errors;
mod events;
mod level;
mod movement;
mod projectile;

pub use errors::{EngineError, LevelError};
pub use events::{SimEvent, TickOutcome};
pub use movement::MoveOutcome;

use crate::config::GameConfig;
use crate::controls::ControlFrame;
use crate::env::GameEnv;
use crate::state::{GameState, PixelPoint, Slot};
use crate::view::{Camera, Frame};

/// Game engine driving the simulation one tick at a time.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Loads the session's current level and places every live character.
    pub fn start(&mut self, env: GameEnv<'_>) -> Result<Vec<SimEvent>, EngineError> {
        let mut events = Vec::new();
        let level = self.state.level;
        self.load_into(env, level, &mut events)?;
        Ok(events)
    }

    /// Advances the simulation by one tick.
    ///
    /// `controls` is only read when a move cycle falls on this tick.
    pub fn tick(
        &mut self,
        env: GameEnv<'_>,
        controls: &ControlFrame,
    ) -> Result<TickOutcome, EngineError> {
        let mut events = Vec::new();
        let move_cycle = self.state.clock.advance(self.config.move_cadence());

        if move_cycle {
            self.run_move_cycle(env, controls, &mut events)?;
        }
        self.update_camera();

        Ok(TickOutcome {
            tick: self.state.clock.now,
            move_cycle,
            events,
        })
    }

    fn run_move_cycle(
        &mut self,
        env: GameEnv<'_>,
        controls: &ControlFrame,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), EngineError> {
        let mut any_active = false;

        for index in 0..self.state.characters.len() {
            let character = &self.state.characters[index];
            if !character.is_active() {
                continue;
            }
            any_active = true;
            let slot = character.slot;
            self.step_character(slot, controls.for_slot(slot), events)?;
        }

        self.run_ai_pass(env, events)?;

        if !any_active {
            self.advance_level(env, events)?;
        }
        Ok(())
    }

    /// Pulls the camera toward the active characters and recomputes the frame.
    fn update_camera(&mut self) {
        let target = self.camera_target();
        self.state
            .camera
            .follow(target, self.config.camera_speed());
        self.refresh_frame();
    }

    fn camera_target(&self) -> PixelPoint {
        Camera::target(
            self.state.active_characters().map(|c| c.position),
            self.config.tile_size,
        )
    }

    fn refresh_frame(&mut self) {
        self.state.frame = Frame::compute(
            self.state.camera.focus(),
            self.config.viewport,
            self.config.tile_size,
            self.state.grid.dimensions(),
        );
    }

    /// Index into the roster for `slot`, if the slot takes part.
    fn roster_index(&self, slot: Slot) -> Option<usize> {
        (slot.index() < self.state.characters.len()).then_some(slot.index())
    }
}
