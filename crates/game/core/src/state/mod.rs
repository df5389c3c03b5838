//! Authoritative game state representation.
//!
//! [`GameState`] is the whole simulation context: the shared grid, the
//! character roster, level and cadence bookkeeping, and the camera. Hosts
//! clone or query it but mutate it exclusively through the engine.
mod error;
pub mod types;

use arrayvec::ArrayVec;

pub use error::{GridError, LevelDecodeError};
pub use types::{
    Cell, Character, Direction, Grid, Item, LifeState, MapDimensions, PayloadRangeError,
    PixelPoint, Position, Projectile, Rotor, Severity, Slot, Tick, TickClock, TileRect, codes,
};

use crate::config::GameConfig;
use crate::view::{Camera, Frame, RenderView};

/// Fixed-capacity character roster, indexed by slot.
pub type Roster = ArrayVec<Character, { GameConfig::MAX_PLAYERS }>;

/// Canonical snapshot of the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    pub seed: u64,
    /// Index of the loaded level.
    pub level: u32,
    pub grid: Grid,
    /// One record per configured slot, in slot order.
    pub characters: Roster,
    pub clock: TickClock,
    pub rotor: Rotor,
    pub camera: Camera,
    /// Pixel offset and active rectangle derived from the camera.
    pub frame: Frame,
}

impl GameState {
    /// Creates a fresh session: an empty grid sized from `config` and one
    /// `InTransit` character per configured slot, waiting for the first
    /// level load.
    pub fn new(config: &GameConfig) -> Self {
        let characters = Slot::ALL
            .iter()
            .take(config.player_count())
            .map(|&slot| {
                let mut character = Character::new(slot);
                character.state = LifeState::InTransit;
                character
            })
            .collect();

        Self {
            seed: config.seed,
            level: config.starting_level,
            grid: Grid::new(config.map),
            characters,
            clock: TickClock::new(),
            rotor: Rotor::new(),
            camera: Camera::default(),
            frame: Frame::default(),
        }
    }

    pub fn character(&self, slot: Slot) -> Option<&Character> {
        self.characters.get(slot.index())
    }

    pub fn character_mut(&mut self, slot: Slot) -> Option<&mut Character> {
        self.characters.get_mut(slot.index())
    }

    pub fn active_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_active())
    }

    pub fn any_active(&self) -> bool {
        self.characters.iter().any(Character::is_active)
    }

    pub fn any_alive(&self) -> bool {
        self.characters.iter().any(Character::is_alive)
    }

    pub fn all_dead(&self) -> bool {
        !self.any_alive()
    }

    /// Read-only view for the renderer. Call between steps only.
    pub fn render_view(&self, config: &GameConfig) -> RenderView<'_> {
        RenderView::new(&self.grid, self.frame, config.tile_size)
    }
}
