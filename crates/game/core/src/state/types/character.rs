use crate::config::GameConfig;

use super::{Cell, Direction, Item, Position, Slot};

/// Lifecycle of a character slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeState {
    /// Not on the map. Only a heart revival brings the slot back.
    #[default]
    Dead,
    /// On the map and controlled by its player.
    Active,
    /// Left through the down stairs (or waiting for the first level) and
    /// will be placed by the next level load.
    InTransit,
}

impl LifeState {
    pub const fn is_alive(self) -> bool {
        !matches!(self, LifeState::Dead)
    }
}

/// An arrow in flight. Each character owns at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub position: Position,
    pub facing: Direction,
}

impl Projectile {
    pub const fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }

    /// Grid marker this projectile leaves behind at its position.
    pub const fn marker(&self) -> Cell {
        Cell::Arrow(self.facing)
    }

    pub const fn next_position(&self) -> Position {
        self.position.step(self.facing)
    }
}

/// Per-slot character record. Slots persist across levels for the whole session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub slot: Slot,
    pub score: u32,
    /// Always within `0..=GameConfig::MAX_HEALTH`.
    pub health: u32,
    pub bombs: u32,
    pub keys: u32,
    /// Last direction requested by the player, used to aim arrows.
    pub facing: Direction,
    /// Meaningful only while the character is alive.
    pub position: Position,
    pub projectile: Option<Projectile>,
    pub state: LifeState,
}

impl Character {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            score: 0,
            health: GameConfig::MAX_HEALTH,
            bombs: 0,
            keys: 0,
            facing: Direction::default(),
            position: Position::ORIGIN,
            projectile: None,
            state: LifeState::Dead,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    pub fn is_active(&self) -> bool {
        self.state == LifeState::Active
    }

    /// Player marker stamped on the grid at the character's position.
    pub fn marker(&self) -> Cell {
        Cell::Player(self.slot)
    }

    /// Places the character on a level.
    pub fn start(&mut self, position: Position, facing: Direction) {
        self.position = position;
        self.facing = facing;
        self.projectile = None;
        self.state = LifeState::Active;
    }

    /// Brings a dead character back at `position` with full health.
    pub fn revive(&mut self, position: Position) {
        self.position = position;
        self.health = GameConfig::MAX_HEALTH;
        self.projectile = None;
        self.state = LifeState::Active;
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self
            .health
            .saturating_add(amount)
            .min(GameConfig::MAX_HEALTH);
    }

    /// Applies the effect of picking up `item`.
    pub fn collect(&mut self, item: Item) {
        match item {
            Item::Key => self.keys += 1,
            Item::Food => self.heal(GameConfig::FOOD_HEALTH),
            Item::Money => self.score += GameConfig::MONEY_SCORE,
            Item::Bomb => self.bombs += 1,
        }
    }

    /// Reduces health by `pain`. Returns `true` if the blow was fatal, in
    /// which case health is clamped to zero and the character is dead.
    pub fn take_damage(&mut self, pain: u32) -> bool {
        if self.health > pain {
            self.health -= pain;
            false
        } else {
            self.health = 0;
            self.state = LifeState::Dead;
            true
        }
    }
}
