//! Cell contents and their boundary encoding.
//!
//! Level files, save data and tilesets address cells by a small integer code
//! in which ghosts, generators, arrows and players each occupy a contiguous
//! block (kind + variant). Inside the simulation cells are a tagged enum; the
//! range packing lives only in [`Cell::code`] and [`Cell::from_code`].
use std::fmt;

use super::Direction;

/// Raw cell codes as stored in level data.
pub mod codes {
    pub const SPACE: u8 = 0;
    pub const WALL: u8 = 1;
    pub const LOCK: u8 = 2;
    pub const STAIRS_UP: u8 = 3;
    pub const STAIRS_DOWN: u8 = 4;
    pub const KEY: u8 = 5;
    pub const FOOD: u8 = 6;
    pub const MONEY: u8 = 7;
    pub const BOMB: u8 = 8;
    /// First of three ghost codes (severity 0..=2).
    pub const GHOST: u8 = 9;
    pub const HEART: u8 = 12;
    /// First of three generator codes (severity 0..=2).
    pub const GENERATOR: u8 = 13;
    /// First of eight arrow codes (one per facing).
    pub const ARROW: u8 = 16;
    /// First of four player codes (one per slot).
    pub const PLAYER: u8 = 24;
    /// Number of valid codes; anything at or above is malformed.
    pub const COUNT: u8 = 28;
}

/// Threat level of a ghost or generator (0 weakest, 2 strongest).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Severity(u8);

impl Severity {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(2);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Multiplier used for ghost damage and bomb score (`severity + 1`).
    pub const fn weight(self) -> u32 {
        self.0 as u32 + 1
    }

    /// One level down, or `None` for the weakest severity.
    pub const fn weaker(self) -> Option<Self> {
        match self.0 {
            0 => None,
            value => Some(Self(value - 1)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = PayloadRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PayloadRangeError::Severity(value))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

/// Player slot, stable for a whole session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Slot(u8);

impl Slot {
    pub const COUNT: usize = 4;
    pub const ALL: [Slot; Self::COUNT] = [Slot(0), Slot(1), Slot(2), Slot(3)];

    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Compass direction this slot spawns towards, relative to the stairs.
    pub const fn spawn_direction(self) -> Direction {
        Direction::from_index(self.0 * 2)
    }
}

impl TryFrom<u8> for Slot {
    type Error = PayloadRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PayloadRangeError::Slot(value))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

/// A cell payload outside its block of codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PayloadRangeError {
    #[error("severity {0} is outside 0..=2")]
    Severity(u8),

    #[error("slot {0} is outside 0..4")]
    Slot(u8),
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// Collectibles a character picks up by walking onto them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    Key,
    Food,
    Money,
    Bomb,
}

/// Content of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Space,
    Wall,
    Lock,
    StairsUp,
    StairsDown,
    Key,
    Food,
    Money,
    Bomb,
    Ghost(Severity),
    Heart,
    Generator(Severity),
    /// A lodged or in-flight arrow, tagged with its flight direction.
    Arrow(Direction),
    Player(Slot),
}

impl Cell {
    /// Boundary code for this cell.
    pub const fn code(self) -> u8 {
        match self {
            Cell::Space => codes::SPACE,
            Cell::Wall => codes::WALL,
            Cell::Lock => codes::LOCK,
            Cell::StairsUp => codes::STAIRS_UP,
            Cell::StairsDown => codes::STAIRS_DOWN,
            Cell::Key => codes::KEY,
            Cell::Food => codes::FOOD,
            Cell::Money => codes::MONEY,
            Cell::Bomb => codes::BOMB,
            Cell::Ghost(severity) => codes::GHOST + severity.get(),
            Cell::Heart => codes::HEART,
            Cell::Generator(severity) => codes::GENERATOR + severity.get(),
            Cell::Arrow(facing) => codes::ARROW + facing.index(),
            Cell::Player(slot) => codes::PLAYER + slot.get(),
        }
    }

    /// Decodes a boundary code, returning `None` for codes outside the table.
    pub const fn from_code(code: u8) -> Option<Self> {
        let cell = match code {
            codes::SPACE => Cell::Space,
            codes::WALL => Cell::Wall,
            codes::LOCK => Cell::Lock,
            codes::STAIRS_UP => Cell::StairsUp,
            codes::STAIRS_DOWN => Cell::StairsDown,
            codes::KEY => Cell::Key,
            codes::FOOD => Cell::Food,
            codes::MONEY => Cell::Money,
            codes::BOMB => Cell::Bomb,
            codes::GHOST..codes::HEART => Cell::Ghost(Severity(code - codes::GHOST)),
            codes::HEART => Cell::Heart,
            codes::GENERATOR..codes::ARROW => Cell::Generator(Severity(code - codes::GENERATOR)),
            codes::ARROW..codes::PLAYER => Cell::Arrow(Direction::from_index(code - codes::ARROW)),
            codes::PLAYER..codes::COUNT => Cell::Player(Slot(code - codes::PLAYER)),
            _ => return None,
        };
        Some(cell)
    }

    /// The item a character collects by stepping here, if any.
    pub const fn pickup(self) -> Option<Item> {
        match self {
            Cell::Key => Some(Item::Key),
            Cell::Food => Some(Item::Food),
            Cell::Money => Some(Item::Money),
            Cell::Bomb => Some(Item::Bomb),
            _ => None,
        }
    }

    pub const fn is_ghost(self) -> bool {
        matches!(self, Cell::Ghost(_))
    }
}
