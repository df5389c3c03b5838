pub mod cell;
pub mod character;
pub mod clock;
pub mod common;
pub mod direction;
pub mod grid;

// Re-export cell types
pub use cell::{Cell, Item, PayloadRangeError, Severity, Slot, codes};

// Re-export character and projectile records
pub use character::{Character, LifeState, Projectile};

// Re-export cadence bookkeeping
pub use clock::{Rotor, TickClock};

// Re-export common types
pub use common::{MapDimensions, PixelPoint, Position, Tick};

pub use direction::Direction;

// Re-export grid types
pub use grid::{Grid, TileRect};
