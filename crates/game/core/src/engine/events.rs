use crate::state::{Cell, Item, Position, Slot, Tick};

/// Something noteworthy that happened during a step.
///
/// Events are informational. The state is already updated when they are
/// emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimEvent {
    PickedUp { slot: Slot, item: Item },
    Unlocked { slot: Slot, cells: usize },
    Detonated { slot: Slot, score: u32 },
    ArrowFired { slot: Slot },
    /// An arrow struck `target` (the cell it hit before resolution).
    ArrowHit { slot: Slot, target: Cell },
    CharacterHurt { slot: Slot, pain: u32, health: u32 },
    CharacterDied { slot: Slot },
    CharacterRevived { slot: Slot },
    EnteredStairs { slot: Slot },
    GhostSpawned { position: Position },
    LevelLoaded { level: u32 },
}

/// Result of one [`GameEngine::tick`](super::GameEngine::tick).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutcome {
    pub tick: Tick,
    /// Whether a move cycle ran this tick.
    pub move_cycle: bool,
    pub events: Vec<SimEvent>,
}
