//! Per-cycle control input.
//!
//! The engine reads one [`Controls`] per character each move cycle. Turning
//! raw device state into controls is the host's job; [`KeyBindings`] covers
//! the common keyboard case for any key type the host uses.
use bitflags::bitflags;

use crate::config::GameConfig;
use crate::state::{Direction, Slot};

bitflags! {
    /// Buttons held during a move cycle.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ActionFlags: u8 {
        const SHOOT = 1 << 0;
        const BOMB  = 1 << 1;
    }
}

/// Input for one character for one move cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Controls {
    pub direction: Option<Direction>,
    pub actions: ActionFlags,
}

impl Controls {
    pub const IDLE: Self = Self {
        direction: None,
        actions: ActionFlags::empty(),
    };

    pub const fn walk(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            actions: ActionFlags::empty(),
        }
    }

    pub const fn shoot() -> Self {
        Self {
            direction: None,
            actions: ActionFlags::SHOOT,
        }
    }

    pub const fn bomb() -> Self {
        Self {
            direction: None,
            actions: ActionFlags::BOMB,
        }
    }

    pub fn is_shooting(&self) -> bool {
        self.actions.contains(ActionFlags::SHOOT)
    }

    pub fn is_bombing(&self) -> bool {
        self.actions.contains(ActionFlags::BOMB)
    }
}

/// Controls for every slot, sampled once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlFrame([Controls; GameConfig::MAX_PLAYERS]);

impl ControlFrame {
    pub const fn idle() -> Self {
        Self([Controls::IDLE; GameConfig::MAX_PLAYERS])
    }

    /// A frame where only `slot` has input.
    pub fn single(slot: Slot, controls: Controls) -> Self {
        let mut frame = Self::idle();
        frame.set(slot, controls);
        frame
    }

    pub fn for_slot(&self, slot: Slot) -> Controls {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, controls: Controls) {
        self.0[slot.index()] = controls;
    }

    pub fn is_idle(&self) -> bool {
        self.0.iter().all(|c| *c == Controls::IDLE)
    }
}

/// Host input state that can answer "is this key held".
pub trait KeySnapshot<K> {
    fn is_down(&self, key: &K) -> bool;
}

/// Keyboard layout for one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyBindings<K> {
    pub left: K,
    pub right: K,
    pub up: K,
    pub down: K,
    pub shoot: K,
    pub bomb: K,
}

impl<K> KeyBindings<K> {
    /// Samples `snapshot` into controls. Opposite keys cancel out.
    pub fn read(&self, snapshot: &impl KeySnapshot<K>) -> Controls {
        let axis = |negative: &K, positive: &K| {
            i32::from(snapshot.is_down(positive)) - i32::from(snapshot.is_down(negative))
        };
        let dx = axis(&self.left, &self.right);
        let dy = axis(&self.up, &self.down);

        let mut actions = ActionFlags::empty();
        actions.set(ActionFlags::SHOOT, snapshot.is_down(&self.shoot));
        actions.set(ActionFlags::BOMB, snapshot.is_down(&self.bomb));

        Controls {
            direction: Direction::from_delta(dx, dy),
            actions,
        }
    }
}
