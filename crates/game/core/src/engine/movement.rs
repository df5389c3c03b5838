//! Character actions for one move cycle.

use crate::controls::Controls;
use crate::state::{Cell, Direction, GridError, LifeState, Projectile, Slot};

use super::{EngineError, GameEngine, SimEvent};

/// Result of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    /// Destination refused; nothing changed but the facing.
    Blocked,
    /// Stepped into the down stairs and left the map.
    Warped,
}

impl MoveOutcome {
    pub const fn is_blocked(self) -> bool {
        matches!(self, MoveOutcome::Blocked)
    }
}

/// Directions tried in order when a character walks: the requested one, then
/// one step clockwise, then one step counter-clockwise.
pub(super) fn character_attempts(direction: Direction) -> [Direction; 3] {
    [direction, direction.rotate_cw(), direction.rotate_ccw()]
}

impl GameEngine<'_> {
    /// Runs one character's turn: bomb, then shoot or walk, then arrow flight.
    pub(super) fn step_character(
        &mut self,
        slot: Slot,
        controls: Controls,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), EngineError> {
        let Some(index) = self.roster_index(slot) else {
            return Ok(());
        };

        let character = &mut self.state.characters[index];
        if let Some(direction) = controls.direction {
            character.facing = direction;
        }

        if controls.is_bombing() && character.bombs > 0 {
            character.bombs -= 1;
            self.detonate_for(slot, events);
        }

        let character = &mut self.state.characters[index];
        if controls.is_shooting() {
            if character.projectile.is_none() {
                let facing = controls.direction.unwrap_or(character.facing);
                character.projectile = Some(Projectile::new(character.position, facing));
                events.push(SimEvent::ArrowFired { slot });
            }
        } else if let Some(direction) = controls.direction {
            for attempt in character_attempts(direction) {
                if !self.try_move(slot, attempt, events)?.is_blocked() {
                    break;
                }
            }
        }

        self.advance_projectile(slot, events)?;
        Ok(())
    }

    /// Tries to move the character in `slot` one cell toward `direction`.
    ///
    /// The facing is updated even when the move is refused.
    pub fn try_move(
        &mut self,
        slot: Slot,
        direction: Direction,
        events: &mut Vec<SimEvent>,
    ) -> Result<MoveOutcome, GridError> {
        let Some(index) = self.roster_index(slot) else {
            return Ok(MoveOutcome::Blocked);
        };
        let grid = &mut self.state.grid;
        let character = &mut self.state.characters[index];

        character.facing = direction;
        let origin = character.position;
        let target = origin.step(direction);
        let destination = grid.cell(target).unwrap_or(Cell::Wall);

        let moved = match destination {
            Cell::Space => true,
            Cell::Lock if character.keys > 0 => {
                character.keys -= 1;
                let cells = grid.unlock(target);
                events.push(SimEvent::Unlocked { slot, cells });
                true
            }
            Cell::StairsDown => {
                grid.set(origin, Cell::Space)?;
                character.state = LifeState::InTransit;
                events.push(SimEvent::EnteredStairs { slot });
                tracing::debug!("{} took the stairs at {}", slot, target);
                return Ok(MoveOutcome::Warped);
            }
            other => match other.pickup() {
                Some(item) => {
                    character.collect(item);
                    events.push(SimEvent::PickedUp { slot, item });
                    true
                }
                None => false,
            },
        };

        if !moved {
            return Ok(MoveOutcome::Blocked);
        }

        grid.set(origin, Cell::Space)?;
        grid.set(target, character.marker())?;
        character.position = target;
        Ok(MoveOutcome::Moved)
    }

    /// Bomb blast over the active rectangle, credited to `slot`.
    pub(super) fn detonate_for(&mut self, slot: Slot, events: &mut Vec<SimEvent>) {
        let score = self.state.grid.detonate(self.state.frame.active);
        if let Some(character) = self.state.character_mut(slot) {
            character.score += score;
        }
        events.push(SimEvent::Detonated { slot, score });
    }
}
