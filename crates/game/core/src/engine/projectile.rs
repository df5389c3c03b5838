//! Arrow flight and impact resolution.

use crate::config::GameConfig;
use crate::state::{Cell, GridError, LifeState, Projectile, Severity, Slot};

use super::{GameEngine, SimEvent};

impl GameEngine<'_> {
    /// Moves the arrow owned by `slot` one cell and resolves what it hits.
    ///
    /// The old marker is erased first (guarded, so a cell overwritten since
    /// is left alone). Anything but open space ends the flight.
    pub(super) fn advance_projectile(
        &mut self,
        slot: Slot,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), GridError> {
        let Some(index) = self.roster_index(slot) else {
            return Ok(());
        };
        let Some(projectile) = self.state.characters[index].projectile else {
            return Ok(());
        };

        let next = projectile.next_position();
        let grid = &mut self.state.grid;
        grid.erase(projectile.position, projectile.marker());
        let target = grid.cell(next).unwrap_or(Cell::Wall);

        match target {
            Cell::Space => {
                grid.set(next, projectile.marker())?;
                self.state.characters[index].projectile =
                    Some(Projectile::new(next, projectile.facing));
                return Ok(());
            }
            Cell::Ghost(severity) => {
                self.state.characters[index].score += GameConfig::ARROW_HIT_SCORE;
                let remains = severity.weaker().map_or(Cell::Space, Cell::Ghost);
                grid.set(next, remains)?;
            }
            Cell::Heart => {
                let revived = self
                    .state
                    .characters
                    .iter_mut()
                    .find(|c| c.state == LifeState::Dead);
                match revived {
                    Some(character) => {
                        character.revive(next);
                        grid.set(next, character.marker())?;
                        events.push(SimEvent::CharacterRevived {
                            slot: character.slot,
                        });
                        tracing::info!("{} revived at {}", character.slot, next);
                    }
                    None => grid.set(next, Cell::Ghost(Severity::MAX))?,
                }
            }
            Cell::Bomb => self.detonate_for(slot, events),
            _ => {}
        }

        events.push(SimEvent::ArrowHit { slot, target });
        self.state.characters[index].projectile = None;
        Ok(())
    }
}
