//! Ghost and generator AI.
//!
//! Only cells inside the active rectangle are simulated, and each pass visits
//! one checkerboard quarter of them selected by the rotor. A ghost that moves
//! one cell always lands on a cell of the other parity, so no ghost is
//! processed twice in one pass.

use crate::config::GameConfig;
use crate::env::{GameEnv, GeneratorSite};
use crate::state::{Cell, Direction, GridError, Position, Severity, Slot};

use super::{GameEngine, SimEvent};

/// Directions a ghost tries in order: straight at its prey, then one step
/// counter-clockwise, then one step clockwise.
fn ghost_attempts(direction: Direction) -> [Direction; 3] {
    [direction, direction.rotate_ccw(), direction.rotate_cw()]
}

/// First coordinate `>= start` with the given parity.
fn first_with_parity(start: i32, parity: i32) -> i32 {
    start + (parity - start).rem_euclid(2)
}

impl GameEngine<'_> {
    /// One AI pass over the current rotor phase of the active rectangle.
    pub(super) fn run_ai_pass(
        &mut self,
        env: GameEnv<'_>,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), GridError> {
        self.state.rotor.advance();
        let area = self.state.frame.active.intersect(&self.state.grid.bounds());
        if area.is_empty() {
            return Ok(());
        }

        let rotor = self.state.rotor;
        let x_start = first_with_parity(area.left, rotor.column_parity());
        let y_start = first_with_parity(area.top, rotor.row_parity());

        for y in (y_start..area.bottom).step_by(2) {
            for x in (x_start..area.right).step_by(2) {
                let position = Position::new(x, y);
                match self.state.grid.cell(position) {
                    Some(Cell::Ghost(severity)) => self.step_ghost(position, severity, events)?,
                    Some(Cell::Generator(severity)) => {
                        self.step_generator(env, position, severity, events)
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Direction from `from` toward the nearest active character by Manhattan
    /// distance. The earliest slot wins ties.
    fn nearest_prey(&self, from: Position) -> Option<Direction> {
        let mut best: Option<(u32, Position)> = None;
        for character in self.state.active_characters() {
            let distance = from.manhattan(character.position);
            if best.is_none_or(|(closest, _)| distance < closest) {
                best = Some((distance, character.position));
            }
        }

        let (_, prey) = best?;
        Direction::from_delta(prey.x - from.x, prey.y - from.y)
    }

    fn step_ghost(
        &mut self,
        position: Position,
        severity: Severity,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), GridError> {
        let Some(direction) = self.nearest_prey(position) else {
            return Ok(());
        };

        for attempt in ghost_attempts(direction) {
            if self.move_ghost(position, severity, attempt, events)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `true` when the attempt counts as taken (moved, attacked, or
    /// froze in front of an arrow).
    fn move_ghost(
        &mut self,
        position: Position,
        severity: Severity,
        direction: Direction,
        events: &mut Vec<SimEvent>,
    ) -> Result<bool, GridError> {
        let target = position.step(direction);
        match self.state.grid.cell(target) {
            Some(Cell::Space) => {
                self.state.grid.set(position, Cell::Space)?;
                self.state.grid.set(target, Cell::Ghost(severity))?;
                Ok(true)
            }
            Some(Cell::Player(slot)) => {
                // The ghost spends itself on the attack.
                self.state.grid.set(position, Cell::Space)?;
                self.hurt(slot, GameConfig::GHOST_PAIN * severity.weight(), events)?;
                Ok(true)
            }
            Some(Cell::Arrow(_)) => Ok(true),
            _ => Ok(false),
        }
    }

    /// Applies `pain` to the character in `slot`. A fatal blow leaves a key
    /// behind if the character carried one.
    pub(super) fn hurt(
        &mut self,
        slot: Slot,
        pain: u32,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), GridError> {
        let Some(index) = self.roster_index(slot) else {
            return Ok(());
        };
        let grid = &mut self.state.grid;
        let character = &mut self.state.characters[index];
        if !character.is_active() {
            return Ok(());
        }

        let fatal = character.take_damage(pain);
        events.push(SimEvent::CharacterHurt {
            slot,
            pain,
            health: character.health,
        });
        if !fatal {
            return Ok(());
        }

        let remains = if character.keys > 0 {
            character.keys -= 1;
            Cell::Key
        } else {
            Cell::Space
        };
        grid.set(character.position, remains)?;
        if let Some(projectile) = character.projectile.take() {
            grid.erase(projectile.position, projectile.marker());
        }

        events.push(SimEvent::CharacterDied { slot });
        tracing::info!("{} died at {}", slot, character.position);
        Ok(())
    }

    fn step_generator(
        &mut self,
        env: GameEnv<'_>,
        position: Position,
        severity: Severity,
        events: &mut Vec<SimEvent>,
    ) {
        let site = GeneratorSite::new(
            &self.state.grid,
            position,
            severity,
            self.state.seed,
            self.state.clock.move_cycles,
        );
        if let Some(spawned) = env.generators().step(&mut self.state.grid, site) {
            events.push(SimEvent::GhostSpawned { position: spawned });
        }
    }
}
