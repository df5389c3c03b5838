//! Level loading and progression.

use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{Cell, Grid, GridError, LevelDecodeError, Position};
use crate::view::Camera;

use super::{EngineError, GameEngine, LevelError, SimEvent};

fn stray_player(grid: &Grid) -> Option<LevelDecodeError> {
    grid.cells()
        .iter()
        .enumerate()
        .find_map(|(index, cell)| match *cell {
            Cell::Player(slot) => Some(LevelDecodeError::PlayerMarker { index, slot }),
            _ => None,
        })
}

impl GameEngine<'_> {
    /// Replaces the grid with level `index` and places every live character
    /// around the up stairs.
    ///
    /// The level is decoded and all spawn cells checked before anything is
    /// written, so on error the state is unchanged. Lodged arrows may come
    /// with the level; player markers may not.
    pub fn load_level(&mut self, env: GameEnv<'_>, index: u32) -> Result<(), EngineError> {
        let mut events = Vec::new();
        self.load_into(env, index, &mut events)
    }

    pub(super) fn load_into(
        &mut self,
        env: GameEnv<'_>,
        index: u32,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), EngineError> {
        let levels = env.levels();
        let codes = levels.level(index).ok_or(LevelError::Missing { index })?;
        let mut grid = Grid::from_codes(levels.dimensions(), codes)
            .map_err(|source| LevelError::Decode { index, source })?;
        if let Some(source) = stray_player(&grid) {
            return Err(LevelError::Decode { index, source }.into());
        }

        let anchor = grid.find(Cell::StairsUp).unwrap_or_else(|error| {
            tracing::debug!(
                level = index,
                "{}; spawning at {}",
                error,
                self.config.fallback_anchor
            );
            self.config.fallback_anchor
        });

        let spawns: Vec<(usize, Position)> = self
            .state
            .characters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, c)| (i, anchor.step(c.slot.spawn_direction())))
            .collect();
        if let Some(&(_, outside)) = spawns.iter().find(|(_, p)| !grid.contains(*p)) {
            return Err(GridError::OutOfRange {
                position: outside,
                width: grid.width(),
                height: grid.height(),
            }
            .into());
        }

        for &(i, position) in &spawns {
            let character = &mut self.state.characters[i];
            character.start(position, character.slot.spawn_direction());
            grid.set(position, character.marker())?;
        }

        self.state.grid = grid;
        self.state.level = index;
        self.state.rotor.reset();

        let target = self.camera_target();
        self.state.camera.snap(target);
        self.refresh_frame();

        events.push(SimEvent::LevelLoaded { level: index });
        tracing::info!(level = index, players = spawns.len(), "level loaded");
        Ok(())
    }

    /// Moves on once no character is left on the map.
    ///
    /// Nothing happens when every character is dead. Past the last level the
    /// final one is replayed.
    pub(super) fn advance_level(
        &mut self,
        env: GameEnv<'_>,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), EngineError> {
        if self.state.all_dead() {
            return Ok(());
        }

        let levels = env.levels();
        let last = GameConfig::MAX_LEVEL.min(levels.level_count().saturating_sub(1));
        let current = self.state.level;
        let next = (current + 1..=last)
            .find(|&index| levels.contains(index))
            .unwrap_or(current.min(last));

        tracing::debug!(from = current, to = next, "advancing level");
        self.load_into(env, next, events)
    }
}
