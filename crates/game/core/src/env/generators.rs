use crate::config::{GameConfig, GeneratorMode};
use crate::state::{Cell, Direction, Grid, Position, Severity};

use super::{PcgRng, RngOracle};

/// A generator cell visited by the AI pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorSite {
    pub position: Position,
    pub severity: Severity,
    /// Roll seed unique to this site and move cycle.
    pub seed: u64,
}

impl GeneratorSite {
    /// Folds the cell index and move cycle into the session seed, then runs
    /// the result through the SplitMix64 finalizer.
    pub fn new(
        grid: &Grid,
        position: Position,
        severity: Severity,
        session_seed: u64,
        move_cycle: u64,
    ) -> Self {
        let cell = position.y as u64 * grid.width() as u64 + position.x as u64;
        let mut seed = session_seed
            ^ move_cycle.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ cell.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        seed = (seed ^ (seed >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        seed = (seed ^ (seed >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        Self {
            position,
            severity,
            seed: seed ^ (seed >> 31),
        }
    }
}

/// Hook run for every generator cell the AI pass visits.
pub trait GeneratorPolicy: Send + Sync {
    /// May mutate the grid around `site`. Returns the position of a spawned
    /// ghost, if any.
    fn step(&self, grid: &mut Grid, site: GeneratorSite) -> Option<Position>;
}

/// Generators that never do anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct InertGenerators;

impl GeneratorPolicy for InertGenerators {
    fn step(&self, _grid: &mut Grid, _site: GeneratorSite) -> Option<Position> {
        None
    }
}

/// Generators that sometimes place a ghost of their own severity on a free
/// cardinal neighbour.
#[derive(Clone, Copy, Debug)]
pub struct SpawningGenerators<R = PcgRng> {
    pub chance_percent: u32,
    rng: R,
}

impl SpawningGenerators {
    pub fn new(chance_percent: u32) -> Self {
        Self::with_rng(chance_percent, PcgRng)
    }
}

impl<R: RngOracle> SpawningGenerators<R> {
    pub fn with_rng(chance_percent: u32, rng: R) -> Self {
        Self {
            chance_percent: chance_percent.min(100),
            rng,
        }
    }
}

impl<R: RngOracle> GeneratorPolicy for SpawningGenerators<R> {
    fn step(&self, grid: &mut Grid, site: GeneratorSite) -> Option<Position> {
        if !self.rng.chance(site.seed, self.chance_percent) {
            return None;
        }

        let pick = self.rng.pick(site.seed.rotate_left(17), Direction::CARDINAL.len());
        let target = site.position.step(Direction::CARDINAL[pick]);
        if grid.cell(target) != Some(Cell::Space) {
            return None;
        }

        grid.set(target, Cell::Ghost(site.severity)).ok()?;
        Some(target)
    }
}

/// Builds the generator hook selected by `config`.
pub fn generator_policy(config: &GameConfig) -> Box<dyn GeneratorPolicy> {
    match config.generators {
        GeneratorMode::Inert => Box::new(InertGenerators),
        GeneratorMode::Spawning => Box::new(SpawningGenerators::new(config.spawn_chance_percent)),
    }
}
