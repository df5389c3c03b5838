//! Read-only collaborators the engine borrows for a call.
//!
//! [`GameEnv`] bundles the level source and the generator hook so the engine
//! can reach everything it needs without coupling to concrete loaders.
mod generators;
mod levels;
mod rng;

pub use generators::{
    GeneratorPolicy, GeneratorSite, InertGenerators, SpawningGenerators, generator_policy,
};
pub use levels::{LevelOracle, LevelSnapshot};
pub use rng::{PcgRng, RngOracle};

/// Oracles borrowed by [`GameEngine`](crate::GameEngine) calls.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    levels: &'a dyn LevelOracle,
    generators: &'a dyn GeneratorPolicy,
}

impl<'a> GameEnv<'a> {
    pub fn new(levels: &'a dyn LevelOracle, generators: &'a dyn GeneratorPolicy) -> Self {
        Self { levels, generators }
    }

    /// Environment with inert generators.
    pub fn with_levels(levels: &'a dyn LevelOracle) -> Self {
        Self::new(levels, &InertGenerators)
    }

    pub fn levels(&self) -> &'a dyn LevelOracle {
        self.levels
    }

    pub fn generators(&self) -> &'a dyn GeneratorPolicy {
        self.generators
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("levels", &self.levels.level_count())
            .finish_non_exhaustive()
    }
}
