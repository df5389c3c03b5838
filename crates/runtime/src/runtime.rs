//! High-level runtime orchestrator.
//!
//! The runtime owns the game state and the content it runs on, paces the
//! engine at a fixed frame rate, and fans results out to observers and the
//! event bus. Each frame is a strict sequence: gather controls, tick once,
//! publish events, then let observers read the finished frame.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::MissedTickBehavior;

use game_core::{
    GameConfig, GameEngine, GameEnv, GameState, GeneratorPolicy, LevelOracle, TickOutcome,
    generator_policy,
};

use crate::api::{ControlProvider, FrameObserver, Result, RuntimeError};
use crate::events::{Event, EventBus, SessionEvent, Topic};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Steps per second for [`Runtime::run`].
    pub frame_rate_hz: u32,
    pub event_buffer_size: usize,
    /// Stop [`Runtime::run`] after this many frames.
    pub max_frames: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_FRAME_RATE_HZ: u32 = 60;

    fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate_hz.max(1)))
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            frame_rate_hz: Self::DEFAULT_FRAME_RATE_HZ,
            event_buffer_size: 100,
            max_frames: None,
        }
    }
}

/// Main runtime that drives the game simulation.
pub struct Runtime {
    config: RuntimeConfig,
    state: GameState,
    levels: Box<dyn LevelOracle>,
    generators: Box<dyn GeneratorPolicy>,
    provider: Option<Box<dyn ControlProvider>>,
    observers: Vec<Box<dyn FrameObserver>>,
    events: EventBus,
    frames: u64,
    started: bool,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Read-only view of the simulation.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames stepped so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Subscribe to runtime events on `topic`
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Set the control provider
    pub fn set_control_provider(&mut self, provider: impl ControlProvider + 'static) {
        self.provider = Some(Box::new(provider));
    }

    /// Loads the starting level. Called by the first [`step`](Self::step)
    /// if the host has not done so.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }

        let env = GameEnv::new(self.levels.as_ref(), self.generators.as_ref());
        let events = GameEngine::new(&mut self.state, &self.config.game).start(env)?;
        self.started = true;

        self.publish_all(events.into_iter().map(Event::Sim));
        self.events.publish(Event::Session(SessionEvent::Started {
            level: self.state.level,
        }));
        tracing::info!(
            level = self.state.level,
            players = self.state.characters.len(),
            "session started"
        );
        Ok(())
    }

    /// Execute a single frame
    ///
    /// Requires a control provider to be configured.
    pub async fn step(&mut self) -> Result<TickOutcome> {
        self.start()?;

        let provider = self.provider.as_ref().ok_or(RuntimeError::ProviderNotSet)?;
        let controls = provider.provide_controls(&self.state).await?;

        let env = GameEnv::new(self.levels.as_ref(), self.generators.as_ref());
        let outcome = GameEngine::new(&mut self.state, &self.config.game).tick(env, &controls)?;
        self.frames += 1;

        self.publish_all(outcome.events.iter().copied().map(Event::Sim));

        let view = self.state.render_view(&self.config.game);
        for observer in &mut self.observers {
            observer.on_frame(self.frames, &self.state, &view);
        }

        tracing::trace!(
            frame = self.frames,
            tick = outcome.tick.0,
            move_cycle = outcome.move_cycle,
            "frame stepped"
        );
        Ok(outcome)
    }

    /// Run the frame loop at `frame_rate_hz` until `max_frames` is reached or
    /// every character is dead. Returns the total number of frames stepped.
    pub async fn run(&mut self) -> Result<u64> {
        self.start()?;

        let mut interval = tokio::time::interval(self.config.frame_period());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if self
                .config
                .max_frames
                .is_some_and(|limit| self.frames >= limit)
            {
                break;
            }
            if self.state.all_dead() {
                tracing::info!(level = self.state.level, "every character is dead");
                self.events.publish(Event::Session(SessionEvent::AllDead {
                    level: self.state.level,
                }));
                break;
            }

            interval.tick().await;
            self.step().await?;
        }

        self.events.publish(Event::Session(SessionEvent::Stopped {
            frames: self.frames,
        }));
        tracing::info!(frames = self.frames, "session stopped");
        Ok(self.frames)
    }

    fn publish_all(&self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.events.publish(event);
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    levels: Option<Box<dyn LevelOracle>>,
    generators: Option<Box<dyn GeneratorPolicy>>,
    provider: Option<Box<dyn ControlProvider>>,
    observers: Vec<Box<dyn FrameObserver>>,
    events: Option<EventBus>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            levels: None,
            generators: None,
            provider: None,
            observers: Vec::new(),
            events: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required level source
    pub fn levels(mut self, levels: impl LevelOracle + 'static) -> Self {
        self.levels = Some(Box::new(levels));
        self
    }

    /// Override the generator hook (optional)
    ///
    /// If not provided, the policy selected by `GameConfig::generators` is
    /// used.
    pub fn generators(mut self, generators: impl GeneratorPolicy + 'static) -> Self {
        self.generators = Some(Box::new(generators));
        self
    }

    /// Set control provider (optional, required before stepping)
    pub fn control_provider(mut self, provider: impl ControlProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Add a frame observer. Observers are called in insertion order.
    pub fn observer(mut self, observer: impl FrameObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Publish into an existing bus, e.g. one already subscribed to.
    pub fn event_bus(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let levels = self.levels.ok_or(RuntimeError::MissingLevels)?;
        let generators = self
            .generators
            .unwrap_or_else(|| generator_policy(&self.config.game));
        let events = self
            .events
            .unwrap_or_else(|| EventBus::with_capacity(self.config.event_buffer_size));
        let state = GameState::new(&self.config.game);

        Ok(Runtime {
            config: self.config,
            state,
            levels,
            generators,
            provider: self.provider,
            observers: self.observers,
            events,
            frames: 0,
            started: false,
        })
    }
}
