//! HUD-style frame summary written to the log.
use game_core::{GameState, LifeState, RenderView, Slot};
use runtime::FrameObserver;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterSummary {
    pub slot: Slot,
    pub score: u32,
    pub health: u32,
    pub state: LifeState,
}

/// What a status bar would show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub level: u32,
    pub characters: Vec<CharacterSummary>,
}

impl Summary {
    pub fn of(state: &GameState) -> Self {
        Self {
            level: state.level,
            characters: state
                .characters
                .iter()
                .map(|c| CharacterSummary {
                    slot: c.slot,
                    score: c.score,
                    health: c.health,
                    state: c.state,
                })
                .collect(),
        }
    }
}

/// Logs level, score and health whenever they change.
#[derive(Debug, Default)]
pub struct SummaryObserver {
    last: Option<Summary>,
}

impl SummaryObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Summary> {
        self.last.as_ref()
    }
}

impl FrameObserver for SummaryObserver {
    fn on_frame(&mut self, frame: u64, state: &GameState, _view: &RenderView<'_>) {
        let summary = Summary::of(state);
        if self.last.as_ref() == Some(&summary) {
            return;
        }

        if self.last.as_ref().is_none_or(|last| last.level != summary.level) {
            tracing::info!(frame, level = summary.level, "entered level");
        }
        for character in &summary.characters {
            tracing::info!(
                frame,
                "{} score={} health={} ({})",
                character.slot,
                character.score,
                character.health,
                character.state
            );
        }
        self.last = Some(summary);
    }
}

#[cfg(test)]
mod tests {
    use game_core::GameConfig;

    use super::*;

    #[test]
    fn records_only_changes() {
        let config = GameConfig::with_players(2);
        let mut state = GameState::new(&config);
        let mut observer = SummaryObserver::new();

        observer.on_frame(1, &state, &state.render_view(&config));
        let first = observer.last().cloned().unwrap();
        assert_eq!(first.level, 0);
        assert_eq!(first.characters.len(), 2);
        assert_eq!(first.characters[1].health, GameConfig::MAX_HEALTH);

        state.characters[0].score = 50;
        observer.on_frame(2, &state, &state.render_view(&config));
        assert_eq!(observer.last().unwrap().characters[0].score, 50);
    }
}
