use game_core::{
    Cell, ControlFrame, Controls, Direction, EngineError, GameConfig, GameEngine, GameEnv,
    GameState, Grid, LevelDecodeError, LevelError, LevelSnapshot, LifeState, MapDimensions,
    Position, RngOracle, Severity, SimEvent, Slot, SpawningGenerators,
};

const P1: Slot = Slot::ALL[0];
const P2: Slot = Slot::ALL[1];

fn dims() -> MapDimensions {
    MapDimensions::new(10, 10)
}

fn config(players: u8) -> GameConfig {
    GameConfig {
        players,
        ticks_per_move: 1,
        map: dims(),
        ..GameConfig::new()
    }
}

/// 10×10 level with a wall border and the up stairs at (5, 6), so the first
/// player spawns at (5, 5).
fn walled(extras: &[(i32, i32, Cell)]) -> Grid {
    let mut grid = Grid::new(dims());
    for position in grid.bounds().positions() {
        if position.x == 0 || position.y == 0 || position.x == 9 || position.y == 9 {
            grid.set(position, Cell::Wall).unwrap();
        }
    }
    grid.set(Position::new(5, 6), Cell::StairsUp).unwrap();
    for &(x, y, cell) in extras {
        grid.set(Position::new(x, y), cell).unwrap();
    }
    grid
}

fn ghost(severity: u8) -> Cell {
    Cell::Ghost(Severity::new(severity).unwrap())
}

fn levels(grids: &[Grid]) -> LevelSnapshot {
    let mut snapshot = LevelSnapshot::new(dims());
    for grid in grids {
        snapshot.push(grid.codes());
    }
    snapshot
}

fn at(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn shoot(direction: Direction) -> ControlFrame {
    let mut controls = Controls::shoot();
    controls.direction = Some(direction);
    ControlFrame::single(P1, controls)
}

fn idle() -> ControlFrame {
    ControlFrame::idle()
}

#[test]
fn arrow_flies_until_it_hits_the_border() {
    let config = config(1);
    let levels = levels(&[walled(&[])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).expect("level 0 loads");

    assert_eq!(engine.state().characters[0].position, at(5, 5));

    let outcome = engine.tick(env, &shoot(Direction::East)).unwrap();
    assert!(outcome.move_cycle);
    assert!(outcome.events.contains(&SimEvent::ArrowFired { slot: P1 }));
    engine.tick(env, &idle()).unwrap();
    engine.tick(env, &idle()).unwrap();

    let state = engine.state();
    let arrow = state.characters[0].projectile.expect("arrow in flight");
    assert_eq!(arrow.position, at(8, 5));
    assert_eq!(state.grid.get(at(8, 5)), Ok(Cell::Arrow(Direction::East)));
    assert_eq!(state.grid.get(at(6, 5)), Ok(Cell::Space));
    assert_eq!(state.grid.get(at(7, 5)), Ok(Cell::Space));
    assert_eq!(state.grid.get(at(5, 5)), Ok(Cell::Player(P1)));

    let outcome = engine.tick(env, &idle()).unwrap();
    assert!(outcome.events.contains(&SimEvent::ArrowHit {
        slot: P1,
        target: Cell::Wall
    }));

    let state = engine.state();
    assert_eq!(state.characters[0].projectile, None);
    assert_eq!(state.grid.get(at(8, 5)), Ok(Cell::Space));
    assert_eq!(state.grid.get(at(9, 5)), Ok(Cell::Wall));
}

fn ghost_strikes_weak_character(keys: u32) -> GameState {
    let config = config(1);
    let levels = levels(&[walled(&[(5, 4, ghost(1))])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    {
        let mut engine = GameEngine::new(&mut state, &config);
        engine.start(env).unwrap();
    }
    state.characters[0].health = 15;
    state.characters[0].keys = keys;

    let mut engine = GameEngine::new(&mut state, &config);
    for _ in 0..4 {
        engine.tick(env, &idle()).unwrap();
    }
    state
}

#[test]
fn fatal_blow_drops_a_key() {
    let state = ghost_strikes_weak_character(2);
    let character = &state.characters[0];

    assert_eq!(character.health, 0);
    assert_eq!(character.state, LifeState::Dead);
    assert_eq!(character.keys, 1);
    assert_eq!(state.grid.get(at(5, 5)), Ok(Cell::Key));
    // The attacking ghost is spent.
    assert_eq!(state.grid.get(at(5, 4)), Ok(Cell::Space));
    assert!(state.all_dead());
}

#[test]
fn fatal_blow_without_keys_leaves_space() {
    let state = ghost_strikes_weak_character(0);

    assert_eq!(state.characters[0].state, LifeState::Dead);
    assert_eq!(state.grid.get(at(5, 5)), Ok(Cell::Space));
}

#[test]
fn ghost_damage_scales_with_severity() {
    let config = config(1);
    let levels = levels(&[walled(&[(5, 4, ghost(2))])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    let mut hurt = None;
    for _ in 0..4 {
        let outcome = engine.tick(env, &idle()).unwrap();
        hurt = hurt.or(outcome
            .events
            .iter()
            .find(|e| matches!(e, SimEvent::CharacterHurt { .. }))
            .copied());
    }

    assert_eq!(
        hurt,
        Some(SimEvent::CharacterHurt {
            slot: P1,
            pain: 30,
            health: 70
        })
    );
    assert_eq!(engine.state().characters[0].state, LifeState::Active);
}

#[test]
fn locks_need_a_key_and_open_the_whole_region() {
    let config = config(1);
    let levels = levels(&[walled(&[
        (6, 5, Cell::Lock),
        (7, 4, Cell::Lock),
        (8, 3, Cell::Lock),
        (7, 7, Cell::Lock),
    ])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();
    let mut events = Vec::new();

    let outcome = engine.try_move(P1, Direction::East, &mut events).unwrap();
    assert!(outcome.is_blocked());
    assert_eq!(engine.state().grid.get(at(6, 5)), Ok(Cell::Lock));
    assert_eq!(engine.state().characters[0].facing, Direction::East);

    state.characters[0].keys = 1;
    let mut engine = GameEngine::new(&mut state, &config);
    let outcome = engine.try_move(P1, Direction::East, &mut events).unwrap();
    assert_eq!(outcome, game_core::MoveOutcome::Moved);
    assert!(events.contains(&SimEvent::Unlocked { slot: P1, cells: 3 }));

    assert_eq!(state.characters[0].keys, 0);
    assert_eq!(state.characters[0].position, at(6, 5));
    assert_eq!(state.grid.get(at(6, 5)), Ok(Cell::Player(P1)));
    assert_eq!(state.grid.get(at(5, 5)), Ok(Cell::Space));
    assert_eq!(state.grid.get(at(7, 4)), Ok(Cell::Space));
    assert_eq!(state.grid.get(at(8, 3)), Ok(Cell::Space));
    // Not connected to the opened region.
    assert_eq!(state.grid.get(at(7, 7)), Ok(Cell::Lock));
}

#[test]
fn walking_diagonally_into_a_wall_slides_along_it() {
    let config = config(1);
    let levels = levels(&[walled(&[(6, 4, Cell::Wall)])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    // North-east is walled; the clockwise retry (east) is open.
    engine
        .tick(env, &ControlFrame::single(P1, Controls::walk(Direction::NorthEast)))
        .unwrap();

    let character = &engine.state().characters[0];
    assert_eq!(character.position, at(6, 5));
    assert_eq!(character.facing, Direction::East);
}

#[test]
fn pickups_are_collected_on_entry() {
    let config = config(1);
    let levels = levels(&[walled(&[
        (5, 4, Cell::Money),
        (5, 3, Cell::Bomb),
        (5, 2, Cell::Key),
        (5, 1, Cell::Food),
    ])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    let north = ControlFrame::single(P1, Controls::walk(Direction::North));
    for _ in 0..4 {
        engine.tick(env, &north).unwrap();
    }

    let character = &engine.state().characters[0];
    assert_eq!(character.position, at(5, 1));
    assert_eq!(character.score, GameConfig::MONEY_SCORE);
    assert_eq!(character.bombs, 1);
    assert_eq!(character.keys, 1);
    assert_eq!(character.health, GameConfig::MAX_HEALTH);
    assert_eq!(engine.state().grid.count(|c| c == Cell::Player(P1)), 1);
}

#[test]
fn arrow_downgrades_ghosts_one_severity_per_hit() {
    let config = config(1);
    let levels = levels(&[walled(&[(7, 5, ghost(2))])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    let expected = [ghost(1), ghost(0), Cell::Space];
    for (hit, remains) in expected.into_iter().enumerate() {
        engine.tick(env, &shoot(Direction::East)).unwrap();
        engine.tick(env, &idle()).unwrap();

        let state = engine.state();
        assert_eq!(state.grid.get(at(7, 5)), Ok(remains), "after hit {}", hit + 1);
        assert_eq!(state.characters[0].score, 10 * (hit as u32 + 1));
        assert_eq!(state.characters[0].projectile, None);
    }
}

#[test]
fn ghost_freezes_in_front_of_an_arrow() {
    let config = config(1);
    // A lodged arrow sits between the ghost and the player.
    let levels = levels(&[walled(&[
        (6, 5, Cell::Arrow(Direction::South)),
        (7, 5, ghost(0)),
    ])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    for _ in 0..4 {
        engine.tick(env, &idle()).unwrap();
    }

    // The freeze counts as the ghost's move, so the diagonal alternatives
    // are never tried.
    let state = engine.state();
    assert_eq!(state.grid.get(at(7, 5)), Ok(ghost(0)));
    assert_eq!(state.grid.get(at(6, 5)), Ok(Cell::Arrow(Direction::South)));
    assert_eq!(state.characters[0].health, GameConfig::MAX_HEALTH);
}

#[test]
fn heart_revives_the_first_dead_character() {
    let config = config(2);
    let levels = levels(&[walled(&[(7, 5, Cell::Heart)])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    {
        let mut engine = GameEngine::new(&mut state, &config);
        engine.start(env).unwrap();
    }
    // Second player starts east of the stairs, then dies.
    assert_eq!(state.characters[1].position, at(6, 6));
    state.characters[1].state = LifeState::Dead;
    state.characters[1].health = 0;
    state.grid.set(at(6, 6), Cell::Space).unwrap();

    let mut engine = GameEngine::new(&mut state, &config);
    engine.tick(env, &shoot(Direction::East)).unwrap();
    let outcome = engine.tick(env, &idle()).unwrap();
    assert!(outcome.events.contains(&SimEvent::CharacterRevived { slot: P2 }));

    let revived = &state.characters[1];
    assert_eq!(revived.state, LifeState::Active);
    assert_eq!(revived.position, at(7, 5));
    assert_eq!(revived.health, GameConfig::MAX_HEALTH);
    assert_eq!(state.grid.get(at(7, 5)), Ok(Cell::Player(P2)));
    assert_eq!(state.characters[0].projectile, None);
}

#[test]
fn heart_turns_into_a_fierce_ghost_when_nobody_is_dead() {
    let config = config(1);
    let levels = levels(&[walled(&[(7, 5, Cell::Heart)])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    engine.tick(env, &shoot(Direction::East)).unwrap();
    engine.tick(env, &idle()).unwrap();

    assert_eq!(engine.state().grid.get(at(7, 5)), Ok(ghost(2)));
}

#[test]
fn arrow_into_a_bomb_detonates_and_the_bomb_stays() {
    let config = config(1);
    let levels = levels(&[walled(&[
        (7, 5, Cell::Bomb),
        (2, 2, ghost(0)),
        (3, 7, ghost(2)),
    ])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    engine.tick(env, &shoot(Direction::East)).unwrap();
    let outcome = engine.tick(env, &idle()).unwrap();

    assert!(outcome.events.contains(&SimEvent::Detonated {
        slot: P1,
        score: 40
    }));
    let state = engine.state();
    assert_eq!(state.characters[0].score, 40);
    assert_eq!(state.grid.get(at(7, 5)), Ok(Cell::Bomb));
    assert_eq!(state.grid.count(|c| c.is_ghost()), 0);
    assert_eq!(state.characters[0].projectile, None);
}

#[test]
fn bomb_action_consumes_a_bomb_and_clears_visible_ghosts() {
    let config = config(1);
    let levels = levels(&[walled(&[(2, 2, ghost(1)), (8, 8, ghost(0))])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    {
        let mut engine = GameEngine::new(&mut state, &config);
        engine.start(env).unwrap();
    }
    state.characters[0].bombs = 1;

    let mut engine = GameEngine::new(&mut state, &config);
    let bomb = ControlFrame::single(P1, Controls::bomb());
    engine.tick(env, &bomb).unwrap();
    engine.tick(env, &bomb).unwrap();

    assert_eq!(state.characters[0].bombs, 0);
    assert_eq!(state.characters[0].score, 30);
    assert_eq!(state.grid.count(|c| c.is_ghost()), 0);
}

#[test]
fn down_stairs_lead_to_the_next_level() {
    let config = config(1);
    let first = walled(&[(6, 5, Cell::StairsDown)]);
    let mut second = Grid::new(dims());
    second.set(at(3, 3), Cell::StairsUp).unwrap();
    let levels = levels(&[first, second]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    let east = ControlFrame::single(P1, Controls::walk(Direction::East));
    let outcome = engine.tick(env, &east).unwrap();
    assert!(outcome.events.contains(&SimEvent::EnteredStairs { slot: P1 }));
    assert_eq!(engine.state().characters[0].state, LifeState::InTransit);
    assert_eq!(engine.state().grid.get(at(5, 5)), Ok(Cell::Space));
    assert_eq!(engine.state().level, 0);

    let outcome = engine.tick(env, &idle()).unwrap();
    assert!(outcome.events.contains(&SimEvent::LevelLoaded { level: 1 }));

    let state = engine.state();
    assert_eq!(state.level, 1);
    assert_eq!(state.characters[0].state, LifeState::Active);
    assert_eq!(state.characters[0].position, at(3, 2));
    assert_eq!(state.characters[0].facing, Direction::North);
    assert_eq!(state.grid.get(at(3, 2)), Ok(Cell::Player(P1)));
}

#[test]
fn last_level_replays_instead_of_overflowing() {
    let config = config(1);
    let levels = levels(&[walled(&[(6, 5, Cell::StairsDown)])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    let east = ControlFrame::single(P1, Controls::walk(Direction::East));
    engine.tick(env, &east).unwrap();
    let outcome = engine.tick(env, &idle()).unwrap();

    assert!(outcome.events.contains(&SimEvent::LevelLoaded { level: 0 }));
    assert_eq!(engine.state().characters[0].position, at(5, 5));
}

#[test]
fn dead_party_does_not_advance() {
    let config = config(1);
    let levels = levels(&[walled(&[]), walled(&[])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    {
        let mut engine = GameEngine::new(&mut state, &config);
        engine.start(env).unwrap();
    }
    state.characters[0].state = LifeState::Dead;

    let mut engine = GameEngine::new(&mut state, &config);
    for _ in 0..3 {
        let outcome = engine.tick(env, &idle()).unwrap();
        assert!(outcome.events.is_empty());
    }
    assert_eq!(state.level, 0);
}

#[test]
fn players_spawn_around_the_up_stairs() {
    let config = config(4);
    let levels = levels(&[walled(&[])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    let spots: Vec<_> = engine
        .state()
        .characters
        .iter()
        .map(|c| (c.position, c.facing))
        .collect();
    assert_eq!(
        spots,
        vec![
            (at(5, 5), Direction::North),
            (at(6, 6), Direction::East),
            (at(5, 7), Direction::South),
            (at(4, 6), Direction::West),
        ]
    );
}

#[test]
fn missing_up_stairs_fall_back_to_the_default_anchor() {
    let config = config(1);
    let levels = levels(&[Grid::new(dims())]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    assert_eq!(engine.state().characters[0].position, at(2, 1));
}

#[test]
fn bad_levels_leave_the_state_untouched() {
    let config = config(1);
    let mut snapshot = levels(&[walled(&[])]);
    let mut broken = walled(&[]).codes();
    broken[17] = 200;
    snapshot.push(broken);
    let env = GameEnv::with_levels(&snapshot);

    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();
    let before = engine.state().clone();

    let error = engine.load_level(env, 1).unwrap_err();
    assert!(matches!(
        error,
        EngineError::Level(LevelError::Decode { index: 1, .. })
    ));
    let error = engine.load_level(env, 7).unwrap_err();
    assert_eq!(error, EngineError::Level(LevelError::Missing { index: 7 }));

    assert_eq!(engine.state(), &before);
}

#[test]
fn levels_carrying_player_markers_are_refused() {
    let config = config(1);
    let mut snapshot = levels(&[walled(&[])]);
    snapshot.push(walled(&[(2, 2, Cell::Player(P2))]).codes());
    let env = GameEnv::with_levels(&snapshot);

    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();
    let before = engine.state().clone();

    let error = engine.load_level(env, 1).unwrap_err();
    assert_eq!(
        error,
        EngineError::Level(LevelError::Decode {
            index: 1,
            source: LevelDecodeError::PlayerMarker {
                index: 22,
                slot: P2
            },
        })
    );
    assert_eq!(engine.state(), &before);
}

/// Passes every roll and always picks the first cardinal direction (north).
struct AlwaysNorth;

impl RngOracle for AlwaysNorth {
    fn next_u32(&self, _seed: u64) -> u32 {
        0
    }
}

#[test]
fn inert_generators_never_spawn() {
    let config = config(1);
    let levels = levels(&[walled(&[(2, 2, Cell::Generator(Severity::MAX))])]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();
    let grid_before = engine.state().grid.clone();

    for _ in 0..8 {
        let outcome = engine.tick(env, &idle()).unwrap();
        assert!(
            !outcome
                .events
                .iter()
                .any(|event| matches!(event, SimEvent::GhostSpawned { .. }))
        );
    }

    assert_eq!(engine.state().grid, grid_before);
}

#[test]
fn spawning_generator_places_a_ghost_once_its_phase_comes_up() {
    let config = config(1);
    let levels = levels(&[walled(&[(2, 2, Cell::Generator(Severity::MAX))])]);
    let generators = SpawningGenerators::with_rng(100, AlwaysNorth);
    let env = GameEnv::new(&levels, &generators);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    // The generator sits on an even column and row, visited once per four passes.
    let mut spawned = Vec::new();
    for _ in 0..4 {
        let outcome = engine.tick(env, &idle()).unwrap();
        spawned.extend(outcome.events.into_iter().filter_map(|event| match event {
            SimEvent::GhostSpawned { position } => Some(position),
            _ => None,
        }));
    }

    assert_eq!(spawned, vec![at(2, 1)]);
    let state = engine.state();
    assert_eq!(state.grid.get(at(2, 2)), Ok(Cell::Generator(Severity::MAX)));
    assert_eq!(state.grid.get(at(2, 1)), Ok(ghost(2)));
    assert_eq!(state.grid.count(|c| c.is_ghost()), 1);
}

#[test]
fn rotor_reaches_every_ghost_within_four_cycles() {
    let config = config(1);
    let originals = [(2, 2), (8, 3), (3, 8), (7, 7)];
    let extras: Vec<_> = originals.iter().map(|&(x, y)| (x, y, ghost(0))).collect();
    let levels = levels(&[walled(&extras)]);
    let env = GameEnv::with_levels(&levels);
    let mut state = GameState::new(&config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.start(env).unwrap();

    // First phase: odd columns, even rows. Only (3, 8) qualifies.
    engine.tick(env, &idle()).unwrap();
    let still_there: Vec<_> = originals
        .iter()
        .filter(|&&(x, y)| engine.state().grid.get(at(x, y)) == Ok(ghost(0)))
        .copied()
        .collect();
    assert_eq!(still_there, vec![(2, 2), (8, 3), (7, 7)]);

    for _ in 0..3 {
        engine.tick(env, &idle()).unwrap();
    }
    for (x, y) in originals {
        assert_ne!(engine.state().grid.get(at(x, y)), Ok(ghost(0)), "({x}, {y})");
    }
}
