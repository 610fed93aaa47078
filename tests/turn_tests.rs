//! Turn orchestration scenarios: winning, elimination, the touch rule and
//! scoring.

use tower_rules::board::{TileId, TowerTier};
use tower_rules::capability::Capability;
use tower_rules::core::{GameError, PlayerId, Position, RuleViolation, TurnAction, WorkerId};
use tower_rules::rules::{
    EliminationReason, Game, GameBuilder, GameResult, GodAssignment, Leaderboard, Placement,
    TurnEvent, TurnPhase,
};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn tile(game: &Game, x: i32, y: i32) -> TileId {
    game.board().tile_at(pos(x, y)).unwrap()
}

/// No god cards, one worker per player at the given positions.
fn scenario(players: usize, spawns: &[(i32, i32)]) -> GameBuilder {
    GameBuilder::new()
        .player_count(players)
        .workers_per_player(1)
        .god_assignment(GodAssignment::Fixed(vec![None; players]))
        .placement(Placement::Fixed(spawns.iter().map(|&(x, y)| pos(x, y)).collect()))
}

fn play(game: &mut Game, worker: u16, to: (i32, i32), build: (i32, i32)) -> Vec<TurnEvent> {
    let mut events = game.select_worker(WorkerId::new(worker)).unwrap();
    let to = tile(game, to.0, to.1);
    events.extend(game.move_worker(to).unwrap());
    if matches!(game.phase(), TurnPhase::Building { .. }) {
        let at = tile(game, build.0, build.1);
        events.extend(game.build(at).unwrap());
    }
    events
}

#[test]
fn test_climbing_to_tower3_wins_and_scores() {
    let leaderboard = Leaderboard::new();
    let mut game = scenario(2, &[(0, 0), (4, 4)])
        .tower(pos(1, 0), TowerTier::Tower1)
        .tower(pos(2, 0), TowerTier::Tower2)
        .tower(pos(3, 0), TowerTier::Tower3)
        .score_sink(leaderboard.clone())
        .build()
        .unwrap();

    play(&mut game, 0, (1, 0), (0, 1));
    play(&mut game, 1, (4, 3), (3, 2));
    play(&mut game, 0, (2, 0), (1, 1));
    play(&mut game, 1, (4, 4), (3, 3));
    assert!(game.worker(WorkerId::new(0)).unwrap().can(Capability::MoveToTower3));

    let events = play(&mut game, 0, (3, 0), (0, 0));

    assert_eq!(
        events.last(),
        Some(&TurnEvent::GameOver(GameResult::Winner(PlayerId::new(0))))
    );
    assert!(game.is_over());
    assert_eq!(leaderboard.score(PlayerId::new(0)), 1);
    assert_eq!(leaderboard.score(PlayerId::new(1)), 0);
}

/// A worker on a top tower with every exit domed or occupied is eliminated:
/// elimination looks at travel, not height.
#[test]
fn test_trapped_on_top_tower_is_eliminated() {
    let leaderboard = Leaderboard::new();
    let mut game = scenario(2, &[(2, 4), (4, 4)])
        .tower(pos(4, 4), TowerTier::Tower3)
        .tower(pos(3, 3), TowerTier::Dome)
        .tower(pos(4, 3), TowerTier::Dome)
        .score_sink(leaderboard.clone())
        .build()
        .unwrap();

    game.select_worker(WorkerId::new(0)).unwrap();
    let events = game.move_worker(tile(&game, 3, 4)).unwrap();

    assert_eq!(
        events,
        vec![
            TurnEvent::Moved {
                worker: WorkerId::new(0),
                from: tile(&game, 2, 4),
                to: tile(&game, 3, 4),
            },
            TurnEvent::PlayerEliminated {
                player: PlayerId::new(1),
                reason: EliminationReason::Immobile,
            },
            TurnEvent::GameOver(GameResult::Winner(PlayerId::new(0))),
        ]
    );
    assert_eq!(game.active_players(), &[PlayerId::new(0)]);
    assert_eq!(game.board().tile_of(WorkerId::new(1)), None);
    assert!(!game.board().is_occupied(tile(&game, 4, 4)));
    assert_eq!(leaderboard.score(PlayerId::new(0)), 1);
}

/// Eliminating a bystander keeps the turn going and rotation skips them.
#[test]
fn test_elimination_of_other_player_continues_turn() {
    let mut game = scenario(3, &[(2, 4), (4, 4), (0, 0)])
        .tower(pos(4, 4), TowerTier::Tower3)
        .tower(pos(3, 3), TowerTier::Dome)
        .tower(pos(4, 3), TowerTier::Dome)
        .build()
        .unwrap();

    game.select_worker(WorkerId::new(0)).unwrap();
    game.move_worker(tile(&game, 3, 4)).unwrap();
    assert_eq!(game.active_players(), &[PlayerId::new(0), PlayerId::new(2)]);
    assert!(matches!(game.phase(), TurnPhase::Building { .. }));

    let events = game.build(tile(&game, 2, 4)).unwrap();
    assert_eq!(
        events.last(),
        Some(&TurnEvent::TurnStarted { player: PlayerId::new(2), turn: 2 })
    );
}

/// Moving down off a tower into a dead end eliminates the mover; the turn
/// passes on without a build.
#[test]
fn test_acting_player_eliminated_mid_turn() {
    let mut game = scenario(3, &[(0, 1), (4, 4), (4, 0)])
        .tower(pos(0, 1), TowerTier::Tower2)
        .tower(pos(1, 0), TowerTier::Dome)
        .tower(pos(1, 1), TowerTier::Dome)
        .build()
        .unwrap();

    game.select_worker(WorkerId::new(0)).unwrap();
    let events = game.move_worker(tile(&game, 0, 0)).unwrap();

    assert_eq!(
        &events[1..],
        &[
            TurnEvent::PlayerEliminated {
                player: PlayerId::new(0),
                reason: EliminationReason::Immobile,
            },
            TurnEvent::TurnStarted { player: PlayerId::new(1), turn: 2 },
        ]
    );
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.phase(), &TurnPhase::SelectingWorker);
}

/// Everyone left is eliminated in the same pass.
#[test]
fn test_simultaneous_elimination_is_a_draw() {
    let leaderboard = Leaderboard::new();
    let mut game = scenario(2, &[(1, 0), (4, 0)])
        .layout("XXXXX")
        .tower(pos(1, 0), TowerTier::Tower2)
        .tower(pos(2, 0), TowerTier::Dome)
        .tower(pos(3, 0), TowerTier::Dome)
        .score_sink(leaderboard.clone())
        .build()
        .unwrap();

    game.select_worker(WorkerId::new(0)).unwrap();
    let events = game.move_worker(tile(&game, 0, 0)).unwrap();

    assert_eq!(events.len(), 4);
    assert_eq!(events[3], TurnEvent::GameOver(GameResult::Draw));
    assert!(game.active_players().is_empty());
    assert!(leaderboard.standings().is_empty());
}

#[test]
fn test_touch_rule() {
    let leaderboard = Leaderboard::new();
    let mut game = GameBuilder::new()
        .god_assignment(GodAssignment::Fixed(vec![None, None]))
        .placement(Placement::Fixed(vec![pos(0, 0), pos(2, 2), pos(4, 4), pos(4, 0)]))
        .tower(pos(1, 0), TowerTier::Dome)
        .tower(pos(0, 1), TowerTier::Dome)
        .tower(pos(1, 1), TowerTier::Dome)
        .score_sink(leaderboard.clone())
        .build()
        .unwrap();

    // the other worker could move, but touching the boxed-in one loses
    assert!(!game.legal_destinations(WorkerId::new(1)).is_empty());
    let events = game.select_worker(WorkerId::new(0)).unwrap();

    assert_eq!(
        events,
        vec![
            TurnEvent::WorkerSelected { player: PlayerId::new(0), worker: WorkerId::new(0) },
            TurnEvent::PlayerEliminated {
                player: PlayerId::new(0),
                reason: EliminationReason::TouchRule,
            },
            TurnEvent::GameOver(GameResult::Winner(PlayerId::new(1))),
        ]
    );
    assert_eq!(leaderboard.score(PlayerId::new(1)), 1);
}

#[test]
fn test_rejections_leave_state_untouched() {
    let mut game = scenario(2, &[(0, 0), (4, 4)]).build().unwrap();

    assert_eq!(
        game.move_worker(tile(&game, 1, 1)).unwrap_err(),
        GameError::Rule(RuleViolation::WrongPhase { action: "move", phase: "selecting a worker" })
    );
    assert!(game.decline_ability().is_err());
    assert!(game.activate_ability(tile(&game, 1, 1)).is_err());

    game.select_worker(WorkerId::new(0)).unwrap();
    let err = game.select_worker(WorkerId::new(0)).unwrap_err();
    assert!(!err.is_fatal());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_history_records_turns_in_order() {
    let mut game = scenario(2, &[(0, 0), (4, 4)]).build().unwrap();
    play(&mut game, 0, (1, 1), (2, 2));
    play(&mut game, 1, (3, 3), (4, 4));

    let history: Vec<_> = game.history().iter().cloned().collect();
    assert_eq!(history.len(), 6);
    assert_eq!(history[0].action, TurnAction::SelectWorker(WorkerId::new(0)));
    assert_eq!((history[2].turn, history[2].sequence), (1, 2));
    assert_eq!(history[3].player, PlayerId::new(1));
    assert_eq!((history[3].turn, history[3].sequence), (2, 0));
    assert!(matches!(
        history[5].action,
        TurnAction::Build { tier: TowerTier::Tower1, .. }
    ));
}
