//! Tick resolution tests.
//!
//! These drive `resolve_one_tick` directly on a `MatchState`, without the
//! session layer, and check the movement and occupancy rules.

use nexus_tactics::cards::{ActionType, CardType, MoveDirection, MovementSpec, Usage};
use nexus_tactics::state::SIDES;
use nexus_tactics::{
    resolve_one_tick, ActorId, Card, CardCatalog, Direction, GameRng, MatchMode, MatchState,
    Position, QueuedPlay,
};

fn one_step(dir: Direction) -> QueuedPlay {
    let card = Card::new("step_one", Usage::AtWill, CardType::Movement, ActionType::Move)
        .with_movement(MovementSpec::new(1, MoveDirection::Any));
    QueuedPlay::new(card).with_direction(dir)
}

fn assert_occupancy(state: &MatchState) {
    for actor in state.actors().values().filter(|a| a.is_alive()) {
        assert_eq!(
            state.board().occupant(actor.pos),
            Some(actor.id),
            "tile under {} should name it",
            actor.id
        );
    }
    let occupied = state.board().tiles().filter(|t| t.is_occupied()).count();
    assert_eq!(occupied, state.actors().len(), "one occupied tile per actor");
}

/// Both actors aim at the empty tile between them and neither gets it.
#[test]
fn test_mutual_cancellation() {
    let mut state = MatchState::new_match(MatchMode::Queue3);
    state.place_actor(ActorId::B, Position::new(4, 4));

    resolve_one_tick(
        &mut state,
        Some(&one_step(Direction::new(1, 0))),
        Some(&one_step(Direction::new(-1, 0))),
    );

    assert_eq!(state.actor(ActorId::A).unwrap().pos, Position::new(2, 4));
    assert_eq!(state.actor(ActorId::B).unwrap().pos, Position::new(4, 4));
    assert!(!state.board().is_occupied(Position::new(3, 4)));
    assert_occupancy(&state);
}

/// A step off the board edge is silently refused.
#[test]
fn test_blocked_single_move_at_edge() {
    let mut state = MatchState::new_match(MatchMode::Queue3);
    state.place_actor(ActorId::A, Position::new(0, 0));

    let report = resolve_one_tick(&mut state, Some(&one_step(Direction::new(-1, 0))), None);

    assert_eq!(state.actor(ActorId::A).unwrap().pos, Position::new(0, 0));
    assert_eq!(report.outcome(ActorId::A).unwrap().steps_blocked, 1);
    assert_occupancy(&state);
}

/// A bare direction on a card without movement still takes one step.
#[test]
fn test_attack_with_direction_steps_once() {
    let mut state = MatchState::new_match(MatchMode::Queue3);
    let cleave = CardCatalog::fighter().get("ftr_cleave").unwrap().clone();
    let play = QueuedPlay::new(cleave).with_direction(Direction::DOWN);

    resolve_one_tick(&mut state, Some(&play), None);
    assert_eq!(state.actor(ActorId::A).unwrap().pos, Position::new(2, 5));
}

/// Diagonal directions move but never change facing.
#[test]
fn test_diagonal_keeps_facing() {
    let mut state = MatchState::new_match(MatchMode::Queue3);
    resolve_one_tick(&mut state, Some(&one_step(Direction::RIGHT)), None);
    resolve_one_tick(&mut state, Some(&one_step(Direction::new(1, 1))), None);

    let a = state.actor(ActorId::A).unwrap();
    assert_eq!(a.pos, Position::new(4, 5));
    assert_eq!(a.facing, Some(nexus_tactics::Facing::Right));
}

/// Identical state and plays give identical results, and the RNG is untouched.
#[test]
fn test_resolution_is_deterministic() {
    let base = MatchState::new_match(MatchMode::Queue3);
    let plays = [
        (one_step(Direction::UP), one_step(Direction::LEFT)),
        (one_step(Direction::RIGHT), one_step(Direction::LEFT)),
        (one_step(Direction::RIGHT), one_step(Direction::DOWN)),
    ];

    let run = || {
        let mut state = base.clone();
        let reports: Vec<_> = plays
            .iter()
            .map(|(a, b)| resolve_one_tick(&mut state, Some(a), Some(b)))
            .collect();
        (state, reports)
    };

    let (first, first_reports) = run();
    let (second, second_reports) = run();
    assert_eq!(first_reports, second_reports);
    assert_eq!(first.actors(), second.actors());
    assert_eq!(first.board(), second.board());

    // Round refresh shuffles identically, so resolution drew nothing
    let mut first = first;
    let mut untouched = base.clone();
    first.end_round();
    untouched.end_round();
    assert_eq!(first.teams()[ActorId::A].hand, untouched.teams()[ActorId::A].hand);
}

/// Random walks never break the occupancy invariant.
#[test]
fn test_occupancy_invariant_random_walk() {
    let mut state = MatchState::new_match(MatchMode::Queue3);
    state.board_mut().set_wall(Position::new(3, 3));
    state.board_mut().set_wall(Position::new(5, 5));
    let mut rng = GameRng::new(2024);

    for _ in 0..200 {
        let [a, b] = SIDES.map(|_| {
            let dir = Direction::CARDINALS[rng.gen_range(0..4) as usize];
            let tiles = rng.gen_range(0..4);
            let card = Card::new("walk", Usage::AtWill, CardType::Movement, ActionType::Move)
                .with_movement(MovementSpec::new(tiles, MoveDirection::Any));
            QueuedPlay::new(card).with_direction(dir)
        });
        resolve_one_tick(&mut state, Some(&a), Some(&b));
        assert_occupancy(&state);
        assert_ne!(
            state.actor(ActorId::A).unwrap().pos,
            state.actor(ActorId::B).unwrap().pos
        );
    }

    assert_eq!(state.history().len(), 200);
}
