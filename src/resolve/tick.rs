//! Simultaneous tick resolution.
//!
//! Both sides' plays resolve together. Movement advances in lockstep, one
//! tile per iteration, and within an iteration both candidate tiles are
//! computed before either actor moves, so evaluation order never decides
//! an outcome.
//!
//! # Determinism
//!
//! Resolution never draws from the match RNG. Identical state and plays
//! always produce identical results.

use tracing::debug;

use super::report::{ActorOutcome, TickRecord, TickReport};
use crate::core::{ActorId, Facing, Position};
use crate::state::{MatchState, QueuedPlay, SIDES};

/// Hit points each side loses when both played this tick.
pub const EXCHANGE_DAMAGE: i32 = 1;

/// What one actor tries to do in one lockstep iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StepAttempt {
    /// Not stepping this iteration.
    Idle,
    /// Wanted to step but the tile is out of bounds, blocking, or taken.
    Blocked,
    /// Valid destination, pending the collision check.
    Candidate(Position),
}

/// Resolve one tick from at most one play per side.
///
/// `play_a` and `play_b` belong to the first and second side respectively;
/// the caller dequeues them. If neither is present nothing changes and an
/// idle report is returned.
///
/// Card speed, attack profiles, damage, miss policy, effects, and zones ride
/// along on the plays but are not consulted here.
pub fn resolve_one_tick(
    state: &mut MatchState,
    play_a: Option<&QueuedPlay>,
    play_b: Option<&QueuedPlay>,
) -> TickReport {
    if play_a.is_none() && play_b.is_none() {
        return TickReport::idle();
    }

    let plays = [play_a, play_b];
    let steps = plays.map(|p| p.map_or(0, QueuedPlay::steps));
    let mut outcomes: [ActorOutcome; 2] = [0, 1].map(|k| {
        let id = SIDES[k];
        ActorOutcome::new(id, state.actors[id].pos, plays[k].is_some(), steps[k])
    });

    // 1. Lockstep movement
    let iterations = steps[0].max(steps[1]);
    for step in 0..iterations {
        let attempts = [0, 1].map(|k| step_target(state, SIDES[k], plays[k], step, steps[k]));

        if let [StepAttempt::Candidate(a), StepAttempt::Candidate(b)] = attempts {
            if a == b {
                debug!(step, tile = %a, "collision, both steps cancelled");
                for outcome in &mut outcomes {
                    outcome.collisions += 1;
                }
                continue;
            }
        }

        for (k, attempt) in attempts.into_iter().enumerate() {
            match attempt {
                StepAttempt::Candidate(to) => {
                    commit_move(state, SIDES[k], to);
                    outcomes[k].steps_taken += 1;
                }
                StepAttempt::Blocked => {
                    debug!(actor = %SIDES[k], step, "step blocked");
                    outcomes[k].steps_blocked += 1;
                }
                StepAttempt::Idle => {}
            }
        }
    }

    // 2. Placeholder exchange of blows
    if plays.iter().all(Option::is_some) {
        for (k, id) in SIDES.into_iter().enumerate() {
            state.actors[id].hp -= EXCHANGE_DAMAGE;
            outcomes[k].damage_taken += EXCHANGE_DAMAGE;
            debug!(actor = %id, hp = state.actors[id].hp, "exchange damage");
        }
    }

    // 3. Report
    for outcome in &mut outcomes {
        outcome.end = state.actors[outcome.actor].pos;
    }
    let report = TickReport {
        resolved: true,
        iterations,
        outcomes: outcomes.into_iter().collect(),
    };
    state.history.push_back(TickRecord {
        round: state.round,
        tick: state.tick,
        report: report.clone(),
    });
    report
}

/// Compute an actor's destination for lockstep iteration `step`.
///
/// Facing is updated on the first iteration, before validity is checked, so
/// an actor that bumps a wall still turns toward it.
fn step_target(
    state: &mut MatchState,
    id: ActorId,
    play: Option<&QueuedPlay>,
    step: u32,
    allowed: u32,
) -> StepAttempt {
    let Some(dir) = play.and_then(|p| p.dir) else {
        return StepAttempt::Idle;
    };
    if step >= allowed {
        return StepAttempt::Idle;
    }

    let actor = &mut state.actors[id];
    if step == 0 {
        if let Some(facing) = Facing::from_direction(dir) {
            actor.facing = Some(facing);
        }
    }

    let to = actor.pos.step(dir);
    match state.board.tile(to) {
        None => StepAttempt::Blocked,
        Some(tile) if tile.blocks_movement => StepAttempt::Blocked,
        Some(tile) if tile.occupant.is_some_and(|o| o != id) => StepAttempt::Blocked,
        Some(_) => StepAttempt::Candidate(to),
    }
}

/// Move an actor, keeping tile occupancy in step.
fn commit_move(state: &mut MatchState, id: ActorId, to: Position) {
    let actor = &mut state.actors[id];
    let from = actor.pos;
    actor.pos = to;

    if let Some(tile) = state.board.tile_mut(from) {
        // Stale markers naming someone else are left alone
        if tile.occupant == Some(id) {
            tile.occupant = None;
        }
    }
    if let Some(tile) = state.board.tile_mut(to) {
        tile.occupant = Some(id);
    }
}
