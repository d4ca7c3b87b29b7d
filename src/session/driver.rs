//! The match session: per-tick bookkeeping around the core.
//!
//! A `MatchSession` owns one `MatchState` and drives it through
//! Setup → Playing → Decided. It enforces the mode's queue limit, dequeues
//! one play per side, resolves, rolls rounds over (Queue3) or refills hands
//! (SingleCard), and latches the winner. Requests the core would silently
//! ignore are refused here with a `SessionError` so an input layer can tell
//! the player why.

use thiserror::Error;
use tracing::{debug, info};

use crate::core::{ActorId, ConfigError, Direction, MatchConfig, MatchMode, Position};
use crate::resolve::{resolve_one_tick, TickReport};
use crate::state::{MatchState, QueuedPlay, SIDES};

/// Why the session refused a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("match has not started")]
    NotStarted,

    #[error("match already decided, {0} won")]
    MatchDecided(ActorId),

    #[error("unknown actor {0}")]
    UnknownActor(ActorId),

    #[error("queue for actor {actor} is full ({limit} plays)")]
    QueueFull { actor: ActorId, limit: usize },

    #[error("actor {actor} has no card at hand index {index}")]
    NoSuchCard { actor: ActorId, index: usize },
}

/// Coarse session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created, waiting for `start`.
    Setup,
    /// Accepting plays and resolving ticks.
    Playing,
    /// A winner is latched; no further plays or ticks.
    Decided(ActorId),
}

/// What one `advance` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub report: TickReport,

    /// True when this tick closed a Queue3 round.
    pub round_ended: bool,

    pub winner: Option<ActorId>,
}

/// Drives a single match.
#[derive(Clone, Debug)]
pub struct MatchSession {
    state: MatchState,
    started: bool,
}

impl MatchSession {
    /// Session over a default match.
    #[must_use]
    pub fn new(mode: MatchMode) -> Self {
        Self::from_state(MatchState::new_match(mode))
    }

    /// Session over a match built from `config`.
    pub fn with_config(mode: MatchMode, config: MatchConfig) -> Result<Self, ConfigError> {
        MatchState::new_match_with_config(mode, config).map(Self::from_state)
    }

    /// Wrap an existing state, still in setup.
    #[must_use]
    pub fn from_state(state: MatchState) -> Self {
        Self { state, started: false }
    }

    /// Leave setup and begin accepting plays.
    pub fn start(&mut self) {
        if !self.started {
            self.started = true;
            info!(mode = %self.state.mode(), "session started");
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.started, self.state.winner()) {
            (_, Some(winner)) => SessionPhase::Decided(winner),
            (false, None) => SessionPhase::Setup,
            (true, None) => SessionPhase::Playing,
        }
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable access for scenario setup.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    #[must_use]
    pub fn into_state(self) -> MatchState {
        self.state
    }

    /// Plays a side may hold at once in this mode.
    #[must_use]
    pub fn queue_limit(&self) -> usize {
        self.state.mode().queue_limit()
    }

    fn ensure_playing(&self) -> Result<(), SessionError> {
        match self.phase() {
            SessionPhase::Setup => Err(SessionError::NotStarted),
            SessionPhase::Decided(winner) => Err(SessionError::MatchDecided(winner)),
            SessionPhase::Playing => Ok(()),
        }
    }

    fn ensure_room(&self, actor: ActorId) -> Result<(), SessionError> {
        let team = self.state.team(actor).ok_or(SessionError::UnknownActor(actor))?;
        let limit = self.queue_limit();
        if team.queue.len() >= limit {
            return Err(SessionError::QueueFull { actor, limit });
        }
        Ok(())
    }

    /// Queue a play for `actor`. Returns the new queue length.
    pub fn queue_play(&mut self, actor: ActorId, play: QueuedPlay) -> Result<usize, SessionError> {
        self.ensure_playing()?;
        self.ensure_room(actor)?;
        self.state.queue_play(actor, play);
        Ok(self.state.team(actor).map_or(0, |t| t.queue.len()))
    }

    /// Take a card out of `actor`'s hand and queue it.
    pub fn play_from_hand(
        &mut self,
        actor: ActorId,
        hand_index: usize,
        dir: Option<Direction>,
        target: Option<Position>,
    ) -> Result<usize, SessionError> {
        self.ensure_playing()?;
        self.ensure_room(actor)?;

        let team = self.state.team_mut(actor).ok_or(SessionError::UnknownActor(actor))?;
        if hand_index >= team.hand.len() {
            return Err(SessionError::NoSuchCard { actor, index: hand_index });
        }
        let card = team.hand.remove(hand_index);
        debug!(actor = %actor, card = %card.id, "card played from hand");

        self.queue_play(actor, QueuedPlay { card, dir, target })
    }

    /// Drop a queued play. Out-of-range indices and requests outside the
    /// playing phase are ignored.
    pub fn remove_queued(&mut self, actor: ActorId, index: usize) -> Option<QueuedPlay> {
        self.ensure_playing().ok()?;
        self.state.remove_queued(actor, index)
    }

    /// Whether every side has a play waiting.
    #[must_use]
    pub fn ready_to_resolve(&self) -> bool {
        self.ensure_playing().is_ok()
            && self.state.teams().values().all(|t| !t.queue.is_empty())
    }

    /// Resolve the next tick.
    ///
    /// Pops the front play of each side (either may be missing), resolves,
    /// then does the mode's bookkeeping: Queue3 closes the round after its
    /// last tick, SingleCard draws both hands back up. Victory is checked
    /// after every tick.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        self.ensure_playing()?;

        let [a, b] = SIDES.map(|id| self.state.pop_next_play(id));
        let report = resolve_one_tick(&mut self.state, a.as_ref(), b.as_ref());

        let mut round_ended = false;
        match self.state.mode() {
            MatchMode::Queue3 => {
                if self.state.tick() >= self.state.config().ticks_per_round {
                    self.state.end_round();
                    round_ended = true;
                } else {
                    self.state.next_tick();
                }
            }
            MatchMode::SingleCard => {
                self.state.refill_hands();
                self.state.next_tick();
            }
        }

        let winner = self.state.update_winner();
        Ok(AdvanceOutcome {
            report,
            round_ended,
            winner,
        })
    }
}
