//! The match: board, actors, teams, and round bookkeeping.
//!
//! `MatchState` is a value type. Its methods and the tick resolver are the
//! only things that mutate it; nothing outside holds references into it.
//!
//! ## Lifecycle
//!
//! ```text
//! new_match ──► ticks 1..N ──► end_round ──► ... ──► check_victory != None
//! ```
//!
//! In `SingleCard` mode there is no round boundary; `refill_hands` runs after
//! every tick instead.

use im::Vector;
use tracing::{info, warn};

use super::actor::Actor;
use super::play::QueuedPlay;
use super::team::TeamState;
use crate::board::Board;
use crate::cards::{deck, CardCatalog, FILLER_CARD};
use crate::core::{ActorId, ActorMap, ConfigError, GameRng, MatchConfig, MatchMode, Position};
use crate::resolve::TickRecord;
use crate::rules::{EliminationOrNexus, VictoryPolicy};

/// The two sides of a match, in resolution order.
pub const SIDES: [ActorId; 2] = [ActorId::A, ActorId::B];

/// Complete state of one match.
///
/// Cloning is cheap enough for previews: the tick history is an `im::Vector`
/// and shares structure with the original.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub(crate) config: MatchConfig,
    pub(crate) mode: MatchMode,
    pub(crate) board: Board,
    pub(crate) actors: ActorMap<Actor>,
    pub(crate) teams: ActorMap<TeamState>,
    pub(crate) round: u32,
    pub(crate) tick: u32,
    pub(crate) hand_max: usize,
    pub(crate) rng: GameRng,
    pub(crate) winner: Option<ActorId>,
    pub(crate) history: Vector<TickRecord>,
}

impl MatchState {
    /// Create a match with the classic layout and the default seed.
    #[must_use]
    pub fn new_match(mode: MatchMode) -> Self {
        Self::build(mode, MatchConfig::default())
    }

    /// Create a match from a custom configuration.
    pub fn new_match_with_config(mode: MatchMode, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(mode, config))
    }

    fn build(mode: MatchMode, config: MatchConfig) -> Self {
        let mut board = Board::new(config.board_width, config.board_height, config.nexus);
        let mut rng = GameRng::new(config.seed);

        let starts = [config.start_a, config.start_b];
        let mut actors = ActorMap::new();
        let mut teams = ActorMap::new();

        for (id, start) in SIDES.into_iter().zip(starts) {
            actors.insert(id, Actor::new(id, start, config.starting_hp));

            let mut master = deck::build_deck(CardCatalog::fighter(), FILLER_CARD, config.deck_size);
            deck::shuffle(&mut master, &mut rng);

            // The opening hand comes straight off the master deck; the draw
            // pile stays empty until the first round refresh.
            let mut team = TeamState::new(id, master);
            deck::draw_to(&mut team.hand, &mut team.deck, config.initial_hand);
            teams.insert(id, team);

            if let Some(tile) = board.tile_mut(start) {
                tile.occupant = Some(id);
            }
        }

        info!(%mode, seed = config.seed, "match created");

        Self {
            hand_max: config.hand_max,
            config,
            mode,
            board,
            actors,
            teams,
            round: 1,
            tick: 1,
            rng,
            winner: None,
            history: Vector::new(),
        }
    }

    /// A what-if copy with its own forked RNG.
    ///
    /// The branch shuffles differently from `self` from here on.
    #[must_use]
    pub fn branch(&mut self) -> Self {
        let mut copy = self.clone();
        copy.rng = self.rng.fork();
        copy
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (walls, hazards).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn actors(&self) -> &ActorMap<Actor> {
        &self.actors
    }

    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    #[must_use]
    pub fn teams(&self) -> &ActorMap<TeamState> {
        &self.teams
    }

    #[must_use]
    pub fn team(&self, id: ActorId) -> Option<&TeamState> {
        self.teams.get(id)
    }

    pub fn team_mut(&mut self, id: ActorId) -> Option<&mut TeamState> {
        self.teams.get_mut(id)
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn tick(&self) -> u32 {
        self.tick
    }

    #[must_use]
    pub fn hand_max(&self) -> usize {
        self.hand_max
    }

    /// Winner latched by the session, `None` while undecided.
    #[must_use]
    pub fn winner(&self) -> Option<ActorId> {
        self.winner
    }

    /// Every resolved tick, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TickRecord> {
        &self.history
    }

    /// Move an actor to `pos`, keeping tile occupancy in step.
    ///
    /// Out-of-bounds targets and unknown actors are ignored. Intended for
    /// scenario setup; the resolver moves actors itself.
    pub fn place_actor(&mut self, id: ActorId, pos: Position) {
        if !self.board.in_bounds(pos) {
            warn!(actor = %id, %pos, "placement outside the board ignored");
            return;
        }
        let Some(actor) = self.actors.get_mut(id) else {
            warn!(actor = %id, "placement for unknown actor ignored");
            return;
        };
        let old = actor.pos;
        actor.pos = pos;
        if let Some(tile) = self.board.tile_mut(old) {
            if tile.occupant == Some(id) {
                tile.occupant = None;
            }
        }
        if let Some(tile) = self.board.tile_mut(pos) {
            tile.occupant = Some(id);
        }
    }

    // === Queues ===

    /// Append a play to an actor's queue.
    ///
    /// No capacity check happens here. Unknown actors are ignored.
    pub fn queue_play(&mut self, actor: ActorId, play: QueuedPlay) {
        match self.teams.get_mut(actor) {
            Some(team) => team.queue.push_back(play),
            None => warn!(actor = %actor, "queue for unknown actor ignored"),
        }
    }

    /// Remove a queued play by position. Out-of-range indices are ignored.
    pub fn remove_queued(&mut self, actor: ActorId, index: usize) -> Option<QueuedPlay> {
        let removed = self.teams.get_mut(actor)?.remove_queued(index);
        if removed.is_none() {
            warn!(actor = %actor, index, "queued play index out of range");
        }
        removed
    }

    /// Take the front of an actor's queue.
    pub fn pop_next_play(&mut self, actor: ActorId) -> Option<QueuedPlay> {
        self.teams.get_mut(actor)?.queue.pop_front()
    }

    /// Empty every queue.
    pub fn reset_queues(&mut self) {
        for team in self.teams.values_mut() {
            team.queue.clear();
        }
    }

    // === Round bookkeeping ===

    /// Award one VP to the team of every actor standing on the nexus.
    pub fn at_end_of_round_score_nexus(&mut self) {
        let nexus = self.board.nexus();
        for actor in self.actors.values() {
            if actor.pos == nexus {
                if let Some(team) = self.teams.get_mut(actor.team) {
                    team.vp += 1;
                    info!(team = %actor.team, vp = team.vp, "nexus scored");
                }
            }
        }
    }

    /// Run the round-end sequence.
    ///
    /// Scores the nexus, clears queues, refreshes every team's cards, then
    /// moves to tick 1 of the next round.
    pub fn end_round(&mut self) {
        self.at_end_of_round_score_nexus();
        self.reset_queues();
        for team in self.teams.values_mut() {
            team.refresh_round(self.hand_max, &mut self.rng);
        }
        self.round += 1;
        self.tick = 1;
        info!(round = self.round, "round started");
    }

    /// Draw every hand back up to the hand maximum from its draw pile.
    pub fn refill_hands(&mut self) {
        for team in self.teams.values_mut() {
            team.refill_hand(self.hand_max);
        }
    }

    pub(crate) fn next_tick(&mut self) {
        self.tick += 1;
    }

    // === Victory ===

    /// Winner under the default policy, if any.
    ///
    /// Pure query; see [`MatchState::update_winner`] to latch the result.
    #[must_use]
    pub fn check_victory(&self) -> Option<ActorId> {
        self.check_victory_with(&EliminationOrNexus::new(self.config.vp_to_win))
    }

    /// Winner under a caller-supplied policy.
    #[must_use]
    pub fn check_victory_with<P: VictoryPolicy + ?Sized>(&self, policy: &P) -> Option<ActorId> {
        policy.winner(self)
    }

    /// Re-evaluate victory and store the result.
    pub fn update_winner(&mut self) -> Option<ActorId> {
        self.winner = self.check_victory();
        if let Some(winner) = self.winner {
            info!(winner = %winner, round = self.round, tick = self.tick, "match decided");
        }
        self.winner
    }
}
