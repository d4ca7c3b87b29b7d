//! Per-side card piles, play queue, and score.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::play::QueuedPlay;
use crate::cards::{deck, Card};
use crate::core::{ActorId, GameRng};

/// One side's cards and score.
///
/// `deck` is the master list a round refresh reshuffles from. `discard` is
/// kept for shape but nothing fills it; hands are replaced wholesale at the
/// end of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub actor: ActorId,
    pub deck: Vec<Card>,
    pub draw_pile: Vec<Card>,
    pub discard: Vec<Card>,
    pub hand: Vec<Card>,

    /// Plays waiting for resolution, front first. Capacity is the session's
    /// concern, not the queue's.
    pub queue: VecDeque<QueuedPlay>,

    pub vp: u32,
}

impl TeamState {
    /// Team with a master deck and empty piles.
    #[must_use]
    pub fn new(actor: ActorId, deck: Vec<Card>) -> Self {
        Self {
            actor,
            deck,
            draw_pile: Vec::new(),
            discard: Vec::new(),
            hand: Vec::new(),
            queue: VecDeque::new(),
            vp: 0,
        }
    }

    /// Start a fresh round.
    ///
    /// The draw pile becomes a shuffled copy of the master deck, discard and
    /// hand are cleared, and the hand is drawn up to `hand_max`. Cards left
    /// in hand are lost rather than carried over.
    pub fn refresh_round(&mut self, hand_max: usize, rng: &mut GameRng) {
        let mut pile = self.deck.clone();
        deck::shuffle(&mut pile, rng);
        self.draw_pile = pile;
        self.discard.clear();
        self.hand.clear();
        deck::draw_to(&mut self.hand, &mut self.draw_pile, hand_max);
    }

    /// Draw up to `hand_max` from the current draw pile.
    pub fn refill_hand(&mut self, hand_max: usize) -> usize {
        deck::draw_to(&mut self.hand, &mut self.draw_pile, hand_max)
    }

    /// Remove the queued play at `index`, if any.
    pub fn remove_queued(&mut self, index: usize) -> Option<QueuedPlay> {
        self.queue.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::build_starter_deck;

    #[test]
    fn test_refresh_round_replaces_hand() {
        let mut team = TeamState::new(ActorId::A, build_starter_deck());
        let mut rng = GameRng::new(5);
        team.hand = team.deck[..2].to_vec();
        team.discard = team.deck[..1].to_vec();

        team.refresh_round(7, &mut rng);
        assert_eq!(team.hand.len(), 7);
        assert_eq!(team.draw_pile.len(), 23);
        assert!(team.discard.is_empty());
        // Master deck untouched
        assert_eq!(team.deck.len(), 30);
    }

    #[test]
    fn test_refresh_round_small_deck() {
        let mut deck = build_starter_deck();
        deck.truncate(4);
        let mut team = TeamState::new(ActorId::B, deck);

        team.refresh_round(7, &mut GameRng::new(1));
        assert_eq!(team.hand.len(), 4);
        assert!(team.draw_pile.is_empty());
    }

    #[test]
    fn test_refill_hand() {
        let mut team = TeamState::new(ActorId::A, build_starter_deck());
        team.refresh_round(7, &mut GameRng::new(2));
        team.hand.truncate(6);

        assert_eq!(team.refill_hand(7), 1);
        assert_eq!(team.hand.len(), 7);
        assert_eq!(team.draw_pile.len(), 22);
    }

    #[test]
    fn test_remove_queued_out_of_range() {
        let mut team = TeamState::new(ActorId::A, build_starter_deck());
        team.queue.push_back(QueuedPlay::new(team.deck[0].clone()));
        assert!(team.remove_queued(3).is_none());
        assert_eq!(team.queue.len(), 1);
        assert!(team.remove_queued(0).is_some());
        assert!(team.queue.is_empty());
    }
}
