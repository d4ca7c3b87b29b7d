//! Deck construction, shuffling, and drawing.
//!
//! Decks are plain `Vec<Card>` values. The top of a pile is its tail, so a
//! draw is a `pop` and costs O(1).

use tracing::debug;

use super::catalog::{CardCatalog, FILLER_CARD};
use super::definition::Card;
use crate::core::GameRng;

/// Number of cards in a starter deck after padding.
pub const STARTER_DECK_SIZE: usize = 30;

/// Build the Fighter starter deck.
///
/// Every catalog entry is expanded to its copy limit, then the deck is padded
/// with the filler card up to [`STARTER_DECK_SIZE`].
#[must_use]
pub fn build_starter_deck() -> Vec<Card> {
    build_deck(CardCatalog::fighter(), FILLER_CARD, STARTER_DECK_SIZE)
}

/// Expand a catalog to copy limits and pad with `filler` up to `size`.
///
/// A catalog that already exceeds `size` is not truncated. An unknown filler
/// id leaves the deck unpadded.
#[must_use]
pub fn build_deck(catalog: &CardCatalog, filler: &str, size: usize) -> Vec<Card> {
    let mut deck: Vec<Card> = catalog
        .iter()
        .flat_map(|card| std::iter::repeat(card).take(card.copies_allowed as usize))
        .cloned()
        .collect();

    if let Some(pad) = catalog.get(filler) {
        while deck.len() < size {
            deck.push(pad.clone());
        }
    }

    debug!(cards = deck.len(), "built deck");
    deck
}

/// Shuffle a pile in place using the match RNG.
pub fn shuffle<T>(cards: &mut [T], rng: &mut GameRng) {
    rng.shuffle(cards);
}

/// Move cards from the tail of `pile` into `hand` until the hand holds `max`
/// cards or the pile runs out. Returns how many were drawn.
///
/// Never reshuffles a discard pile.
pub fn draw_to(hand: &mut Vec<Card>, pile: &mut Vec<Card>, max: usize) -> usize {
    let mut drawn = 0;
    while hand.len() < max {
        match pile.pop() {
            Some(card) => {
                hand.push(card);
                drawn += 1;
            }
            None => break,
        }
    }
    drawn
}
