//! The 52-card deck and dealing.
//!
//! Dealing draws a uniform permutation `p` of `0..52` and gives card `i`
//! to hand `p[i] mod N`, so hand sizes differ by at most one.

use tracing::debug;

use super::card::Card;
use super::hand::Hand;
use crate::core::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// The canonical deck.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// The 52 standard cards in canonical order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: Card::standard_deck().collect(),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Which hand each canonical card goes to, for `hand_count` hands.
    ///
    /// Entry `i` is the hand index receiving `self.cards()[i]`.
    pub fn assignment(&self, rng: &mut GameRng, hand_count: usize) -> Vec<usize> {
        assert!(hand_count > 0, "Must deal to at least 1 hand");

        rng.permutation(self.cards.len())
            .into_iter()
            .map(|p| p % hand_count)
            .collect()
    }

    /// Clear every hand, then deal the whole deck across them.
    ///
    /// Re-dealing is idempotent in shape: previous contents never leak
    /// into the new deal.
    pub fn deal(&self, rng: &mut GameRng, hands: &mut [&mut Hand]) {
        for hand in hands.iter_mut() {
            hand.clear();
        }

        let assignment = self.assignment(rng, hands.len());
        for (card, target) in self.cards.iter().zip(assignment) {
            hands[target].receive(*card);
        }

        debug!(hands = hands.len(), cards = self.cards.len(), "dealt deck");
    }
}
