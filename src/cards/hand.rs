//! A player's holding area.
//!
//! Two disjoint partitions:
//! - `in_hand`: cards not yet staged
//! - `selected`: cards staged for the next action
//!
//! Backed by `im::OrdSet` so poll snapshots clone in O(1) and iterate in
//! a stable, sorted order.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::card::Card;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    in_hand: OrdSet<Card>,
    selected: OrdSet<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `card` is unstaged in this hand.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.in_hand.contains(&card)
    }

    /// True iff `card` is currently staged.
    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selected.contains(&card)
    }

    /// Stage a card. Cards not in hand are ignored.
    pub fn select(&mut self, card: Card) {
        if self.in_hand.remove(&card).is_some() {
            self.selected.insert(card);
        }
    }

    /// Unstage a card. Cards not staged are ignored.
    pub fn deselect(&mut self, card: Card) {
        if self.selected.remove(&card).is_some() {
            self.in_hand.insert(card);
        }
    }

    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    /// Drop every card from both partitions.
    pub fn clear(&mut self) {
        self.in_hand.clear();
        self.selected.clear();
    }

    /// Give the hand a freshly dealt card.
    pub fn receive(&mut self, card: Card) {
        debug_assert!(!self.selected.contains(&card), "{card} dealt while staged");
        self.in_hand.insert(card);
    }

    #[must_use]
    pub fn in_hand(&self) -> &OrdSet<Card> {
        &self.in_hand
    }

    #[must_use]
    pub fn selected(&self) -> &OrdSet<Card> {
        &self.selected
    }

    /// Cards held in either partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.in_hand.len() + self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_hand.is_empty() && self.selected.is_empty()
    }

    /// Every card held, staged or not.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.in_hand.iter().chain(self.selected.iter())
    }
}
