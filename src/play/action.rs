//! Actions: the book a player commits on their turn.
//!
//! An `Action` is built from the player's staged cards plus a face
//! orientation. The only legality rule is that a book holds at least one
//! card and every card shares one rank.
//!
//! ```
//! use rust_tricks::play::Action;
//!
//! let kings = Action::new(["KH".parse().unwrap(), "KD".parse().unwrap()], true);
//! assert!(kings.validate().is_none());
//! assert_eq!(kings.hand_score(), 26);
//! assert_eq!(kings.hand_points(), 4);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};
use crate::error::ValidationError;

/// Round-score step per extra card in a book.
///
/// Equal to the highest rank value, so a bigger book always outranks a
/// smaller one regardless of rank.
pub const BOOK_SIZE_STEP: u32 = 13;

/// A submitted book.
///
/// Immutable after creation apart from the round-end reveal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Whether the cards were played visibly.
    face_up: bool,

    /// Played cards, sorted and distinct.
    /// A valid book holds at most four cards, so this never spills.
    cards: SmallVec<[Card; 4]>,

    /// Result of validation, computed once at creation.
    error: Option<ValidationError>,
}

impl Action {
    /// Build and validate an action.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>, face_up: bool) -> Self {
        let mut cards: SmallVec<[Card; 4]> = cards.into_iter().collect();
        cards.sort_unstable();
        cards.dedup();

        let mut action = Self {
            face_up,
            cards,
            error: None,
        };
        action.error = action.validate();
        action
    }

    /// Check the book: non-empty and single-rank.
    #[must_use]
    pub fn validate(&self) -> Option<ValidationError> {
        let Some(first) = self.cards.first() else {
            return Some(ValidationError::Empty);
        };

        if self.cards.iter().any(|c| c.rank != first.rank) {
            Some(ValidationError::MixedRanks)
        } else {
            None
        }
    }

    /// The validation result recorded at creation.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    #[must_use]
    pub fn face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The book's rank, if it is a valid book.
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        if self.is_valid() {
            self.cards.first().map(|c| c.rank)
        } else {
            None
        }
    }

    /// Turn the cards face-up (round-end reveal).
    pub fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Round-winner metric: rank value plus 13 per extra card.
    ///
    /// Invalid books score 0.
    #[must_use]
    pub fn hand_score(&self) -> u32 {
        match self.rank() {
            Some(rank) => rank.value() + (self.card_count() as u32 - 1) * BOOK_SIZE_STEP,
            None => 0,
        }
    }

    /// Points this book contributes to the round winner's pot.
    ///
    /// One per card, doubled for face cards. Invalid books contribute 0.
    #[must_use]
    pub fn hand_points(&self) -> u32 {
        match self.rank() {
            Some(rank) if rank.is_face() => 2 * self.card_count() as u32,
            Some(_) => self.card_count() as u32,
            None => 0,
        }
    }
}
