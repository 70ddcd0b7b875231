//! Card system: card values, the deck, and hands.
//!
//! ## Key Types
//!
//! - `Card`, `Suit`, `Rank`: immutable card values
//! - `Deck`: the canonical 52 cards and the seeded deal
//! - `Hand`: a player's unstaged and staged cards

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, CardParseError, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
