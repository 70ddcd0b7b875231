//! # rust-tricks
//!
//! A turn-based book-playing card game engine.
//!
//! Each round every seated player plays one "book" (one or more cards of a
//! single rank) in turn order. The leader picks whether the round is played
//! face-up or face-down and everyone else follows. When the last player has
//! played, every book is revealed, the best book wins the round and its
//! player banks the points of all books on the table. The winner leads the
//! next round.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: no I/O, no transport, no persistence format.
//!    Callers relay player intents and poll views.
//!
//! 2. **Synchronous, committed transitions**: every intent either fully
//!    applies or leaves the game untouched.
//!
//! 3. **Deterministic**: a seed fixes every deal, so games replay exactly.
//!
//! ## Modules
//!
//! - `core`: seats, identities, RNG, configuration
//! - `cards`: card values, the deck, hands
//! - `play`: actions (books) and players
//! - `rules`: round scoring and match results
//! - `game`: the `Game` state machine and its poll views
//! - `session`: per-game locking and the game registry
//!
//! ## Example
//!
//! ```
//! use rust_tricks::{Game, GameConfig, TurnOutcome, UserId};
//!
//! let ann = UserId::from("ann");
//! let bob = UserId::from("bob");
//! let mut game = Game::new(ann.clone(), vec![ann.clone(), bob.clone()], GameConfig::new(7)).unwrap();
//! game.start(&ann).unwrap();
//!
//! // Ann leads with her lowest card.
//! let card = *game.poll_state(&ann).unwrap().me.in_hand.first().unwrap();
//! game.select_card(&ann, card).unwrap();
//! let outcome = game.submit_action(&ann, Some(true)).unwrap();
//! assert!(outcome.is_accepted());
//!
//! // Bob submitting nothing is rejected and recorded.
//! assert!(!game.submit_action(&bob, None).unwrap().is_accepted());
//! assert!(game.poll_state(&bob).unwrap().me.error.is_some());
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod play;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, Seat, UserId};

pub use crate::cards::{Card, CardParseError, Deck, Hand, Rank, Suit, DECK_SIZE};

pub use crate::error::{GameError, ValidationError};

pub use crate::play::{Action, Player};

pub use crate::rules::{MatchResult, RoundSummary, SeatScore};

pub use crate::game::{CardFace, Game, GameStatus, GameView, OwnView, PlayedView, SeatView, TurnOutcome};

pub use crate::session::{GameId, Table, Tables};
