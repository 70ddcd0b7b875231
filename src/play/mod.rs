//! Turn-level play: books and the players who submit them.
//!
//! - `Action`: a submitted book with orientation and scoring helpers
//! - `Player`: seat, hand, readiness, points and last action

pub mod action;
pub mod player;

pub use action::{Action, BOOK_SIZE_STEP};
pub use player::Player;
