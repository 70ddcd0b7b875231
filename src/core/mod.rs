//! Core engine types: seats, identities, RNG, configuration.
//!
//! These carry no game rules of their own; `cards`, `play` and `game`
//! build on top of them.

pub mod config;
pub mod rng;
pub mod seat;

pub use config::{GameConfig, DEFAULT_FACE_UP_BONUS, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::{GameRng, GameRngState};
pub use seat::{Seat, UserId};
