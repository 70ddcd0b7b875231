//! Scoring rules.
//!
//! Round winners, the leader's face-up bonus, the points pot and match
//! results. Pure functions over player state; the `game` module decides
//! when to call them and applies the outcome.

pub mod scoring;

pub use scoring::{score_round, MatchResult, RoundSummary, SeatScore};
