//! The match orchestrator.
//!
//! ## Key Types
//!
//! - `Game`: turn order, round progression, face discipline, scoring
//! - `GameStatus`, `CardFace`: lifecycle and locked orientation
//! - `TurnOutcome`: what a submission did
//! - `GameView`: per-viewer poll snapshot

pub mod engine;
pub mod state;
pub mod view;

pub use engine::Game;
pub use state::{CardFace, GameStatus, TurnOutcome};
pub use view::{GameView, OwnView, PlayedView, SeatView};
