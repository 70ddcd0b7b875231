//! Small state enums shared by the engine and its views.

use serde::{Deserialize, Serialize};

use crate::core::Seat;
use crate::error::ValidationError;
use crate::rules::RoundSummary;

/// Lifecycle of a match. `Finished` and `Cancelled` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    Finished,
    Cancelled,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::Active => "Active",
            GameStatus::Finished => "Finished",
            GameStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// Orientation locked by the round's leader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    /// Nobody has led yet this round.
    #[default]
    Unset,
    Down,
    Up,
}

impl CardFace {
    #[must_use]
    pub fn from_face_up(face_up: bool) -> Self {
        if face_up {
            CardFace::Up
        } else {
            CardFace::Down
        }
    }

    /// `Some(true)` for Up, `Some(false)` for Down, `None` while unset.
    #[must_use]
    pub fn as_face_up(self) -> Option<bool> {
        match self {
            CardFace::Unset => None,
            CardFace::Down => Some(false),
            CardFace::Up => Some(true),
        }
    }
}

/// What a submission did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Not the submitter's turn (or no round running). Nothing changed.
    Ignored,
    /// The staged cards are not a legal book. Recorded on the player.
    Rejected(ValidationError),
    /// Accepted; `next` is now turn-active.
    Advanced { next: Seat },
    /// Accepted as the round's last turn; the round has been scored.
    RoundEnded(RoundSummary),
}

impl TurnOutcome {
    /// Whether the submission was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, TurnOutcome::Advanced { .. } | TurnOutcome::RoundEnded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::Active.is_terminal());
        assert!(GameStatus::Finished.is_terminal());
        assert!(GameStatus::Cancelled.is_terminal());
        assert_eq!(GameStatus::default(), GameStatus::Active);
    }

    #[test]
    fn test_card_face_conversions() {
        assert_eq!(CardFace::from_face_up(true), CardFace::Up);
        assert_eq!(CardFace::from_face_up(false), CardFace::Down);
        assert_eq!(CardFace::Unset.as_face_up(), None);
        assert_eq!(CardFace::Down.as_face_up(), Some(false));
        assert_eq!(CardFace::default(), CardFace::Unset);
    }

    #[test]
    fn test_outcome_accepted() {
        assert!(!TurnOutcome::Ignored.is_accepted());
        assert!(!TurnOutcome::Rejected(ValidationError::Empty).is_accepted());
        assert!(TurnOutcome::Advanced { next: Seat::new(1) }.is_accepted());
    }
}
