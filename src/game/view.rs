//! Read-only snapshots handed to the transport layer.
//!
//! A `GameView` is built for one viewer: their own hand in full, and
//! only the public state of everybody else. Face-down books show a card
//! count, never the cards.

use serde::{Deserialize, Serialize};

use super::state::{CardFace, GameStatus};
use crate::cards::Card;
use crate::core::{Seat, UserId};
use crate::error::ValidationError;
use crate::play::{Action, Player};
use crate::rules::{MatchResult, RoundSummary};

/// A played book as others see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayedView {
    FaceUp(Vec<Card>),
    FaceDown { count: usize },
}

impl PlayedView {
    fn of(action: &Action) -> Self {
        if action.face_up() {
            PlayedView::FaceUp(action.cards().to_vec())
        } else {
            PlayedView::FaceDown {
                count: action.card_count(),
            }
        }
    }
}

/// Public state of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub user: UserId,
    pub seat: Seat,
    pub points: u32,
    pub ready: bool,
    pub turn_active: bool,
    pub error: Option<ValidationError>,
    /// Staged and unstaged cards together.
    pub cards_held: usize,
    pub played: Option<PlayedView>,
}

impl SeatView {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            user: player.user().clone(),
            seat: player.seat(),
            points: player.points(),
            ready: player.is_ready(),
            turn_active: player.is_turn_active(),
            error: player.error(),
            cards_held: player.hand().len(),
            played: player.last_action().map(PlayedView::of),
        }
    }
}

/// The viewer's own, private state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnView {
    pub seat: Seat,
    pub in_hand: Vec<Card>,
    pub selected: Vec<Card>,
    pub error: Option<ValidationError>,
    pub face_up_preference: bool,
    /// The viewer's own book, always shown in full.
    pub played: Option<Vec<Card>>,
}

impl OwnView {
    pub(crate) fn of(player: &Player) -> Self {
        Self {
            seat: player.seat(),
            in_hand: player.hand().in_hand().iter().copied().collect(),
            selected: player.hand().selected().iter().copied().collect(),
            error: player.error(),
            face_up_preference: player.face_up_preference(),
            played: player.last_action().map(|a| a.cards().to_vec()),
        }
    }
}

/// Everything one viewer may see, taken at a single instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub title: Option<String>,
    pub status: GameStatus,
    pub round_number: u32,
    pub round_active: bool,
    pub card_face: CardFace,
    pub turn_order: Vec<Seat>,
    pub turn_index: usize,
    pub me: OwnView,
    /// Every seat, including the viewer's, in seating order.
    pub seats: Vec<SeatView>,
    pub last_round: Option<RoundSummary>,
    pub result: Option<MatchResult>,
}

impl GameView {
    /// The seat whose turn it is, if a round is running.
    #[must_use]
    pub fn active_seat(&self) -> Option<Seat> {
        self.seats.iter().find(|s| s.turn_active).map(|s| s.seat)
    }

    /// Public view of a given seat.
    #[must_use]
    pub fn seat(&self, seat: Seat) -> Option<&SeatView> {
        self.seats.get(seat.index())
    }
}
