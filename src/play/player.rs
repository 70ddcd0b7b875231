//! Per-game participant state.
//!
//! A `Player` always owns exactly one `Hand` from construction on. Within
//! a round a player is either idle or turn-active; committing a valid book
//! returns them to idle.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::Action;
use crate::cards::{Card, Hand};
use crate::core::{Seat, UserId};
use crate::error::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    user: UserId,
    seat: Seat,
    pub(crate) turn_active: bool,
    points: u32,
    pub(crate) ready: bool,
    face_up_preference: bool,
    error: Option<ValidationError>,
    hand: Hand,
    pub(crate) last_action: Option<Action>,
}

impl Player {
    /// Seat a participant with an empty hand.
    #[must_use]
    pub fn new(user: UserId, seat: Seat) -> Self {
        Self {
            user,
            seat,
            turn_active: false,
            points: 0,
            ready: false,
            face_up_preference: true,
            error: None,
            hand: Hand::new(),
            last_action: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[must_use]
    pub fn is_turn_active(&self) -> bool {
        self.turn_active
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn face_up_preference(&self) -> bool {
        self.face_up_preference
    }

    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&Action> {
        self.last_action.as_ref()
    }

    // === Intents ===

    /// Stage a card. Legal whether or not it is this player's turn.
    pub fn select_card(&mut self, card: Card) {
        self.hand.select(card);
    }

    pub fn deselect_card(&mut self, card: Card) {
        self.hand.deselect(card);
    }

    /// Orientation to use if this player leads a round.
    pub fn choose_face_orientation(&mut self, face_up: bool) {
        self.face_up_preference = face_up;
    }

    /// Turn the staged cards into this turn's action.
    ///
    /// On an invalid book the error is recorded and the selection is left
    /// untouched so the player can fix it. On success the staged cards
    /// move into `last_action` and the player goes idle.
    pub(crate) fn commit_selection(&mut self, face_up: bool) -> Result<&Action, ValidationError> {
        debug_assert!(self.turn_active, "{} committed out of turn", self.seat);

        let candidate = Action::new(self.hand.selected().iter().copied(), face_up);
        if let Some(err) = candidate.error() {
            debug!(seat = self.seat.0, error = %err, "rejected book");
            self.error = Some(err);
            return Err(err);
        }

        self.hand.clear_selected();
        self.error = None;
        self.turn_active = false;
        Ok(self.last_action.insert(candidate))
    }

    // === Lifecycle ===

    /// Reset for a fresh match: no points, ready, nothing played.
    pub(crate) fn reset_for_match(&mut self) {
        self.points = 0;
        self.ready = true;
        self.error = None;
        self.turn_active = false;
        self.last_action = None;
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.points += points;
    }

    /// Reveal the current action, if any.
    pub(crate) fn reveal_action(&mut self) {
        if let Some(action) = self.last_action.as_mut() {
            action.reveal();
        }
    }
}
