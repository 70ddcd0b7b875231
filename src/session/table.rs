//! Shared, serialized access to one game.
//!
//! A `Table` is a cheap-to-clone handle. Every intent takes the write
//! lock for the whole transition, so two mutations of the same game never
//! interleave. Polls take the read lock and copy out a `GameView`, so a
//! reader sees either the state before a transition or after it.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::UserId;
use crate::error::GameError;
use crate::game::{Game, GameStatus, GameView, TurnOutcome};

/// Registry-assigned game identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}", self.0)
    }
}

/// Exclusive-access handle to a single game.
#[derive(Clone, Debug)]
pub struct Table {
    id: GameId,
    game: Arc<RwLock<Game>>,
}

impl Table {
    #[must_use]
    pub fn new(id: GameId, game: Game) -> Self {
        Self {
            id,
            game: Arc::new(RwLock::new(game)),
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Run a read-only closure against a consistent state.
    pub fn read<T>(&self, f: impl FnOnce(&Game) -> T) -> T {
        let game = self.game.read();
        f(&*game)
    }

    /// Run a transition under the game's exclusive lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut Game) -> T) -> T {
        let mut game = self.game.write();
        f(&mut *game)
    }

    pub fn start(&self, caller: &UserId) -> Result<(), GameError> {
        debug!(game_id = self.id.0, caller = %caller, "start");
        self.write(|g| g.start(caller))
    }

    pub fn select_card(&self, user: &UserId, card: Card) -> Result<(), GameError> {
        self.write(|g| g.select_card(user, card))
    }

    pub fn deselect_card(&self, user: &UserId, card: Card) -> Result<(), GameError> {
        self.write(|g| g.deselect_card(user, card))
    }

    pub fn choose_face_orientation(&self, user: &UserId, face_up: bool) -> Result<(), GameError> {
        self.write(|g| g.choose_face_orientation(user, face_up))
    }

    pub fn submit_action(&self, user: &UserId, face_up: Option<bool>) -> Result<TurnOutcome, GameError> {
        debug!(game_id = self.id.0, user = %user, "submit");
        self.write(|g| g.submit_action(user, face_up))
    }

    pub fn mark_ready(&self, user: &UserId) -> Result<bool, GameError> {
        self.write(|g| g.mark_ready(user))
    }

    pub fn cancel(&self) -> Result<(), GameError> {
        debug!(game_id = self.id.0, "cancel");
        self.write(Game::cancel)
    }

    pub fn poll_state(&self, user: &UserId) -> Result<GameView, GameError> {
        self.read(|g| g.poll_state(user))
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.read(Game::status)
    }

    /// Encode the game under the read lock.
    pub fn checkpoint(&self) -> Result<Vec<u8>, GameError> {
        self.read(Game::checkpoint)
    }
}
