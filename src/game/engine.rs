//! The game state machine.
//!
//! ```text
//! AwaitingStart --start--> RoundActive --last turn--> (scored) --all ready--> RoundActive ...
//!                                                         \--hands empty / target--> Finished
//! any non-terminal state --cancel--> Cancelled
//! ```
//!
//! Every public method is a synchronous, fully committed transition.
//! Callers needing shared access wrap the game in a `session::Table`.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::state::{CardFace, GameStatus, TurnOutcome};
use super::view::{GameView, OwnView, SeatView};
use crate::cards::{Card, Deck};
use crate::core::{GameConfig, GameRng, Seat, UserId};
use crate::error::GameError;
use crate::play::Player;
use crate::rules::{score_round, MatchResult, RoundSummary};

/// A single match.
///
/// Owns its players outright; each player owns their hand and latest
/// action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    host: UserId,
    status: GameStatus,
    started: bool,

    /// Seating order. `players[i].seat() == Seat(i)`.
    players: Vec<Player>,
    seats: FxHashMap<UserId, Seat>,

    /// Seats in the order they play this round.
    turn_order: Vec<Seat>,
    turn_index: usize,
    card_face: CardFace,
    round_active: bool,
    round_number: u32,
    last_round: Option<RoundSummary>,

    rng: GameRng,
}

impl Game {
    /// Create a game awaiting start.
    ///
    /// `participants` is the seating order; the host must be among them.
    pub fn new(host: UserId, participants: Vec<UserId>, config: GameConfig) -> Result<Self, GameError> {
        if !config.allows_player_count(participants.len()) {
            return Err(GameError::InvalidPlayerCount {
                min: config.min_players,
                max: config.max_players,
                got: participants.len(),
            });
        }

        let mut seats = FxHashMap::default();
        let mut players = Vec::with_capacity(participants.len());
        for (i, user) in participants.into_iter().enumerate() {
            let seat = Seat::new(i as u8);
            if seats.insert(user.clone(), seat).is_some() {
                return Err(GameError::DuplicatePlayer(user));
            }
            players.push(Player::new(user, seat));
        }

        if !seats.contains_key(&host) {
            return Err(GameError::HostNotSeated(host));
        }

        info!(host = %host, players = players.len(), seed = config.seed, "created game");

        Ok(Self {
            rng: GameRng::new(config.seed),
            turn_order: Seat::all(players.len()).collect(),
            config,
            host,
            status: GameStatus::Active,
            started: false,
            players,
            seats,
            turn_index: 0,
            card_face: CardFace::Unset,
            round_active: false,
            round_number: 0,
            last_round: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    #[must_use]
    pub fn host(&self) -> &UserId {
        &self.host
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Seat of a participant.
    pub fn seat_of(&self, user: &UserId) -> Result<Seat, GameError> {
        self.seats
            .get(user)
            .copied()
            .ok_or_else(|| GameError::UnknownPlayer(user.clone()))
    }

    #[must_use]
    pub fn turn_order(&self) -> &[Seat] {
        &self.turn_order
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    #[must_use]
    pub fn card_face(&self) -> CardFace {
        self.card_face
    }

    #[must_use]
    pub fn is_round_active(&self) -> bool {
        self.round_active
    }

    /// 1-based number of the current (or most recent) round.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Every seat has played this round.
    #[must_use]
    pub fn is_round_end(&self) -> bool {
        self.turn_index >= self.players.len()
    }

    /// The round's leader.
    #[must_use]
    pub fn leader(&self) -> Seat {
        self.turn_order[0]
    }

    /// The seat whose turn it is, if any.
    #[must_use]
    pub fn active_seat(&self) -> Option<Seat> {
        self.players.iter().find(|p| p.is_turn_active()).map(Player::seat)
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    /// Final standings, once the match has finished.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        if self.status != GameStatus::Finished {
            return None;
        }
        Some(MatchResult::from_points(
            self.players.iter().map(|p| (p.seat(), p.points())),
        ))
    }

    // === Intents ===

    /// Deal and open the first round. Host only, once.
    pub fn start(&mut self, caller: &UserId) -> Result<(), GameError> {
        self.ensure_active()?;
        if *caller != self.host {
            return Err(GameError::NotHost {
                host: self.host.clone(),
            });
        }
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        for player in &mut self.players {
            player.reset_for_match();
        }

        let mut deal_rng = self.rng.for_context("deal");
        let mut hands: Vec<_> = self.players.iter_mut().map(Player::hand_mut).collect();
        Deck::standard().deal(&mut deal_rng, &mut hands);

        self.turn_order = Seat::all(self.players.len()).collect();
        self.turn_index = 0;
        let first = self.turn_order[0];
        self.players[first.index()].turn_active = true;
        self.started = true;

        info!(players = self.players.len(), "started game");

        self.try_start_round();
        self.check_invariants();
        Ok(())
    }

    pub fn select_card(&mut self, user: &UserId, card: Card) -> Result<(), GameError> {
        let seat = self.mutable_seat(user)?;
        self.players[seat.index()].select_card(card);
        Ok(())
    }

    pub fn deselect_card(&mut self, user: &UserId, card: Card) -> Result<(), GameError> {
        let seat = self.mutable_seat(user)?;
        self.players[seat.index()].deselect_card(card);
        Ok(())
    }

    /// Record the orientation a player wants when they lead.
    pub fn choose_face_orientation(&mut self, user: &UserId, face_up: bool) -> Result<(), GameError> {
        let seat = self.mutable_seat(user)?;
        self.players[seat.index()].choose_face_orientation(face_up);
        Ok(())
    }

    /// Play the staged cards as this turn's book.
    ///
    /// The leader plays `face_up` if given, else their preference.
    /// Followers always play the orientation the leader locked; any
    /// requested orientation is overridden.
    ///
    /// Out-of-turn submissions return [`TurnOutcome::Ignored`] and change
    /// nothing. An illegal book returns [`TurnOutcome::Rejected`] and is
    /// recorded on the player.
    pub fn submit_action(&mut self, user: &UserId, face_up: Option<bool>) -> Result<TurnOutcome, GameError> {
        let seat = self.mutable_seat(user)?;

        if !self.round_active || !self.players[seat.index()].is_turn_active() {
            debug!(seat = seat.0, "ignored out-of-turn submission");
            return Ok(TurnOutcome::Ignored);
        }

        let leading = self.turn_index == 0;
        let player = &mut self.players[seat.index()];
        let requested = face_up.unwrap_or(player.face_up_preference());
        let face_up = if leading {
            requested
        } else {
            debug_assert_ne!(self.card_face, CardFace::Unset, "follower played before leader locked face");
            self.card_face.as_face_up().unwrap_or(requested)
        };

        if let Err(err) = player.commit_selection(face_up) {
            return Ok(TurnOutcome::Rejected(err));
        }

        debug!(seat = seat.0, face_up, turn = self.turn_index, "accepted book");
        let outcome = self.next_turn();
        self.check_invariants();
        Ok(outcome)
    }

    /// Mark a player ready; opens the next round once everyone is.
    ///
    /// Returns whether a round was opened by this call.
    pub fn mark_ready(&mut self, user: &UserId) -> Result<bool, GameError> {
        let seat = self.mutable_seat(user)?;
        self.players[seat.index()].ready = true;

        let opened = self.try_start_round();
        self.check_invariants();
        Ok(opened)
    }

    /// Open a round if the game is running, idle and every player is ready.
    ///
    /// Returns whether a round was opened.
    pub fn try_start_round(&mut self) -> bool {
        if self.status.is_terminal() || !self.started || self.round_active {
            return false;
        }
        if !self.players.iter().all(Player::is_ready) {
            return false;
        }

        for player in &mut self.players {
            player.last_action = None;
            player.turn_active = false;
        }

        self.card_face = CardFace::Unset;
        self.turn_index = 0;
        self.round_active = true;
        self.round_number += 1;

        let leader = self.leader();
        self.players[leader.index()].turn_active = true;

        info!(round = self.round_number, leader = leader.0, "round started");
        true
    }

    /// Cancel the match. Terminal; later mutations are rejected.
    pub fn cancel(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;

        self.status = GameStatus::Cancelled;
        self.round_active = false;
        for player in &mut self.players {
            player.turn_active = false;
        }

        warn!(round = self.round_number, "game cancelled");
        Ok(())
    }

    /// Snapshot of what `user` may see.
    ///
    /// Allowed in every status, including terminal ones.
    pub fn poll_state(&self, user: &UserId) -> Result<GameView, GameError> {
        let seat = self.seat_of(user)?;

        Ok(GameView {
            title: self.config.title.clone(),
            status: self.status,
            round_number: self.round_number,
            round_active: self.round_active,
            card_face: self.card_face,
            turn_order: self.turn_order.clone(),
            turn_index: self.turn_index,
            me: OwnView::of(&self.players[seat.index()]),
            seats: self.players.iter().map(SeatView::of).collect(),
            last_round: self.last_round.clone(),
            result: self.result(),
        })
    }

    // === Persistence ===

    /// Encode the full game, RNG position included.
    pub fn checkpoint(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a game written by [`Game::checkpoint`].
    ///
    /// A decodable but structurally broken game is refused with
    /// [`GameError::CorruptCheckpoint`].
    pub fn restore(bytes: &[u8]) -> Result<Self, GameError> {
        let game: Self = bincode::deserialize(bytes)?;
        if let Some(fault) = game.structural_fault() {
            warn!(fault, "refused corrupt checkpoint");
            return Err(GameError::CorruptCheckpoint(fault));
        }
        Ok(game)
    }

    // === Transitions ===

    /// Advance after an accepted book.
    fn next_turn(&mut self) -> TurnOutcome {
        if self.turn_index == 0 {
            let leader = self.leader();
            let face_up = self.players[leader.index()]
                .last_action()
                .map_or(true, |a| a.face_up());
            self.card_face = CardFace::from_face_up(face_up);
            debug!(face = ?self.card_face, "leader locked orientation");
        }

        self.turn_index += 1;

        if self.is_round_end() {
            return TurnOutcome::RoundEnded(self.end_round());
        }

        let next = self.turn_order[self.turn_index];
        self.players[next.index()].turn_active = true;
        TurnOutcome::Advanced { next }
    }

    /// Reveal, score, reseat. Runs once per round boundary.
    fn end_round(&mut self) -> RoundSummary {
        debug_assert!(self.round_active, "round ended twice");

        for player in &mut self.players {
            player.reveal_action();
            player.ready = false;
        }

        let summary = score_round(
            self.round_number,
            &self.players,
            self.leader(),
            self.card_face,
            self.config.leader_face_up_bonus,
        );

        self.players[summary.winner.index()].award(summary.points_awarded);
        self.turn_order = summary.next_turn_order.clone();
        self.card_face = CardFace::Unset;
        self.round_active = false;

        info!(
            round = summary.round,
            winner = summary.winner.0,
            score = summary.winning_score,
            points = summary.points_awarded,
            "round ended"
        );

        if self.match_over() {
            self.status = GameStatus::Finished;
            info!(round = summary.round, "game finished");
        }

        self.last_round = Some(summary.clone());
        summary
    }

    /// No further round can be played, or somebody reached the target.
    fn match_over(&self) -> bool {
        let target_reached = self
            .config
            .target_points
            .is_some_and(|target| self.players.iter().any(|p| p.points() >= target));
        let hand_exhausted = self.players.iter().any(|p| p.hand().is_empty());

        target_reached || hand_exhausted
    }

    // === Guards ===

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Inactive { status: self.status });
        }
        Ok(())
    }

    fn mutable_seat(&self, user: &UserId) -> Result<Seat, GameError> {
        self.ensure_active()?;
        self.seat_of(user)
    }

    /// Structural invariants. Violations are programming faults.
    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Some(fault) = self.structural_fault() {
                panic!("broken game state: {fault}");
            }
        }
    }

    /// First broken structural invariant, if any.
    fn structural_fault(&self) -> Option<&'static str> {
        let n = self.players.len();
        if !self.config.allows_player_count(n) {
            return Some("player count outside the configured range");
        }
        if self.players.iter().enumerate().any(|(i, p)| p.seat().index() != i) {
            return Some("players are not in seating order");
        }
        if self.seats.len() != n || self.players.iter().any(|p| self.seats.get(p.user()) != Some(&p.seat())) {
            return Some("identity map does not match the players");
        }
        if !self.seats.contains_key(&self.host) {
            return Some("host is not seated");
        }

        let mut order: Vec<usize> = self.turn_order.iter().map(|s| s.index()).collect();
        order.sort_unstable();
        if !order.iter().copied().eq(0..n) {
            return Some("turn order is not a permutation of the seats");
        }
        if self.turn_index > n {
            return Some("turn index past the end of the turn order");
        }

        let active: Vec<Seat> = self.players.iter().filter(|p| p.is_turn_active()).map(Player::seat).collect();
        if self.round_active {
            if self.turn_index >= n || active != [self.turn_order[self.turn_index]] {
                return Some("exactly the seat at the turn index must be turn-active during a round");
            }
        } else if !active.is_empty() {
            return Some("no player may be turn-active between rounds");
        }

        let mut seen = FxHashSet::default();
        for player in &self.players {
            let played = player.last_action().into_iter().flat_map(|a| a.cards());
            for card in player.hand().all_cards().chain(played) {
                if !seen.insert(*card) {
                    return Some("a card is held in two places");
                }
            }
        }
        None
    }
}
