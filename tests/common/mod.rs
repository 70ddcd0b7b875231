//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Once;

use rust_tricks::{Card, Game, GameConfig, Rank, Seat, TurnOutcome, UserId};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn users(n: usize) -> Vec<UserId> {
    (0..n).map(|i| UserId::new(format!("player-{i}"))).collect()
}

/// A started game with `n` players, hosted by the first.
pub fn started_game(n: usize, config: GameConfig) -> (Game, Vec<UserId>) {
    init_test_logging();
    let ids = users(n);
    let mut game = Game::new(ids[0].clone(), ids.clone(), config).expect("valid setup");
    game.start(&ids[0]).expect("host can start");
    (game, ids)
}

/// The largest single-rank group in `cards`, highest rank on ties.
pub fn best_book(cards: &[Card]) -> Vec<Card> {
    let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
    for card in cards {
        by_rank.entry(card.rank).or_default().push(*card);
    }
    by_rank
        .into_values()
        .max_by_key(Vec::len)
        .unwrap_or_default()
}

/// The lowest card in `cards`, as a one-card book.
pub fn lowest_single(cards: &[Card]) -> Vec<Card> {
    cards.iter().min().copied().into_iter().collect()
}

/// Stage `cards` for `seat` and submit.
pub fn play(game: &mut Game, seat: Seat, cards: &[Card], face_up: Option<bool>) -> TurnOutcome {
    let user = game.player(seat).user().clone();
    for card in cards {
        game.select_card(&user, *card).unwrap();
    }
    game.submit_action(&user, face_up).unwrap()
}

/// Play the lowest unstaged card of `seat` as a single.
pub fn play_lowest(game: &mut Game, seat: Seat, face_up: Option<bool>) -> TurnOutcome {
    let book = lowest_single(&hand_of(game, seat));
    play(game, seat, &book, face_up)
}

/// Play the largest book `seat` holds.
pub fn play_best(game: &mut Game, seat: Seat, face_up: Option<bool>) -> TurnOutcome {
    let book = best_book(&hand_of(game, seat));
    play(game, seat, &book, face_up)
}

/// Unstaged cards of a seat.
pub fn hand_of(game: &Game, seat: Seat) -> Vec<Card> {
    game.player(seat).hand().in_hand().iter().copied().collect()
}

/// Every player marks ready.
pub fn ready_all(game: &mut Game, ids: &[UserId]) {
    for id in ids {
        game.mark_ready(id).unwrap();
    }
}
