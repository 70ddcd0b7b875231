//! End-to-end round flow through the public `Game` API.

mod common;

use common::{best_book, hand_of, lowest_single, play, play_best, play_lowest, ready_all, started_game, users};
use rust_tricks::{
    CardFace, Game, GameConfig, GameError, GameStatus, GameView, PlayedView, Seat, TurnOutcome, ValidationError,
};

/// Seats 0 and 1 play single low cards, seat 2 a pair or better: seat 2
/// must win and lead the next round.
#[test]
fn test_turn_rotation_after_seat_two_wins() {
    let (mut game, ids) = started_game(3, GameConfig::new(42));

    play_lowest(&mut game, Seat::new(0), Some(false));
    play_lowest(&mut game, Seat::new(1), None);
    let book = best_book(&hand_of(&game, Seat::new(2)));
    assert!(book.len() >= 2, "17 cards over 13 ranks always hold a pair");
    let outcome = play(&mut game, Seat::new(2), &book, None);

    let TurnOutcome::RoundEnded(summary) = outcome else {
        panic!("expected round end, got {outcome:?}");
    };
    assert_eq!(summary.winner, Seat::new(2));

    ready_all(&mut game, &ids);
    assert_eq!(game.turn_order(), &[Seat::new(2), Seat::new(0), Seat::new(1)]);
    assert_eq!(game.active_seat(), Some(Seat::new(2)));

    let mut round_ends = 0;
    for (step, seat) in [2u8, 0, 1].into_iter().enumerate() {
        let seat = Seat::new(seat);
        assert_eq!(game.turn_index(), step);
        assert_eq!(game.active_seat(), Some(seat));

        let outcome = play_lowest(&mut game, seat, None);
        match outcome {
            TurnOutcome::Advanced { next } => {
                assert_eq!(next, game.turn_order()[step + 1]);
                assert_eq!(game.turn_index(), step + 1);
            }
            TurnOutcome::RoundEnded(_) => round_ends += 1,
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    assert_eq!(round_ends, 1);
    assert!(game.is_round_end());
}

#[test]
fn test_four_player_reseating() {
    // Find a deal where seat 1 holds a pair.
    let (mut game, ids) = (0u64..)
        .map(|seed| started_game(4, GameConfig::new(seed)))
        .find(|(game, _)| best_book(&hand_of(game, Seat::new(1))).len() >= 2)
        .unwrap();

    play_lowest(&mut game, Seat::new(0), Some(false));
    play_best(&mut game, Seat::new(1), None);
    play_lowest(&mut game, Seat::new(2), None);
    play_lowest(&mut game, Seat::new(3), None);

    assert_eq!(game.last_round().unwrap().winner, Seat::new(1));
    assert_eq!(
        game.turn_order(),
        &[Seat::new(1), Seat::new(2), Seat::new(3), Seat::new(0)]
    );

    ready_all(&mut game, &ids);
    assert_eq!(game.active_seat(), Some(Seat::new(1)));
}

#[test]
fn test_followers_match_locked_orientation() {
    let (mut game, ids) = started_game(3, GameConfig::new(11));

    play_lowest(&mut game, Seat::new(0), Some(true));
    assert_eq!(game.card_face(), CardFace::Up);

    play_lowest(&mut game, Seat::new(1), Some(false));
    assert!(game.player(Seat::new(1)).last_action().unwrap().face_up());

    // A follower's own preference is ignored too.
    game.choose_face_orientation(&ids[2], false).unwrap();
    play_lowest(&mut game, Seat::new(2), None);
    let summary = game.last_round().unwrap();
    assert_eq!(summary.round, 1);
}

#[test]
fn test_face_down_books_are_hidden_until_round_end() {
    let (mut game, ids) = started_game(3, GameConfig::new(5));

    let led = lowest_single(&hand_of(&game, Seat::new(0)));
    play(&mut game, Seat::new(0), &led, Some(false));

    let view = game.poll_state(&ids[1]).unwrap();
    assert_eq!(view.card_face, CardFace::Down);
    assert_eq!(view.seat(Seat::new(0)).unwrap().played, Some(PlayedView::FaceDown { count: 1 }));
    assert_eq!(view.active_seat(), Some(Seat::new(1)));

    let own = game.poll_state(&ids[0]).unwrap();
    assert_eq!(own.me.played, Some(led.clone()));

    play_lowest(&mut game, Seat::new(1), Some(true));
    play_lowest(&mut game, Seat::new(2), None);

    let view = game.poll_state(&ids[1]).unwrap();
    assert_eq!(view.seat(Seat::new(0)).unwrap().played, Some(PlayedView::FaceUp(led)));
    assert!(view.seats.iter().all(|s| !s.ready && !s.turn_active));
    assert!(view.last_round.is_some());
}

#[test]
fn test_invalid_book_is_recorded_and_fixable() {
    let (mut game, ids) = started_game(2, GameConfig::new(3));

    let hand = hand_of(&game, Seat::new(0));
    let first = hand[0];
    let other_rank = *hand.iter().find(|c| c.rank != first.rank).unwrap();

    let outcome = play(&mut game, Seat::new(0), &[first, other_rank], None);
    assert_eq!(outcome, TurnOutcome::Rejected(ValidationError::MixedRanks));

    let view = game.poll_state(&ids[0]).unwrap();
    assert_eq!(view.me.error, Some(ValidationError::MixedRanks));
    assert_eq!(view.me.selected.len(), 2);
    assert_eq!(view.turn_index, 0);
    assert_eq!(
        view.me.error.map(|e| e.to_string()).as_deref(),
        Some("all cards must share one rank")
    );

    game.deselect_card(&ids[0], other_rank).unwrap();
    let outcome = game.submit_action(&ids[0], None).unwrap();

    assert!(outcome.is_accepted());
    assert_eq!(game.player(Seat::new(0)).error(), None);
    assert!(game.player(Seat::new(0)).hand().contains(other_rank));
}

#[test]
fn test_deselect_unstaged_card_is_noop() {
    let (mut game, ids) = started_game(2, GameConfig::new(8));
    let before = game.poll_state(&ids[1]).unwrap();

    let card = before.me.in_hand[0];
    game.deselect_card(&ids[1], card).unwrap();

    assert_eq!(game.poll_state(&ids[1]).unwrap(), before);
}

#[test]
fn test_match_plays_until_a_hand_runs_out() {
    let (mut game, ids) = started_game(5, GameConfig::new(2024));
    let mut points = vec![0u32; 5];
    let mut rounds = 0;

    while game.status() == GameStatus::Active {
        if game.is_round_active() {
            let seat = game.active_seat().unwrap();
            let book = best_book(&hand_of(&game, seat));
            play(&mut game, seat, &book, Some(true));
        } else {
            ready_all(&mut game, &ids);
            rounds += 1;
        }

        for player in game.players() {
            assert!(player.points() >= points[player.seat().index()], "points never decrease");
            points[player.seat().index()] = player.points();
        }
        assert!(rounds <= 52, "every round consumes cards");
    }

    assert_eq!(game.status(), GameStatus::Finished);
    assert!(game.players().iter().any(|p| p.hand().is_empty()));

    let result = game.result().unwrap();
    let top = game.players().iter().map(|p| p.points()).max().unwrap();
    for player in game.players() {
        assert_eq!(result.is_winner(player.seat()), player.points() == top);
    }

    assert!(matches!(
        game.mark_ready(&ids[0]),
        Err(GameError::Inactive { status: GameStatus::Finished })
    ));
}

#[test]
fn test_precondition_errors_surface() {
    let ids = users(3);
    let mut game = Game::new(ids[0].clone(), ids.clone(), GameConfig::new(1)).unwrap();

    assert!(matches!(game.start(&ids[2]), Err(GameError::NotHost { .. })));

    // Before start nothing is dealt and no round runs.
    assert_eq!(game.submit_action(&ids[0], None).unwrap(), TurnOutcome::Ignored);
    assert!(!game.mark_ready(&ids[1]).unwrap());

    game.start(&ids[0]).unwrap();
    assert!(matches!(game.start(&ids[0]), Err(GameError::AlreadyStarted)));
}

#[test]
fn test_view_round_trips_through_json() {
    let (mut game, ids) = started_game(4, GameConfig::new(77).with_title("json"));
    play_lowest(&mut game, Seat::new(0), Some(false));

    let view = game.poll_state(&ids[2]).unwrap();
    let json = serde_json::to_string(&view).unwrap();
    let back: GameView = serde_json::from_str(&json).unwrap();

    assert_eq!(view, back);
    assert_eq!(back.title.as_deref(), Some("json"));
    assert_eq!(back.turn_order.len(), 4);
    assert_eq!(back.turn_index, 1);
}
