//! Round and match scoring.
//!
//! A round is won by the highest `hand_score`, plus a bonus for a leader
//! who played face-up. Players are scanned in seating order and a later
//! player must score strictly more to take the lead, so ties go to the
//! earliest seat. The winner banks the `hand_points` of every book played
//! that round.

use serde::{Deserialize, Serialize};

use crate::core::Seat;
use crate::game::CardFace;
use crate::play::Player;

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(Seat),
    /// Several players share the top score.
    Winners(Vec<Seat>),
}

impl MatchResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        match self {
            MatchResult::Winner(s) => *s == seat,
            MatchResult::Winners(ss) => ss.contains(&seat),
        }
    }

    /// Build a result from final points, in seating order.
    ///
    /// Panics on an empty table.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = (Seat, u32)>) -> Self {
        let points: Vec<(Seat, u32)> = points.into_iter().collect();
        let best = points
            .iter()
            .map(|&(_, p)| p)
            .max()
            .expect("Match result needs at least 1 player");

        let mut leaders: Vec<Seat> = points
            .into_iter()
            .filter(|&(_, p)| p == best)
            .map(|(s, _)| s)
            .collect();

        if leaders.len() == 1 {
            MatchResult::Winner(leaders.remove(0))
        } else {
            MatchResult::Winners(leaders)
        }
    }
}

/// One player's line in a round's scoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatScore {
    pub seat: Seat,
    /// `hand_score` plus any leader bonus.
    pub score: u32,
    /// `hand_points` contributed to the pot.
    pub points: u32,
}

/// Everything decided at a round boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u32,
    pub winner: Seat,
    pub winning_score: u32,
    /// Sum of every book's `hand_points`, banked by the winner.
    pub points_awarded: u32,
    /// Per-seat breakdown, in seating order.
    pub scores: Vec<SeatScore>,
    /// Turn order for the next round, starting with the winner.
    pub next_turn_order: Vec<Seat>,
}

/// Score a completed round.
///
/// `leader` is the seat that opened the round and `card_face` the
/// orientation it locked. Does not mutate any player.
#[must_use]
pub fn score_round(
    round: u32,
    players: &[Player],
    leader: Seat,
    card_face: CardFace,
    leader_bonus: u32,
) -> RoundSummary {
    assert!(!players.is_empty(), "Cannot score a round with no players");

    let scores: Vec<SeatScore> = players
        .iter()
        .map(|player| {
            let (hand_score, points) = player
                .last_action()
                .map_or((0, 0), |a| (a.hand_score(), a.hand_points()));
            let bonus = if player.seat() == leader && card_face == CardFace::Up {
                leader_bonus
            } else {
                0
            };
            SeatScore {
                seat: player.seat(),
                score: hand_score + bonus,
                points,
            }
        })
        .collect();

    let mut best = scores[0];
    for entry in &scores[1..] {
        if entry.score > best.score {
            best = *entry;
        }
    }

    RoundSummary {
        round,
        winner: best.seat,
        winning_score: best.score,
        points_awarded: scores.iter().map(|s| s.points).sum(),
        next_turn_order: best.seat.rotation(players.len()),
        scores,
    }
}
