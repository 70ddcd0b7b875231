//! Seat and participant identification.
//!
//! ## Seat
//!
//! 0-based seating position, assigned once when the game is created and
//! fixed for the game's lifetime. Turn order is a permutation of seats.
//!
//! ## UserId
//!
//! Opaque identity handed in by the setup collaborator. The engine only
//! compares these for equality and maps them to seats.

use serde::{Deserialize, Serialize};

/// Seat position supporting 1-255 players.
///
/// Seats are 0-based: the first player sits at `Seat(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Seat(pub u8);

impl Seat {
    /// Create a new seat.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a table of `player_count` players.
    ///
    /// ```
    /// use rust_tricks::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all(4).collect();
    /// assert_eq!(seats.len(), 4);
    /// assert_eq!(seats[0], Seat::new(0));
    /// assert_eq!(seats[3], Seat::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = Seat> {
        (0..player_count as u8).map(Seat)
    }

    /// Seating order rotated so that `self` comes first.
    ///
    /// The relative order of everyone else is preserved.
    ///
    /// ```
    /// use rust_tricks::core::Seat;
    ///
    /// let order = Seat::new(1).rotation(4);
    /// assert_eq!(order, vec![Seat::new(1), Seat::new(2), Seat::new(3), Seat::new(0)]);
    /// ```
    #[must_use]
    pub fn rotation(self, player_count: usize) -> Vec<Seat> {
        assert!(self.index() < player_count, "{} is not at a {}-player table", self, player_count);

        (0..player_count)
            .map(|offset| Seat(((self.index() + offset) % player_count) as u8))
            .collect()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Identity of a participant as known to the outside world.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
