//! Game configuration.
//!
//! The setup collaborator builds a `GameConfig` before creating a game:
//!
//! ```
//! use rust_tricks::core::GameConfig;
//!
//! let config = GameConfig::new(42)
//!     .with_title("Friday night")
//!     .with_target_points(30);
//!
//! assert_eq!(config.seed, 42);
//! assert_eq!(config.target_points, Some(30));
//! assert!(config.allows_player_count(4));
//! assert!(!config.allows_player_count(9));
//! ```

use serde::{Deserialize, Serialize};

/// Fewest players a table may seat.
pub const MIN_PLAYERS: usize = 2;

/// Most players a table may seat.
pub const MAX_PLAYERS: usize = 8;

/// Bonus added to the leader's round score when they led face-up.
pub const DEFAULT_FACE_UP_BONUS: u32 = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for every shuffle in the match.
    pub seed: u64,

    /// Display title (not interpreted by the engine).
    pub title: Option<String>,

    /// Minimum seated players, inclusive.
    pub min_players: usize,

    /// Maximum seated players, inclusive.
    pub max_players: usize,

    /// Round-score bonus for a leader who plays face-up.
    pub leader_face_up_bonus: u32,

    /// Finish the match once any player reaches this many points.
    ///
    /// `None` plays until some hand runs out of cards.
    pub target_points: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameConfig {
    /// Create a configuration with default rules and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            title: None,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            leader_face_up_bonus: DEFAULT_FACE_UP_BONUS,
            target_points: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Restrict the accepted table size.
    ///
    /// Both bounds are clamped into the engine-wide 2..=8 range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "min_players must not exceed max_players");
        self.min_players = min.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.max_players = max.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self
    }

    #[must_use]
    pub fn with_leader_face_up_bonus(mut self, bonus: u32) -> Self {
        self.leader_face_up_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_target_points(mut self, points: u32) -> Self {
        self.target_points = Some(points);
        self
    }

    /// Check whether a table of `count` players is allowed.
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}
