//! Playing cards as plain values.
//!
//! A `Card` is `Copy` with structural equality on (suit, rank). The 52
//! canonical values come from [`Card::standard_deck`]; nothing ever
//! creates or destroys cards during a game.
//!
//! ```
//! use rust_tricks::cards::{Card, Rank, Suit};
//!
//! let card: Card = "10D".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Diamonds, Rank::Ten));
//! assert_eq!(card.to_string(), "10 of Diamonds");
//! assert_eq!(card.short(), "10D");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// One-letter code: H, D, C or S.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code.to_ascii_uppercase())
    }
}

/// Card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Base value: A=1, 2..10 face value, J=11, Q=12, K=13.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    /// Short code: A, 2..10, J, Q, K.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            other => other.code(),
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.code().eq_ignore_ascii_case(code))
    }
}

/// A playing card.
///
/// Ordered by rank first so sorted hands group books together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { rank, suit }
    }

    /// The 52 canonical cards, suit by suit.
    pub fn standard_deck() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
    }

    /// Short notation such as "AH", "10D" or "KS".
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }

    /// Image file name for renderers, e.g. "ace_of_hearts.png".
    #[must_use]
    pub fn image_path(&self) -> String {
        format!(
            "{}_of_{}.png",
            self.rank.name().to_lowercase(),
            self.suit.name().to_lowercase()
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Failure parsing short card notation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{0}` is not a card (expected e.g. AH, 10D, KS)")]
pub struct CardParseError(pub String);

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || CardParseError(s.to_string());

        let suit_char = s.chars().last().ok_or_else(err)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];

        let suit = Suit::from_code(suit_char).ok_or_else(err)?;
        let rank = Rank::from_code(rank_part).ok_or_else(err)?;

        Ok(Card::new(suit, rank))
    }
}
