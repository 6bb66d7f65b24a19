//! Card and suit types.

use alloc::string::String;
use core::fmt;

/// Card suit, listed in the order the deck builder lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Clubs, Self::Diamonds, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards are immutable once built: there are no setters, and "changing" a
/// card means constructing a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    label: String,
    value: i32,
    suit: String,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate its arguments. Any suit name and
    /// any value are accepted.
    #[must_use]
    pub fn new(label: impl Into<String>, value: i32, suit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            suit: suit.into(),
        }
    }

    /// Creates a new card in one of the four standard suits.
    #[must_use]
    pub fn from_suit(label: impl Into<String>, value: i32, suit: Suit) -> Self {
        Self::new(label, value, suit.name())
    }

    /// Returns the face label (e.g. `" A"` or `"10"`).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the suit name.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }
}

/// The ace of hearts, valued 1.
impl Default for Card {
    fn default() -> Self {
        Self::from_suit(" A", 1, Suit::Hearts)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.label, self.suit)
    }
}
