//! The bounded card pile.

use alloc::collections::VecDeque;
use core::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::error::{AddCardError, PileError};
use crate::options::{DeckOptions, FaceValues, ShuffleMode};

/// Maximum number of cards a pile can hold.
pub const CAPACITY: usize = 52;

/// Face labels in deck order. All are two characters wide so listings line up.
const FACES: [&str; 13] = [
    " A", " 2", " 3", " 4", " 5", " 6", " 7", " 8", " 9", "10", " J", " Q", " K",
];

/// Swap trials per card for [`ShuffleMode::RandomSwaps`].
const SWAPS_PER_CARD: usize = 3;

fn random_swaps<R: Rng + ?Sized>(cards: &mut VecDeque<Card>, rng: &mut R) {
    let len = cards.len();
    let trials = len * SWAPS_PER_CARD;
    tracing::trace!(cards = len, trials, "shuffling pile");

    for _ in 0..trials {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        if a != b {
            cards.swap(a, b);
        }
    }
}

/// An ordered pile of at most [`CAPACITY`] cards.
///
/// The pile behaves like a queue: cards are dealt from the top (front) and
/// added to the bottom (back). Only the top card can be inspected. Each pile
/// owns a seeded random number generator, so shuffles are reproducible.
#[derive(Debug, Clone)]
pub struct CardPile {
    /// Cards from top (index 0) to bottom.
    cards: VecDeque<Card>,
    /// Random number generator used by [`CardPile::shuffle`].
    rng: ChaCha8Rng,
}

impl CardPile {
    /// Creates an empty pile with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: VecDeque::with_capacity(CAPACITY),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a shuffled standard 52-card deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{CardPile, FaceValues};
    ///
    /// let deck = CardPile::standard_deck(FaceValues::AceHigh, 1);
    /// assert_eq!(deck.count_cards_of_value(14), 4);
    /// ```
    #[must_use]
    pub fn standard_deck(face_values: FaceValues, seed: u64) -> Self {
        Self::from_options(
            &DeckOptions::default()
                .with_face_values(face_values)
                .with_seed(seed),
        )
    }

    /// Creates a standard 52-card deck configured by `options`.
    #[must_use]
    pub fn from_options(options: &DeckOptions) -> Self {
        let mut pile = Self::new(options.seed);
        let values = options.face_values.values();

        for suit in Suit::ALL {
            for (label, value) in FACES.iter().zip(values) {
                pile.cards.push_back(Card::from_suit(*label, value, suit));
            }
        }

        tracing::debug!(
            face_values = ?options.face_values,
            shuffle = ?options.shuffle,
            "built standard deck"
        );

        match options.shuffle {
            ShuffleMode::RandomSwaps => pile.shuffle(),
            ShuffleMode::FisherYates => {
                pile.cards.make_contiguous().shuffle(&mut pile.rng);
            }
            ShuffleMode::None => {}
        }

        pile
    }

    /// Adds a card to the bottom of the pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CapacityExceeded`] inside an [`AddCardError`] if
    /// the pile already holds [`CAPACITY`] cards. The pile is left unchanged
    /// and the card is handed back.
    pub fn add_card(&mut self, card: Card) -> Result<(), AddCardError> {
        if self.is_full() {
            tracing::debug!(held = self.cards.len(), "rejected add to full pile");
            return Err(AddCardError {
                kind: PileError::CapacityExceeded {
                    held: self.cards.len(),
                    incoming: 1,
                },
                card,
            });
        }

        self.cards.push_back(card);
        Ok(())
    }

    /// Scrambles the order of the cards using the pile's own generator.
    ///
    /// Performs `3 * n` trials over the `n` cards; each trial picks two random
    /// positions and swaps them when they differ.
    pub fn shuffle(&mut self) {
        random_swaps(&mut self.cards, &mut self.rng);
    }

    /// Scrambles the order of the cards using `rng`.
    ///
    /// Same algorithm as [`CardPile::shuffle`].
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_swaps(&mut self.cards, rng);
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile holds at least one card.
    #[must_use]
    pub fn has_any_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Returns whether the pile holds [`CAPACITY`] cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= CAPACITY
    }

    /// Returns how many more cards the pile can accept.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        CAPACITY.saturating_sub(self.cards.len())
    }

    /// Removes and returns the top card.
    ///
    /// The remaining cards each move one position toward the top.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::EmptyPile`] if there are no cards.
    pub fn deal_card(&mut self) -> Result<Card, PileError> {
        self.cards.pop_front().ok_or(PileError::EmptyPile)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::EmptyPile`] if there are no cards.
    pub fn peek(&self) -> Result<&Card, PileError> {
        self.cards.front().ok_or(PileError::EmptyPile)
    }

    /// Removes every card from the pile.
    pub fn remove_all_cards(&mut self) {
        self.cards.clear();
    }

    /// Moves every card from `other` to the bottom of this pile.
    ///
    /// The moved cards keep their order and `other` is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::CapacityExceeded`] if the combined count would be
    /// more than [`CAPACITY`]. Neither pile is modified in that case.
    pub fn take_all_cards_from_pile(&mut self, other: &mut Self) -> Result<(), PileError> {
        let held = self.cards.len();
        let incoming = other.cards.len();

        if held + incoming > CAPACITY {
            tracing::debug!(held, incoming, "rejected merge over capacity");
            return Err(PileError::CapacityExceeded { held, incoming });
        }

        tracing::trace!(held, incoming, "merging piles");
        self.cards.append(&mut other.cards);
        Ok(())
    }

    /// Returns the sum of the values of all cards, or 0 for an empty pile.
    #[must_use]
    pub fn total_value_of_cards(&self) -> i32 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Counts the cards whose value equals `value`.
    #[must_use]
    pub fn count_cards_of_value(&self, value: i32) -> usize {
        self.cards.iter().filter(|card| card.value() == value).count()
    }
}

impl Default for CardPile {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Lists one card per line from top to bottom, or `Empty Card Pile`.
impl fmt::Display for CardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("Empty Card Pile");
        }

        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
