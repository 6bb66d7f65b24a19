//! Deck construction options.

/// Values assigned to aces and face cards when a standard deck is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FaceValues {
    /// Ace = 1, Jack = 11, Queen = 12, King = 13.
    #[default]
    AceLow = 0,
    /// Ace = 14, Jack = 11, Queen = 12, King = 13.
    AceHigh = 1,
    /// Ace = 1, Jack = Queen = King = 10.
    EqualFaces = 2,
}

impl FaceValues {
    /// Maps an integer selector to a convention.
    ///
    /// Unrecognized selectors fall back to [`FaceValues::AceLow`].
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::FaceValues;
    ///
    /// assert_eq!(FaceValues::from_selector(1), FaceValues::AceHigh);
    /// assert_eq!(FaceValues::from_selector(99), FaceValues::AceLow);
    /// ```
    #[must_use]
    pub const fn from_selector(selector: i32) -> Self {
        match selector {
            1 => Self::AceHigh,
            2 => Self::EqualFaces,
            _ => Self::AceLow,
        }
    }

    /// Returns the values for the thirteen faces `A, 2..10, J, Q, K`.
    #[must_use]
    pub const fn values(self) -> [i32; 13] {
        match self {
            Self::AceLow => [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13],
            Self::AceHigh => [14, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13],
            Self::EqualFaces => [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10],
        }
    }
}

impl From<i32> for FaceValues {
    fn from(selector: i32) -> Self {
        Self::from_selector(selector)
    }
}

/// How a freshly built deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// `3 * n` random swap trials over the `n` cards.
    ///
    /// This is the same algorithm [`CardPile::shuffle`](crate::CardPile::shuffle)
    /// uses. It does not produce a uniform permutation.
    #[default]
    RandomSwaps,
    /// A uniform Fisher-Yates shuffle.
    FisherYates,
    /// Leave the deck in canonical order.
    None,
}

/// Configuration for building a standard deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardpile::{CardPile, DeckOptions, FaceValues};
///
/// let options = DeckOptions::default()
///     .with_face_values(FaceValues::EqualFaces)
///     .with_seed(7);
/// let deck = CardPile::from_options(&options);
/// assert_eq!(deck.total_value_of_cards(), 340);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckOptions {
    /// Values for aces and face cards.
    pub face_values: FaceValues,
    /// Seed for the pile's random number generator.
    pub seed: u64,
    /// Shuffle applied right after the deck is built.
    pub shuffle: ShuffleMode,
}

impl DeckOptions {
    /// Sets the face-value convention.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{DeckOptions, FaceValues};
    ///
    /// let options = DeckOptions::default().with_face_values(FaceValues::AceHigh);
    /// assert_eq!(options.face_values, FaceValues::AceHigh);
    /// ```
    #[must_use]
    pub const fn with_face_values(mut self, face_values: FaceValues) -> Self {
        self.face_values = face_values;
        self
    }

    /// Sets the random seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the shuffle applied after building.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{DeckOptions, ShuffleMode};
    ///
    /// let options = DeckOptions::default().with_shuffle(ShuffleMode::FisherYates);
    /// assert_eq!(options.shuffle, ShuffleMode::FisherYates);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }
}
