//! Error types for pile operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when moving cards in or out of a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile cannot hold the incoming cards.
    #[error("cannot add {incoming} card(s) to a pile holding {held}; capacity is 52")]
    CapacityExceeded {
        /// Cards already in the receiving pile.
        held: usize,
        /// Cards that were about to be added.
        incoming: usize,
    },
    /// The pile has no cards.
    #[error("pile has no cards")]
    EmptyPile,
}

/// A card that could not be added to a pile.
///
/// The rejected card is handed back so the caller keeps ownership of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct AddCardError {
    /// Why the card was rejected.
    pub kind: PileError,
    /// The card that was not added.
    pub card: Card,
}

impl AddCardError {
    /// Returns the rejected card.
    #[must_use]
    pub fn into_card(self) -> Card {
        self.card
    }
}

impl From<AddCardError> for PileError {
    fn from(err: AddCardError) -> Self {
        err.kind
    }
}
