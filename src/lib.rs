//! A bounded pile of playing cards with optional `no_std` support.
//!
//! The crate provides a [`CardPile`] type that holds up to 52 [`Card`]s in
//! order. Cards are dealt from the top and added to the bottom, piles can be
//! merged and shuffled, and simple aggregates such as the total value are
//! available.
//!
//! # Example
//!
//! ```
//! use cardpile::{CardPile, FaceValues};
//!
//! let mut deck = CardPile::standard_deck(FaceValues::AceLow, 42);
//! assert_eq!(deck.num_cards(), 52);
//! assert_eq!(deck.total_value_of_cards(), 364);
//!
//! let mut hand = CardPile::new(7);
//! hand.add_card(deck.deal_card()?)?;
//! assert_eq!(deck.num_cards(), 51);
//! assert_eq!(hand.num_cards(), 1);
//! # Ok::<(), cardpile::PileError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod options;
pub mod pile;

// Re-export main types
pub use card::{Card, Suit};
pub use error::{AddCardError, PileError};
pub use options::{DeckOptions, FaceValues, ShuffleMode};
pub use pile::{CAPACITY, CardPile};
