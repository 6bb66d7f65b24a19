//! Shared helpers for integration tests.

use cardpile::{Card, CardPile, Suit};
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a test subscriber once per test binary.
///
/// The filter comes from `TEST_LOG`, then `RUST_LOG`, and defaults to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub fn card(label: &str, value: i32, suit: Suit) -> Card {
    Card::from_suit(label, value, suit)
}

/// Builds a pile holding `cards` in order, top first.
pub fn pile_of(cards: &[Card]) -> CardPile {
    let mut pile = CardPile::new(0);
    for card in cards {
        pile.add_card(card.clone()).unwrap();
    }
    pile
}

/// Builds a pile of `count` cards valued `0..count`.
pub fn numbered_pile(count: usize, seed: u64) -> CardPile {
    let mut pile = CardPile::new(seed);
    for i in 0..count {
        pile.add_card(Card::new("#", i as i32, "Test")).unwrap();
    }
    pile
}

/// Deals every card out of `pile`, top first.
pub fn drain(pile: &mut CardPile) -> Vec<Card> {
    let mut cards = Vec::new();
    while pile.has_any_cards() {
        cards.push(pile.deal_card().unwrap());
    }
    cards
}
