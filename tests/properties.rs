//! Property tests for pile invariants.

mod common;

use cardpile::{CAPACITY, Card, CardPile, PileError, Suit};
use common::{card, drain, init_logging, numbered_pile, pile_of};
use proptest::prelude::*;

proptest! {
    #[test]
    fn adds_count_up_to_capacity(k in 0..=CAPACITY) {
        let mut pile = numbered_pile(k, 0);
        prop_assert_eq!(pile.num_cards(), k);

        let result = pile.add_card(Card::default());
        if k == CAPACITY {
            let err = result.unwrap_err();
            prop_assert_eq!(err.kind, PileError::CapacityExceeded { held: CAPACITY, incoming: 1 });
            prop_assert_eq!(err.into_card(), Card::default());
            prop_assert_eq!(pile.num_cards(), CAPACITY);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(pile.num_cards(), k + 1);
        }
    }

    #[test]
    fn dealing_everything_preserves_order(values in prop::collection::vec(-50..50i32, 0..=CAPACITY)) {
        let mut pile = CardPile::new(0);
        for &value in &values {
            pile.add_card(Card::new("#", value, "Test")).unwrap();
        }

        let dealt: Vec<i32> = drain(&mut pile).iter().map(Card::value).collect();
        prop_assert_eq!(dealt, values);
        prop_assert!(!pile.has_any_cards());
    }

    #[test]
    fn peek_shows_first_added(values in prop::collection::vec(1..=13i32, 1..=CAPACITY)) {
        let cards: Vec<Card> = values.iter().map(|&v| card("##", v, Suit::Spades)).collect();
        let pile = pile_of(&cards);

        prop_assert_eq!(pile.peek().unwrap(), &cards[0]);
        prop_assert_eq!(pile.peek().unwrap(), &cards[0]);
        prop_assert_eq!(pile.num_cards(), cards.len());
        prop_assert_eq!(pile.total_value_of_cards(), values.iter().sum::<i32>());
    }

    #[test]
    fn merge_respects_capacity(a in 0..=CAPACITY, b in 0..=CAPACITY, seed in any::<u64>()) {
        init_logging();
        let mut left = numbered_pile(a, seed);
        let mut right = numbered_pile(b, seed);

        match left.take_all_cards_from_pile(&mut right) {
            Ok(()) => {
                prop_assert!(a + b <= CAPACITY);
                prop_assert_eq!(left.num_cards(), a + b);
                prop_assert_eq!(right.num_cards(), 0);
            }
            Err(err) => {
                prop_assert!(a + b > CAPACITY);
                prop_assert_eq!(err, PileError::CapacityExceeded { held: a, incoming: b });
                prop_assert_eq!(left.num_cards(), a);
                prop_assert_eq!(right.num_cards(), b);
            }
        }
    }

    #[test]
    fn shuffle_keeps_total_and_count(count in 0..=CAPACITY, seed in any::<u64>()) {
        let mut pile = numbered_pile(count, seed);
        let total = pile.total_value_of_cards();

        pile.shuffle();
        prop_assert_eq!(pile.num_cards(), count);
        prop_assert_eq!(pile.total_value_of_cards(), total);
    }
}
