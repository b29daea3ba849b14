use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::evaluator::{compare, Category};
use poker_hands::hand::Hand;
use proptest::prelude::*;
use std::cmp::Ordering;

fn any_rank() -> impl Strategy<Value = Rank> {
    (2u8..=14u8).prop_map(|v| Rank::from_value(v).expect("rank in range"))
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Hearts), Just(Suit::Diamonds), Just(Suit::Clubs), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop::array::uniform5(any_card()).prop_map(Hand::from_array)
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let ord = x.cmp(y);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            vals[4] - vals[0] != 4
        })
        .prop_map(|set| set.into_iter().rev().filter_map(Rank::from_value).collect())
}

proptest! {
    #[test]
    fn compare_is_reflexive(a in any_hand()) {
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in any_hand(), b in any_hand()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn compare_is_transitive(a in any_hand(), b in any_hand(), c in any_hand()) {
        let ab = compare(&a, &b);
        let bc = compare(&b, &c);
        if ab == bc {
            prop_assert_eq!(compare(&a, &c), ab);
        }
        if ab == Ordering::Equal {
            prop_assert_eq!(compare(&a, &c), bc);
        }
    }

    #[test]
    fn higher_category_always_wins(a in any_hand(), b in any_hand()) {
        if a.ranking() != b.ranking() {
            prop_assert_eq!(compare(&a, &b), a.ranking().cmp(&b.ranking()));
        }
    }

    #[test]
    fn card_order_is_irrelevant(cards in prop::array::uniform5(any_card())) {
        let mut reversed = cards;
        reversed.reverse();
        let a = Hand::from_array(cards);
        let b = Hand::from_array(reversed);
        prop_assert_eq!(a.ranking(), b.ranking());
        prop_assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn cards_stay_sorted(a in any_hand()) {
        let ranks: Vec<Rank> = a.cards().iter().map(|c| c.rank()).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let hand_a = Hand::from_cards(&a.iter().map(|&r| Card::new(r, Suit::Hearts)).collect::<Vec<_>>()).unwrap();
        let hand_b = Hand::from_cards(&b.iter().map(|&r| Card::new(r, Suit::Spades)).collect::<Vec<_>>()).unwrap();
        prop_assert_eq!(hand_a.ranking(), Category::Flush);
        prop_assert_eq!(hand_b.ranking(), Category::Flush);
        prop_assert_eq!(compare(&hand_a, &hand_b), compare_rank_lists(&a, &b));
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 7u8..=13u8, top_lo in 6u8..=12u8) {
        prop_assume!(top_hi > top_lo);
        let run = |top: u8| {
            let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
            let cards: Vec<Card> = (0..5u8)
                .map(|i| Card::new(Rank::from_value(top - i).expect("rank in range"), suits[i as usize]))
                .collect();
            Hand::from_cards(&cards).expect("five cards")
        };
        let hi = run(top_hi);
        let lo = run(top_lo);
        prop_assert_eq!(hi.ranking(), Category::Straight);
        prop_assert_eq!(lo.ranking(), Category::Straight);
        prop_assert!(hi > lo);
    }
}
