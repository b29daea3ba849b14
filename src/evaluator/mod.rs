pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;

use crate::cards::{rank_name, Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use log::{debug, trace};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    /// Strength value, 1 (High Card) through 10 (Royal Flush).
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Human-readable category name, e.g. "Full House".
pub fn category_name(category: Category) -> &'static str {
    match category {
        Category::HighCard => "High Card",
        Category::OnePair => "One Pair",
        Category::TwoPair => "Two Pairs",
        Category::ThreeOfAKind => "Three of a Kind",
        Category::Straight => "Straight",
        Category::Flush => "Flush",
        Category::FullHouse => "Full House",
        Category::FourOfAKind => "Four of a Kind",
        Category::StraightFlush => "Straight Flush",
        Category::RoyalFlush => "Royal Flush",
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(category_name(*self))
    }
}

/// Result of classifying five cards. Ordering follows hand strength.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    /// Cards by rank, highest first.
    pub sorted_cards: [Card; 5],
    keys: Vec<Rank>,
    grouped: usize,
}

impl Evaluation {
    /// Ranks compared position by position between hands of one category:
    /// each multi-card group largest first, then the loose cards high to low.
    pub fn comparison_keys(&self) -> &[Rank] {
        &self.keys
    }

    /// Ranks of the groups of two or more cards, largest group first.
    pub fn group_ranks(&self) -> &[Rank] {
        &self.keys[..self.grouped]
    }

    pub fn kickers(&self) -> &[Rank] {
        &self.keys[self.grouped..]
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        explain(self, other).ordering
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

/// Evaluate exactly five cards: sort them, detect the category and derive comparison keys.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{evaluate_five, Category};
///
/// let cards = parse_cards("2H 2D 3C 3S 3H").unwrap();
/// let eval = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(eval.category, Category::FullHouse);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);
    let category = detector::classify(&analysis);
    trace!("classified {:?} as {category}", analysis.ranks);

    // Flush-family hands compare every card, even when the type allows a repeated rank
    let (keys, grouped) = if is_grouped(category) {
        (analysis.rank_groups.comparison_ranks(), analysis.rank_groups.multiple_count())
    } else {
        (analysis.ranks.to_vec(), 0)
    };

    Evaluation { category, sorted_cards: analysis.sorted_cards, keys, grouped }
}

fn is_grouped(category: Category) -> bool {
    matches!(
        category,
        Category::OnePair
            | Category::TwoPair
            | Category::ThreeOfAKind
            | Category::FullHouse
            | Category::FourOfAKind
    )
}

/// What settled a comparison, seen from the left-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tiebreak {
    /// The categories differ.
    Category { left: Category, right: Category },
    /// Same category, decided by the rank of a pair/trips/quads group.
    Group { left: Rank, right: Rank },
    /// Same category and groups, decided by a loose card.
    Kicker { left: Rank, right: Rank },
    /// Nothing differs.
    Tie,
}

impl fmt::Display for Tiebreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tiebreak::Category { left, right } => write!(f, "{left} vs {right}"),
            Tiebreak::Group { left, right } => {
                write!(f, "group of {} vs {}", rank_name(*left), rank_name(*right))
            }
            Tiebreak::Kicker { left, right } => {
                write!(f, "kicker {} vs {}", rank_name(*left), rank_name(*right))
            }
            Tiebreak::Tie => f.write_str("identical ranks"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub ordering: Ordering,
    pub tiebreak: Tiebreak,
}

fn explain(a: &Evaluation, b: &Evaluation) -> Comparison {
    if a.category != b.category {
        return Comparison {
            ordering: a.category.cmp(&b.category),
            tiebreak: Tiebreak::Category { left: a.category, right: b.category },
        };
    }

    // Same category means same group shape, so the key lists line up
    debug_assert_eq!(a.keys.len(), b.keys.len());
    for (i, (ka, kb)) in a.keys.iter().zip(&b.keys).enumerate() {
        if ka != kb {
            let tiebreak = if i < a.grouped {
                debug!("tiebreaker group: {ka} vs {kb}");
                Tiebreak::Group { left: *ka, right: *kb }
            } else {
                debug!("tiebreaker card: {ka} vs {kb}");
                Tiebreak::Kicker { left: *ka, right: *kb }
            };
            return Comparison { ordering: ka.cmp(kb), tiebreak };
        }
    }

    Comparison { ordering: Ordering::Equal, tiebreak: Tiebreak::Tie }
}

/// Total order between two hands: category first, then comparison keys.
///
/// ```
/// use poker_hands::evaluator::compare;
/// use poker_hands::hand::Hand;
/// use std::cmp::Ordering;
///
/// let a = Hand::new(["AH", "2D", "3C", "4S", "6H"]).unwrap();
/// let b = Hand::new(["AH", "2D", "3C", "4S", "5H"]).unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    compare_explained(a, b).ordering
}

/// Like [`compare`], also reporting which rank decided the outcome.
pub fn compare_explained(a: &Hand, b: &Hand) -> Comparison {
    explain(a.evaluation(), b.evaluation())
}
