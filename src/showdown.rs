use crate::evaluator::compare;
use crate::hand::Hand;
use std::cmp::Ordering;

/// Outcome of picking the best hand out of several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showdown {
    /// One hand beats every other; `index` points into the input slice.
    Winner { index: usize },
    /// Two or more hands share the top spot.
    Tie { indices: Vec<usize> },
}

impl Showdown {
    /// The winning hand, or `None` on a tie.
    pub fn winner<'a>(&self, hands: &'a [Hand]) -> Option<&'a Hand> {
        match self {
            Showdown::Winner { index } => hands.get(*index),
            Showdown::Tie { .. } => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Showdown::Tie { .. })
    }
}

/// Find the strongest hand. Returns `None` for an empty slice.
///
/// ```
/// use poker_hands::hand::Hand;
/// use poker_hands::showdown::{showdown, Showdown};
///
/// let hands = [
///     Hand::new(["2H", "2D", "3C", "3S", "4H"]).unwrap(),
///     Hand::new(["9H", "9D", "9C", "3S", "4H"]).unwrap(),
/// ];
/// assert_eq!(showdown(&hands), Some(Showdown::Winner { index: 1 }));
/// ```
pub fn showdown(hands: &[Hand]) -> Option<Showdown> {
    let mut best: Vec<usize> = Vec::new();

    for (i, hand) in hands.iter().enumerate() {
        match best.first().map(|&b| compare(hand, &hands[b])) {
            None | Some(Ordering::Greater) => {
                best.clear();
                best.push(i);
            }
            Some(Ordering::Equal) => best.push(i),
            Some(Ordering::Less) => {}
        }
    }

    match best.len() {
        0 => None,
        1 => Some(Showdown::Winner { index: best[0] }),
        _ => Some(Showdown::Tie { indices: best }),
    }
}

/// The single strongest hand, or `None` when the slice is empty or the top is shared.
pub fn best_hand(hands: &[Hand]) -> Option<&Hand> {
    showdown(hands)?.winner(hands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(ids: [&str; 5]) -> Hand {
        Hand::new(ids).expect("valid hand")
    }

    #[test]
    fn empty_has_no_outcome() {
        assert_eq!(showdown(&[]), None);
        assert!(best_hand(&[]).is_none());
    }

    #[test]
    fn single_hand_wins() {
        let hands = [hand(["2H", "3D", "4C", "5S", "7H"])];
        assert_eq!(showdown(&hands), Some(Showdown::Winner { index: 0 }));
    }

    #[test]
    fn strongest_of_many() {
        let hands = [
            hand(["2H", "3D", "4C", "5S", "7H"]),
            hand(["2H", "2D", "2C", "2S", "5H"]),
            hand(["2H", "2D", "3C", "3S", "3H"]),
        ];
        let outcome = showdown(&hands).unwrap();
        assert_eq!(outcome, Showdown::Winner { index: 1 });
        assert_eq!(outcome.winner(&hands).unwrap().ranking(), hands[1].ranking());
    }

    #[test]
    fn identical_hands_tie() {
        let hands = [hand(["AH", "KD", "9C", "5S", "3H"]), hand(["AH", "KD", "9C", "5S", "3H"])];
        let outcome = showdown(&hands).unwrap();
        assert!(outcome.is_tie());
        assert_eq!(outcome, Showdown::Tie { indices: vec![0, 1] });
        assert!(best_hand(&hands).is_none());
    }

    #[test]
    fn tie_only_counts_the_top() {
        let hands = [
            hand(["TS", "JS", "QS", "KS", "AS"]),
            hand(["2H", "3D", "4C", "5S", "7H"]),
            hand(["TH", "JH", "QH", "KH", "AH"]),
        ];
        assert_eq!(showdown(&hands), Some(Showdown::Tie { indices: vec![0, 2] }));
    }

    #[test]
    fn later_stronger_hand_resets_ties() {
        let hands = [
            hand(["2H", "3D", "4C", "5S", "7H"]),
            hand(["2C", "3S", "4H", "5D", "7C"]),
            hand(["AH", "AD", "4C", "5S", "7H"]),
        ];
        assert_eq!(showdown(&hands), Some(Showdown::Winner { index: 2 }));
    }
}
