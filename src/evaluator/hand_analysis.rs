use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub is_flush: bool,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Rank descending; suit only keeps the output stable
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(a.suit().cmp(&b.suit())));

        let ranks = sorted_cards.map(Card::rank);
        let first_suit = sorted_cards[0].suit();
        let is_flush = sorted_cards.iter().all(|c| c.suit() == first_suit);

        Self {
            sorted_cards,
            ranks,
            rank_groups: RankGroups::from_ranks(&ranks),
            is_flush,
            straight_info: StraightInfo::detect(&ranks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_royal_flush_analysis() {
        let cards = [
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.is_flush);
        assert!(analysis.straight_info.is_straight);
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Ace));
        assert_eq!(analysis.rank_groups.multiple_count(), 0);
    }

    #[test]
    fn test_mixed_suits_are_not_flush() {
        let cards = [
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);
        assert!(!analysis.is_flush);
        assert!(!analysis.straight_info.is_straight);
    }

    #[test]
    fn test_cards_sorted_descending() {
        let cards = [
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::King, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.ranks, [Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
        assert_eq!(analysis.sorted_cards[0], Card::new(Rank::Ace, Suit::Hearts));
    }
}
