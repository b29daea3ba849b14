use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::Category;
use std::ops::RangeInclusive;

/// Each detector recognises one category from a shared analysis.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in decision order)
// ============================================================================

/// Royal Flush: Ten through Ace, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.straight_info.top_rank == Some(Rank::Ace)
    }
}

/// Straight Flush: five consecutive ranks, all same suit, below Ace high
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush && analysis.straight_info.is_straight
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

/// Matches on the shape of the rank groups: how many groups of two or more,
/// and the size range of the largest.
pub struct GroupDetector {
    category: Category,
    groups: usize,
    largest: RangeInclusive<u8>,
}

impl CategoryDetector for GroupDetector {
    fn category(&self) -> Category {
        self.category
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        let groups = &analysis.rank_groups;
        groups.multiple_count() == self.groups && self.largest.contains(&groups.largest())
    }
}

// Any single group above three cards is four of a kind
pub const FOUR_OF_A_KIND: GroupDetector =
    GroupDetector { category: Category::FourOfAKind, groups: 1, largest: 4..=5 };
pub const FULL_HOUSE: GroupDetector =
    GroupDetector { category: Category::FullHouse, groups: 2, largest: 3..=3 };
pub const THREE_OF_A_KIND: GroupDetector =
    GroupDetector { category: Category::ThreeOfAKind, groups: 1, largest: 3..=3 };
pub const TWO_PAIR: GroupDetector =
    GroupDetector { category: Category::TwoPair, groups: 2, largest: 2..=2 };
pub const ONE_PAIR: GroupDetector =
    GroupDetector { category: Category::OnePair, groups: 1, largest: 2..=2 };

/// High Card: nothing else matched
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in decision order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FlushDetector,
    &StraightDetector,
    &FOUR_OF_A_KIND,
    &FULL_HOUSE,
    &THREE_OF_A_KIND,
    &TWO_PAIR,
    &ONE_PAIR,
    &HighCardDetector,
];

/// First matching detector wins.
pub fn classify(analysis: &HandAnalysis) -> Category {
    DETECTORS
        .iter()
        .find(|d| d.detect(analysis))
        .map_or(Category::HighCard, |d| d.category())
}
