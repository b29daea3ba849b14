use crate::cards::Rank;

/// Whether five ranks form a run, and the rank at its top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// A straight is five distinct ranks spanning exactly four steps.
    /// Aces only play high, so A-2-3-4-5 is not a run.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut sorted = *ranks;
        sorted.sort_by(|a, b| b.cmp(a));

        let distinct = sorted.windows(2).all(|w| w[0] != w[1]);
        let span = sorted[0].value() - sorted[4].value();

        if distinct && span == 4 {
            StraightInfo { is_straight: true, top_rank: Some(sorted[0]) }
        } else {
            StraightInfo { is_straight: false, top_rank: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_lowest_straight_tops_at_six() {
        let info = StraightInfo::detect(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn test_ace_does_not_wrap() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(!info.is_straight);
    }

    #[test]
    fn test_gap_breaks_run() {
        let info = StraightInfo::detect(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Seven]);
        assert!(!info.is_straight);
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn test_repeated_rank_is_never_straight() {
        // span is 4 but only four distinct ranks
        let info = StraightInfo::detect(&[Rank::Six, Rank::Six, Rank::Four, Rank::Three, Rank::Two]);
        assert!(!info.is_straight);
    }

    #[test]
    fn test_unsorted_input() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }
}
