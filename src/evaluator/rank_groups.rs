use crate::cards::Rank;

/// How many cards of a hand share one rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGroup {
    pub rank: Rank,
    pub count: u8,
}

/// Ranks of a hand grouped by frequency, sorted by (count desc, rank desc).
///
/// Example: KK-7-7-A groups as [(King, 2), (Seven, 2), (Ace, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<CardGroup>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<CardGroup> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| counts[r.value() as usize] > 0)
            .map(|rank| CardGroup { rank, count: counts[rank.value() as usize] })
            .collect();

        // Equal counts fall back to the higher rank so two-pair order is deterministic
        groups.sort_by(|a, b| b.count.cmp(&a.count).then(b.rank.cmp(&a.rank)));

        Self { groups }
    }

    /// Groups of two or more cards, largest first.
    pub fn multiples(&self) -> impl Iterator<Item = &CardGroup> {
        self.groups.iter().filter(|g| g.count >= 2)
    }

    pub fn multiple_count(&self) -> usize {
        self.multiples().count()
    }

    /// Size of the largest group; 0 when there are no ranks at all.
    pub fn largest(&self) -> u8 {
        self.groups.first().map_or(0, |g| g.count)
    }

    /// Singleton ranks, in descending order.
    #[cfg(test)]
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|g| g.count == 1).map(|g| g.rank).collect()
    }

    /// Ranks in comparison order: multiples first, then kickers.
    /// Five of one rank plays as four of a kind with a kicker of that rank.
    pub fn comparison_ranks(&self) -> Vec<Rank> {
        let mut ranks: Vec<Rank> = self.multiples().map(|g| g.rank).collect();
        ranks.extend(self.groups.iter().filter(|g| g.count == 1 || g.count > 4).map(|g| g.rank));
        ranks
    }
}
