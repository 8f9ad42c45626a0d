use crate::cards::{Card, Rank};

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (2-14).
    pub fn from_counts(rank_counts: &[u8; 15]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Group any number of cards; used for partial regions too.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }
        Self::from_counts(&counts)
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(rank, _)| *rank)
    }

    /// Returns the highest rank appearing at least three times.
    pub fn trips(&self) -> Option<Rank> {
        self.groups.iter().filter(|(_, count)| *count >= 3).map(|(rank, _)| *rank).max()
    }

    /// Returns all exact pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    /// Highest rank appearing at least twice (a pair or better of that rank).
    pub fn highest_paired(&self) -> Option<Rank> {
        self.groups.iter().filter(|(_, count)| *count >= 2).map(|(rank, _)| *rank).max()
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 1).map(|(rank, _)| *rank).collect()
    }

    /// Returns true if the hand has both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        let has_trips = self.groups.iter().any(|(_, count)| *count == 3);
        let has_pair = self.groups.iter().any(|(_, count)| *count == 2);
        has_trips && has_pair
    }

    /// Largest multiplicity in the hand (1 for no pair).
    pub fn max_count(&self) -> u8 {
        self.groups.first().map_or(0, |(_, count)| *count)
    }

    /// Distinct ranks in group order: the tie-break key for every non-straight category.
    pub fn ordered_ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|(rank, _)| *rank).collect()
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_counts(pairs: &[(u8, u8)]) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for &(rank_val, count) in pairs {
            counts[rank_val as usize] = count;
        }
        counts
    }

    #[test]
    fn quads_and_kicker() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 4), (13, 1)]));
        assert_eq!(groups.quad(), Some(Rank::Ace));
        assert_eq!(groups.trips(), Some(Rank::Ace));
        assert_eq!(groups.pairs(), vec![]);
        assert_eq!(groups.ordered_ranks(), vec![Rank::Ace, Rank::King]);
    }

    #[test]
    fn full_house_orders_trips_first() {
        let groups = RankGroups::from_counts(&make_counts(&[(3, 3), (13, 2)]));
        assert!(groups.has_full_house());
        assert_eq!(groups.ordered_ranks(), vec![Rank::Three, Rank::King]);
    }

    #[test]
    fn two_pair_then_kicker() {
        let groups = RankGroups::from_counts(&make_counts(&[(14, 2), (13, 2), (10, 1)]));
        assert_eq!(groups.pairs(), vec![Rank::Ace, Rank::King]);
        assert_eq!(groups.kickers(), vec![Rank::Ten]);
        assert_eq!(groups.highest_paired(), Some(Rank::Ace));
    }

    #[test]
    fn partial_hand_grouping() {
        let cards: Vec<Card> = ["Qs", "Qh"].iter().map(|s| s.parse().unwrap()).collect();
        let groups = RankGroups::from_cards(&cards);
        assert_eq!(groups.highest_paired(), Some(Rank::Queen));
        assert_eq!(groups.max_count(), 2);
        assert_eq!(groups.distinct(), 1);
    }

    #[test]
    fn empty_hand_has_no_groups() {
        let groups = RankGroups::from_cards(&[]);
        assert_eq!(groups.max_count(), 0);
        assert!(groups.ordered_ranks().is_empty());
        assert_eq!(groups.highest_paired(), None);
    }

    #[test]
    fn singletons_sorted_descending() {
        let groups = RankGroups::from_counts(&make_counts(&[(5, 1), (14, 1), (10, 1)]));
        assert_eq!(groups.ordered_ranks(), vec![Rank::Ace, Rank::Ten, Rank::Five]);
    }
}
