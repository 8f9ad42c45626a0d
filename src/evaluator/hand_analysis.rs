use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{HandKind, HandProfile};

/// Pre-computed analysis of a 3- or 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: Vec<Card>,
    pub ranks: Vec<Rank>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        // Sort cards by rank descending, then by suit descending
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks: Vec<Rank> = sorted_cards.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    pub fn len(&self) -> usize {
        self.sorted_cards.len()
    }

    pub fn is_straight_flush(&self) -> bool {
        self.suit_info.is_flush && self.straight_info.is_straight
    }

    /// Exactly T-J-Q-K-A of one suit.
    pub fn is_royal(&self) -> bool {
        self.len() == 5 && self.is_straight_flush() && self.straight_info.top_rank == Some(Rank::Ace)
    }

    /// Tie-break for straights: the single top rank (Five for the wheel).
    pub fn straight_tiebreak(&self) -> Vec<Rank> {
        self.straight_info.top_rank.into_iter().collect()
    }

    /// Tie-break for everything else: distinct ranks by (count desc, rank desc).
    pub fn grouped_tiebreak(&self) -> Vec<Rank> {
        self.rank_groups.ordered_ranks()
    }

    pub fn build_profile(&self, kind: HandKind, tiebreak: Vec<Rank>) -> HandProfile {
        HandProfile { kind, tiebreak }
    }
}
