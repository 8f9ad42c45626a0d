use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, HandKind, HandProfile, TopCategory};

/// Strategy pattern: each category detector knows how to detect and build its profile.
pub trait CategoryDetector: Sync {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile;
}

// ============================================================================
// Five-card detectors (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: T-J-Q-K-A, all same suit
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_royal()
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::RoyalFlush), analysis.straight_tiebreak())
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_straight_flush()
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::StraightFlush), analysis.straight_tiebreak())
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::FourOfAKind), analysis.grouped_tiebreak())
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::FullHouse), analysis.grouped_tiebreak())
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::Flush), analysis.grouped_tiebreak())
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::Straight), analysis.straight_tiebreak())
    }
}

/// Three of a Kind: Three cards of the same rank
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() == 3 && !analysis.rank_groups.has_full_house()
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::ThreeOfAKind), analysis.grouped_tiebreak())
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 2
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::TwoPair), analysis.grouped_tiebreak())
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pairs().len() == 1
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::Pair), analysis.grouped_tiebreak())
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true // Always matches as fallback
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Five(Category::HighCard), analysis.grouped_tiebreak())
    }
}

// ============================================================================
// Three-card detectors. Straights and flushes do not count on three cards.
// ============================================================================

pub struct TopTripsDetector;

impl CategoryDetector for TopTripsDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() == 3
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Three(TopCategory::Trips), analysis.grouped_tiebreak())
    }
}

pub struct TopPairDetector;

impl CategoryDetector for TopPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() == 2
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Three(TopCategory::Pair), analysis.grouped_tiebreak())
    }
}

pub struct TopHighCardDetector;

impl CategoryDetector for TopHighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build_profile(&self, analysis: &HandAnalysis) -> HandProfile {
        analysis.build_profile(HandKind::Three(TopCategory::HighCard), analysis.grouped_tiebreak())
    }
}

// ============================================================================
// Static detector lists (in priority order)
// ============================================================================

pub const FIVE_CARD_DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

pub const THREE_CARD_DETECTORS: [&dyn CategoryDetector; 3] =
    [&TopTripsDetector, &TopPairDetector, &TopHighCardDetector];
