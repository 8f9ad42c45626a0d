//! Hand classification and ordering for 3-card (top) and 5-card (middle/bottom) hands.
//!
//! Every rule in the crate that needs a hand's strength goes through [`evaluate`] or
//! [`compare`]; nothing else re-derives categories.

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

pub use rank_groups::RankGroups;

/// Five-card hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
        Category::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Three-card hand category. Its own scale: `Trips` here is ordinal 2,
/// which says nothing about a five-card `TwoPair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TopCategory {
    HighCard = 0,
    Pair = 1,
    Trips = 2,
}

impl TopCategory {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Which scale a profile was graded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    Three(TopCategory),
    Five(Category),
    /// Any length other than 3 or 5: the lowest possible profile.
    Malformed,
}

/// Evaluator output: a category plus the rank sequence that breaks ties inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandProfile {
    pub kind: HandKind,
    pub tiebreak: Vec<Rank>,
}

impl HandProfile {
    pub const fn lowest() -> Self {
        HandProfile { kind: HandKind::Malformed, tiebreak: Vec::new() }
    }

    /// Category ordinal on this profile's own scale (0 for malformed input).
    pub fn category(&self) -> u8 {
        match self.kind {
            HandKind::Three(c) => c.ordinal(),
            HandKind::Five(c) => c.ordinal(),
            HandKind::Malformed => 0,
        }
    }

    pub fn five_card(&self) -> Option<Category> {
        match self.kind {
            HandKind::Five(c) => Some(c),
            _ => None,
        }
    }

    pub fn three_card(&self) -> Option<TopCategory> {
        match self.kind {
            HandKind::Three(c) => Some(c),
            _ => None,
        }
    }

    fn same_scale(&self, other: &HandProfile) -> bool {
        matches!(
            (self.kind, other.kind),
            (HandKind::Three(_), HandKind::Three(_))
                | (HandKind::Five(_), HandKind::Five(_))
                | (HandKind::Malformed, HandKind::Malformed)
        )
    }
}

/// Evaluate a 3- or 5-card hand. Other lengths yield [`HandProfile::lowest`].
///
/// ```
/// use ofc_rs::cards::parse_cards;
/// use ofc_rs::cards::Rank;
/// use ofc_rs::evaluator::{evaluate, Category};
///
/// let wheel = parse_cards("As 2h 3d 4c 5s").unwrap();
/// let p = evaluate(&wheel);
/// assert_eq!(p.five_card(), Some(Category::Straight));
/// assert_eq!(p.tiebreak, vec![Rank::Five]);
/// ```
pub fn evaluate(cards: &[Card]) -> HandProfile {
    use detector::{CategoryDetector, FIVE_CARD_DETECTORS, THREE_CARD_DETECTORS};
    use hand_analysis::HandAnalysis;

    let detectors: &[&dyn CategoryDetector] = match cards.len() {
        3 => &THREE_CARD_DETECTORS,
        5 => &FIVE_CARD_DETECTORS,
        _ => return HandProfile::lowest(),
    };

    let analysis = HandAnalysis::new(cards);
    detectors
        .iter()
        .find(|d| d.detect(&analysis))
        .map(|d| d.build_profile(&analysis))
        .unwrap_or_else(HandProfile::lowest)
}

/// Category ordinal only, on the hand's own scale.
pub fn evaluate_hand(cards: &[Card]) -> u8 {
    evaluate(cards).category()
}

/// Order two already-evaluated profiles.
///
/// Profiles on the same scale compare by category, then tie-break rank by rank, then by
/// tie-break length. Profiles on different scales compare by tie-break only; category
/// ordinals from the 3-card and 5-card scales are never compared to each other.
pub fn compare_profiles(a: &HandProfile, b: &HandProfile) -> Ordering {
    if a.same_scale(b) {
        a.category().cmp(&b.category()).then_with(|| a.tiebreak.cmp(&b.tiebreak))
    } else {
        a.tiebreak.cmp(&b.tiebreak)
    }
}

/// Compare two hands of the same or different lengths.
///
/// ```
/// use ofc_rs::cards::parse_cards;
/// use ofc_rs::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let threes = parse_cards("3s 3h 2d").unwrap();
/// let deuces = parse_cards("2s 2h 3d").unwrap();
/// assert_eq!(compare(&threes, &deuces), Ordering::Greater);
/// ```
pub fn compare(a: &[Card], b: &[Card]) -> Ordering {
    compare_profiles(&evaluate(a), &evaluate(b))
}

/// `compare` mapped onto -1 / 0 / 1.
pub fn compare_hands(a: &[Card], b: &[Card]) -> i8 {
    match compare(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn p(s: &str) -> HandProfile {
        evaluate(&parse_cards(s).unwrap())
    }

    #[test]
    fn malformed_lengths_are_lowest() {
        assert_eq!(p("As Ks"), HandProfile::lowest());
        assert_eq!(p("As Ks Qs Js"), HandProfile::lowest());
        assert_eq!(evaluate(&[]), HandProfile::lowest());
        assert_eq!(p("As Ks Qs Js Ts 9s").category(), 0);
    }

    #[test]
    fn five_card_categories() {
        let cases = [
            ("Ts Js Qs Ks As", Category::RoyalFlush),
            ("2s 3s 4s 5s 6s", Category::StraightFlush),
            ("2s 2h 2d 2c 5s", Category::FourOfAKind),
            ("2s 2h 2d 3c 3s", Category::FullHouse),
            ("2s 3s 4s 5s 7s", Category::Flush),
            ("2s 3h 4d 5c 6s", Category::Straight),
            ("2s 2h 2d 4c 5s", Category::ThreeOfAKind),
            ("2s 2h 3d 3c 5s", Category::TwoPair),
            ("2s 2h 3d 4c 5s", Category::Pair),
            ("2s 3h 4d 5c 7s", Category::HighCard),
        ];
        for (hand, cat) in cases {
            assert_eq!(p(hand).five_card(), Some(cat), "{hand}");
            assert_eq!(p(hand).category(), cat.ordinal());
        }
    }

    #[test]
    fn three_card_categories() {
        assert_eq!(p("2s 3h 4d").three_card(), Some(TopCategory::HighCard));
        assert_eq!(p("2s 2h 3d").three_card(), Some(TopCategory::Pair));
        assert_eq!(p("2s 2h 2d").three_card(), Some(TopCategory::Trips));
        // A-2-3 suited is still just ace high on top
        assert_eq!(evaluate_hand(&parse_cards("As 2s 3s").unwrap()), 0);
    }

    #[test]
    fn tiebreak_groups_by_count_then_rank() {
        assert_eq!(p("9s 9h 4d 4c Ks").tiebreak, vec![Rank::Nine, Rank::Four, Rank::King]);
        assert_eq!(p("5s 5h 5d Ac Ks").tiebreak, vec![Rank::Five, Rank::Ace, Rank::King]);
        assert_eq!(p("Ks Kh 2d").tiebreak, vec![Rank::King, Rank::Two]);
    }

    #[test]
    fn same_length_compares_category_first() {
        let trips = parse_cards("2s 2h 2d 4c 5s").unwrap();
        let two_pair = parse_cards("As Ah Kd Kc Qs").unwrap();
        assert_eq!(compare(&trips, &two_pair), Ordering::Greater);
        assert_eq!(compare_hands(&two_pair, &trips), -1);
    }

    #[test]
    fn same_category_compares_kickers() {
        let a = parse_cards("As Ah Kd Qc Js").unwrap();
        let b = parse_cards("Ad Ac Kh Qs Ts").unwrap();
        assert_eq!(compare(&a, &b), Ordering::Greater);
        let c = parse_cards("Ad Ac Kh Qs Jh").unwrap();
        assert_eq!(compare(&a, &c), Ordering::Equal);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = parse_cards("As 2h 3d 4c 5s").unwrap();
        let six = parse_cards("2s 3h 4d 5c 6s").unwrap();
        assert_eq!(compare(&wheel, &six), Ordering::Less);
    }

    #[test]
    fn different_lengths_use_tiebreak_only() {
        // top trips deuces vs middle pair of threes: [2] vs [3, 6, 5, 4]
        let top = parse_cards("2s 2h 2d").unwrap();
        let middle = parse_cards("3s 3h 4d 5c 6s").unwrap();
        assert_eq!(compare(&top, &middle), Ordering::Less);

        // equal shared prefix: the longer sequence wins
        let top = parse_cards("As Ah Kd").unwrap();
        let middle = parse_cards("Ac Ad Kh Qs Js").unwrap();
        assert_eq!(compare(&top, &middle), Ordering::Less);
        assert_eq!(compare(&middle, &top), Ordering::Greater);
    }
}
