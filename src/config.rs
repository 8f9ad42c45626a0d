//! Royalty, region-capacity and Fantasy Land tables.
//!
//! A [`RoyaltyConfig`] is built once (usually [`RoyaltyConfig::default`] or
//! [`RoyaltyConfig::from_path`]) and passed by reference into every scoring and
//! Fantasy Land call. There is no global instance.

use crate::cards::Rank;
use crate::evaluator::{Category, TopCategory};
use crate::hand::Region;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{region} capacity must be {expected}, got {got}")]
    Capacity { region: Region, expected: usize, got: usize },
    #[error("fantasy land deal of {0} cards cannot fill 13 slots from one deck")]
    FantasyDeal(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCapacities {
    pub top: usize,
    pub middle: usize,
    pub bottom: usize,
}

impl Default for RegionCapacities {
    fn default() -> Self {
        Self {
            top: Region::Top.capacity(),
            middle: Region::Middle.capacity(),
            bottom: Region::Bottom.capacity(),
        }
    }
}

impl RegionCapacities {
    pub fn get(&self, region: Region) -> usize {
        match region {
            Region::Top => self.top,
            Region::Middle => self.middle,
            Region::Bottom => self.bottom,
        }
    }
}

/// Royalty points per five-card category for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryScores {
    pub royal_flush: i32,
    pub straight_flush: i32,
    pub four_of_a_kind: i32,
    pub full_house: i32,
    pub flush: i32,
    pub straight: i32,
    pub three_of_a_kind: i32,
    pub two_pair: i32,
    pub one_pair: i32,
    pub high_card: i32,
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::MIDDLE
    }
}

impl CategoryScores {
    pub const MIDDLE: CategoryScores = CategoryScores {
        royal_flush: 50,
        straight_flush: 30,
        four_of_a_kind: 20,
        full_house: 12,
        flush: 8,
        straight: 4,
        three_of_a_kind: 2,
        two_pair: 0,
        one_pair: 0,
        high_card: 0,
    };

    pub const BOTTOM: CategoryScores = CategoryScores {
        royal_flush: 25,
        straight_flush: 15,
        four_of_a_kind: 10,
        full_house: 6,
        flush: 4,
        straight: 2,
        three_of_a_kind: 0,
        two_pair: 0,
        one_pair: 0,
        high_card: 0,
    };

    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::RoyalFlush => self.royal_flush,
            Category::StraightFlush => self.straight_flush,
            Category::FourOfAKind => self.four_of_a_kind,
            Category::FullHouse => self.full_house,
            Category::Flush => self.flush,
            Category::Straight => self.straight,
            Category::ThreeOfAKind => self.three_of_a_kind,
            Category::TwoPair => self.two_pair,
            Category::Pair => self.one_pair,
            Category::HighCard => self.high_card,
        }
    }
}

/// Fantasy Land entry and stay thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FantasyConfig {
    /// Cards dealt when the top row held any trips.
    pub trips_cards: u8,
    /// Cards dealt per qualifying top pair rank (rank value → cards). Lower pairs don't qualify.
    pub pair_cards: BTreeMap<u8, u8>,
    /// Cards dealt for each consecutive Fantasy Land hand after a successful stay.
    pub continue_cards: u8,
    pub stay_bottom_min: Category,
    pub stay_top_min: TopCategory,
}

impl Default for FantasyConfig {
    fn default() -> Self {
        Self {
            trips_cards: 17,
            pair_cards: BTreeMap::from([
                (Rank::Queen.value(), 14),
                (Rank::King.value(), 15),
                (Rank::Ace.value(), 16),
            ]),
            continue_cards: 14,
            stay_bottom_min: Category::FourOfAKind,
            stay_top_min: TopCategory::Trips,
        }
    }
}

impl FantasyConfig {
    /// Deal size earned by a top pair of `rank`, if any.
    pub fn cards_for_pair(&self, rank: Rank) -> Option<u8> {
        self.pair_cards.get(&rank.value()).copied()
    }
}

/// The full rule table. Immutable once built.
///
/// ```
/// use ofc_rs::cards::Rank;
/// use ofc_rs::config::RoyaltyConfig;
///
/// let cfg = RoyaltyConfig::default();
/// assert_eq!(cfg.top_pair_score(Rank::Queen), 7);
/// assert_eq!(cfg.top_trips_score(Rank::Ace), 22);
/// assert_eq!(cfg.top_pair_score(Rank::Five), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoyaltyConfig {
    pub region_lengths: RegionCapacities,
    /// Top pair rank value → points.
    pub top_pair_scores: BTreeMap<u8, i32>,
    /// Top trips rank value → points.
    pub top_trips_scores: BTreeMap<u8, i32>,
    pub middle_hand_scores: CategoryScores,
    pub bottom_hand_scores: CategoryScores,
    pub fantasy_mode: FantasyConfig,
}

impl Default for RoyaltyConfig {
    fn default() -> Self {
        // 66 pays 1 up to AA paying 9; 222 pays 10 up to AAA paying 22
        let top_pair_scores = (6u8..=14).map(|r| (r, i32::from(r) - 5)).collect();
        let top_trips_scores = (2u8..=14).map(|r| (r, i32::from(r) + 8)).collect();
        Self {
            region_lengths: RegionCapacities::default(),
            top_pair_scores,
            top_trips_scores,
            middle_hand_scores: CategoryScores::MIDDLE,
            bottom_hand_scores: CategoryScores::BOTTOM,
            fantasy_mode: FantasyConfig::default(),
        }
    }
}

impl RoyaltyConfig {
    /// Parse and validate a JSON table. Missing keys fall back to the defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: RoyaltyConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for region in Region::ALL {
            let got = self.region_lengths.get(region);
            if got != region.capacity() {
                return Err(ConfigError::Capacity { region, expected: region.capacity(), got });
            }
        }

        let fl = &self.fantasy_mode;
        let deals = std::iter::once(fl.trips_cards)
            .chain(std::iter::once(fl.continue_cards))
            .chain(fl.pair_cards.values().copied());
        for n in deals {
            // 13 placed plus at least the other player's 17 must fit in 52
            if !(13..=35).contains(&n) {
                return Err(ConfigError::FantasyDeal(n));
            }
        }

        let rank_keys = self
            .top_pair_scores
            .keys()
            .chain(self.top_trips_scores.keys())
            .chain(fl.pair_cards.keys());
        for key in rank_keys {
            if Rank::from_value(*key).is_none() {
                warn!("ignoring royalty entry for unknown rank value {key}");
            }
        }
        Ok(())
    }

    pub fn top_pair_score(&self, rank: Rank) -> i32 {
        self.top_pair_scores.get(&rank.value()).copied().unwrap_or(0)
    }

    pub fn top_trips_score(&self, rank: Rank) -> i32 {
        self.top_trips_scores.get(&rank.value()).copied().unwrap_or(0)
    }

    /// Five-card royalty table for `region`; the top row has none.
    pub fn category_scores(&self, region: Region) -> Option<&CategoryScores> {
        match region {
            Region::Top => None,
            Region::Middle => Some(&self.middle_hand_scores),
            Region::Bottom => Some(&self.bottom_hand_scores),
        }
    }
}
