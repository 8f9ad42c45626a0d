use crate::cards::Card;
use crate::config::RoyaltyConfig;
use crate::evaluator::{evaluate, RankGroups};
use crate::hand::{PlayerHand, Region};

/// Royalty points for `cards` placed in `region`.
///
/// The top row pays on its highest pair (or trips, which supersede) and needs at least
/// two cards. Middle and bottom pay by five-card category and need exactly five.
///
/// ```
/// use ofc_rs::cards::parse_cards;
/// use ofc_rs::config::RoyaltyConfig;
/// use ofc_rs::hand::Region;
/// use ofc_rs::scoring::score;
///
/// let cfg = RoyaltyConfig::default();
/// assert_eq!(score(&cfg, &parse_cards("Qs Qh 3d").unwrap(), Region::Top), 7);
/// assert_eq!(score(&cfg, &parse_cards("2s 3s 4s 5s 7s").unwrap(), Region::Middle), 8);
/// ```
pub fn score(config: &RoyaltyConfig, cards: &[Card], region: Region) -> i32 {
    match config.category_scores(region) {
        None => score_top(config, cards),
        Some(table) => {
            if cards.len() != region.capacity() {
                return 0;
            }
            evaluate(cards).five_card().map_or(0, |category| table.get(category))
        }
    }
}

fn score_top(config: &RoyaltyConfig, cards: &[Card]) -> i32 {
    if cards.len() < 2 {
        return 0;
    }
    let groups = RankGroups::from_cards(cards);
    if let Some(trips) = groups.trips() {
        return config.top_trips_score(trips);
    }
    groups.highest_paired().map_or(0, |pair| config.top_pair_score(pair))
}

/// Royalties for each region in record order (top, middle, bottom).
pub fn region_royalties(config: &RoyaltyConfig, hand: &PlayerHand) -> [i32; 3] {
    Region::ALL.map(|r| score(config, hand.region(r).as_slice(), r))
}

/// Sum of the three region royalties.
pub fn royalty_total(config: &RoyaltyConfig, hand: &PlayerHand) -> i32 {
    region_royalties(config, hand).iter().sum()
}
