//! Foul detection and the stable rule API consumed by placement strategies.

use crate::cards::Card;
use crate::config::RoyaltyConfig;
use crate::evaluator::{self, HandProfile};
use crate::fantasy;
use crate::game::Player;
use crate::hand::{PlayerHand, Region};
use crate::scoring;
use crate::settlement::{self, Settlement};
use core::cmp::Ordering;

/// A complete hand is busted (fouled) when top beats middle or middle beats bottom.
/// Hands with any region under capacity are still in progress and never busted.
///
/// ```
/// use ofc_rs::hand::PlayerHand;
/// use ofc_rs::rules::is_busted;
///
/// let ok: PlayerHand = "2s 3h 4d / 5c 5s 6h 7d 8c / 9s 9h 9d Tc Js".parse().unwrap();
/// let fouled: PlayerHand = "As Ah Ad / 2c 3s 4h 5d 7c / 6s 8h 9d Tc Js".parse().unwrap();
/// assert!(!is_busted(&ok));
/// assert!(is_busted(&fouled));
/// ```
pub fn is_busted(hand: &PlayerHand) -> bool {
    if !hand.is_complete() {
        return false;
    }
    let top = evaluator::evaluate(hand.top());
    let middle = evaluator::evaluate(hand.middle());
    let bottom = evaluator::evaluate(hand.bottom());
    evaluator::compare_profiles(&top, &middle) == Ordering::Greater
        || evaluator::compare_profiles(&middle, &bottom) == Ordering::Greater
}

/// The rule engine bound to one royalty table.
///
/// Holds no mutable state; clone it freely into simulation workers.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    config: RoyaltyConfig,
}

impl RuleEngine {
    pub fn new(config: RoyaltyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoyaltyConfig {
        &self.config
    }

    pub fn evaluate(&self, cards: &[Card]) -> HandProfile {
        evaluator::evaluate(cards)
    }

    /// Category ordinal on the hand's own scale (3-card: 0..=2, 5-card: 0..=9).
    pub fn evaluate_hand(&self, cards: &[Card]) -> u8 {
        evaluator::evaluate_hand(cards)
    }

    /// 1 if `a` is stronger, -1 if weaker, 0 on a tie.
    pub fn compare_hands(&self, a: &[Card], b: &[Card]) -> i8 {
        evaluator::compare_hands(a, b)
    }

    pub fn calculate_hand_score(&self, cards: &[Card], region: Region) -> i32 {
        scoring::score(&self.config, cards, region)
    }

    pub fn royalty_total(&self, hand: &PlayerHand) -> i32 {
        scoring::royalty_total(&self.config, hand)
    }

    pub fn check_busted(&self, player: &Player) -> bool {
        is_busted(player.hand())
    }

    /// Whether the player is (or has just become) eligible for a Fantasy Land deal.
    ///
    /// Already-active players stay in. Otherwise the player's previous completed hand
    /// decides: a bust disqualifies; off a normal hand a qualifying top row sets the
    /// deal size, off a Fantasy Land hand only the stay condition keeps the player in.
    /// Updates the player's Fantasy Land state.
    pub fn check_fantasy_mode(&self, player: &mut Player) -> bool {
        if player.fantasy().is_active() {
            return true;
        }
        let state = match player.previous_hand() {
            Some(prev) => fantasy::next_state(&self.config.fantasy_mode, player.previous_state(), prev),
            None => fantasy::FantasyState::Normal,
        };
        player.set_fantasy(state);
        state.is_active()
    }

    /// Whether the player's current hand earns another Fantasy Land deal.
    pub fn check_fantasy_stay_condition(&self, player: &Player) -> bool {
        fantasy::meets_stay_condition(&self.config.fantasy_mode, player.hand())
    }

    pub fn settle(&self, a: &PlayerHand, b: &PlayerHand) -> Settlement {
        settlement::settle(&self.config, a, b)
    }
}
