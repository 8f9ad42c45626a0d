//! Fantasy Land qualification and continuation.
//!
//! A player enters Fantasy Land off a completed, non-busted hand whose top row held
//! trips or a high enough pair. While in Fantasy Land they receive one large deal at
//! the start of the hand instead of five rounds. Meeting the stay condition earns
//! another Fantasy Land hand; anything else returns them to normal play.

use crate::cards::Card;
use crate::config::FantasyConfig;
use crate::evaluator::{evaluate, RankGroups};
use crate::hand::{PlayerHand, Region};
use crate::rules::is_busted;
use log::info;

/// Per-player Fantasy Land state across hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum FantasyState {
    #[default]
    Normal,
    /// Earned on the last hand; the next hand is dealt `cards` at once.
    Qualified { cards: u8 },
    /// Currently playing a Fantasy Land hand dealt `cards` cards.
    Active { cards: u8 },
}

impl FantasyState {
    /// True for both a pending and an in-progress Fantasy Land hand.
    pub fn is_active(self) -> bool {
        !matches!(self, FantasyState::Normal)
    }

    /// Size of the single Fantasy Land deal, if any.
    pub fn cards(self) -> Option<u8> {
        match self {
            FantasyState::Normal => None,
            FantasyState::Qualified { cards } | FantasyState::Active { cards } => Some(cards),
        }
    }

    /// Called as a new hand starts: a pending qualification becomes the live deal.
    pub fn begin_hand(self) -> Self {
        match self {
            FantasyState::Qualified { cards } => FantasyState::Active { cards },
            other => other,
        }
    }
}

/// Deal size earned by a top row, ignoring whether the hand busted.
///
/// Trips of any rank qualify; pairs qualify per [`FantasyConfig::pair_cards`].
/// Needs a full top row.
///
/// ```
/// use ofc_rs::cards::parse_cards;
/// use ofc_rs::config::FantasyConfig;
/// use ofc_rs::fantasy::entry_cards;
///
/// let cfg = FantasyConfig::default();
/// assert_eq!(entry_cards(&cfg, &parse_cards("Qs Qh 2d").unwrap()), Some(14));
/// assert_eq!(entry_cards(&cfg, &parse_cards("Js Jh 2d").unwrap()), None);
/// assert_eq!(entry_cards(&cfg, &parse_cards("2s 2h 2d").unwrap()), Some(17));
/// ```
pub fn entry_cards(config: &FantasyConfig, top: &[Card]) -> Option<u8> {
    if top.len() != Region::Top.capacity() {
        return None;
    }
    let groups = RankGroups::from_cards(top);
    if groups.trips().is_some() {
        return Some(config.trips_cards);
    }
    groups.highest_paired().and_then(|rank| config.cards_for_pair(rank))
}

/// State earned by a completed hand played from normal (non-Fantasy) play.
pub fn entry_state(config: &FantasyConfig, hand: &PlayerHand) -> FantasyState {
    if !hand.is_complete() || is_busted(hand) {
        return FantasyState::Normal;
    }
    match entry_cards(config, hand.top()) {
        Some(cards) => FantasyState::Qualified { cards },
        None => FantasyState::Normal,
    }
}

/// Bottom row at least `stay_bottom_min`, or top row at least `stay_top_min`.
pub fn meets_stay_condition(config: &FantasyConfig, hand: &PlayerHand) -> bool {
    let bottom = evaluate(hand.bottom()).five_card().is_some_and(|c| c >= config.stay_bottom_min);
    let top = evaluate(hand.top()).three_card().is_some_and(|c| c >= config.stay_top_min);
    bottom || top
}

/// The state a player carries into the next hand after completing `hand` in `current`.
///
/// A Fantasy Land hand that busts always returns to normal play, even if a row
/// would otherwise meet the stay condition.
pub fn next_state(config: &FantasyConfig, current: FantasyState, hand: &PlayerHand) -> FantasyState {
    let next = match current {
        FantasyState::Active { .. } => {
            if hand.is_complete() && !is_busted(hand) && meets_stay_condition(config, hand) {
                FantasyState::Qualified { cards: config.continue_cards }
            } else {
                FantasyState::Normal
            }
        }
        FantasyState::Normal | FantasyState::Qualified { .. } => entry_state(config, hand),
    };
    match (current, next) {
        (FantasyState::Active { .. }, FantasyState::Qualified { cards }) => {
            info!("fantasy land continues with {cards} cards");
        }
        (FantasyState::Active { .. }, FantasyState::Normal) => info!("fantasy land ends"),
        (_, FantasyState::Qualified { cards }) => info!("fantasy land earned: {cards} cards next hand"),
        _ => {}
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> PlayerHand {
        s.parse().expect("valid hand")
    }

    fn cfg() -> FantasyConfig {
        FantasyConfig::default()
    }

    #[test]
    fn pair_entry_sizes() {
        let qq = hand("Qs Qh 2d / Kc Ks 6h 7d 8c / As Ah Ad Tc Js");
        let kk = hand("Ks Kh 2d / Ac As 6h 7d 8c / 9s 9h 9d Tc Js");
        let aa = hand("As Ah 2d / Ac Ad 3h 3s 8c / 9s 9h 9d 9c Js");
        assert_eq!(entry_state(&cfg(), &qq), FantasyState::Qualified { cards: 14 });
        assert_eq!(entry_state(&cfg(), &kk), FantasyState::Qualified { cards: 15 });
        assert_eq!(entry_state(&cfg(), &aa), FantasyState::Qualified { cards: 16 });
    }

    #[test]
    fn trips_entry_gets_largest_deal() {
        let h = hand("2s 2h 2d / 3c 3s 3h 7d 8c / 9s 9h 9d 9c Js");
        assert_eq!(entry_state(&cfg(), &h), FantasyState::Qualified { cards: 17 });
    }

    #[test]
    fn jacks_do_not_qualify() {
        let h = hand("Js Jh 2d / Qc Qs 6h 7d 8c / As Ah Ad Tc 9s");
        assert_eq!(entry_state(&cfg(), &h), FantasyState::Normal);
    }

    #[test]
    fn busted_hand_never_qualifies() {
        let h = hand("As Ah 2d / 3c 4s 6h 7d 8c / 9s Th Jd Qc 2s");
        assert!(is_busted(&h));
        assert_eq!(entry_cards(&cfg(), h.top()), Some(16));
        assert_eq!(entry_state(&cfg(), &h), FantasyState::Normal);
    }

    #[test]
    fn incomplete_hand_never_qualifies() {
        let h = hand("As Ah 2d / 3c 4s / 9s");
        assert_eq!(entry_state(&cfg(), &h), FantasyState::Normal);
    }

    #[test]
    fn stay_needs_quads_bottom_or_trips_top() {
        let quads = hand("2s 3h 4d / 5c 5s 6h 7d 8c / 9s 9h 9d 9c Js");
        let trips_top = hand("2s 2h 2d / 5c 5s 5h 7d 8c / 9s 9h 9d Tc Ts");
        let full_house = hand("Qs Qh 2d / Ac As 6h 7d 8c / 9s 9h 9d Tc Ts");
        assert!(meets_stay_condition(&cfg(), &quads));
        assert!(meets_stay_condition(&cfg(), &trips_top));
        assert!(!meets_stay_condition(&cfg(), &full_house));
    }

    #[test]
    fn active_player_continues_or_drops_out() {
        let active = FantasyState::Active { cards: 16 };
        let quads = hand("2s 3h 4d / 5c 5s 6h 7d 8c / 9s 9h 9d 9c Js");
        assert_eq!(next_state(&cfg(), active, &quads), FantasyState::Qualified { cards: 14 });

        // a qualifying top pair alone does not keep an active player in
        let kk = hand("Ks Kh 2d / Ac As 6h 7d 8c / 9s 9h 9d Tc Js");
        assert_eq!(next_state(&cfg(), active, &kk), FantasyState::Normal);
    }

    #[test]
    fn busted_fantasy_hand_ends_fantasy_land() {
        let active = FantasyState::Active { cards: 14 };
        let fouled = hand("As Ah Ad / 2c 3s 4h 5d 7c / 6s 6h 6d 6c Js");
        assert!(is_busted(&fouled));
        assert_eq!(next_state(&cfg(), active, &fouled), FantasyState::Normal);
    }

    #[test]
    fn begin_hand_activates_qualification() {
        assert_eq!(FantasyState::Qualified { cards: 15 }.begin_hand(), FantasyState::Active { cards: 15 });
        assert_eq!(FantasyState::Normal.begin_hand(), FantasyState::Normal);
        assert_eq!(FantasyState::Active { cards: 14 }.cards(), Some(14));
        assert!(!FantasyState::Normal.is_active());
    }
}
