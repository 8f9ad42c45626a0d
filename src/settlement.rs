//! Two-player point settlement for a completed hand.

use crate::config::RoyaltyConfig;
use crate::evaluator::compare_hands;
use crate::hand::{PlayerHand, Region};
use crate::rules::is_busted;
use crate::scoring::royalty_total;
use log::info;

/// Points each side takes out of one hand. Both values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settlement {
    pub a: i32,
    pub b: i32,
}

impl Settlement {
    pub const fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }
}

/// Everything settlement reads from the two hands, already evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    pub a_busted: bool,
    pub b_busted: bool,
    pub royalty_a: i32,
    pub royalty_b: i32,
    /// Region results from A's side, in record order: 1 win, 0 tie, -1 loss.
    pub regions: [i8; 3],
}

impl Showdown {
    pub fn between(config: &RoyaltyConfig, a: &PlayerHand, b: &PlayerHand) -> Self {
        Self {
            a_busted: is_busted(a),
            b_busted: is_busted(b),
            royalty_a: royalty_total(config, a),
            royalty_b: royalty_total(config, b),
            regions: Region::ALL.map(|r| compare_hands(a.region(r).as_slice(), b.region(r).as_slice())),
        }
    }

    /// Apply the bust, sweep and royalty-margin rules.
    ///
    /// ```
    /// use ofc_rs::settlement::{Settlement, Showdown};
    ///
    /// let sweep = Showdown { a_busted: false, b_busted: false, royalty_a: 6, royalty_b: 2, regions: [1, 1, 1] };
    /// assert_eq!(sweep.settle(), Settlement::new(10, 0));
    /// ```
    pub fn settle(&self) -> Settlement {
        match (self.a_busted, self.b_busted) {
            (true, true) => return Settlement::new(0, 0),
            (true, false) => return Settlement::new(0, 6 + self.royalty_b),
            (false, true) => return Settlement::new(6 + self.royalty_a, 0),
            (false, false) => {}
        }

        let diff = self.royalty_a - self.royalty_b;
        let region_sum: i32 = self.regions.iter().map(|&r| i32::from(r)).sum();

        if self.regions.iter().all(|&r| r == 1) {
            Settlement::new((diff + 6).max(0), 0)
        } else if self.regions.iter().all(|&r| r == -1) {
            Settlement::new(0, (6 - diff).max(0))
        } else if diff > 0 {
            Settlement::new((diff + region_sum).max(0), 0)
        } else if diff < 0 {
            Settlement::new(0, (-diff - region_sum).max(0))
        } else {
            Settlement::new(0, 0)
        }
    }
}

/// Settle two completed hands.
pub fn settle(config: &RoyaltyConfig, a: &PlayerHand, b: &PlayerHand) -> Settlement {
    let showdown = Showdown::between(config, a, b);
    let result = showdown.settle();
    info!(
        "settled hand: regions {:?}, royalties {}/{}, busted {}/{} -> {}/{}",
        showdown.regions,
        showdown.royalty_a,
        showdown.royalty_b,
        showdown.a_busted,
        showdown.b_busted,
        result.a,
        result.b
    );
    result
}
