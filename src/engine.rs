// Table-level API boundary. Agents and front ends drive a hand through this
// trait without touching `Game` internals. Implemented for the core `Game` type.

use crate::cards::Card;
use crate::game::{ActionError, DealError, Game, HandResult, Phase};
use crate::hand::{PlayerHand, Region};
use crate::rules::RuleEngine;

pub trait OfcEngine {
    // Hand lifecycle
    fn new_hand_seeded(&mut self, seed: u64) -> Result<(), DealError>;
    fn advance(&mut self) -> Result<Phase, ActionError>;

    // Player actions
    fn place(&mut self, seat: usize, card: Card, region: Region) -> Result<(), ActionError>;
    fn discard(&mut self, seat: usize, card: Card) -> Result<(), ActionError>;

    // Queries
    fn hand(&self, seat: usize) -> Option<&PlayerHand>;
    fn can_place(&self, seat: usize, region: Region) -> bool;
    fn discards_left(&self, seat: usize) -> usize;
    fn round(&self) -> u8;
    fn phase(&self) -> Phase;
    fn num_players(&self) -> usize;
    fn rules(&self) -> &RuleEngine;
    fn last_result(&self) -> Option<&HandResult>;
}

impl OfcEngine for Game {
    fn new_hand_seeded(&mut self, seed: u64) -> Result<(), DealError> {
        self.new_hand_seeded(seed)
    }
    fn advance(&mut self) -> Result<Phase, ActionError> {
        self.advance()
    }

    fn place(&mut self, seat: usize, card: Card, region: Region) -> Result<(), ActionError> {
        self.place(seat, card, region)
    }
    fn discard(&mut self, seat: usize, card: Card) -> Result<(), ActionError> {
        self.discard(seat, card)
    }

    fn hand(&self, seat: usize) -> Option<&PlayerHand> {
        self.player(seat).map(|p| p.hand())
    }
    fn can_place(&self, seat: usize, region: Region) -> bool {
        self.can_place(seat, region)
    }
    fn discards_left(&self, seat: usize) -> usize {
        self.discards_left(seat)
    }
    fn round(&self) -> u8 {
        self.round
    }
    fn phase(&self) -> Phase {
        self.phase
    }
    fn num_players(&self) -> usize {
        self.players.len()
    }
    fn rules(&self) -> &RuleEngine {
        &self.rules
    }
    fn last_result(&self) -> Option<&HandResult> {
        self.last_result()
    }
}
