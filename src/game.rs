use crate::cards::Card;
use crate::config::RoyaltyConfig;
use crate::deck::Deck;
use crate::fantasy::{self, FantasyState};
use crate::hand::{PlacementError, PlayerHand, Region};
use crate::rules::{is_busted, RuleEngine};
use crate::settlement::Settlement;
use log::{debug, info};
use rand::Rng;

/// Placement rounds in a normal hand.
pub const ROUNDS: u8 = 5;
/// Cards dealt to a normal player in round 1.
pub const FIRST_DEAL: usize = 5;
/// Cards dealt to a normal player in rounds 2 to 5 (place two, discard one).
pub const LATER_DEAL: usize = 3;
/// Slots in a complete arrangement.
pub const HAND_SLOTS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    /// No hand dealt yet.
    Waiting,
    Placing,
    /// The last hand has been settled.
    Complete,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("deck exhausted: need {needed} cards, {remaining} left")]
    DeckExhausted { needed: usize, remaining: usize },
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("card {0} appears twice in the deck")]
    DuplicateCard(Card),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error("no hand is being placed")]
    NotPlacing,
    #[error("no player in seat {0}")]
    UnknownSeat(usize),
    #[error("seat {seat} may not discard more than {allowed} cards this hand")]
    DiscardNotAllowed { seat: usize, allowed: usize },
    #[error("seat {seat} still holds {pending} unplaced cards")]
    RoundIncomplete { seat: usize, pending: usize },
    #[error("seat {seat} must discard its remaining {owed} cards")]
    DiscardRequired { seat: usize, owed: usize },
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) is_ai: bool,
    pub(crate) hand: PlayerHand,
    pub(crate) previous: Option<PlayerHand>,
    /// Fantasy Land state the previous hand was played in.
    pub(crate) previous_state: FantasyState,
    pub(crate) fantasy: FantasyState,
    pub(crate) total_score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, is_ai: bool) -> Self {
        Self {
            name: name.into(),
            is_ai,
            hand: PlayerHand::new(),
            previous: None,
            previous_state: FantasyState::Normal,
            fantasy: FantasyState::Normal,
            total_score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_ai(&self) -> bool {
        self.is_ai
    }

    /// The hand being placed, or the last settled one once the hand is complete.
    pub fn hand(&self) -> &PlayerHand {
        &self.hand
    }

    /// The most recent settled arrangement.
    pub fn previous_hand(&self) -> Option<&PlayerHand> {
        self.previous.as_ref()
    }

    pub fn fantasy(&self) -> FantasyState {
        self.fantasy
    }

    pub fn total_score(&self) -> i32 {
        self.total_score
    }

    /// Attach a previously settled arrangement, e.g. when restoring a session.
    pub fn with_previous_hand(mut self, hand: PlayerHand) -> Self {
        self.previous = Some(hand);
        self.previous_state = FantasyState::Normal;
        self
    }

    /// Like [`Player::with_previous_hand`], for a hand played in Fantasy Land off a
    /// deal of `cards`.
    pub fn with_previous_fantasy_hand(mut self, hand: PlayerHand, cards: u8) -> Self {
        self.previous = Some(hand);
        self.previous_state = FantasyState::Active { cards };
        self
    }

    /// Fantasy Land state the previous hand was played in.
    pub fn previous_state(&self) -> FantasyState {
        self.previous_state
    }

    pub(crate) fn set_fantasy(&mut self, state: FantasyState) {
        self.fantasy = state;
    }

    /// Discards permitted so far this hand, given the current round.
    fn discard_budget(&self, round: u8) -> usize {
        match self.fantasy {
            FantasyState::Active { cards } => usize::from(cards).saturating_sub(HAND_SLOTS),
            _ => usize::from(round.saturating_sub(1)),
        }
    }

    /// Discards still owed this round; the last `owed` pending cards cannot be placed.
    fn discards_owed(&self, round: u8) -> usize {
        self.discard_budget(round).saturating_sub(self.hand.discards().len())
    }

    fn deal_size(&self, round: u8) -> usize {
        deal_size(self.fantasy, round)
    }
}

fn deal_size(state: FantasyState, round: u8) -> usize {
    match (state, round) {
        (FantasyState::Active { cards }, 1) => usize::from(cards),
        (FantasyState::Active { .. }, _) => 0,
        (_, 1) => FIRST_DEAL,
        _ => LATER_DEAL,
    }
}

/// Cards dealt over a whole hand played in `state`.
fn cards_per_hand(state: FantasyState) -> usize {
    (1..=ROUNDS).map(|r| deal_size(state, r)).sum()
}

/// Settlement between two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairResult {
    pub a: usize,
    pub b: usize,
    pub settlement: Settlement,
}

/// Outcome of one settled hand, indexed by seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandResult {
    pub pairs: Vec<PairResult>,
    pub deltas: Vec<i32>,
    pub busted: Vec<bool>,
    pub royalties: Vec<i32>,
}

/// Deals, validates placements, and settles hands for a fixed table of players.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) rules: RuleEngine,
    pub(crate) deck: Deck,
    pub(crate) players: Vec<Player>,
    pub(crate) round: u8,
    pub(crate) phase: Phase,
    hands_played: u32,
    last_result: Option<HandResult>,
}

impl Game {
    /// A table of `num_players` with names `P1..Pn` and the default royalty table.
    pub fn new(num_players: usize) -> Self {
        Self::with_config(num_players, RoyaltyConfig::default())
    }

    pub fn with_config(num_players: usize, config: RoyaltyConfig) -> Self {
        let players = (1..=num_players).map(|i| Player::new(format!("P{i}"), false)).collect();
        Self::from_players(players, config)
    }

    pub fn from_players(players: Vec<Player>, config: RoyaltyConfig) -> Self {
        Self {
            rules: RuleEngine::new(config),
            deck: Deck::standard(),
            players,
            round: 0,
            phase: Phase::Waiting,
            hands_played: 0,
            last_result: None,
        }
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Current placement round (1..=5), or 0 before the first deal.
    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn cards_left(&self) -> usize {
        self.deck.len()
    }

    pub fn last_result(&self) -> Option<&HandResult> {
        self.last_result.as_ref()
    }

    /// Start a new hand from a randomly seeded shuffle.
    pub fn new_hand(&mut self) -> Result<(), DealError> {
        let seed: u64 = rand::rng().random();
        self.new_hand_seeded(seed)
    }

    /// Start a new hand: clear every arrangement, promote Fantasy Land
    /// qualifications, shuffle, and deal round 1.
    pub fn new_hand_seeded(&mut self, seed: u64) -> Result<(), DealError> {
        self.new_hand_with_deck(Deck::shuffled(seed))
    }

    /// Start a new hand dealing from `deck` as given.
    pub fn new_hand_with_deck(&mut self, deck: Deck) -> Result<(), DealError> {
        if self.phase == Phase::Placing {
            return Err(DealError::HandInProgress);
        }
        let needed: usize = self.players.iter().map(|p| cards_per_hand(p.fantasy.begin_hand())).sum();
        if needed > deck.len() {
            return Err(DealError::DeckExhausted { needed, remaining: deck.len() });
        }
        self.deck = deck;
        for p in &mut self.players {
            p.hand.clear();
            p.fantasy = p.fantasy.begin_hand();
            if let Some(cards) = p.fantasy.cards() {
                info!("{} plays fantasy land with {cards} cards", p.name);
            }
        }
        self.round = 1;
        self.deal_round()?;
        self.phase = Phase::Placing;
        Ok(())
    }

    fn deal_round(&mut self) -> Result<(), DealError> {
        let round = self.round;
        let needed: usize = self.players.iter().map(|p| p.deal_size(round)).sum();
        if needed > self.deck.len() {
            return Err(DealError::DeckExhausted { needed, remaining: self.deck.len() });
        }
        for p in &mut self.players {
            let n = p.deal_size(round);
            if n == 0 {
                continue;
            }
            let cards = self
                .deck
                .draw_exact(n)
                .ok_or(DealError::DeckExhausted { needed: n, remaining: self.deck.len() })?;
            debug!("round {round}: dealt {n} cards to {}", p.name);
            p.hand.receive(cards);
        }
        Ok(())
    }

    fn ensure_placing(&self) -> Result<(), ActionError> {
        if self.phase != Phase::Placing {
            return Err(ActionError::NotPlacing);
        }
        Ok(())
    }

    fn seat_mut(&mut self, seat: usize) -> Result<&mut Player, ActionError> {
        self.players.get_mut(seat).ok_or(ActionError::UnknownSeat(seat))
    }

    /// Whether `region` still has a free slot for the player at `seat`.
    pub fn can_place(&self, seat: usize, region: Region) -> bool {
        self.players.get(seat).is_some_and(|p| p.hand.can_place(region))
    }

    /// Discards the player at `seat` may still make this hand.
    pub fn discards_left(&self, seat: usize) -> usize {
        self.players.get(seat).map_or(0, |p| p.discards_owed(self.round))
    }

    /// Move one of the seat's pending cards into `region`. Rejected placements change nothing.
    ///
    /// Each 3-card round is place two, discard one: once the pending cards are down to
    /// the discards still owed, they can only be discarded.
    pub fn place(&mut self, seat: usize, card: Card, region: Region) -> Result<(), ActionError> {
        self.ensure_placing()?;
        let round = self.round;
        let player = self.seat_mut(seat)?;
        let owed = player.discards_owed(round);
        if owed > 0 && player.hand.pending().len() <= owed && player.hand.pending().contains(&card) {
            return Err(ActionError::DiscardRequired { seat, owed });
        }
        player.hand.place(card, region)?;
        debug!("round {round}: {} placed {card} in {region}", player.name);
        Ok(())
    }

    pub fn discard(&mut self, seat: usize, card: Card) -> Result<(), ActionError> {
        self.ensure_placing()?;
        let round = self.round;
        let player = self.seat_mut(seat)?;
        let allowed = player.discard_budget(round);
        if player.hand.discards().len() >= allowed {
            return Err(ActionError::DiscardNotAllowed { seat, allowed });
        }
        player.hand.discard(card)?;
        debug!("round {round}: {} discarded {card}", player.name);
        Ok(())
    }

    /// Close the current round once every seat has placed or discarded all its cards.
    /// Deals the next round, or settles the hand after the last one.
    pub fn advance(&mut self) -> Result<Phase, ActionError> {
        self.ensure_placing()?;
        if let Some((seat, p)) = self.players.iter().enumerate().find(|(_, p)| !p.hand.pending().is_empty()) {
            return Err(ActionError::RoundIncomplete { seat, pending: p.hand.pending().len() });
        }
        let all_complete = self.players.iter().all(|p| p.hand.is_complete());
        if self.round >= ROUNDS || all_complete {
            self.finish_hand();
            return Ok(self.phase);
        }
        self.round += 1;
        self.deal_round()?;
        Ok(self.phase)
    }

    fn finish_hand(&mut self) {
        let n = self.players.len();
        let config = self.rules.config();
        let mut deltas = vec![0; n];
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n {
            for b in (a + 1)..n {
                let settlement = self.rules.settle(&self.players[a].hand, &self.players[b].hand);
                deltas[a] += settlement.a;
                deltas[b] += settlement.b;
                pairs.push(PairResult { a, b, settlement });
            }
        }
        let busted = self.players.iter().map(|p| is_busted(&p.hand)).collect();
        let royalties = self.players.iter().map(|p| self.rules.royalty_total(&p.hand)).collect();

        for (p, delta) in self.players.iter_mut().zip(&deltas) {
            p.total_score += delta;
            p.previous_state = p.fantasy;
            p.fantasy = fantasy::next_state(&config.fantasy_mode, p.fantasy, &p.hand);
            p.previous = Some(p.hand.clone());
            info!("{} scores {delta} (total {})", p.name, p.total_score);
        }

        self.phase = Phase::Complete;
        self.hands_played += 1;
        self.last_result = Some(HandResult { pairs, deltas, busted, royalties });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    const FILL_ORDER: [Region; 3] = [Region::Bottom, Region::Middle, Region::Top];

    /// Discard what the seat must, then fill bottom to top.
    fn fill_seat(g: &mut Game, seat: usize) {
        let pending = g.players[seat].hand.pending().to_vec();
        let discards = g.discards_left(seat).min(pending.len());
        let (to_discard, to_place) = pending.split_at(discards);
        for &card in to_discard {
            g.discard(seat, card).unwrap();
        }
        for &card in to_place {
            let region = FILL_ORDER.into_iter().find(|r| g.can_place(seat, *r)).unwrap();
            g.place(seat, card, region).unwrap();
        }
    }

    fn play_out(g: &mut Game) {
        loop {
            for seat in 0..g.players.len() {
                fill_seat(g, seat);
            }
            if g.advance().unwrap() == Phase::Complete {
                break;
            }
        }
    }

    #[test]
    fn first_round_deals_five_each() {
        let mut g = Game::new(2);
        g.new_hand_seeded(1).unwrap();
        assert_eq!(g.round(), 1);
        assert_eq!(g.phase(), Phase::Placing);
        for p in g.players() {
            assert_eq!(p.hand().pending().len(), FIRST_DEAL);
        }
        assert_eq!(g.cards_left(), 42);
    }

    #[test]
    fn full_region_is_rejected_not_redirected() {
        let mut g = Game::new(2);
        g.new_hand_seeded(2).unwrap();
        let pending = g.players[0].hand.pending().to_vec();
        for &card in &pending[..3] {
            g.place(0, card, Region::Top).unwrap();
        }
        assert!(!g.can_place(0, Region::Top));
        let err = g.place(0, pending[3], Region::Top).unwrap_err();
        assert_eq!(err, ActionError::Placement(PlacementError::RegionFull { region: Region::Top, capacity: 3 }));
        assert_eq!(g.players[0].hand.pending(), &pending[3..]);
        assert!(g.players[0].hand.middle().is_empty());
    }

    #[test]
    fn no_discards_in_the_first_round() {
        let mut g = Game::new(2);
        g.new_hand_seeded(3).unwrap();
        let card = g.players[0].hand.pending()[0];
        assert_eq!(g.discard(0, card), Err(ActionError::DiscardNotAllowed { seat: 0, allowed: 0 }));
        assert_eq!(g.discards_left(0), 0);
    }

    #[test]
    fn advance_requires_every_card_handled() {
        let mut g = Game::new(2);
        g.new_hand_seeded(4).unwrap();
        fill_seat(&mut g, 0);
        assert_eq!(g.advance(), Err(ActionError::RoundIncomplete { seat: 1, pending: 5 }));
        fill_seat(&mut g, 1);
        assert_eq!(g.advance(), Ok(Phase::Placing));
        assert_eq!(g.round(), 2);
        assert_eq!(g.players[0].hand.pending().len(), LATER_DEAL);
        assert_eq!(g.discards_left(0), 1);
    }

    #[test]
    fn later_rounds_allow_exactly_one_discard() {
        let mut g = Game::new(2);
        g.new_hand_seeded(5).unwrap();
        fill_seat(&mut g, 0);
        fill_seat(&mut g, 1);
        g.advance().unwrap();
        let pending = g.players[0].hand.pending().to_vec();
        g.discard(0, pending[0]).unwrap();
        assert_eq!(g.discard(0, pending[1]), Err(ActionError::DiscardNotAllowed { seat: 0, allowed: 1 }));
    }

    #[test]
    fn three_card_round_keeps_two_and_discards_one() {
        let mut g = Game::new(2);
        g.new_hand_seeded(13).unwrap();
        fill_seat(&mut g, 0);
        fill_seat(&mut g, 1);
        g.advance().unwrap();

        let pending = g.players[0].hand.pending().to_vec();
        g.place(0, pending[0], Region::Middle).unwrap();
        g.place(0, pending[1], Region::Middle).unwrap();
        assert_eq!(g.place(0, pending[2], Region::Top), Err(ActionError::DiscardRequired { seat: 0, owed: 1 }));
        assert_eq!(g.players[0].hand.pending(), &pending[2..]);
        g.discard(0, pending[2]).unwrap();

        // next round: the previous discard does not carry over as spare budget
        fill_seat(&mut g, 1);
        g.advance().unwrap();
        let pending = g.players[0].hand.pending().to_vec();
        g.discard(0, pending[0]).unwrap();
        assert_eq!(g.discard(0, pending[1]), Err(ActionError::DiscardNotAllowed { seat: 0, allowed: 2 }));
        assert_eq!(g.players[0].hand.discards().len(), 2);
    }

    #[test]
    fn full_hand_settles_and_saves_previous() {
        let mut g = Game::new(2);
        g.new_hand_seeded(6).unwrap();
        play_out(&mut g);

        assert_eq!(g.phase(), Phase::Complete);
        assert_eq!(g.hands_played(), 1);
        assert_eq!(g.cards_left(), 52 - 2 * 17);
        for p in g.players() {
            assert!(p.hand().is_complete());
            assert_eq!(p.hand().discards().len(), 4);
            assert_eq!(p.previous_hand(), Some(p.hand()));
        }
        let result = g.last_result().unwrap();
        assert_eq!(result.pairs.len(), 1);
        for (p, delta) in g.players().iter().zip(&result.deltas) {
            assert_eq!(p.total_score(), *delta);
        }
        let card = Card::new(Rank::Two, Suit::Clubs);
        assert_eq!(g.place(0, card, Region::Top), Err(ActionError::NotPlacing));
    }

    #[test]
    fn fantasy_player_gets_one_big_deal() {
        let mut g = Game::new(2);
        g.players[0].set_fantasy(FantasyState::Qualified { cards: 14 });
        g.new_hand_seeded(7).unwrap();
        assert_eq!(g.players[0].fantasy(), FantasyState::Active { cards: 14 });
        assert_eq!(g.players[0].hand.pending().len(), 14);
        assert_eq!(g.discards_left(0), 1);

        fill_seat(&mut g, 0);
        assert!(g.players[0].hand.is_complete());
        fill_seat(&mut g, 1);
        g.advance().unwrap();
        // later rounds deal only to the normal player
        assert!(g.players[0].hand.pending().is_empty());
        assert_eq!(g.players[1].hand.pending().len(), LATER_DEAL);

        play_out(&mut g);
        assert_eq!(g.phase(), Phase::Complete);
    }

    #[test]
    fn two_fantasy_players_finish_after_one_round() {
        let mut g = Game::new(2);
        g.players[0].set_fantasy(FantasyState::Qualified { cards: 17 });
        g.players[1].set_fantasy(FantasyState::Qualified { cards: 15 });
        g.new_hand_seeded(8).unwrap();
        fill_seat(&mut g, 0);
        fill_seat(&mut g, 1);
        assert_eq!(g.advance(), Ok(Phase::Complete));
    }

    #[test]
    fn oversized_deal_exhausts_the_deck() {
        let mut g = Game::new(4);
        for p in &mut g.players {
            p.set_fantasy(FantasyState::Qualified { cards: 17 });
        }
        assert_eq!(g.new_hand_seeded(9), Err(DealError::DeckExhausted { needed: 68, remaining: 52 }));
        assert_eq!(g.phase(), Phase::Waiting);
        assert_eq!(g.round(), 0);
        for p in g.players() {
            assert_eq!(p.fantasy(), FantasyState::Qualified { cards: 17 });
        }
    }

    #[test]
    fn rejected_deal_keeps_the_settled_table() {
        let mut g = Game::new(2);
        g.new_hand_seeded(14).unwrap();
        play_out(&mut g);
        let hands: Vec<PlayerHand> = g.players().iter().map(|p| p.hand().clone()).collect();
        g.players[0].set_fantasy(FantasyState::Qualified { cards: 16 });

        let short = Deck::stacked(Deck::shuffled(1).draw_exact(20).unwrap()).unwrap();
        assert_eq!(g.new_hand_with_deck(short), Err(DealError::DeckExhausted { needed: 33, remaining: 20 }));
        assert_eq!(g.phase(), Phase::Complete);
        assert_eq!(g.players[0].fantasy(), FantasyState::Qualified { cards: 16 });
        for (p, h) in g.players().iter().zip(&hands) {
            assert_eq!(p.hand(), h);
        }
    }

    #[test]
    fn settled_hand_records_the_state_it_was_played_in() {
        let mut g = Game::new(2);
        g.players[0].set_fantasy(FantasyState::Qualified { cards: 15 });
        g.new_hand_seeded(15).unwrap();
        play_out(&mut g);
        assert_eq!(g.players[0].previous_state(), FantasyState::Active { cards: 15 });
        assert_eq!(g.players[1].previous_state(), FantasyState::Normal);
    }

    #[test]
    fn cannot_redeal_mid_hand() {
        let mut g = Game::new(2);
        g.new_hand_seeded(10).unwrap();
        assert_eq!(g.new_hand_seeded(11), Err(DealError::HandInProgress));
    }

    #[test]
    fn unknown_seat_is_an_error() {
        let mut g = Game::new(2);
        g.new_hand_seeded(12).unwrap();
        let card = g.players[0].hand.pending()[0];
        assert_eq!(g.place(5, card, Region::Top), Err(ActionError::UnknownSeat(5)));
        assert!(!g.can_place(5, Region::Top));
    }
}
