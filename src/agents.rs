//! Agents: pluggable placement policies.
//!
//! A `PlacementAgent` places and discards the cards dealt to one seat. External
//! strategy layers plug in here; the crate ships a queued `HumanAgent` for front
//! ends and a deterministic `FirstFitAgent` for simulations and tests.
//! `AgentTable` maps seats to agents and drives whole hands.

use crate::cards::Card;
use crate::engine::OfcEngine;
use crate::game::{ActionError, HandResult, Phase};
use crate::hand::Region;
use core::fmt;
use std::collections::VecDeque;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Move {
    Place(Card, Region),
    Discard(Card),
}

/// A seat controller, asked once per round to deal with its pending cards.
pub trait PlacementAgent {
    /// Act for `seat`. Returns whether any move was made.
    fn on_turn(&mut self, engine: &mut dyn OfcEngine, seat: usize) -> Result<bool, ActionError>;
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally accept a queued intent; the default ignores it.
    fn receive(&mut self, _mv: Move) -> bool {
        false
    }
}

/// Replays moves queued by a front end, in order.
#[derive(Debug, Default)]
pub struct HumanAgent {
    queue: VecDeque<Move>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl PlacementAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn receive(&mut self, mv: Move) -> bool {
        self.queue.push_back(mv);
        true
    }

    fn on_turn(&mut self, engine: &mut dyn OfcEngine, seat: usize) -> Result<bool, ActionError> {
        if engine.phase() != Phase::Placing {
            self.queue.clear();
            return Ok(false);
        }
        let mut acted = false;
        while let Some(mv) = self.queue.pop_front() {
            match mv {
                Move::Place(card, region) => engine.place(seat, card, region)?,
                Move::Discard(card) => engine.discard(seat, card)?,
            }
            acted = true;
        }
        Ok(acted)
    }
}

/// Discards the lowest cards it is allowed to, then fills bottom, middle, top in that
/// order, highest cards first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitAgent;

impl FirstFitAgent {
    const ORDER: [Region; 3] = [Region::Bottom, Region::Middle, Region::Top];
}

impl PlacementAgent for FirstFitAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }

    fn on_turn(&mut self, engine: &mut dyn OfcEngine, seat: usize) -> Result<bool, ActionError> {
        if engine.phase() != Phase::Placing {
            return Ok(false);
        }
        let mut pending = match engine.hand(seat) {
            Some(hand) => hand.pending().to_vec(),
            None => return Err(ActionError::UnknownSeat(seat)),
        };
        if pending.is_empty() {
            return Ok(false);
        }
        pending.sort_by(|a, b| b.cmp(a));

        let discards = engine.discards_left(seat).min(pending.len());
        for card in pending.split_off(pending.len() - discards) {
            engine.discard(seat, card)?;
        }
        for card in pending {
            let region = Self::ORDER
                .into_iter()
                .find(|r| engine.can_place(seat, *r))
                .ok_or(ActionError::RoundIncomplete { seat, pending: 1 })?;
            engine.place(seat, card, region)?;
        }
        Ok(true)
    }
}

/// One optional agent per seat.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlacementAgent>>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Bot) => 'B',
                Some(AgentKind::Human) => 'H',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        seats.resize_with(n, || None);
        Self { seats }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlacementAgent>>) {
        if seat >= self.seats.len() {
            self.seats.resize_with(seat + 1, || None);
        }
        self.seats[seat] = agent;
    }

    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).is_some_and(|a| a.is_some())
    }

    /// Send an intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: usize, mv: Move) -> bool {
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            return agent.receive(mv);
        }
        false
    }

    /// Give every seated agent its turn for the current round.
    pub fn on_round(&mut self, engine: &mut dyn OfcEngine) -> Result<bool, ActionError> {
        let mut acted = false;
        for (seat, slot) in self.seats.iter_mut().enumerate() {
            if let Some(agent) = slot {
                acted |= agent.on_turn(engine, seat)?;
            }
        }
        Ok(acted)
    }

    /// Deal a new hand and drive it to settlement.
    pub fn play_hand(&mut self, engine: &mut dyn OfcEngine, seed: u64) -> Result<HandResult, ActionError> {
        engine.new_hand_seeded(seed)?;
        loop {
            self.on_round(engine)?;
            if engine.advance()? == Phase::Complete {
                break;
            }
        }
        engine.last_result().cloned().ok_or(ActionError::NotPlacing)
    }
}
