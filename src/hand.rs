use crate::cards::{parse_cards, Card, CardParseError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The three rows a player builds, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Top,
    Middle,
    Bottom,
}

impl Region {
    /// Record order: top, middle, bottom.
    pub const ALL: [Region; 3] = [Region::Top, Region::Middle, Region::Bottom];

    pub const fn capacity(self) -> usize {
        match self {
            Region::Top => 3,
            Region::Middle | Region::Bottom => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Region::Top => "top",
            Region::Middle => "middle",
            Region::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlacementError {
    #[error("{region} region is full ({capacity} cards)")]
    RegionFull { region: Region, capacity: usize },
    #[error("card {0} is not pending for this player")]
    NotPending(Card),
    #[error("card {0} is already in the hand")]
    DuplicateCard(Card),
}

/// Cards placed in one region, bounded by the region's capacity.
///
/// ```
/// use ofc_rs::cards::{Card, Rank, Suit};
/// use ofc_rs::hand::{Region, RegionCards};
///
/// let mut top = RegionCards::new(Region::Top);
/// for r in [Rank::Two, Rank::Three, Rank::Four] {
///     top.try_add(Card::new(r, Suit::Clubs)).unwrap();
/// }
/// assert!(top.is_full());
/// assert!(top.try_add(Card::new(Rank::Five, Suit::Clubs)).is_err());
/// assert_eq!(top.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionCards {
    region: Region,
    cards: Vec<Card>,
}

impl RegionCards {
    pub fn new(region: Region) -> Self {
        Self { region, cards: Vec::with_capacity(region.capacity()) }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.region.capacity()
    }

    /// Free slots left in this region.
    pub fn remaining(&self) -> usize {
        self.region.capacity().saturating_sub(self.cards.len())
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Add a card if there is room. On error the region is unchanged.
    pub fn try_add(&mut self, card: Card) -> Result<(), PlacementError> {
        if self.is_full() {
            return Err(PlacementError::RegionFull {
                region: self.region,
                capacity: self.region.capacity(),
            });
        }
        if self.cards.contains(&card) {
            return Err(PlacementError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

/// One player's state for a single hand: three regions, dealt-but-unplaced cards, discards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerHand {
    top: RegionCards,
    middle: RegionCards,
    bottom: RegionCards,
    pending: Vec<Card>,
    discards: Vec<Card>,
}

impl Default for PlayerHand {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerHand {
    pub fn new() -> Self {
        Self {
            top: RegionCards::new(Region::Top),
            middle: RegionCards::new(Region::Middle),
            bottom: RegionCards::new(Region::Bottom),
            pending: Vec::new(),
            discards: Vec::new(),
        }
    }

    /// Build a hand directly from region contents (no pending cards).
    /// Rejects overfull regions and cards repeated anywhere in the hand.
    pub fn from_regions(top: &[Card], middle: &[Card], bottom: &[Card]) -> Result<Self, PlacementError> {
        let mut hand = Self::new();
        let mut seen = HashSet::new();
        for (region, cards) in [(Region::Top, top), (Region::Middle, middle), (Region::Bottom, bottom)] {
            for &card in cards {
                if !seen.insert(card) {
                    return Err(PlacementError::DuplicateCard(card));
                }
                hand.region_mut(region).try_add(card)?;
            }
        }
        Ok(hand)
    }

    pub fn region(&self, region: Region) -> &RegionCards {
        match region {
            Region::Top => &self.top,
            Region::Middle => &self.middle,
            Region::Bottom => &self.bottom,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut RegionCards {
        match region {
            Region::Top => &mut self.top,
            Region::Middle => &mut self.middle,
            Region::Bottom => &mut self.bottom,
        }
    }

    pub fn top(&self) -> &[Card] {
        self.top.as_slice()
    }

    pub fn middle(&self) -> &[Card] {
        self.middle.as_slice()
    }

    pub fn bottom(&self) -> &[Card] {
        self.bottom.as_slice()
    }

    pub fn pending(&self) -> &[Card] {
        &self.pending
    }

    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    pub fn can_place(&self, region: Region) -> bool {
        !self.region(region).is_full()
    }

    /// All three regions are exactly at capacity.
    pub fn is_complete(&self) -> bool {
        Region::ALL.iter().all(|r| self.region(*r).is_full())
    }

    /// Total number of cards placed across all regions.
    pub fn placed(&self) -> usize {
        self.top.len() + self.middle.len() + self.bottom.len()
    }

    pub(crate) fn receive<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.pending.extend(cards);
    }

    /// Move a pending card into `region`. No state changes on error.
    pub fn place(&mut self, card: Card, region: Region) -> Result<(), PlacementError> {
        let idx = self.pending.iter().position(|c| *c == card).ok_or(PlacementError::NotPending(card))?;
        self.region_mut(region).try_add(card)?;
        self.pending.remove(idx);
        Ok(())
    }

    /// Move a pending card to the discard pile.
    pub fn discard(&mut self, card: Card) -> Result<(), PlacementError> {
        let idx = self.pending.iter().position(|c| *c == card).ok_or(PlacementError::NotPending(card))?;
        self.pending.remove(idx);
        self.discards.push(card);
        Ok(())
    }

    /// Empty every region, pending and discards for a new hand.
    pub fn clear(&mut self) {
        self.top.clear();
        self.middle.clear();
        self.bottom.clear();
        self.pending.clear();
        self.discards.clear();
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandParseError {
    #[error("expected 'top / middle / bottom', got {0} regions")]
    RegionCount(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Parses `"top / middle / bottom"`, e.g. `"Qs Qh 2d / 5c 5s 6h 7d 8c / 9s 9h 9d Tc Js"`.
impl FromStr for PlayerHand {
    type Err = HandParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 3 {
            return Err(HandParseError::RegionCount(parts.len()));
        }
        let top = parse_cards(parts[0])?;
        let middle = parse_cards(parts[1])?;
        let bottom = parse_cards(parts[2])?;
        Ok(PlayerHand::from_regions(&top, &middle, &bottom)?)
    }
}
