use crate::cards::{Card, Rank, Suit};
use crate::game::DealError;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A 52-card deck dealt from the end of its card vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// ```
    /// use ofc_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A fresh deck shuffled with a ChaCha8 stream seeded from `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    /// A deck that deals `order` front to back. Rejects repeated cards.
    ///
    /// ```
    /// use ofc_rs::cards::parse_cards;
    /// use ofc_rs::deck::Deck;
    ///
    /// let mut deck = Deck::stacked(parse_cards("As Kd 2c").unwrap()).unwrap();
    /// assert_eq!(deck.draw().unwrap().to_string(), "As");
    /// assert!(Deck::stacked(parse_cards("As As").unwrap()).is_err());
    /// ```
    pub fn stacked(order: Vec<Card>) -> Result<Self, DealError> {
        let mut seen = std::collections::HashSet::with_capacity(order.len());
        if let Some(&dup) = order.iter().find(|c| !seen.insert(**c)) {
            return Err(DealError::DuplicateCard(dup));
        }
        let mut cards = order;
        cards.reverse();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw exactly `n` cards, or none at all if fewer remain.
    pub fn draw_exact(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }
        let at = self.cards.len() - n;
        let mut drawn = self.cards.split_off(at);
        drawn.reverse();
        Some(drawn)
    }
}
