use crate::cards::Card;

/// Whether all cards share one suit (flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
}

impl SuitInfo {
    /// An empty slice is never a flush.
    pub fn detect(cards: &[Card]) -> Self {
        let is_flush = cards
            .split_first()
            .is_some_and(|(first, rest)| rest.iter().all(|c| c.suit() == first.suit()));
        SuitInfo { is_flush }
    }
}
