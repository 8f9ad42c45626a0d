use crate::cards::Rank;

/// Whether a 3- or 5-card hand is a straight, and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top_rank: None };

    /// Detect a straight over all given ranks (any order).
    /// The ace plays low only in the wheel: A-2-3 (top Three) or A-2-3-4-5 (top Five).
    pub fn detect(ranks: &[Rank]) -> Self {
        let n = ranks.len();
        if n != 3 && n != 5 {
            return Self::NONE;
        }

        let mut sorted = ranks.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Self::NONE;
        }

        if sorted.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[0]) };
        }

        // Wheel: Ace on top, the rest exactly n-1 .. 2
        let rest_is_low_run =
            sorted[1..].iter().rev().enumerate().all(|(i, r)| r.value() == i as u8 + 2);
        if sorted[0] == Rank::Ace && rest_is_low_run {
            return StraightInfo { is_straight: true, top_rank: Some(sorted[1]) };
        }

        Self::NONE
    }
}
