//! Per-hand JSON records.
//!
//! Layout (2-space indent):
//!
//! ```json
//! {
//!   "timestamp": "2024-05-01T12:00:00",
//!   "players": [
//!     { "name": "P1", "total_score": 12,
//!       "hand": { "top": ["QS", "QH", "2D"], "middle": [...], "bottom": [...] },
//!       "is_ai": false, "fantasy_mode": true }
//!   ],
//!   "game_details": { "fantasy_mode": true, "player_count": 2 }
//! }
//! ```

use crate::cards::Card;
use crate::game::{Game, Player};
use crate::hand::PlayerHand;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RecordError {
    #[error("failed to write record: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCards {
    pub top: Vec<Card>,
    pub middle: Vec<Card>,
    pub bottom: Vec<Card>,
}

impl From<&PlayerHand> for HandCards {
    fn from(hand: &PlayerHand) -> Self {
        Self { top: hand.top().to_vec(), middle: hand.middle().to_vec(), bottom: hand.bottom().to_vec() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub total_score: i32,
    pub hand: HandCards,
    pub is_ai: bool,
    pub fantasy_mode: bool,
}

impl From<&Player> for PlayerRecord {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name().to_owned(),
            total_score: p.total_score(),
            hand: HandCards::from(p.hand()),
            is_ai: p.is_ai(),
            fantasy_mode: p.fantasy().is_active(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetails {
    /// Any player in (or bound for) Fantasy Land.
    pub fantasy_mode: bool,
    pub player_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    pub timestamp: String,
    pub players: Vec<PlayerRecord>,
    pub game_details: GameDetails,
}

impl HandRecord {
    /// Snapshot the table. `timestamp` is stored as given.
    pub fn from_game(game: &Game, timestamp: impl Into<String>) -> Self {
        let players: Vec<PlayerRecord> = game.players().iter().map(PlayerRecord::from).collect();
        let game_details = GameDetails {
            fantasy_mode: players.iter().any(|p| p.fantasy_mode),
            player_count: players.len(),
        };
        Self { timestamp: timestamp.into(), players, game_details }
    }

    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RecordError> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}
