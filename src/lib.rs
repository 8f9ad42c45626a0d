//! ofc-rs: Open Face Chinese Poker (Pineapple) rules engine
//!
//! Goals:
//! - One authoritative evaluator for 3-card and 5-card hands
//! - Royalty scoring driven by an explicit, loadable [`config::RoyaltyConfig`]
//! - Bust detection, Fantasy Land transitions and pairwise settlement
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: score an arrangement
//! ```
//! use ofc_rs::config::RoyaltyConfig;
//! use ofc_rs::hand::PlayerHand;
//! use ofc_rs::rules::{is_busted, RuleEngine};
//!
//! let hand: PlayerHand = "Qs Qh 2d / Kc Ks Kh 7d 8c / 2h 5h 9h Jh Ah".parse().unwrap();
//! let engine = RuleEngine::new(RoyaltyConfig::default());
//!
//! assert!(!is_busted(&hand));
//! // QQ top (7) + trips middle (2) + flush bottom (4)
//! assert_eq!(engine.royalty_total(&hand), 13);
//! ```
//!
//! ## Playing hands
//! ```
//! use ofc_rs::agents::{AgentTable, FirstFitAgent};
//! use ofc_rs::game::Game;
//!
//! let mut game = Game::new(2);
//! let mut table = AgentTable::for_seats(2);
//! table.set_agent(0, Some(Box::new(FirstFitAgent)));
//! table.set_agent(1, Some(Box::new(FirstFitAgent)));
//! let result = table.play_hand(&mut game, 42).unwrap();
//! assert_eq!(result.deltas.len(), 2);
//! ```

pub mod agents;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod fantasy;
pub mod game;
pub mod hand;
pub mod record;
pub mod rules;
pub mod scoring;
pub mod settlement;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
