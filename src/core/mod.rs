//! Core types: players, ranks, phases, configuration, RNG.
//!
//! These are the fundamental building blocks shared by the round model,
//! the leaderboard engine, and the session controller.

pub mod config;
pub mod phase;
pub mod player;
pub mod rank;
pub mod rng;

pub use config::{GameConfig, PLAYERS_RANGE, ROUNDS_RANGE};
pub use phase::GamePhase;
pub use player::{PlayerId, PlayerMap};
pub use rank::Rank;
pub use rng::GameRng;
