//! # score-rally
//!
//! The state-machine core of a single-screen, pass-and-play party game
//! scorekeeper: a group of local players shares one device, plays a fixed
//! number of scored rounds, and assigns each player a unique rank per round.
//! Lower totals win. A leaderboard appears every third round and a final
//! standings screen ends the game.
//!
//! ## Design Principles
//!
//! 1. **One owned state object**: the whole session lives in
//!    [`session::GameSession`], passed explicitly to every action handler.
//!    No globals, no ambient state, fully unit-testable without a rendering
//!    environment.
//!
//! 2. **Pure derived views**: totals and standings are computed on demand
//!    from the score history by stateless functions, never cached as a side
//!    effect of mutation.
//!
//! 3. **No error pathways**: invalid actions are structurally unreachable or
//!    silent no-ops. Configuration values are clamped at the point of
//!    mutation, never validated after the fact.
//!
//! 4. **Explicit time**: handlers that touch the clock take an
//!    [`std::time::Instant`], so the elapsed-time rules are deterministic
//!    under test.
//!
//! ## Modules
//!
//! - `core`: Player IDs, ranks, phases, configuration, RNG
//! - `round`: In-progress rank assignment and the append-only score history
//! - `leaderboard`: Pure ranking engine with the backward tie-break
//! - `names`: Suggested-name pool and sampling
//! - `session`: The `GameSession` controller and its action surface

pub mod core;
pub mod round;
pub mod leaderboard;
pub mod names;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GamePhase, GameRng, PlayerId, PlayerMap, Rank,
    PLAYERS_RANGE, ROUNDS_RANGE,
};

pub use crate::round::{RoundAssignment, RoundRecord, ScoreHistory};

pub use crate::leaderboard::{standings, Standing};

pub use crate::names::{suggest, NAME_POOL};

pub use crate::session::{GameSession, SessionAction, Timer, TransitionToken};
