//! The leaderboard engine.
//!
//! A pure function of the score history: no knowledge of phases, timers,
//! or whether it is feeding the interim leaderboard or the final screen.

pub mod engine;

pub use engine::{standings, Standing};
