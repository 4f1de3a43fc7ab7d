//! The round-scoring data model.
//!
//! While a round is being played, rank assignments live in a partial
//! [`RoundAssignment`]. Confirming a complete assignment densifies it into
//! an immutable [`RoundRecord`] appended to the [`ScoreHistory`].

pub mod assignment;
pub mod history;

pub use assignment::RoundAssignment;
pub use history::{RoundRecord, ScoreHistory};
