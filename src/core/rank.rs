//! Rank values assigned to players within a round.
//!
//! A rank is an integer `1..=players_count`, lower is better. Within one
//! round each rank is held by at most one player; a completed round holds
//! every rank exactly once.

use serde::{Deserialize, Serialize};

/// A 1-based rank within a round. Rank 1 is the round winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    /// Create a new rank. Ranks are 1-based.
    #[must_use]
    pub fn new(value: u8) -> Self {
        debug_assert!(value >= 1, "Ranks are 1-based");
        Self(value)
    }

    /// Get the raw rank value (1-based).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The points a rank contributes to a player's total.
    ///
    /// Rank-based scoring: the rank value itself, so lower totals win.
    #[must_use]
    pub const fn points(self) -> u32 {
        self.0 as u32
    }

    /// Iterate over all ranks awarded in a round with `players_count` players.
    ///
    /// ```
    /// use score_rally::Rank;
    ///
    /// let ranks: Vec<_> = Rank::all(3).collect();
    /// assert_eq!(ranks, vec![Rank::new(1), Rank::new(2), Rank::new(3)]);
    /// ```
    pub fn all(players_count: usize) -> impl Iterator<Item = Rank> {
        (1..=players_count as u8).map(Rank)
    }

    /// Check whether this rank is awarded in a round with `players_count`
    /// players.
    #[must_use]
    pub fn in_bounds(self, players_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= players_count
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
