//! Completed rounds and the append-only score history.
//!
//! ## RoundRecord
//!
//! A dense row of one rank per player, produced by densifying a complete
//! [`super::RoundAssignment`]. Records hold every rank `1..=players_count`
//! exactly once by construction.
//!
//! ## ScoreHistory
//!
//! An ordered sequence of completed rounds, growing by exactly one record
//! per confirmed round. Backed by an `im::Vector` so UI layers can snapshot
//! the whole history in O(1). Totals and standings are derived from it on
//! demand, never stored.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use crate::core::{PlayerId, PlayerMap, Rank};

/// One completed round: a rank for every player, indexed by player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Inline storage for the 2-6 players a session supports.
    ranks: SmallVec<[Rank; 6]>,
}

impl RoundRecord {
    /// Create a record from per-player ranks (index = player index).
    #[must_use]
    pub fn from_ranks(ranks: SmallVec<[Rank; 6]>) -> Self {
        debug_assert!(
            {
                let mut seen: Vec<_> = ranks.iter().map(|r| r.value()).collect();
                seen.sort_unstable();
                seen == (1..=ranks.len() as u8).collect::<Vec<_>>()
            },
            "A completed round must hold each rank exactly once"
        );
        Self { ranks }
    }

    /// Number of players in this record.
    #[must_use]
    pub fn players_count(&self) -> usize {
        self.ranks.len()
    }

    /// The rank a player earned this round.
    #[must_use]
    pub fn rank(&self, player: PlayerId) -> Rank {
        self.ranks[player.index()]
    }

    /// Iterate over (player, rank) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Rank)> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .map(|(i, &r)| (PlayerId::new(i as u8), r))
    }
}

impl Index<PlayerId> for RoundRecord {
    type Output = Rank;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.ranks[player.index()]
    }
}

/// Ordered sequence of completed rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    rounds: Vector<RoundRecord>,
}

impl ScoreHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rounds recorded so far.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }

    /// Whether no rounds have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Append a completed round. Records are immutable once appended.
    pub fn push_round(&mut self, record: RoundRecord) {
        self.rounds.push_back(record);
    }

    /// Discard all recorded rounds ("play again" / new game).
    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    /// Get a recorded round by 0-based index.
    #[must_use]
    pub fn round(&self, index: usize) -> Option<&RoundRecord> {
        self.rounds.get(index)
    }

    /// Iterate over recorded rounds in play order.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter()
    }

    /// The rank a player earned in a given round, `None` past the end of
    /// the history.
    #[must_use]
    pub fn rank_at(&self, player: PlayerId, round_index: usize) -> Option<Rank> {
        self.rounds.get(round_index).map(|r| r.rank(player))
    }

    /// A player's rank sequence in play order.
    #[must_use]
    pub fn player_ranks(&self, player: PlayerId) -> Vec<Rank> {
        self.rounds.iter().map(|r| r.rank(player)).collect()
    }

    /// Total score per player: the sum of rank values over all rounds.
    /// Lower is better.
    #[must_use]
    pub fn totals(&self, players_count: usize) -> PlayerMap<u32> {
        let mut totals = PlayerMap::with_value(players_count, 0u32);
        for record in &self.rounds {
            for (player, rank) in record.iter() {
                totals[player] += rank.points();
            }
        }
        totals
    }
}
