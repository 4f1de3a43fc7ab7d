//! In-progress rank assignment for the current round.
//!
//! A `RoundAssignment` is a partial mapping from player to rank under a
//! single-select-per-rank policy:
//!
//! - each rank is held by at most one player
//! - each player holds at most one rank
//!
//! Both invariants are maintained by [`RoundAssignment::toggle`], the only
//! mutation besides clearing. Tapping a player's current rank undoes it;
//! tapping a rank held by someone else moves it (eviction, never
//! duplication).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Rank};
use super::history::RoundRecord;

/// Partial player-to-rank mapping being built during a round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAssignment {
    slots: FxHashMap<PlayerId, Rank>,
}

impl RoundAssignment {
    /// Create an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players that currently hold a rank.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no ranks are assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The rank a player currently holds, if any.
    #[must_use]
    pub fn rank_of(&self, player: PlayerId) -> Option<Rank> {
        self.slots.get(&player).copied()
    }

    /// The player currently holding a rank, if any.
    #[must_use]
    pub fn holder_of(&self, rank: Rank) -> Option<PlayerId> {
        self.slots
            .iter()
            .find(|(_, &r)| r == rank)
            .map(|(&p, _)| p)
    }

    /// Whether every player `0..players_count` holds a rank.
    ///
    /// Checks actual membership, not just the entry count, so a stray
    /// out-of-range assignment can never stand in for a missing player.
    #[must_use]
    pub fn is_complete(&self, players_count: usize) -> bool {
        PlayerId::all(players_count).all(|p| self.slots.contains_key(&p))
    }

    /// Toggle a rank for a player.
    ///
    /// - If `player` already holds `rank`, the assignment is removed (undo).
    /// - Otherwise `rank` is taken away from whichever other player holds it
    ///   (at most one) and assigned to `player`, replacing any rank `player`
    ///   held before.
    ///
    /// Applying the same toggle twice in a row returns to the prior state.
    pub fn toggle(&mut self, player: PlayerId, rank: Rank) {
        if self.rank_of(player) == Some(rank) {
            self.slots.remove(&player);
            return;
        }
        if let Some(holder) = self.holder_of(rank) {
            self.slots.remove(&holder);
        }
        self.slots.insert(player, rank);
    }

    /// Clear all assignments. History and the round counter are unaffected;
    /// this is the "reset round" action.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate over (player, rank) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, Rank)> + '_ {
        self.slots.iter().map(|(&p, &r)| (p, r))
    }

    /// Densify a complete assignment into a per-player record.
    ///
    /// Returns `None` while any player is still unassigned.
    #[must_use]
    pub fn to_record(&self, players_count: usize) -> Option<RoundRecord> {
        let ranks = PlayerId::all(players_count)
            .map(|p| self.slots.get(&p).copied())
            .collect::<Option<_>>()?;
        Some(RoundRecord::from_ranks(ranks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn r(v: u8) -> Rank {
        Rank::new(v)
    }

    #[test]
    fn test_toggle_assigns() {
        let mut a = RoundAssignment::new();
        a.toggle(p(0), r(1));

        assert_eq!(a.rank_of(p(0)), Some(r(1)));
        assert_eq!(a.holder_of(r(1)), Some(p(0)));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_toggle_undoes() {
        let mut a = RoundAssignment::new();
        a.toggle(p(0), r(1));
        a.toggle(p(0), r(1));

        assert_eq!(a.rank_of(p(0)), None);
        assert!(a.is_empty());
    }

    #[test]
    fn test_toggle_evicts_previous_holder() {
        let mut a = RoundAssignment::new();
        a.toggle(p(0), r(1));
        a.toggle(p(1), r(1));

        assert_eq!(a.rank_of(p(0)), None);
        assert_eq!(a.rank_of(p(1)), Some(r(1)));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_toggle_replaces_own_rank() {
        let mut a = RoundAssignment::new();
        a.toggle(p(0), r(1));
        a.toggle(p(0), r(2));

        assert_eq!(a.rank_of(p(0)), Some(r(2)));
        assert_eq!(a.holder_of(r(1)), None);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn test_completion() {
        let mut a = RoundAssignment::new();
        a.toggle(p(0), r(2));
        assert!(!a.is_complete(2));
        assert_eq!(a.to_record(2), None);

        a.toggle(p(1), r(1));
        assert!(a.is_complete(2));

        let record = a.to_record(2).unwrap();
        assert_eq!(record[p(0)], r(2));
        assert_eq!(record[p(1)], r(1));
    }

    #[test]
    fn test_clear() {
        let mut a = RoundAssignment::new();
        a.toggle(p(0), r(1));
        a.toggle(p(1), r(2));

        a.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn test_stray_player_never_completes_a_round() {
        // An out-of-range assignment must not stand in for a missing
        // in-range player: two entries, but player 1 still has no rank.
        let mut a = RoundAssignment::new();
        a.toggle(p(5), r(1));
        a.toggle(p(0), r(2));

        assert_eq!(a.len(), 2);
        assert!(!a.is_complete(2));
        assert_eq!(a.to_record(2), None);

        // Filling the real gap completes the round; the stray entry is
        // simply not part of the densified record.
        a.toggle(p(5), r(1));
        a.toggle(p(1), r(1));
        assert!(a.is_complete(2));
        let record = a.to_record(2).unwrap();
        assert_eq!(record[p(0)], r(2));
        assert_eq!(record[p(1)], r(1));
    }

    #[test]
    fn test_ranks_stay_unique() {
        let mut a = RoundAssignment::new();
        // Chain of evictions: every rank ends up held by exactly one player.
        a.toggle(p(0), r(1));
        a.toggle(p(1), r(2));
        a.toggle(p(2), r(1));
        a.toggle(p(0), r(2));

        let held: Vec<_> = a.iter().collect();
        assert_eq!(held.len(), 2);
        assert_eq!(a.holder_of(r(1)), Some(p(2)));
        assert_eq!(a.holder_of(r(2)), Some(p(0)));
        assert_eq!(a.rank_of(p(1)), None);
    }
}
