//! Total-score ordering with the backward-chronological tie-break.
//!
//! ## Ordering rules
//!
//! 1. Sum each player's rank values over all recorded rounds; sort
//!    ascending (rank 1 is best, so the lowest total wins).
//! 2. Equal totals are broken by comparing per-round rank sequences from
//!    the most recent round backward: the first round that differs decides,
//!    lower rank first. A missing value compares as worst-possible.
//! 3. Fully identical sequences stay in stable-sort order (player index).
//!
//! The same function serves the every-third-round leaderboard (partial
//! history) and the final standings (complete history).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::{PlayerId, Rank};
use crate::round::ScoreHistory;

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Who this row belongs to.
    pub player: PlayerId,
    /// Sum of the player's rank values over all recorded rounds.
    pub total: u32,
    /// The player's rank in each recorded round, in play order.
    pub per_round: Vec<Rank>,
}

/// Compute the leaderboard. Index 0 is the current winner.
#[must_use]
pub fn standings(players_count: usize, history: &ScoreHistory) -> Vec<Standing> {
    let totals = history.totals(players_count);

    let mut rows: Vec<Standing> = PlayerId::all(players_count)
        .map(|player| Standing {
            player,
            total: totals[player],
            per_round: history.player_ranks(player),
        })
        .collect();

    // sort_by is stable, so identical sequences keep player-index order.
    rows.sort_by(|a, b| {
        a.total
            .cmp(&b.total)
            .then_with(|| compare_recent_rounds(&a.per_round, &b.per_round))
    });

    rows
}

/// Tie-break comparison: scan from the most recent round backward and
/// decide on the first round where the two sequences differ. Absent
/// values (indices beyond a sequence) compare as worst-possible.
fn compare_recent_rounds(a: &[Rank], b: &[Rank]) -> Ordering {
    let len = a.len().max(b.len());
    for i in (0..len).rev() {
        let av = a.get(i).map_or(u32::MAX, |r| r.points());
        let bv = b.get(i).map_or(u32::MAX, |r| r.points());
        match av.cmp(&bv) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}
