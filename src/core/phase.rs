//! The discrete stages of the guided game flow.

use serde::{Deserialize, Serialize};

/// The current screen of the guided flow.
///
/// Transitions are driven entirely by [`crate::session::GameSession`]
/// action handlers; the presentation layer renders whatever phase the
/// session is in and never moves between phases on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Choosing round and player counts.
    Setup,
    /// The how-to-play screen, reachable from setup.
    Rules,
    /// Editing the suggested player names.
    NameEntry,
    /// Assigning ranks for the current round.
    Playing,
    /// Short animated interstitial between rounds; auto-advances back
    /// to `Playing`.
    Transition,
    /// The every-third-round leaderboard.
    InterimLeaderboard,
    /// Final standings. Terminal until "play again" or "new game".
    Finished,
}

impl GamePhase {
    /// Whether the elapsed-time display ticks in this phase.
    ///
    /// The timer runs from game start through every in-game screen and
    /// freezes once the final round is confirmed.
    #[must_use]
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            GamePhase::Playing | GamePhase::Transition | GamePhase::InterimLeaderboard
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_phases() {
        assert!(GamePhase::Playing.is_timed());
        assert!(GamePhase::Transition.is_timed());
        assert!(GamePhase::InterimLeaderboard.is_timed());

        assert!(!GamePhase::Setup.is_timed());
        assert!(!GamePhase::Rules.is_timed());
        assert!(!GamePhase::NameEntry.is_timed());
        assert!(!GamePhase::Finished.is_timed());
    }
}
