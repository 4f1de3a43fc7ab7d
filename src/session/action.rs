//! The action surface consumed by the presentation layer.
//!
//! Every user interaction maps to one `SessionAction`. A UI can either
//! call the [`GameSession`] methods directly or funnel events through
//! [`GameSession::apply`]; both routes share the same phase guards and
//! no-op semantics.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::core::{PlayerId, Rank};
use super::state::GameSession;

/// A discrete user action against the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    /// Change the configured round count (setup screen).
    SetRounds(u32),
    /// Change the configured player count (setup screen).
    SetPlayerCount(usize),
    /// Open the rules screen.
    ShowRules,
    /// Return from the rules screen to setup.
    BackToSetup,
    /// Confirm configuration and move to name entry.
    BeginNameEntry,
    /// Edit a player's display name (name-entry screen).
    SetPlayerName(PlayerId, String),
    /// Start the game and the clock.
    StartGame,
    /// Toggle a rank for a player in the current round.
    ToggleAssign(PlayerId, Rank),
    /// Clear the in-progress assignment.
    ResetRound,
    /// Confirm the current round (ignored while incomplete).
    ConfirmRound,
    /// Leave the interim leaderboard.
    ContinueFromLeaderboard,
    /// Replay with the same configuration and names.
    PlayAgain,
    /// Discard everything and return to setup.
    NewGame,
}

impl GameSession {
    /// Apply a user action at the given instant.
    ///
    /// Actions that do not belong to the current phase are silently
    /// ignored, matching the individual handlers.
    pub fn apply(&mut self, action: SessionAction, now: Instant) {
        match action {
            SessionAction::SetRounds(rounds) => self.set_rounds(rounds),
            SessionAction::SetPlayerCount(players) => self.set_player_count(players),
            SessionAction::ShowRules => self.show_rules(),
            SessionAction::BackToSetup => self.back_to_setup(),
            SessionAction::BeginNameEntry => self.begin_name_entry(),
            SessionAction::SetPlayerName(player, name) => self.set_player_name(player, name),
            SessionAction::StartGame => self.start_game(now),
            SessionAction::ToggleAssign(player, rank) => self.toggle_assign(player, rank),
            SessionAction::ResetRound => self.reset_round(),
            SessionAction::ConfirmRound => self.confirm_round(now),
            SessionAction::ContinueFromLeaderboard => self.continue_from_leaderboard(),
            SessionAction::PlayAgain => self.play_again(now),
            SessionAction::NewGame => self.new_game(),
        }
    }
}
