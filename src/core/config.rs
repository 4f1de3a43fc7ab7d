//! Game configuration: round count and player count.
//!
//! Both values are chosen on the setup screen and are immutable once a game
//! starts; starting a brand-new game returns to setup where they become
//! editable again. Setters clamp to the valid ranges at the point of
//! mutation, so a `GameConfig` is always valid by construction.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Valid round counts.
pub const ROUNDS_RANGE: RangeInclusive<u32> = 3..=10;

/// Valid player counts.
pub const PLAYERS_RANGE: RangeInclusive<usize> = 2..=6;

/// Session configuration, fixed for the duration of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rounds_total: u32,
    players_count: usize,
}

impl Default for GameConfig {
    /// The setup screen's starting values: 5 rounds, 3 players.
    fn default() -> Self {
        Self {
            rounds_total: 5,
            players_count: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration, clamping both values to their valid ranges.
    #[must_use]
    pub fn new(rounds_total: u32, players_count: usize) -> Self {
        Self {
            rounds_total: rounds_total.clamp(*ROUNDS_RANGE.start(), *ROUNDS_RANGE.end()),
            players_count: players_count.clamp(*PLAYERS_RANGE.start(), *PLAYERS_RANGE.end()),
        }
    }

    /// Get the configured number of rounds.
    #[must_use]
    pub fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    /// Get the configured number of players.
    #[must_use]
    pub fn players_count(&self) -> usize {
        self.players_count
    }

    /// Set the round count, clamped to [`ROUNDS_RANGE`].
    pub fn set_rounds(&mut self, rounds: u32) {
        self.rounds_total = rounds.clamp(*ROUNDS_RANGE.start(), *ROUNDS_RANGE.end());
    }

    /// Set the player count, clamped to [`PLAYERS_RANGE`].
    pub fn set_players(&mut self, players: usize) {
        self.players_count = players.clamp(*PLAYERS_RANGE.start(), *PLAYERS_RANGE.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.rounds_total(), 5);
        assert_eq!(config.players_count(), 3);
    }

    #[test]
    fn test_new_clamps() {
        let config = GameConfig::new(100, 1);
        assert_eq!(config.rounds_total(), 10);
        assert_eq!(config.players_count(), 2);

        let config = GameConfig::new(0, 99);
        assert_eq!(config.rounds_total(), 3);
        assert_eq!(config.players_count(), 6);
    }

    #[test]
    fn test_setters_clamp() {
        let mut config = GameConfig::default();

        config.set_rounds(2);
        assert_eq!(config.rounds_total(), 3);
        config.set_rounds(11);
        assert_eq!(config.rounds_total(), 10);
        config.set_rounds(7);
        assert_eq!(config.rounds_total(), 7);

        config.set_players(1);
        assert_eq!(config.players_count(), 2);
        config.set_players(7);
        assert_eq!(config.players_count(), 6);
        config.set_players(4);
        assert_eq!(config.players_count(), 4);
    }
}
