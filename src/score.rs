//! Win/draw tallies per matchup. A matchup is a board size plus the two
//! player names; entries live independently of any single game and
//! survive resets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::{GameOutcome, Player};

/// Scoreboard partition key: board dimensions and both player names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub rows: usize,
    pub cols: usize,
    pub red_name: String,
    pub yellow_name: String,
}

impl MatchKey {
    /// Key string used in the persisted store, e.g. `"6x7|Player 1|Player 2"`.
    pub fn as_store_key(&self) -> String {
        format!(
            "{}x{}|{}|{}",
            self.rows, self.cols, self.red_name, self.yellow_name
        )
    }
}

/// Tallies for one matchup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub rows: usize,
    pub cols: usize,
    pub red_name: String,
    pub yellow_name: String,
    pub wins_red: u32,
    pub wins_yellow: u32,
    pub draws: u32,
}

impl ScoreEntry {
    fn zeroed(key: &MatchKey) -> Self {
        ScoreEntry {
            rows: key.rows,
            cols: key.cols,
            red_name: key.red_name.clone(),
            yellow_name: key.yellow_name.clone(),
            wins_red: 0,
            wins_yellow: 0,
            draws: 0,
        }
    }
}

/// All matchup tallies, keyed by [`MatchKey::as_store_key`]. Serializes
/// to the host's persisted JSON blob shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(default)]
    matchups: HashMap<String, ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for a matchup, creating a zeroed one on first access.
    pub fn entry(&mut self, key: &MatchKey) -> &ScoreEntry {
        self.matchups
            .entry(key.as_store_key())
            .or_insert_with(|| ScoreEntry::zeroed(key))
    }

    pub fn get(&self, key: &MatchKey) -> Option<&ScoreEntry> {
        self.matchups.get(&key.as_store_key())
    }

    /// Count a finished game for the matchup.
    pub fn record_result(&mut self, key: &MatchKey, outcome: GameOutcome) {
        let entry = self
            .matchups
            .entry(key.as_store_key())
            .or_insert_with(|| ScoreEntry::zeroed(key));
        match outcome {
            GameOutcome::Winner(Player::Red) => entry.wins_red += 1,
            GameOutcome::Winner(Player::Yellow) => entry.wins_yellow += 1,
            GameOutcome::Draw => entry.draws += 1,
        }
    }

    /// Zero the tallies for one matchup, leaving other matchups alone.
    pub fn reset_current(&mut self, key: &MatchKey) {
        let entry = self
            .matchups
            .entry(key.as_store_key())
            .or_insert_with(|| ScoreEntry::zeroed(key));
        entry.wins_red = 0;
        entry.wins_yellow = 0;
        entry.draws = 0;
    }

    /// Serialize the whole store for host persistence.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("scoreboard serializes")
    }

    /// Restore a store from a persisted blob.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
