//! Teams, leagues and matchups.
//!
//! [`TeamRecord`] and [`LeagueRecord`] are the rows a case is loaded from.
//! A [`Matchup`] is what the engine actually schedules; it never looks at
//! league semantics beyond carrying the name through to the placement.

use serde::{Deserialize, Serialize};

/// A pairing of two teams to be placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matchup {
    /// First team name.
    pub team1: String,
    /// Second team name.
    pub team2: String,
    /// League the game belongs to.
    pub league: String,
}

impl Matchup {
    /// Creates a matchup.
    pub fn new(
        team1: impl Into<String>,
        team2: impl Into<String>,
        league: impl Into<String>,
    ) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            league: league.into(),
        }
    }

    /// Whether `team` plays in this matchup.
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// Both team names.
    pub fn teams(&self) -> [&str; 2] {
        [&self.team1, &self.team2]
    }
}

/// A team row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    /// Team name (unique within a case).
    pub name: String,
    /// League the team plays in.
    pub league_id: String,
}

impl TeamRecord {
    /// Creates a team row.
    pub fn new(name: impl Into<String>, league_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            league_id: league_id.into(),
        }
    }
}

/// A league row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueRecord {
    /// League identifier referenced by teams.
    pub league_id: String,
    /// Display name carried onto matchups and placements.
    pub league_name: String,
    /// Requested number of games. `None` or non-positive = all pairings.
    #[serde(default)]
    pub number_of_games: Option<i64>,
}

impl LeagueRecord {
    /// Creates a league row without a game count.
    pub fn new(league_id: impl Into<String>, league_name: impl Into<String>) -> Self {
        Self {
            league_id: league_id.into(),
            league_name: league_name.into(),
            number_of_games: None,
        }
    }

    /// Sets the requested number of games.
    pub fn with_number_of_games(mut self, games: i64) -> Self {
        self.number_of_games = Some(games);
        self
    }
}
