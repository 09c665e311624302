//! Matchup generation.
//!
//! Turns team and league rows into the ordered matchup list the engine
//! consumes. Every league plays a single round robin (all unordered
//! pairs), optionally truncated by a [`GameLimit`].
//!
//! # Ordering
//! Leagues appear in order of their first team in the team list. Within a
//! league, pairs follow combination order of the team list:
//! `(t0,t1), (t0,t2), …, (t1,t2), …`. The engine is first-fit, so this
//! order decides who gets the early slots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{LeagueRecord, Matchup, TeamRecord};

/// How many matchups each league contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameLimit {
    /// Every pairing.
    All,
    /// At most `n` pairings per league.
    Fixed(usize),
    /// A total budget divided evenly across leagues (integer division).
    SplitTotal(usize),
    /// The league's own `number_of_games` when positive, else all.
    #[default]
    FromLeague,
}

impl GameLimit {
    /// Number of pairings to keep for one league.
    fn games_for(
        &self,
        league: Option<&LeagueRecord>,
        combinations: usize,
        league_count: usize,
    ) -> usize {
        let wanted = match *self {
            GameLimit::All => combinations,
            GameLimit::Fixed(n) => n,
            GameLimit::SplitTotal(total) => total / league_count.max(1),
            GameLimit::FromLeague => league
                .and_then(|l| l.number_of_games)
                .filter(|&n| n > 0)
                .map_or(combinations, |n| usize::try_from(n).unwrap_or(usize::MAX)),
        };
        wanted.min(combinations)
    }
}

/// Generates round-robin matchups for every league that has teams.
///
/// The league name on each matchup comes from the league row; teams whose
/// league is unknown still play each other under the raw league id.
///
/// # Complexity
/// O(Σ k²) for k teams per league.
pub fn generate_matchups(
    teams: &[TeamRecord],
    leagues: &[LeagueRecord],
    limit: GameLimit,
) -> Vec<Matchup> {
    let mut order: Vec<&str> = Vec::new();
    let mut rosters: HashMap<&str, Vec<&str>> = HashMap::new();
    for t in teams {
        let roster = rosters.entry(t.league_id.as_str()).or_insert_with(|| {
            order.push(t.league_id.as_str());
            Vec::new()
        });
        roster.push(t.name.as_str());
    }

    let by_id: HashMap<&str, &LeagueRecord> =
        leagues.iter().map(|l| (l.league_id.as_str(), l)).collect();

    let mut matchups = Vec::new();
    for league_id in &order {
        let roster = &rosters[league_id];
        let league = by_id.get(league_id).copied();
        let name = league.map_or(*league_id, |l| l.league_name.as_str());

        let n = roster.len();
        let combinations = n * n.saturating_sub(1) / 2;
        let keep = limit.games_for(league, combinations, order.len());

        let pairs = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .take(keep);
        for (i, j) in pairs {
            matchups.push(Matchup::new(roster[i], roster[j], name));
        }
    }
    matchups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<TeamRecord> {
        vec![
            TeamRecord::new("A", "L2"),
            TeamRecord::new("X", "L1"),
            TeamRecord::new("B", "L2"),
            TeamRecord::new("Y", "L1"),
            TeamRecord::new("C", "L2"),
            TeamRecord::new("D", "L2"),
        ]
    }

    fn leagues() -> Vec<LeagueRecord> {
        vec![
            LeagueRecord::new("L1", "Juniors").with_number_of_games(5),
            LeagueRecord::new("L2", "Seniors").with_number_of_games(2),
        ]
    }

    fn pairs(ms: &[Matchup]) -> Vec<(String, String)> {
        ms.iter()
            .map(|m| (m.team1.clone(), m.team2.clone()))
            .collect()
    }

    #[test]
    fn test_all_combinations_in_order() {
        let ms = generate_matchups(&teams(), &leagues(), GameLimit::All);
        assert_eq!(ms.len(), 6 + 1);
        let expected: Vec<(String, String)> = [
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("X", "Y"),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        assert_eq!(pairs(&ms), expected);
        assert_eq!(ms[0].league, "Seniors");
        assert_eq!(ms[6].league, "Juniors");
    }

    #[test]
    fn test_fixed_limit() {
        let ms = generate_matchups(&teams(), &leagues(), GameLimit::Fixed(2));
        // 2 from L2, 1 (all) from L1
        assert_eq!(ms.len(), 3);
        assert_eq!(ms[1].team2, "C");
    }

    #[test]
    fn test_split_total() {
        let ms = generate_matchups(&teams(), &leagues(), GameLimit::SplitTotal(7));
        // 7 / 2 leagues = 3 per league, L1 capped at 1
        assert_eq!(ms.len(), 4);
    }

    #[test]
    fn test_from_league() {
        let ms = generate_matchups(&teams(), &leagues(), GameLimit::FromLeague);
        // L2 asks for 2, L1 asks for 5 but has only 1 pairing
        assert_eq!(ms.len(), 3);
    }

    #[test]
    fn test_from_league_non_positive_means_all() {
        let leagues = vec![
            LeagueRecord::new("L1", "Juniors").with_number_of_games(0),
            LeagueRecord::new("L2", "Seniors").with_number_of_games(-3),
        ];
        let ms = generate_matchups(&teams(), &leagues, GameLimit::FromLeague);
        assert_eq!(ms.len(), 7);
    }

    #[test]
    fn test_unknown_league_uses_id() {
        let teams = vec![TeamRecord::new("A", "Lx"), TeamRecord::new("B", "Lx")];
        let ms = generate_matchups(&teams, &[], GameLimit::FromLeague);
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].league, "Lx");
    }

    #[test]
    fn test_single_team_league() {
        let teams = vec![TeamRecord::new("Solo", "L1")];
        assert!(generate_matchups(&teams, &leagues(), GameLimit::All).is_empty());
    }

    #[test]
    fn test_game_limit_serde() {
        let limit: GameLimit = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(limit, GameLimit::All);
        let limit: GameLimit = serde_json::from_str(r#"{"split_total":84}"#).unwrap();
        assert_eq!(limit, GameLimit::SplitTotal(84));
    }
}
