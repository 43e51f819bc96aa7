//! Statistics Output
//!
//! Collects per-game and batch statistics for analysis.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use polymorphia_events::Event;

use crate::error::Result;
use crate::systems::Outcome;

/// Summary of a single game
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub game: usize,
    pub turns: u64,
    pub outcome: Outcome,
    pub survivors: Vec<String>,
}

/// Win and tie shares over a batch of games
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutcomeRatios {
    pub adventurers: f64,
    pub creatures: f64,
    pub tie: f64,
}

/// Overall batch statistics
#[derive(Debug, Clone, Serialize)]
pub struct GameStats {
    pub games: usize,
    pub total_turns: u64,
    pub average_turns: f64,
    pub longest_game: u64,
    pub total_events: usize,
    pub events_by_type: BTreeMap<String, usize>,
    pub wins: BTreeMap<String, usize>,
    pub ratios: OutcomeRatios,
    pub history: Vec<GameSummary>,
}

/// Accumulates statistics across games
#[derive(Debug, Default)]
pub struct StatsCollector {
    pub total_events: usize,
    pub events_by_type: BTreeMap<String, usize>,
    pub history: Vec<GameSummary>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record events emitted during play
    pub fn record_events(&mut self, events: &[Event]) {
        for event in events {
            self.total_events += 1;
            let type_name = format!("{:?}", event.event_type).to_lowercase();
            *self.events_by_type.entry(type_name).or_insert(0) += 1;
        }
    }

    /// Record a finished game
    pub fn record_game(&mut self, turns: u64, outcome: Outcome, survivors: Vec<String>) {
        self.history.push(GameSummary {
            game: self.history.len() + 1,
            turns,
            outcome,
            survivors,
        });
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.history.iter().filter(|g| g.outcome == outcome).count()
    }

    /// Generate final statistics
    pub fn generate_stats(&self) -> GameStats {
        let games = self.history.len();
        let total_turns: u64 = self.history.iter().map(|g| g.turns).sum();
        let share = |n: usize| if games > 0 { n as f64 / games as f64 } else { 0.0 };

        let adventurers = self.count(Outcome::AdventurersWon);
        let creatures = self.count(Outcome::CreaturesWon);
        let ties = self.count(Outcome::NoWinner);

        let mut wins = BTreeMap::new();
        wins.insert(Outcome::AdventurersWon.as_str().to_string(), adventurers);
        wins.insert(Outcome::CreaturesWon.as_str().to_string(), creatures);
        wins.insert(Outcome::NoWinner.as_str().to_string(), ties);

        GameStats {
            games,
            total_turns,
            average_turns: if games > 0 {
                total_turns as f64 / games as f64
            } else {
                0.0
            },
            longest_game: self.history.iter().map(|g| g.turns).max().unwrap_or(0),
            total_events: self.total_events,
            events_by_type: self.events_by_type.clone(),
            wins,
            ratios: OutcomeRatios {
                adventurers: share(adventurers),
                creatures: share(creatures),
                tie: share(ties),
            },
            history: self.history.clone(),
        }
    }
}

/// Write statistics as pretty JSON
pub fn write_stats(stats: &GameStats, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymorphia_events::fixtures;

    #[test]
    fn test_stats_collector_new() {
        let collector = StatsCollector::new();
        assert_eq!(collector.total_events, 0);
        assert!(collector.events_by_type.is_empty());

        let stats = collector.generate_stats();
        assert_eq!(stats.games, 0);
        assert_eq!(stats.average_turns, 0.0);
        assert_eq!(stats.ratios.adventurers, 0.0);
    }

    #[test]
    fn test_events_by_type() {
        let mut collector = StatsCollector::new();
        collector.record_events(&fixtures::sample_events());

        assert_eq!(collector.total_events, 10);
        assert_eq!(collector.events_by_type["movement"], 3);
        assert_eq!(collector.events_by_type["conflict"], 2);
        assert_eq!(collector.events_by_type["death"], 2);
    }

    #[test]
    fn test_outcome_ratios() {
        let mut collector = StatsCollector::new();
        collector.record_game(3, Outcome::AdventurersWon, vec!["Bilbo".into()]);
        collector.record_game(5, Outcome::CreaturesWon, vec!["Demon".into()]);
        collector.record_game(4, Outcome::CreaturesWon, vec!["Ogre".into()]);
        collector.record_game(8, Outcome::NoWinner, vec![]);

        let stats = collector.generate_stats();
        assert_eq!(stats.games, 4);
        assert_eq!(stats.total_turns, 20);
        assert_eq!(stats.average_turns, 5.0);
        assert_eq!(stats.longest_game, 8);
        assert_eq!(stats.wins["creatures"], 2);
        assert_eq!(stats.ratios.adventurers, 0.25);
        assert_eq!(stats.ratios.creatures, 0.5);
        assert_eq!(stats.ratios.tie, 0.25);
        assert_eq!(stats.history[3].game, 4);
    }

    #[test]
    fn test_write_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let mut collector = StatsCollector::new();
        collector.record_game(2, Outcome::AdventurersWon, vec![]);

        write_stats(&collector.generate_stats(), &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"adventurers_won\""));
        assert!(json.contains("\"games\": 1"));
    }
}
