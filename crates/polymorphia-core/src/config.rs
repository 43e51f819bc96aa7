//! Configuration System
//!
//! Loads game rules and setup from polymorphia.toml for easy adjustment
//! without recompiling. Every section and field is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::setup::DistributionPolicy;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "polymorphia.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub maze: MazeConfig,
    pub population: PopulationConfig,
    pub scheduler: SchedulerConfig,
}

/// Numeric rules of play
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Health lost by a successful move
    pub move_cost: f64,
    /// Extra health lost when fleeing, on top of the move cost
    pub flee_penalty: f64,
    /// Health lost by each fighter regardless of the dice
    pub fight_toll: f64,
    pub die_sides: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            move_cost: 0.25,
            flee_penalty: 0.25,
            fight_toll: 0.5,
            die_sides: 6,
        }
    }
}

/// Room layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    #[default]
    Grid,
    FullyConnected,
}

/// Maze shape and distribution policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub layout: LayoutKind,
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub columns: usize,
    /// Room count for fully connected layouts
    pub rooms: usize,
    pub distribution: DistributionPolicy,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Grid,
            rows: 3,
            columns: 3,
            rooms: 4,
            distribution: DistributionPolicy::Sequential,
        }
    }
}

/// Starting population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub knights: usize,
    pub cowards: usize,
    pub gluttons: usize,
    /// Plain adventurers
    pub adventurers: usize,
    /// Creatures, including the demon when `include_demon` is set
    pub creatures: usize,
    pub include_demon: bool,
    pub food: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            knights: 0,
            cowards: 0,
            gluttons: 0,
            adventurers: 2,
            creatures: 4,
            include_demon: true,
            food: 10,
        }
    }
}

/// Turn scheduling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Skip characters that died earlier in the same turn
    pub skip_dead_actors: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            skip_dead_actors: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a path, or use defaults if it cannot be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Could not load config, using defaults"
            );
            Self::default()
        })
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rules.move_cost, 0.25);
        assert_eq!(config.rules.flee_penalty, 0.25);
        assert_eq!(config.rules.fight_toll, 0.5);
        assert_eq!(config.rules.die_sides, 6);
        assert!(config.scheduler.skip_dead_actors);
        assert_eq!(config.maze.distribution, DistributionPolicy::Sequential);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [maze]
            layout = "fully_connected"
            rooms = 6
            distribution = "random"

            [population]
            knights = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.maze.layout, LayoutKind::FullyConnected);
        assert_eq!(config.maze.rooms, 6);
        assert_eq!(config.maze.rows, 3);
        assert_eq!(config.maze.distribution, DistributionPolicy::Random);
        assert_eq!(config.population.knights, 2);
        assert_eq!(config.population.creatures, 4);
        assert_eq!(config.rules, RulesConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = Config::from_toml("[rules]\nmove_cost = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[rules]\nfight_toll = 1.0\n\n[scheduler]\nskip_dead_actors = false"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.rules.fight_toll, 1.0);
        assert!(!config.scheduler.skip_dead_actors);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(Config::load(&path), Err(ConfigError::Io(_))));
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let config = Config::from_toml(include_str!("../../../polymorphia.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
