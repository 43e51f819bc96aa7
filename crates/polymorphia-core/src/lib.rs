//! Polymorphia Simulation Engine
//!
//! Adventurers and creatures roam a maze of connected rooms, fighting, fleeing
//! and eating until one side (or both) is wiped out.
//!
//! Randomness is injected through [`RandomSource`], so a game can be driven by
//! a seeded [`SimRng`] for reproducible runs or a [`ScriptedRandom`] for exact
//! scenarios.

pub mod actions;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod rng;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::Config;
pub use error::{MazeError, Result};
pub use rng::{RandomSource, ScriptedRandom, SimRng};
pub use setup::{build_from_config, MazeBuilder};
pub use systems::{Game, GameState, Outcome};
