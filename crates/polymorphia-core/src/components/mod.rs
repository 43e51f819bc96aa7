//! Simulation Components
//!
//! The nouns of the game: rooms, characters, food and the maze that holds them.

pub mod character;
pub mod food;
pub mod maze;
pub mod room;

pub use character::{initial_health, Character, CharacterId, CharacterSpec, Faction, Variant};
pub use food::{Food, DEFAULT_FOOD_HEALTH_VALUE};
pub use maze::{Maze, Placeable};
pub use room::{Room, RoomId};
