//! Maze Setup
//!
//! Layouts, population distribution, factories and the maze builder.

pub mod builder;
pub mod distribution;
pub mod factories;
pub mod layout;

pub use builder::{build_from_config, MazeBuilder};
pub use distribution::{DistributionPolicy, Distributor};
pub use factories::{CharacterFactory, FoodFactory};
pub use layout::{build_fully_connected, build_grid};
