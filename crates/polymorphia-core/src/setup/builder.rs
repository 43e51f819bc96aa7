//! Maze Builder
//!
//! A builder value threaded through each construction step. Every step takes
//! the builder by value and hands it back, so the order of steps is visible
//! at the call site:
//!
//! ```
//! use polymorphia_core::rng::SimRng;
//! use polymorphia_core::setup::MazeBuilder;
//!
//! # fn main() -> polymorphia_core::Result<()> {
//! let mut rng = SimRng::seed_from_u64(42);
//! let maze = MazeBuilder::new(&mut rng)
//!     .grid(3, 3)?
//!     .distribute_sequentially()
//!     .create_and_add_adventurers(2)?
//!     .create_and_add_creatures(4, true)?
//!     .create_and_add_food(10)?
//!     .build()?;
//! assert_eq!(maze.size(), 9);
//! # Ok(())
//! # }
//! ```
//!
//! A failed step leaves nothing to recover; start a fresh builder.

use super::distribution::{DistributionPolicy, Distributor};
use super::factories::{CharacterFactory, FoodFactory};
use super::layout;
use crate::components::{CharacterSpec, Food, Maze, Placeable, RoomId};
use crate::config::{Config, LayoutKind};
use crate::error::{MazeError, Result};
use crate::rng::RandomSource;

pub struct MazeBuilder<'a> {
    maze: Maze,
    rng: &'a mut dyn RandomSource,
    distributor: Distributor,
    characters: CharacterFactory,
    food: FoodFactory,
}

impl<'a> MazeBuilder<'a> {
    /// Starts an empty maze. Distribution defaults to sequential.
    pub fn new(rng: &'a mut dyn RandomSource) -> Self {
        Self {
            maze: Maze::new(),
            rng,
            distributor: Distributor::default(),
            characters: CharacterFactory::new(),
            food: FoodFactory::new(),
        }
    }

    fn room_id(&self, name: &str) -> Result<RoomId> {
        self.maze
            .room_by_name(name)
            .map(|r| r.id)
            .ok_or_else(|| {
                MazeError::InvalidArgument(format!("no room named {:?} in this maze", name))
            })
    }

    // ------------------------------------------------------------------
    // Topology
    // ------------------------------------------------------------------

    pub fn add_room(mut self, name: impl Into<String>) -> Self {
        self.maze.add_room(name);
        self
    }

    /// Connects two rooms by name.
    pub fn connect(mut self, a: &str, b: &str) -> Result<Self> {
        let (a, b) = (self.room_id(a)?, self.room_id(b)?);
        self.maze.connect(a, b)?;
        Ok(self)
    }

    pub fn grid(mut self, rows: usize, columns: usize) -> Result<Self> {
        layout::build_grid(&mut self.maze, rows, columns)?;
        Ok(self)
    }

    pub fn fully_connected(mut self, count: usize) -> Result<Self> {
        layout::build_fully_connected(&mut self.maze, count)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Distribution
    // ------------------------------------------------------------------

    pub fn distribute_randomly(mut self) -> Self {
        self.distributor.set_policy(DistributionPolicy::Random);
        self
    }

    pub fn distribute_sequentially(mut self) -> Self {
        self.distributor.set_policy(DistributionPolicy::Sequential);
        self
    }

    pub fn distribution(mut self, policy: DistributionPolicy) -> Self {
        self.distributor.set_policy(policy);
        self
    }

    fn distribute(mut self, items: Vec<Placeable>) -> Result<Self> {
        let targets: Vec<RoomId> = self.maze.rooms().iter().map(|r| r.id).collect();
        self.distributor
            .distribute(&mut self.maze, items, &targets, &mut *self.rng)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Population
    // ------------------------------------------------------------------

    /// Places a character into the named room.
    pub fn place_character(mut self, character: CharacterSpec, room: &str) -> Result<Self> {
        let room = self.room_id(room)?;
        self.maze.place_character(character, room)?;
        Ok(self)
    }

    /// Places a food item into the named room.
    pub fn place_food(mut self, food: Food, room: &str) -> Result<Self> {
        let room = self.room_id(room)?;
        self.maze.place_food(food, room)?;
        Ok(self)
    }

    /// Distributes the given characters.
    pub fn add_characters(self, characters: Vec<CharacterSpec>) -> Result<Self> {
        self.distribute(characters.into_iter().map(Placeable::from).collect())
    }

    /// Distributes the given food.
    pub fn add_food(self, food: Vec<Food>) -> Result<Self> {
        self.distribute(food.into_iter().map(Placeable::from).collect())
    }

    pub fn create_and_add_adventurers(mut self, count: usize) -> Result<Self> {
        let adventurers = self.characters.adventurers(count);
        self.add_characters(adventurers)
    }

    pub fn create_and_add_adventurer_mix(
        mut self,
        knights: usize,
        cowards: usize,
        gluttons: usize,
        regular: usize,
    ) -> Result<Self> {
        let mix = self
            .characters
            .adventurer_mix(knights, cowards, gluttons, regular);
        self.add_characters(mix)
    }

    /// Creates `count` creatures; with `include_demon` one of them is a Demon.
    pub fn create_and_add_creatures(mut self, count: usize, include_demon: bool) -> Result<Self> {
        let creatures = self.characters.creatures(count, include_demon);
        self.add_characters(creatures)
    }

    pub fn create_and_add_food(mut self, count: usize) -> Result<Self> {
        let food = self.food.food_items(count);
        self.add_food(food)
    }

    pub fn create_and_add_named_food<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        let food = self.food.named_food(names);
        self.add_food(food)
    }

    /// Finishes construction.
    pub fn build(self) -> Result<Maze> {
        if self.maze.size() == 0 {
            return Err(MazeError::InvalidState("a maze needs at least one room".to_string()));
        }
        Ok(self.maze)
    }
}

/// Builds a maze from the `[maze]` and `[population]` config sections.
pub fn build_from_config(config: &Config, rng: &mut dyn RandomSource) -> Result<Maze> {
    let population = &config.population;
    let builder = MazeBuilder::new(rng).distribution(config.maze.distribution);
    let builder = match config.maze.layout {
        LayoutKind::Grid => builder.grid(config.maze.rows, config.maze.columns)?,
        LayoutKind::FullyConnected => builder.fully_connected(config.maze.rooms)?,
    };
    builder
        .create_and_add_adventurer_mix(
            population.knights,
            population.cowards,
            population.gluttons,
            population.adventurers,
        )?
        .create_and_add_creatures(population.creatures, population.include_demon)?
        .create_and_add_food(population.food)?
        .build()
}
