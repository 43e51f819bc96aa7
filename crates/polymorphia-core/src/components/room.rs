//! Room Components
//!
//! A room is a node of the maze graph. It lists its neighbors, the ids of
//! the characters that have entered it and the food lying in it.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::character::CharacterId;
use super::food::Food;
use crate::error::{MazeError, Result};

/// Index of a room in the maze's room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    neighbors: Vec<RoomId>,
    /// Arrival order; dead characters stay listed
    occupants: Vec<CharacterId>,
    /// Oldest item first
    food: VecDeque<Food>,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: Vec::new(),
            occupants: Vec::new(),
            food: VecDeque::new(),
        }
    }

    pub fn neighbors(&self) -> &[RoomId] {
        &self.neighbors
    }

    pub fn occupants(&self) -> &[CharacterId] {
        &self.occupants
    }

    pub fn food(&self) -> impl Iterator<Item = &Food> {
        self.food.iter()
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    pub fn has_food(&self) -> bool {
        !self.food.is_empty()
    }

    pub fn is_neighbor(&self, other: RoomId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Adds a one-way adjacency. Duplicates are tolerated.
    pub(crate) fn add_neighbor(&mut self, neighbor: RoomId) -> Result<()> {
        if neighbor == self.id {
            return Err(MazeError::InvalidArgument(format!(
                "room {} cannot be its own neighbor",
                self.name
            )));
        }
        self.neighbors.push(neighbor);
        Ok(())
    }

    pub(crate) fn add_occupant(&mut self, character: CharacterId) {
        self.occupants.push(character);
    }

    pub(crate) fn remove_occupant(&mut self, character: CharacterId) {
        self.occupants.retain(|&c| c != character);
    }

    pub(crate) fn add_food(&mut self, food: Food) {
        self.food.push_back(food);
    }

    /// Removes and returns the oldest food item.
    pub(crate) fn take_food(&mut self) -> Option<Food> {
        self.food.pop_front()
    }
}
