//! Snapshot Types
//!
//! Serialization structs for maze snapshots and state output.
//!
//! Snapshots capture the complete state of a game at a point in time,
//! used for analysis and debugging.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// A food item lying in a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    pub name: String,
    pub health_value: f64,
}

/// Room snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub name: String,
    #[serde(default)]
    pub neighbors: Vec<String>,
    /// Names of all occupants in arrival order, dead ones included
    #[serde(default)]
    pub occupants: Vec<String>,
    /// Food in arrival order; the first item is eaten next
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub food: Vec<FoodSnapshot>,
}

impl RoomSnapshot {
    /// Creates a new RoomSnapshot with no neighbors or contents.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Vec::new(),
            occupants: Vec::new(),
            food: Vec::new(),
        }
    }
}

/// Character snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub character_id: usize,
    pub name: String,
    pub variant: String,
    pub faction: String,
    pub room: String,
    pub health: f64,
    #[serde(default)]
    pub alive: bool,
}

impl CharacterSnapshot {
    /// Creates a new CharacterSnapshot with required fields.
    pub fn new(
        character_id: usize,
        name: impl Into<String>,
        variant: impl Into<String>,
        faction: impl Into<String>,
        room: impl Into<String>,
        health: f64,
    ) -> Self {
        Self {
            character_id,
            name: name.into(),
            variant: variant.into(),
            faction: faction.into(),
            room: room.into(),
            health,
            alive: health > 0.0,
        }
    }
}

/// Population totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationCounts {
    pub living_adventurers: usize,
    pub living_creatures: usize,
    pub remaining_food: usize,
}

/// Complete maze snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MazeSnapshot {
    pub snapshot_id: String,
    pub turn: u64,
    pub triggered_by: String,
    pub rooms: Vec<RoomSnapshot>,
    /// Every character ever placed, dead ones included
    pub characters: Vec<CharacterSnapshot>,
    pub population: PopulationCounts,
}

impl MazeSnapshot {
    /// Creates a new MazeSnapshot with minimal data.
    pub fn new(snapshot_id: impl Into<String>, turn: u64, triggered_by: impl Into<String>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            turn,
            triggered_by: triggered_by.into(),
            rooms: Vec::new(),
            characters: Vec::new(),
            population: PopulationCounts::default(),
        }
    }

    /// Finds a room by name.
    pub fn find_room(&self, name: &str) -> Option<&RoomSnapshot> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Finds a character by name.
    pub fn find_character(&self, name: &str) -> Option<&CharacterSnapshot> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Returns the number of living characters.
    pub fn living_character_count(&self) -> usize {
        self.characters.iter().filter(|c| c.alive).count()
    }

    /// Returns living characters in a specific room.
    pub fn characters_in_room(&self, room: &str) -> Vec<&CharacterSnapshot> {
        self.characters
            .iter()
            .filter(|c| c.room == room && c.alive)
            .collect()
    }

    /// Returns living characters belonging to a faction.
    pub fn faction_members(&self, faction: &str) -> Vec<&CharacterSnapshot> {
        self.characters
            .iter()
            .filter(|c| c.faction == faction && c.alive)
            .collect()
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the snapshot to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
