//! Snapshot Generation
//!
//! Captures the full state of a maze as a [`MazeSnapshot`].

use std::fs;
use std::path::Path;

use polymorphia_events::{
    generate_snapshot_id, CharacterSnapshot, FoodSnapshot, MazeSnapshot, PopulationCounts,
    RoomSnapshot,
};

use crate::components::Maze;
use crate::error::Result;

/// Hands out snapshot ids
#[derive(Debug)]
pub struct SnapshotGenerator {
    next_snapshot_id: u64,
}

impl Default for SnapshotGenerator {
    fn default() -> Self {
        Self {
            next_snapshot_id: 1,
        }
    }
}

impl SnapshotGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let id = generate_snapshot_id(self.next_snapshot_id);
        self.next_snapshot_id += 1;
        id
    }

    pub fn snapshot_count(&self) -> u64 {
        self.next_snapshot_id - 1
    }

    /// Generates a snapshot with the next id.
    pub fn generate(&mut self, maze: &Maze, turn: u64, triggered_by: &str) -> MazeSnapshot {
        let id = self.next_id();
        generate_snapshot(maze, id, turn, triggered_by)
    }
}

/// Generate a complete maze snapshot
pub fn generate_snapshot(
    maze: &Maze,
    snapshot_id: impl Into<String>,
    turn: u64,
    triggered_by: &str,
) -> MazeSnapshot {
    let mut snapshot = MazeSnapshot::new(snapshot_id, turn, triggered_by);

    snapshot.rooms = maze
        .rooms()
        .iter()
        .map(|room| RoomSnapshot {
            name: room.name.clone(),
            neighbors: room
                .neighbors()
                .iter()
                .map(|&n| maze.room_name(n).to_string())
                .collect(),
            occupants: room
                .occupants()
                .iter()
                .filter_map(|&id| maze.character(id))
                .map(|c| c.name.clone())
                .collect(),
            food: room
                .food()
                .map(|f| FoodSnapshot {
                    name: f.name.clone(),
                    health_value: f.health_value,
                })
                .collect(),
        })
        .collect();

    snapshot.characters = maze
        .characters()
        .iter()
        .map(|c| {
            CharacterSnapshot::new(
                c.id.0,
                c.name.clone(),
                c.variant.as_str(),
                c.faction().as_str(),
                maze.room_name(c.room),
                c.health(),
            )
        })
        .collect();

    snapshot.population = PopulationCounts {
        living_adventurers: maze.living_adventurers().len(),
        living_creatures: maze.living_creatures().len(),
        remaining_food: maze.total_food(),
    };

    snapshot
}

/// Write a snapshot as pretty JSON
pub fn write_snapshot(snapshot: &MazeSnapshot, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, snapshot.to_json_pretty()?)?;
    Ok(())
}
