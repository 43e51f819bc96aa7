//! Shared event types and serialization for the Polymorphia simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! The core simulation emits these records; anything downstream (log files,
//! batch statistics, viewers) only needs to depend on this crate.

pub mod event;
pub mod snapshot;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export event types
pub use event::*;

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, CharacterSnapshot, FoodSnapshot, MazeSnapshot, PopulationCounts,
    RoomSnapshot,
};
