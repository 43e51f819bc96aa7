//! Event Recording and Logging

pub mod logger;
pub mod recorder;

pub use logger::EventLogger;
pub use recorder::{actor_snapshot, FightRecord, MoveRecord, TurnEvents};
