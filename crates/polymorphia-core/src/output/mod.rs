//! Output Generation
//!
//! Maze snapshots and game statistics.

pub mod snapshot;
pub mod stats;

pub use snapshot::*;
pub use stats::*;
