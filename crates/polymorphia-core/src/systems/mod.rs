//! Simulation Systems
//!
//! Behavior, combat, movement, eating, action execution and the turn scheduler.

pub mod behavior;
pub mod combat;
pub mod context;
pub mod eating;
pub mod execute;
pub mod movement;
pub mod scheduler;

pub use behavior::decide;
pub use combat::fight;
pub use context::TurnContext;
pub use eating::{eat, eat_all};
pub use execute::execute;
pub use movement::{flee, move_character};
pub use scheduler::{Game, GameState, Outcome};
