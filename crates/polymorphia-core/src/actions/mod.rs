//! Actions
//!
//! The shared action protocol. Every character decision resolves to exactly
//! one [`Action`], which the executor then applies to the maze.

use crate::components::CharacterId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fight a single opponent
    Fight { opponent: CharacterId },
    /// Fight each opponent in turn, stopping if the actor dies
    FightAll { opponents: Vec<CharacterId> },
    /// Eat the oldest food item in the room
    Eat,
    /// Eat until the room has no food left
    EatAll,
    /// Move to a random neighbor
    Move,
    /// Move to a random neighbor and pay the flee penalty
    Flee,
    /// Do nothing
    Passive,
}

impl Action {
    /// Short name used as the trigger of emitted events.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Fight { .. } => "fight",
            Action::FightAll { .. } => "fight_all",
            Action::Eat => "eat",
            Action::EatAll => "eat_all",
            Action::Move => "move",
            Action::Flee => "flee",
            Action::Passive => "passive",
        }
    }

    pub fn is_fight(&self) -> bool {
        matches!(self, Action::Fight { .. } | Action::FightAll { .. })
    }
}
