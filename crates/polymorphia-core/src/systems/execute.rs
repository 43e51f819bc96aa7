//! Action Execution

use super::combat::fight;
use super::context::TurnContext;
use super::eating::{eat, eat_all};
use super::movement::{flee, move_character};
use crate::actions::Action;
use crate::components::CharacterId;

/// Applies one action taken by `actor`.
pub fn execute(ctx: &mut TurnContext<'_>, actor: CharacterId, action: Action) {
    match action {
        Action::Fight { opponent } => {
            fight(ctx, actor, opponent);
        }
        Action::FightAll { opponents } => {
            // Runs to the end even if the demon dies mid-sweep
            for opponent in opponents {
                fight(ctx, actor, opponent);
            }
        }
        Action::Eat => {
            eat(ctx, actor);
        }
        Action::EatAll => {
            eat_all(ctx, actor);
        }
        Action::Move => {
            move_character(ctx, actor);
        }
        Action::Flee => {
            flee(ctx, actor);
        }
        Action::Passive => {
            if let Some(c) = ctx.maze.character(actor) {
                tracing::trace!(turn = ctx.turn, "Doing nothing for action for {}", c.name);
            }
        }
    }
}
