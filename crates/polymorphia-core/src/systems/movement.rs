//! Movement
//!
//! Moving relocates a character to a random neighbor of its room and costs
//! `move_cost`. A room without neighbors makes the move a no-op that costs
//! nothing. Fleeing is a move plus `flee_penalty`, charged even when there
//! was nowhere to go.

use polymorphia_events::DeathSubtype;

use super::context::TurnContext;
use crate::components::{CharacterId, RoomId};
use crate::events::recorder::{self, MoveRecord};

/// Moves a character to a random neighbor. Returns the new room, if any.
pub fn move_character(ctx: &mut TurnContext<'_>, mover: CharacterId) -> Option<RoomId> {
    relocate(ctx, mover, false)
}

/// Moves a character away and charges the flee penalty.
pub fn flee(ctx: &mut TurnContext<'_>, mover: CharacterId) -> Option<RoomId> {
    relocate(ctx, mover, true)
}

fn relocate(ctx: &mut TurnContext<'_>, mover: CharacterId, fleeing: bool) -> Option<RoomId> {
    let (name, from) = {
        let character = ctx.maze.character(mover)?;
        (character.name.clone(), character.room)
    };
    let destination = ctx.maze.random_neighbor(from, &mut *ctx.rng);

    let mut cost = 0.0;
    if let Some(to) = destination {
        if ctx.maze.relocate(mover, to).is_err() {
            return None;
        }
        tracing::info!(
            turn = ctx.turn,
            "{} moved from {} to {}",
            name,
            ctx.maze.room_name(from),
            ctx.maze.room_name(to)
        );
        cost += ctx.rules.move_cost;
    } else {
        tracing::warn!(
            turn = ctx.turn,
            character = %name,
            "{} has no neighbors!",
            ctx.maze.room_name(from)
        );
    }
    if fleeing {
        cost += ctx.rules.flee_penalty;
    }

    let died = cost > 0.0
        && ctx
            .maze
            .character_mut(mover)
            .map_or(false, |c| c.lose_health(cost));

    let record = match (destination, fleeing) {
        (Some(to), false) => MoveRecord::Travel { to },
        (Some(to), true) => MoveRecord::Flee { to },
        (None, _) => MoveRecord::Blocked,
    };
    recorder::record_move(ctx.events, ctx.turn, ctx.maze, mover, from, record, cost);

    if died {
        tracing::info!(turn = ctx.turn, character = %name, "{} just died!", name);
        let trigger = if fleeing { "flee" } else { "move" };
        recorder::record_death(
            ctx.events,
            ctx.turn,
            ctx.maze,
            mover,
            DeathSubtype::Exhausted,
            trigger,
        );
    }

    destination
}
