//! Behavior Resolution
//!
//! Maps a character and the state of its room to one [`Action`]. Each
//! variant has its own rule; all of them are pure reads of the maze apart
//! from the random target pick of a plain adventurer or knight.
//!
//! | Variant    | Rule |
//! |------------|------|
//! | Adventurer | fight a random creature if healthiest adventurer present, else eat, else move |
//! | Knight     | fight a random creature whenever one is present, else eat, else move |
//! | Coward     | fight the healthiest demon, else flee from creatures, else eat, else move |
//! | Glutton    | fight the healthiest demon, else eat everything, else move |
//! | Creature   | nothing |
//! | Demon      | fight every adventurer in the room |

use crate::actions::Action;
use crate::components::{CharacterId, Maze, Variant};
use crate::rng::RandomSource;

/// Decides what a character does this turn.
///
/// Liveness is not checked here; the scheduler decides whether dead
/// characters act at all.
pub fn decide(maze: &Maze, actor: CharacterId, rng: &mut dyn RandomSource) -> Action {
    let Some(character) = maze.character(actor) else {
        return Action::Passive;
    };
    let room = character.room;

    match character.variant {
        Variant::Adventurer => {
            let healthiest = maze.healthiest_adventurer(room) == Some(actor);
            fight_creature_or_forage(maze, actor, healthiest, rng)
        }
        Variant::Knight => fight_creature_or_forage(maze, actor, true, rng),
        Variant::Coward => {
            if let Some(demon) = maze.healthiest_demon(room) {
                Action::Fight { opponent: demon }
            } else if maze.has_living_creatures_in(room) {
                Action::Flee
            } else if maze.has_food(room) {
                Action::Eat
            } else {
                Action::Move
            }
        }
        Variant::Glutton => {
            if let Some(demon) = maze.healthiest_demon(room) {
                Action::Fight { opponent: demon }
            } else if maze.has_food(room) {
                Action::EatAll
            } else {
                Action::Move
            }
        }
        Variant::Creature => Action::Passive,
        Variant::Demon => Action::FightAll {
            opponents: maze.living_adventurers_in(room),
        },
    }
}

fn fight_creature_or_forage(
    maze: &Maze,
    actor: CharacterId,
    may_fight: bool,
    rng: &mut dyn RandomSource,
) -> Action {
    let Some(room) = maze.character(actor).map(|c| c.room) else {
        return Action::Passive;
    };
    if may_fight {
        if let Some(opponent) = maze.random_living_creature(room, rng) {
            return Action::Fight { opponent };
        }
    }
    if maze.has_food(room) {
        Action::Eat
    } else {
        Action::Move
    }
}
