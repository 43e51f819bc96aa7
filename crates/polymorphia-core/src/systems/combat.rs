//! Combat Resolution
//!
//! A fight is two die rolls. Both fighters pay the fight toll first; the
//! lower roller then loses the difference between the rolls. Health loss is
//! a no-op on the dead, so a fighter killed by the toll takes no bonus
//! damage and a dead opponent pays nothing.

use polymorphia_events::DeathSubtype;

use super::context::TurnContext;
use crate::components::CharacterId;
use crate::events::recorder::{self, FightRecord};

/// Resolves one fight between `initiator` and `opponent`.
pub fn fight(
    ctx: &mut TurnContext<'_>,
    initiator: CharacterId,
    opponent: CharacterId,
) -> FightRecord {
    let sides = ctx.rules.die_sides;
    let initiator_roll = ctx.rng.roll_die(sides);
    let opponent_roll = ctx.rng.roll_die(sides);

    let toll = ctx.rules.fight_toll;
    let mut killed = Vec::new();
    for id in [initiator, opponent] {
        if lose(ctx, id, toll) {
            killed.push(id);
        }
    }

    let (damaged, bonus_damage) = if initiator_roll > opponent_roll {
        (Some(opponent), f64::from(initiator_roll - opponent_roll))
    } else if opponent_roll > initiator_roll {
        (Some(initiator), f64::from(opponent_roll - initiator_roll))
    } else {
        (None, 0.0)
    };
    if let Some(loser) = damaged {
        if lose(ctx, loser, bonus_damage) {
            killed.push(loser);
        }
    }

    let record = FightRecord {
        initiator_roll,
        opponent_roll,
        bonus_damage,
        damaged,
        toll,
    };

    if let (Some(a), Some(b)) = (ctx.maze.character(initiator), ctx.maze.character(opponent)) {
        tracing::debug!(
            turn = ctx.turn,
            initiator = %a.name,
            opponent = %b.name,
            initiator_roll,
            opponent_roll,
            bonus_damage,
            "Fight resolved"
        );
    }

    recorder::record_fight(ctx.events, ctx.turn, ctx.maze, initiator, opponent, record);
    for id in killed {
        if let Some(c) = ctx.maze.character(id) {
            tracing::info!(turn = ctx.turn, character = %c.name, "{} just died!", c.name);
        }
        recorder::record_death(ctx.events, ctx.turn, ctx.maze, id, DeathSubtype::Killed, "fight");
    }

    record
}

/// Applies health loss; true if it killed the character.
fn lose(ctx: &mut TurnContext<'_>, id: CharacterId, amount: f64) -> bool {
    ctx.maze
        .character_mut(id)
        .map_or(false, |c| c.lose_health(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CharacterSpec, Maze};
    use crate::config::RulesConfig;
    use crate::events::TurnEvents;
    use crate::rng::ScriptedRandom;
    use polymorphia_events::{EventOutcome, EventType};

    struct Arena {
        maze: Maze,
        events: TurnEvents,
        rules: RulesConfig,
    }

    impl Arena {
        fn new() -> Self {
            Self {
                maze: Maze::new(),
                events: TurnEvents::new(),
                rules: RulesConfig::default(),
            }
        }

        fn pair(&mut self, a: CharacterSpec, b: CharacterSpec) -> (CharacterId, CharacterId) {
            let room = self.maze.add_room("Pit");
            (
                self.maze.place_character(a, room).unwrap(),
                self.maze.place_character(b, room).unwrap(),
            )
        }

        fn fight(&mut self, rolls: [u32; 2], a: CharacterId, b: CharacterId) -> FightRecord {
            let mut rng = ScriptedRandom::new().with_rolls(rolls);
            let mut ctx = TurnContext {
                maze: &mut self.maze,
                rng: &mut rng,
                rules: &self.rules,
                events: &mut self.events,
                turn: 1,
            };
            fight(&mut ctx, a, b)
        }

        fn health(&self, id: CharacterId) -> f64 {
            self.maze.character(id).unwrap().health()
        }
    }

    #[test]
    fn test_higher_roll_wins_bonus() {
        let mut arena = Arena::new();
        let (bilbo, ogre) = arena.pair(
            CharacterSpec::adventurer("Bilbo"),
            CharacterSpec::creature("Ogre"),
        );

        let record = arena.fight([6, 1], bilbo, ogre);

        assert_eq!(record.damaged, Some(ogre));
        assert_eq!(record.bonus_damage, 5.0);
        assert_eq!(arena.health(bilbo), 4.5);
        assert_eq!(arena.health(ogre), 3.0 - 5.5);
    }

    #[test]
    fn test_lower_initiator_takes_bonus() {
        let mut arena = Arena::new();
        let (knight, demon) = arena.pair(
            CharacterSpec::knight("Knight"),
            CharacterSpec::demon("Demon"),
        );

        arena.fight([2, 5], knight, demon);

        assert_eq!(arena.health(knight), 8.0 - 0.5 - 3.0);
        assert_eq!(arena.health(demon), 14.5);
    }

    #[test]
    fn test_tie_only_toll() {
        let mut arena = Arena::new();
        let (knight, demon) = arena.pair(
            CharacterSpec::knight("Knight"),
            CharacterSpec::demon("Demon"),
        );

        let record = arena.fight([4, 4], knight, demon);

        assert_eq!(record.damaged, None);
        assert_eq!(record.bonus_damage, 0.0);
        assert_eq!(arena.health(knight) + arena.health(demon), 8.0 + 15.0 - 1.0);
    }

    #[test]
    fn test_total_toll_is_one_for_any_rolls() {
        for r1 in 1..=6u32 {
            for r2 in 1..=6u32 {
                let mut arena = Arena::new();
                let (a, b) = arena.pair(
                    CharacterSpec::adventurer("A").with_health(50.0),
                    CharacterSpec::creature("B").with_health(50.0),
                );
                arena.fight([r1, r2], a, b);

                let lost = 100.0 - arena.health(a) - arena.health(b);
                let bonus = f64::from(r1.abs_diff(r2));
                assert_eq!(lost, 1.0 + bonus, "rolls {} vs {}", r1, r2);
            }
        }
    }

    #[test]
    fn test_dead_opponent_pays_nothing() {
        let mut arena = Arena::new();
        let (bilbo, ghost) = arena.pair(
            CharacterSpec::adventurer("Bilbo"),
            CharacterSpec::creature("Ghost").with_health(-1.0),
        );

        arena.fight([6, 1], bilbo, ghost);

        assert_eq!(arena.health(ghost), -1.0);
        assert_eq!(arena.health(bilbo), 4.5);
    }

    #[test]
    fn test_fight_and_death_events() {
        let mut arena = Arena::new();
        let (bilbo, ogre) = arena.pair(
            CharacterSpec::adventurer("Bilbo"),
            CharacterSpec::creature("Ogre"),
        );

        arena.fight([6, 1], bilbo, ogre);

        let events = arena.events.drain();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EventType::Conflict);
        assert!(matches!(
            events[0].outcome,
            EventOutcome::Fight(ref f) if f.damaged == Some(ogre.0)
        ));
        assert_eq!(events[1].event_type, EventType::Death);
        assert!(events[1].involves_character(ogre.0));
    }
}
