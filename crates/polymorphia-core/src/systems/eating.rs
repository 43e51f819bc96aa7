//! Eating

use super::context::TurnContext;
use crate::components::{CharacterId, Food};
use crate::events::recorder;

/// Eats the oldest food item in the character's room.
pub fn eat(ctx: &mut TurnContext<'_>, eater: CharacterId) -> Option<Food> {
    let room = ctx.maze.character(eater)?.room;
    let food = ctx.maze.take_food(room)?;

    let character = ctx.maze.character_mut(eater)?;
    character.gain_health(food.health_value);
    tracing::info!(
        turn = ctx.turn,
        health = character.health(),
        "{} just ate {}",
        character.name,
        food.name
    );

    recorder::record_meal(ctx.events, ctx.turn, ctx.maze, eater, &food.name, food.health_value);
    Some(food)
}

/// Eats until the room holds no more food. Returns the number of items eaten.
pub fn eat_all(ctx: &mut TurnContext<'_>, eater: CharacterId) -> usize {
    let mut eaten = 0;
    while eat(ctx, eater).is_some() {
        eaten += 1;
    }
    eaten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CharacterSpec, Maze};
    use crate::config::RulesConfig;
    use crate::events::TurnEvents;
    use crate::rng::ScriptedRandom;

    fn with_ctx<T>(maze: &mut Maze, f: impl FnOnce(&mut TurnContext<'_>) -> T) -> (T, TurnEvents) {
        let rules = RulesConfig::default();
        let mut rng = ScriptedRandom::new();
        let mut events = TurnEvents::new();
        let result = {
            let mut ctx = TurnContext {
                maze,
                rng: &mut rng,
                rules: &rules,
                events: &mut events,
                turn: 1,
            };
            f(&mut ctx)
        };
        (result, events)
    }

    #[test]
    fn test_eat_oldest_first() {
        let mut maze = Maze::new();
        let kitchen = maze.add_room("Kitchen");
        let bilbo = maze.place_character(CharacterSpec::adventurer("Bilbo"), kitchen).unwrap();
        maze.place_food(Food::new("Apple"), kitchen).unwrap();
        maze.place_food(Food::new("Steak").with_health_value(2.0), kitchen).unwrap();

        let (food, events) = with_ctx(&mut maze, |ctx| eat(ctx, bilbo));

        assert_eq!(food.map(|f| f.name), Some("Apple".to_string()));
        assert_eq!(maze.character(bilbo).unwrap().health(), 6.0);
        assert_eq!(maze.total_food(), 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_eat_without_food() {
        let mut maze = Maze::new();
        let kitchen = maze.add_room("Kitchen");
        let bilbo = maze.place_character(CharacterSpec::adventurer("Bilbo"), kitchen).unwrap();

        let (food, events) = with_ctx(&mut maze, |ctx| eat(ctx, bilbo));

        assert!(food.is_none());
        assert_eq!(maze.character(bilbo).unwrap().health(), 5.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_eat_all_clears_room() {
        let mut maze = Maze::new();
        let kitchen = maze.add_room("Kitchen");
        let glutton = maze.place_character(CharacterSpec::glutton("Glutton"), kitchen).unwrap();
        maze.place_food(Food::new("Apple"), kitchen).unwrap();
        maze.place_food(Food::new("Steak").with_health_value(2.5), kitchen).unwrap();

        let (eaten, events) = with_ctx(&mut maze, |ctx| eat_all(ctx, glutton));

        assert_eq!(eaten, 2);
        assert_eq!(maze.character(glutton).unwrap().health(), 3.0 + 1.0 + 2.5);
        assert!(!maze.has_food(kitchen));
        assert_eq!(events.len(), 2);
    }
}
