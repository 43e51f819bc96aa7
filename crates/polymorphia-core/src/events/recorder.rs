//! Event Recording
//!
//! Per-game event buffer and the helpers that turn maze state into
//! [`polymorphia_events::Event`] records.

use polymorphia_events::{
    ActorSnapshot, ConflictSubtype, ConsumptionOutcome, ConsumptionSubtype, DeathSubtype, Event,
    EventBuilder, EventOutcome, EventSubtype, FightOutcome, GameOutcome, GameSubtype,
    GeneralOutcome, MovementOutcome, MovementSubtype,
};

use crate::components::{CharacterId, Maze, RoomId};

/// Events produced while a game is played, in order of occurrence
#[derive(Debug)]
pub struct TurnEvents {
    pub events: Vec<Event>,
    next_event_id: u64,
}

impl Default for TurnEvents {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            next_event_id: 1,
        }
    }
}

impl TurnEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate_id(&mut self) -> String {
        let id = polymorphia_events::generate_event_id(self.next_event_id);
        self.next_event_id += 1;
        id
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn emit(&mut self, builder: EventBuilder) {
        let id = self.generate_id();
        self.push(builder.id(id).build());
    }
}

/// Snapshot of a character's current state.
pub fn actor_snapshot(maze: &Maze, id: CharacterId) -> Option<ActorSnapshot> {
    let character = maze.character(id)?;
    Some(ActorSnapshot::new(
        id.0,
        character.name.clone(),
        character.variant.as_str(),
        character.faction().as_str(),
        maze.room_name(character.room),
        character.health(),
    ))
}

/// How a movement attempt ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveRecord {
    Travel { to: RoomId },
    Flee { to: RoomId },
    Blocked,
}

pub fn record_move(
    events: &mut TurnEvents,
    turn: u64,
    maze: &Maze,
    mover: CharacterId,
    from: RoomId,
    record: MoveRecord,
    health_cost: f64,
) {
    let Some(actor) = actor_snapshot(maze, mover) else {
        return;
    };
    let (subtype, to, trigger) = match record {
        MoveRecord::Travel { to } => (MovementSubtype::Travel, Some(to), "move"),
        MoveRecord::Flee { to } => (MovementSubtype::Flee, Some(to), "flee"),
        MoveRecord::Blocked => (MovementSubtype::Blocked, None, "no_neighbors"),
    };
    let from_name = maze.room_name(from).to_string();

    events.emit(
        EventBuilder::new(EventSubtype::Movement(subtype))
            .turn(turn)
            .primary_actor(actor)
            .trigger(trigger)
            .room(from_name.clone())
            .outcome(EventOutcome::Movement(MovementOutcome {
                from: from_name,
                to: to.map(|r| maze.room_name(r).to_string()),
                health_cost,
            })),
    );
}

/// Dice and damage of a resolved fight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FightRecord {
    pub initiator_roll: u32,
    pub opponent_roll: u32,
    pub bonus_damage: f64,
    pub damaged: Option<CharacterId>,
    pub toll: f64,
}

pub fn record_fight(
    events: &mut TurnEvents,
    turn: u64,
    maze: &Maze,
    initiator: CharacterId,
    opponent: CharacterId,
    fight: FightRecord,
) {
    let (Some(primary), Some(secondary)) =
        (actor_snapshot(maze, initiator), actor_snapshot(maze, opponent))
    else {
        return;
    };
    let room = primary.room.clone();

    events.emit(
        EventBuilder::new(EventSubtype::Conflict(ConflictSubtype::Fight))
            .turn(turn)
            .primary_actor(primary)
            .secondary_actor(secondary)
            .trigger("fight")
            .room(room)
            .outcome(EventOutcome::Fight(FightOutcome {
                initiator_roll: fight.initiator_roll,
                opponent_roll: fight.opponent_roll,
                bonus_damage: fight.bonus_damage,
                damaged: fight.damaged.map(|c| c.0),
                toll: fight.toll,
            })),
    );
}

pub fn record_meal(
    events: &mut TurnEvents,
    turn: u64,
    maze: &Maze,
    eater: CharacterId,
    food: &str,
    health_value: f64,
) {
    let Some(actor) = actor_snapshot(maze, eater) else {
        return;
    };
    let room = actor.room.clone();
    let health_after = actor.health;

    events.emit(
        EventBuilder::new(EventSubtype::Consumption(ConsumptionSubtype::Eat))
            .turn(turn)
            .primary_actor(actor)
            .trigger("eat")
            .room(room)
            .outcome(EventOutcome::Consumption(ConsumptionOutcome {
                food: food.to_string(),
                health_value,
                health_after,
            })),
    );
}

pub fn record_death(
    events: &mut TurnEvents,
    turn: u64,
    maze: &Maze,
    victim: CharacterId,
    cause: DeathSubtype,
    trigger: &str,
) {
    let Some(actor) = actor_snapshot(maze, victim) else {
        return;
    };
    let room = actor.room.clone();

    events.emit(
        EventBuilder::new(EventSubtype::Death(cause))
            .turn(turn)
            .primary_actor(actor)
            .trigger(trigger)
            .room(room)
            .outcome(EventOutcome::General(GeneralOutcome::default())),
    );
}

pub fn record_game(
    events: &mut TurnEvents,
    turn: u64,
    maze: &Maze,
    subtype: GameSubtype,
    trigger: &str,
    result: Option<&str>,
) {
    events.emit(
        EventBuilder::new(EventSubtype::Game(subtype))
            .turn(turn)
            .trigger(trigger)
            .outcome(EventOutcome::Game(GameOutcome {
                living_adventurers: maze.living_adventurers().len(),
                living_creatures: maze.living_creatures().len(),
                result: result.map(str::to_string),
            })),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::CharacterSpec;
    use polymorphia_events::EventType;

    fn maze_with_pair() -> (Maze, CharacterId, CharacterId, RoomId, RoomId) {
        let mut maze = Maze::new();
        let a = maze.add_room("A");
        let b = maze.add_room("B");
        maze.connect(a, b).unwrap();
        let bilbo = maze.place_character(CharacterSpec::adventurer("Bilbo"), a).unwrap();
        let ogre = maze.place_character(CharacterSpec::creature("Ogre"), a).unwrap();
        (maze, bilbo, ogre, a, b)
    }

    #[test]
    fn test_event_ids_are_sequential() {
        let mut events = TurnEvents::new();
        assert_eq!(events.generate_id(), "evt_00000001");
        assert_eq!(events.generate_id(), "evt_00000002");
    }

    #[test]
    fn test_actor_snapshot() {
        let (maze, bilbo, _, _, _) = maze_with_pair();
        let actor = actor_snapshot(&maze, bilbo).unwrap();
        assert_eq!(actor.name, "Bilbo");
        assert_eq!(actor.variant, "adventurer");
        assert_eq!(actor.faction, "adventurers");
        assert_eq!(actor.room, "A");
        assert!(actor_snapshot(&maze, CharacterId(99)).is_none());
    }

    #[test]
    fn test_record_move_and_blocked() {
        let (maze, bilbo, _, a, b) = maze_with_pair();
        let mut events = TurnEvents::new();

        record_move(&mut events, 1, &maze, bilbo, a, MoveRecord::Travel { to: b }, 0.25);
        record_move(&mut events, 1, &maze, bilbo, a, MoveRecord::Blocked, 0.0);

        assert_eq!(events.len(), 2);
        match &events.events[0].outcome {
            EventOutcome::Movement(m) => {
                assert_eq!(m.from, "A");
                assert_eq!(m.to.as_deref(), Some("B"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(
            events.events[1].subtype,
            EventSubtype::Movement(MovementSubtype::Blocked)
        );
    }

    #[test]
    fn test_record_fight_has_both_actors() {
        let (maze, bilbo, ogre, _, _) = maze_with_pair();
        let mut events = TurnEvents::new();
        record_fight(
            &mut events,
            2,
            &maze,
            bilbo,
            ogre,
            FightRecord {
                initiator_roll: 6,
                opponent_roll: 1,
                bonus_damage: 5.0,
                damaged: Some(ogre),
                toll: 0.5,
            },
        );

        let event = &events.events[0];
        assert_eq!(event.event_type, EventType::Conflict);
        assert!(event.involves_character(bilbo.0));
        assert!(event.involves_character(ogre.0));
        assert_eq!(event.context.room.as_deref(), Some("A"));
    }

    #[test]
    fn test_record_game_counts_population() {
        let (maze, _, _, _, _) = maze_with_pair();
        let mut events = TurnEvents::new();
        record_game(&mut events, 0, &maze, GameSubtype::Started, "game_started", None);

        match &events.events[0].outcome {
            EventOutcome::Game(g) => {
                assert_eq!(g.living_adventurers, 1);
                assert_eq!(g.living_creatures, 1);
                assert!(g.result.is_none());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(events.events[0].actors.is_none());
    }

    #[test]
    fn test_drain_empties_buffer() {
        let (maze, bilbo, _, _, _) = maze_with_pair();
        let mut events = TurnEvents::new();
        record_death(&mut events, 3, &maze, bilbo, DeathSubtype::Killed, "fight");
        assert_eq!(events.drain().len(), 1);
        assert!(events.is_empty());
        // Ids keep counting after a drain
        assert_eq!(events.generate_id(), "evt_00000002");
    }
}
