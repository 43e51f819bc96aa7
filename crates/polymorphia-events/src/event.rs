//! Event Types
//!
//! All event type definitions emitted by the simulation.

use serde::{Deserialize, Serialize};

/// Primary event type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Game,
    Movement,
    Conflict,
    Consumption,
    Death,
}

impl EventType {
    /// Returns the valid subtypes for this event type.
    pub fn valid_subtypes(&self) -> &'static [&'static str] {
        match self {
            EventType::Game => &["started", "turn_completed", "ended"],
            EventType::Movement => &["travel", "flee", "blocked"],
            EventType::Conflict => &["fight"],
            EventType::Consumption => &["eat"],
            EventType::Death => &["killed", "exhausted"],
        }
    }

    /// Checks if the given subtype is valid for this event type.
    pub fn is_valid_subtype(&self, subtype: &str) -> bool {
        self.valid_subtypes().contains(&subtype)
    }

    /// Returns all event type variants.
    pub fn all() -> &'static [EventType] {
        &[
            EventType::Game,
            EventType::Movement,
            EventType::Conflict,
            EventType::Consumption,
            EventType::Death,
        ]
    }
}

/// Game lifecycle subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameSubtype {
    Started,
    TurnCompleted,
    Ended,
}

/// Movement event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementSubtype {
    Travel,
    Flee,
    /// The mover's room has no neighbors
    Blocked,
}

/// Conflict event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictSubtype {
    Fight,
}

/// Consumption event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionSubtype {
    Eat,
}

/// Death event subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathSubtype {
    /// Died from fight damage
    Killed,
    /// Died from the cost of moving or fleeing
    Exhausted,
}

/// Combined event subtype enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventSubtype {
    Game(GameSubtype),
    Movement(MovementSubtype),
    Conflict(ConflictSubtype),
    Consumption(ConsumptionSubtype),
    Death(DeathSubtype),
}

impl EventSubtype {
    /// The event type this subtype belongs to.
    pub fn event_type(&self) -> EventType {
        match self {
            EventSubtype::Game(_) => EventType::Game,
            EventSubtype::Movement(_) => EventType::Movement,
            EventSubtype::Conflict(_) => EventType::Conflict,
            EventSubtype::Consumption(_) => EventType::Consumption,
            EventSubtype::Death(_) => EventType::Death,
        }
    }
}

/// Snapshot of a character's state at the time of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub character_id: usize,
    pub name: String,
    pub variant: String,
    pub faction: String,
    pub room: String,
    pub health: f64,
}

impl ActorSnapshot {
    pub fn new(
        character_id: usize,
        name: impl Into<String>,
        variant: impl Into<String>,
        faction: impl Into<String>,
        room: impl Into<String>,
        health: f64,
    ) -> Self {
        Self {
            character_id,
            name: name.into(),
            variant: variant.into(),
            faction: faction.into(),
            room: room.into(),
            health,
        }
    }
}

/// Characters involved in an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSet {
    /// The character performing the action
    pub primary: ActorSnapshot,
    /// Optional secondary character (the opponent of a fight)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ActorSnapshot>,
}

impl ActorSet {
    /// Creates an ActorSet with only a primary actor.
    pub fn primary_only(actor: ActorSnapshot) -> Self {
        Self {
            primary: actor,
            secondary: None,
        }
    }

    /// Creates an ActorSet with primary and secondary actors.
    pub fn with_secondary(primary: ActorSnapshot, secondary: ActorSnapshot) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Returns all character IDs involved in this event.
    pub fn all_character_ids(&self) -> Vec<usize> {
        let mut ids = vec![self.primary.character_id];
        if let Some(ref secondary) = self.secondary {
            ids.push(secondary.character_id);
        }
        ids
    }

    /// Checks if a specific character is involved in this event.
    pub fn involves_character(&self, character_id: usize) -> bool {
        self.all_character_ids().contains(&character_id)
    }
}

/// Context for why an event occurred
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    pub trigger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl EventContext {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            room: None,
        }
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }
}

/// Flexible outcome data for events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventOutcome {
    Fight(FightOutcome),
    Movement(MovementOutcome),
    Consumption(ConsumptionOutcome),
    Game(GameOutcome),
    General(GeneralOutcome),
}

/// Dice and damage of a single fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightOutcome {
    pub initiator_roll: u32,
    pub opponent_roll: u32,
    /// Roll difference applied to the lower roller
    pub bonus_damage: f64,
    /// Character who took the bonus damage; absent on a tied roll
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damaged: Option<usize>,
    /// Mandatory cost charged to each living participant
    pub toll: f64,
}

/// Movement event outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementOutcome {
    pub from: String,
    /// Destination room; absent when the move was blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub health_cost: f64,
}

/// A single meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionOutcome {
    pub food: String,
    pub health_value: f64,
    pub health_after: f64,
}

/// Population and result at a game lifecycle point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub living_adventurers: usize,
    pub living_creatures: usize,
    /// "adventurers", "creatures" or "tie" once the game is over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// General outcome for simple events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A complete simulation event.
///
/// Events are the atomic units of game history. Each event captures a single
/// move, fight, meal, death or lifecycle transition along with the characters
/// involved and the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier (e.g., "evt_00000042")
    pub event_id: String,
    /// Turn during which the event occurred (0 before play starts)
    pub turn: u64,
    /// Primary event category
    pub event_type: EventType,
    /// Specific subtype within the category
    pub subtype: EventSubtype,
    /// Characters involved; absent for game lifecycle events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<ActorSet>,
    /// Context explaining why the event occurred
    pub context: EventContext,
    /// Results and state changes from the event
    pub outcome: EventOutcome,
}

impl Event {
    /// Create a new event with required fields.
    pub fn new(
        event_id: impl Into<String>,
        turn: u64,
        subtype: EventSubtype,
        actors: Option<ActorSet>,
        context: EventContext,
        outcome: EventOutcome,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            turn,
            event_type: subtype.event_type(),
            subtype,
            actors,
            context,
            outcome,
        }
    }

    /// Checks if a specific character is involved in this event.
    pub fn involves_character(&self, character_id: usize) -> bool {
        self.actors
            .as_ref()
            .map_or(false, |a| a.involves_character(character_id))
    }

    /// Checks if a specific faction is involved in this event.
    pub fn involves_faction(&self, faction: &str) -> bool {
        self.actors.as_ref().map_or(false, |a| {
            a.primary.faction == faction
                || a.secondary.as_ref().map_or(false, |s| s.faction == faction)
        })
    }

    /// Serializes the event to a JSON line (for JSONL format).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates an event ID with the given sequence number.
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}

/// Builder for creating events with a fluent API.
///
/// # Example
///
/// ```
/// use polymorphia_events::*;
///
/// let event = EventBuilder::new(EventSubtype::Movement(MovementSubtype::Travel))
///     .id("evt_00000001")
///     .turn(3)
///     .primary_actor(ActorSnapshot::new(1, "Bilbo", "adventurer", "adventurers", "Room 2", 4.75))
///     .trigger("no_creatures_no_food")
///     .room("Room 1")
///     .outcome(EventOutcome::Movement(MovementOutcome {
///         from: "Room 1".into(),
///         to: Some("Room 2".into()),
///         health_cost: 0.25,
///     }))
///     .build();
///
/// assert_eq!(event.event_type, EventType::Movement);
/// ```
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event_id: Option<String>,
    turn: u64,
    subtype: EventSubtype,
    primary: Option<ActorSnapshot>,
    secondary: Option<ActorSnapshot>,
    trigger: String,
    room: Option<String>,
    outcome: Option<EventOutcome>,
}

impl EventBuilder {
    /// Creates a new EventBuilder for the given subtype.
    pub fn new(subtype: EventSubtype) -> Self {
        Self {
            event_id: None,
            turn: 0,
            subtype,
            primary: None,
            secondary: None,
            trigger: String::new(),
            room: None,
            outcome: None,
        }
    }

    /// Sets the event ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    /// Sets the turn.
    pub fn turn(mut self, turn: u64) -> Self {
        self.turn = turn;
        self
    }

    /// Sets the primary actor.
    pub fn primary_actor(mut self, actor: ActorSnapshot) -> Self {
        self.primary = Some(actor);
        self
    }

    /// Sets the secondary actor.
    pub fn secondary_actor(mut self, actor: ActorSnapshot) -> Self {
        self.secondary = Some(actor);
        self
    }

    /// Sets the trigger.
    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    /// Sets the room the event happened in.
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Sets the outcome.
    pub fn outcome(mut self, outcome: EventOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Builds the event.
    ///
    /// A secondary actor without a primary actor is dropped.
    pub fn build(self) -> Event {
        let actors = self.primary.map(|primary| ActorSet {
            primary,
            secondary: self.secondary,
        });

        Event {
            event_id: self.event_id.unwrap_or_else(|| generate_event_id(0)),
            turn: self.turn,
            event_type: self.subtype.event_type(),
            subtype: self.subtype,
            actors,
            context: EventContext {
                trigger: self.trigger,
                room: self.room,
            },
            outcome: self.outcome.unwrap_or_default(),
        }
    }
}

impl Default for EventOutcome {
    fn default() -> Self {
        EventOutcome::General(GeneralOutcome::default())
    }
}
