//! Maze
//!
//! The maze owns the room list and an arena of every character ever placed.
//! Rooms refer to characters by [`CharacterId`] and characters refer back to
//! their room by [`RoomId`], so neither side holds a reference to the other.

use std::fmt;

use super::character::{Character, CharacterId, CharacterSpec, Variant};
use super::food::Food;
use super::room::{Room, RoomId};
use crate::error::{MazeError, Result};
use crate::rng::RandomSource;

/// Something that can be put into a room
#[derive(Debug, Clone, PartialEq)]
pub enum Placeable {
    Character(CharacterSpec),
    Food(Food),
}

impl From<CharacterSpec> for Placeable {
    fn from(spec: CharacterSpec) -> Self {
        Placeable::Character(spec)
    }
}

impl From<Food> for Placeable {
    fn from(food: Food) -> Self {
        Placeable::Food(food)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Maze {
    rooms: Vec<Room>,
    characters: Vec<Character>,
}

impl Maze {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Topology
    // ------------------------------------------------------------------

    /// Appends a room and returns its id.
    pub(crate) fn add_room(&mut self, name: impl Into<String>) -> RoomId {
        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(id, name));
        id
    }

    /// Connects two rooms in both directions.
    pub(crate) fn connect(&mut self, a: RoomId, b: RoomId) -> Result<()> {
        self.check_room(a)?;
        self.check_room(b)?;
        if a == b {
            return Err(MazeError::InvalidArgument(format!(
                "cannot connect room {} to itself",
                self.rooms[a.0].name
            )));
        }
        self.rooms[a.0].add_neighbor(b)?;
        self.rooms[b.0].add_neighbor(a)?;
        Ok(())
    }

    fn check_room(&self, id: RoomId) -> Result<()> {
        if id.0 < self.rooms.len() {
            Ok(())
        } else {
            Err(MazeError::InvalidArgument(format!(
                "room {} does not belong to this maze",
                id.0
            )))
        }
    }

    pub fn size(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Name of a room, or an empty string for a foreign id.
    pub fn room_name(&self, id: RoomId) -> &str {
        self.room(id).map_or("", |r| r.name.as_str())
    }

    /// Picks a neighbor of `room` uniformly, or None if it has none.
    pub fn random_neighbor(&self, room: RoomId, rng: &mut dyn RandomSource) -> Option<RoomId> {
        let neighbors = self.room(room)?.neighbors();
        if neighbors.is_empty() {
            return None;
        }
        Some(neighbors[rng.uniform_int(neighbors.len())])
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Puts a new character into a room and returns its id.
    pub fn place_character(&mut self, spec: CharacterSpec, room: RoomId) -> Result<CharacterId> {
        self.check_room(room)?;
        let id = CharacterId(self.characters.len());
        self.characters.push(Character::place(id, spec, room));
        self.rooms[room.0].add_occupant(id);
        Ok(id)
    }

    /// Puts a food item into a room.
    pub fn place_food(&mut self, food: Food, room: RoomId) -> Result<()> {
        self.check_room(room)?;
        self.rooms[room.0].add_food(food);
        Ok(())
    }

    /// Puts a character or food item into a room.
    pub fn place(&mut self, item: Placeable, room: RoomId) -> Result<()> {
        match item {
            Placeable::Character(spec) => self.place_character(spec, room).map(|_| ()),
            Placeable::Food(food) => self.place_food(food, room),
        }
    }

    /// Puts an item into a uniformly chosen room.
    pub fn add_to_random_room(
        &mut self,
        item: impl Into<Placeable>,
        rng: &mut dyn RandomSource,
    ) -> Result<RoomId> {
        if self.rooms.is_empty() {
            return Err(MazeError::InvalidState(
                "cannot place into a maze with no rooms".to_string(),
            ));
        }
        let room = RoomId(rng.uniform_int(self.rooms.len()));
        self.place(item.into(), room)?;
        Ok(room)
    }

    // ------------------------------------------------------------------
    // Characters
    // ------------------------------------------------------------------

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.0)
    }

    pub fn character_by_name(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    pub(crate) fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.0)
    }

    pub fn is_alive(&self, id: CharacterId) -> bool {
        self.character(id).map_or(false, Character::is_alive)
    }

    /// Living characters, room by room in arrival order.
    pub fn living_characters(&self) -> Vec<CharacterId> {
        self.rooms
            .iter()
            .flat_map(|room| room.occupants().iter().copied())
            .filter(|&id| self.is_alive(id))
            .collect()
    }

    /// Living adventurers, room by room, each room ordered by health.
    pub fn living_adventurers(&self) -> Vec<CharacterId> {
        self.rooms
            .iter()
            .flat_map(|room| self.living_adventurers_in(room.id))
            .collect()
    }

    /// Living creatures, room by room, each room ordered by health.
    pub fn living_creatures(&self) -> Vec<CharacterId> {
        self.rooms
            .iter()
            .flat_map(|room| self.living_creatures_in(room.id))
            .collect()
    }

    pub fn has_living_adventurers(&self) -> bool {
        self.characters
            .iter()
            .any(|c| c.is_adventurer() && c.is_alive())
    }

    pub fn has_living_creatures(&self) -> bool {
        self.characters.iter().any(|c| c.is_creature() && c.is_alive())
    }

    /// Moves a character to another room, detaching it from its old one.
    pub(crate) fn relocate(&mut self, id: CharacterId, to: RoomId) -> Result<()> {
        self.check_room(to)?;
        let from = self
            .character(id)
            .map(|c| c.room)
            .ok_or_else(|| MazeError::InvalidArgument(format!("unknown character {}", id.0)))?;
        if from == to {
            return Ok(());
        }
        self.rooms[from.0].remove_occupant(id);
        self.rooms[to.0].add_occupant(id);
        if let Some(character) = self.character_mut(id) {
            character.room = to;
        }
        Ok(())
    }

    /// Removes the oldest food item from a room.
    pub(crate) fn take_food(&mut self, room: RoomId) -> Option<Food> {
        self.rooms.get_mut(room.0)?.take_food()
    }

    pub fn total_food(&self) -> usize {
        self.rooms.iter().map(Room::food_count).sum()
    }

    // ------------------------------------------------------------------
    // Room-level queries
    // ------------------------------------------------------------------

    fn living_in(&self, room: RoomId, keep: impl Fn(&Character) -> bool) -> Vec<CharacterId> {
        let Some(room) = self.room(room) else {
            return Vec::new();
        };
        let mut found: Vec<&Character> = room
            .occupants()
            .iter()
            .filter_map(|&id| self.character(id))
            .filter(|c| c.is_alive() && keep(c))
            .collect();
        // Stable, so equal health keeps arrival order
        found.sort_by(|a, b| a.health().total_cmp(&b.health()));
        found.into_iter().map(|c| c.id).collect()
    }

    /// Living adventurers in a room, least healthy first.
    pub fn living_adventurers_in(&self, room: RoomId) -> Vec<CharacterId> {
        self.living_in(room, Character::is_adventurer)
    }

    /// Living creatures in a room, least healthy first.
    pub fn living_creatures_in(&self, room: RoomId) -> Vec<CharacterId> {
        self.living_in(room, Character::is_creature)
    }

    pub fn has_living_creatures_in(&self, room: RoomId) -> bool {
        !self.living_creatures_in(room).is_empty()
    }

    pub fn has_food(&self, room: RoomId) -> bool {
        self.room(room).map_or(false, Room::has_food)
    }

    fn healthiest(&self, candidates: Vec<CharacterId>) -> Option<CharacterId> {
        let mut best: Option<&Character> = None;
        for c in candidates.into_iter().filter_map(|id| self.character(id)) {
            if best.map_or(true, |b| c.health() > b.health()) {
                best = Some(c);
            }
        }
        best.map(|c| c.id)
    }

    /// Healthiest living adventurer in a room; the earliest arrival wins ties.
    pub fn healthiest_adventurer(&self, room: RoomId) -> Option<CharacterId> {
        self.healthiest(self.living_adventurers_in(room))
    }

    pub fn healthiest_creature(&self, room: RoomId) -> Option<CharacterId> {
        self.healthiest(self.living_creatures_in(room))
    }

    pub fn healthiest_demon(&self, room: RoomId) -> Option<CharacterId> {
        self.healthiest(self.living_in(room, |c| c.variant == Variant::Demon))
    }

    /// Picks one living creature of a room uniformly.
    pub fn random_living_creature(
        &self,
        room: RoomId,
        rng: &mut dyn RandomSource,
    ) -> Option<CharacterId> {
        let creatures = self.living_creatures_in(room);
        if creatures.is_empty() {
            return None;
        }
        Some(creatures[rng.uniform_int(creatures.len())])
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, room) in self.rooms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\t{}:", room.name)?;
            for character in room.occupants().iter().filter_map(|&id| self.character(id)) {
                write!(f, "\n\t\t{}", character)?;
            }
            for food in room.food() {
                write!(f, "\n\t\t{}", food)?;
            }
        }
        Ok(())
    }
}
