//! Character Components
//!
//! Characters, their variants and factions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::room::RoomId;

/// Index of a character in the maze's character arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Adventurers,
    Creatures,
}

impl Faction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Faction::Adventurers => "adventurers",
            Faction::Creatures => "creatures",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior profile of a character, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Adventurer,
    Knight,
    Coward,
    Glutton,
    Creature,
    Demon,
}

/// Starting health per variant
pub mod initial_health {
    pub const ADVENTURER: f64 = 5.0;
    pub const KNIGHT: f64 = 8.0;
    pub const COWARD: f64 = 5.0;
    pub const GLUTTON: f64 = 3.0;
    pub const CREATURE: f64 = 3.0;
    pub const DEMON: f64 = 15.0;
}

impl Variant {
    pub fn faction(&self) -> Faction {
        match self {
            Variant::Adventurer | Variant::Knight | Variant::Coward | Variant::Glutton => {
                Faction::Adventurers
            }
            Variant::Creature | Variant::Demon => Faction::Creatures,
        }
    }

    pub fn default_health(&self) -> f64 {
        match self {
            Variant::Adventurer => initial_health::ADVENTURER,
            Variant::Knight => initial_health::KNIGHT,
            Variant::Coward => initial_health::COWARD,
            Variant::Glutton => initial_health::GLUTTON,
            Variant::Creature => initial_health::CREATURE,
            Variant::Demon => initial_health::DEMON,
        }
    }

    pub fn is_adventurer(&self) -> bool {
        self.faction() == Faction::Adventurers
    }

    pub fn is_creature(&self) -> bool {
        self.faction() == Faction::Creatures
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Adventurer => "adventurer",
            Variant::Knight => "knight",
            Variant::Coward => "coward",
            Variant::Glutton => "glutton",
            Variant::Creature => "creature",
            Variant::Demon => "demon",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character not yet placed in a maze.
///
/// Carries everything fixed at creation. The maze assigns the id and room
/// when the character is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSpec {
    pub name: String,
    pub variant: Variant,
    pub health: f64,
}

impl CharacterSpec {
    /// Creates a character with its variant's default health.
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            variant,
            health: variant.default_health(),
        }
    }

    /// Overrides the starting health.
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn adventurer(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Adventurer)
    }

    pub fn knight(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Knight)
    }

    pub fn coward(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Coward)
    }

    pub fn glutton(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Glutton)
    }

    pub fn creature(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Creature)
    }

    pub fn demon(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Demon)
    }
}

/// A character placed in a maze
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub variant: Variant,
    health: f64,
    /// Room the character currently occupies
    pub room: RoomId,
}

impl Character {
    pub(crate) fn place(id: CharacterId, spec: CharacterSpec, room: RoomId) -> Self {
        Self {
            id,
            name: spec.name,
            variant: spec.variant,
            health: spec.health,
            room,
        }
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn faction(&self) -> Faction {
        self.variant.faction()
    }

    pub fn is_adventurer(&self) -> bool {
        self.variant.is_adventurer()
    }

    pub fn is_creature(&self) -> bool {
        self.variant.is_creature()
    }

    /// Subtracts health. No-op once the character is dead.
    ///
    /// Returns true if this loss killed the character.
    pub fn lose_health(&mut self, amount: f64) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.health -= amount;
        !self.is_alive()
    }

    /// Adds health. Not guarded: a dead character that eats gains health.
    pub fn gain_health(&mut self, amount: f64) {
        self.health += amount;
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(health: {})", self.name, self.health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(spec: CharacterSpec) -> Character {
        Character::place(CharacterId(0), spec, RoomId(0))
    }

    #[test]
    fn test_default_health_by_variant() {
        assert_eq!(CharacterSpec::adventurer("a").health, 5.0);
        assert_eq!(CharacterSpec::knight("k").health, 8.0);
        assert_eq!(CharacterSpec::coward("c").health, 5.0);
        assert_eq!(CharacterSpec::glutton("g").health, 3.0);
        assert_eq!(CharacterSpec::creature("o").health, 3.0);
        assert_eq!(CharacterSpec::demon("d").health, 15.0);
    }

    #[test]
    fn test_factions() {
        assert_eq!(Variant::Glutton.faction(), Faction::Adventurers);
        assert_eq!(Variant::Demon.faction(), Faction::Creatures);
        assert!(Variant::Knight.is_adventurer());
        assert!(!Variant::Knight.is_creature());
    }

    #[test]
    fn test_lose_health_reports_death() {
        let mut ogre = placed(CharacterSpec::creature("Ogre"));
        assert!(!ogre.lose_health(2.0));
        assert!(ogre.lose_health(1.5));
        assert!(!ogre.is_alive());
        assert_eq!(ogre.health(), -0.5);
    }

    #[test]
    fn test_lose_health_noop_when_dead() {
        let mut ogre = placed(CharacterSpec::creature("Ogre").with_health(0.0));
        assert!(!ogre.lose_health(0.5));
        assert_eq!(ogre.health(), 0.0);
    }

    #[test]
    fn test_gain_health() {
        let mut bilbo = placed(CharacterSpec::adventurer("Bilbo"));
        bilbo.gain_health(1.0);
        assert_eq!(bilbo.health(), 6.0);
    }

    #[test]
    fn test_display() {
        let bilbo = placed(CharacterSpec::adventurer("Bilbo"));
        assert_eq!(bilbo.to_string(), "Bilbo(health: 5)");
    }
}
