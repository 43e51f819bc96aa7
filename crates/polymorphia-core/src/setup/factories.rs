//! Character and Food Factories
//!
//! Produce ready-to-place characters and food with names drawn from fixed
//! pools. A name that has already been issued by the same factory gets a
//! running number appended ("Ogre", "Ogre 2", ...).

use std::collections::HashMap;

use crate::components::{CharacterSpec, Food, Variant};

/// Names handed out to creatures, in order
pub const CREATURE_NAMES: &[&str] = &["Ogre", "Troll", "Goblin", "Vampire", "Ghoul", "Ghost"];

/// Names handed out to plain adventurers, in order
pub const ADVENTURER_NAMES: &[&str] = &["Galahad", "Bilbo", "Gandalf"];

/// Food catalog
pub const FOOD_NAMES: &[&str] = &[
    "Hamburger",
    "Salad",
    "French Fries",
    "Apple",
    "Pancake",
    "Vanilla Oatmilk Latte",
    "Sandwich",
];

#[derive(Debug, Default)]
pub struct CharacterFactory {
    issued: HashMap<String, usize>,
    next_adventurer: usize,
    next_creature: usize,
}

impl CharacterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn unique_name(&mut self, base: &str) -> String {
        let count = self.issued.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_string()
        } else {
            format!("{} {}", base, count)
        }
    }

    fn pooled(&mut self, variant: Variant) -> CharacterSpec {
        let base = match variant {
            Variant::Adventurer => {
                let name = ADVENTURER_NAMES[self.next_adventurer % ADVENTURER_NAMES.len()];
                self.next_adventurer += 1;
                name
            }
            Variant::Creature => {
                let name = CREATURE_NAMES[self.next_creature % CREATURE_NAMES.len()];
                self.next_creature += 1;
                name
            }
            Variant::Knight => "Knight",
            Variant::Coward => "Coward",
            Variant::Glutton => "Glutton",
            Variant::Demon => "Demon",
        };
        let name = self.unique_name(base);
        CharacterSpec::new(name, variant)
    }

    fn many(&mut self, variant: Variant, count: usize) -> Vec<CharacterSpec> {
        (0..count).map(|_| self.pooled(variant)).collect()
    }

    pub fn adventurers(&mut self, count: usize) -> Vec<CharacterSpec> {
        self.many(Variant::Adventurer, count)
    }

    pub fn knights(&mut self, count: usize) -> Vec<CharacterSpec> {
        self.many(Variant::Knight, count)
    }

    pub fn cowards(&mut self, count: usize) -> Vec<CharacterSpec> {
        self.many(Variant::Coward, count)
    }

    pub fn gluttons(&mut self, count: usize) -> Vec<CharacterSpec> {
        self.many(Variant::Glutton, count)
    }

    pub fn demon(&mut self) -> CharacterSpec {
        self.pooled(Variant::Demon)
    }

    /// Creates `count` creatures. With `include_demon`, the first one is a
    /// Demon and counts toward `count`.
    pub fn creatures(&mut self, count: usize, include_demon: bool) -> Vec<CharacterSpec> {
        let mut creatures = Vec::with_capacity(count);
        if include_demon && count > 0 {
            creatures.push(self.demon());
        }
        let regular = count - creatures.len();
        creatures.extend(self.many(Variant::Creature, regular));
        creatures
    }

    /// Knights, then cowards, then gluttons, then plain adventurers.
    pub fn adventurer_mix(
        &mut self,
        knights: usize,
        cowards: usize,
        gluttons: usize,
        regular: usize,
    ) -> Vec<CharacterSpec> {
        let mut all = self.knights(knights);
        all.extend(self.cowards(cowards));
        all.extend(self.gluttons(gluttons));
        all.extend(self.adventurers(regular));
        all
    }
}

#[derive(Debug, Default)]
pub struct FoodFactory {
    next: usize,
}

impl FoodFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn food(&self, name: impl Into<String>) -> Food {
        Food::new(name)
    }

    /// Creates `count` items from the catalog, cycling through it.
    pub fn food_items(&mut self, count: usize) -> Vec<Food> {
        (0..count)
            .map(|_| {
                let name = FOOD_NAMES[self.next % FOOD_NAMES.len()];
                self.next += 1;
                Food::new(name)
            })
            .collect()
    }

    pub fn named_food<S: AsRef<str>>(&self, names: &[S]) -> Vec<Food> {
        names.iter().map(|n| Food::new(n.as_ref())).collect()
    }
}
