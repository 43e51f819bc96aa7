//! Food

use std::fmt;

/// Health restored by a food item unless specified otherwise
pub const DEFAULT_FOOD_HEALTH_VALUE: f64 = 1.0;

/// A food item, consumed exactly once
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub name: String,
    pub health_value: f64,
}

impl Food {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health_value: DEFAULT_FOOD_HEALTH_VALUE,
        }
    }

    pub fn with_health_value(mut self, health_value: f64) -> Self {
        self.health_value = health_value;
        self
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
