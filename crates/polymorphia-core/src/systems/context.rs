//! Turn Context

use crate::components::Maze;
use crate::config::RulesConfig;
use crate::events::TurnEvents;
use crate::rng::RandomSource;

/// Everything an action needs while it is being applied.
///
/// Bundled so systems share one signature and the random source is passed
/// explicitly rather than reached through a global.
pub struct TurnContext<'a> {
    pub maze: &'a mut Maze,
    pub rng: &'a mut dyn RandomSource,
    pub rules: &'a RulesConfig,
    /// Structured events are pushed here as actions resolve
    pub events: &'a mut TurnEvents,
    /// Current turn number (0 before play starts)
    pub turn: u64,
}
