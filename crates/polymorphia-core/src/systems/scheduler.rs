//! Turn Scheduler
//!
//! Drives a game from start to finish. Each turn snapshots the living
//! characters, then dispatches them one at a time in random order until the
//! snapshot is exhausted. The game is over once either faction has no living
//! members.

use polymorphia_events::GameSubtype;
use serde::Serialize;

use super::behavior::decide;
use super::context::TurnContext;
use super::execute::execute;
use crate::components::{Faction, Maze, Variant};
use crate::config::{Config, RulesConfig, SchedulerConfig};
use crate::events::{recorder, TurnEvents};
use crate::rng::RandomSource;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    NotStarted,
    Running,
    Over,
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    AdventurersWon,
    CreaturesWon,
    /// Both factions died out
    NoWinner,
}

impl Outcome {
    pub fn winner(&self) -> Option<Faction> {
        match self {
            Outcome::AdventurersWon => Some(Faction::Adventurers),
            Outcome::CreaturesWon => Some(Faction::Creatures),
            Outcome::NoWinner => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::AdventurersWon => "adventurers",
            Outcome::CreaturesWon => "creatures",
            Outcome::NoWinner => "tie",
        }
    }
}

/// A game in progress
pub struct Game {
    maze: Maze,
    rules: RulesConfig,
    scheduler: SchedulerConfig,
    events: TurnEvents,
    turn: u64,
    state: GameState,
}

impl Game {
    /// Creates a game with default rules.
    pub fn new(maze: Maze) -> Self {
        Self {
            maze,
            rules: RulesConfig::default(),
            scheduler: SchedulerConfig::default(),
            events: TurnEvents::new(),
            turn: 0,
            state: GameState::NotStarted,
        }
    }

    pub fn from_config(maze: Maze, config: &Config) -> Self {
        Self::new(maze)
            .with_rules(config.rules.clone())
            .with_scheduler(config.scheduler.clone())
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn turn_count(&self) -> u64 {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &TurnEvents {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<polymorphia_events::Event> {
        self.events.drain()
    }

    /// True when nobody can ever leave their room and no demon is alive.
    ///
    /// Such a game only ends if the characters already share a room with
    /// something that forces a fight; a glutton alone with a creature blocks
    /// forever.
    pub fn may_stall(&self) -> bool {
        let stuck = self.maze.rooms().iter().all(|r| r.neighbors().is_empty());
        let demon_alive = self
            .maze
            .living_creatures()
            .into_iter()
            .filter_map(|id| self.maze.character(id))
            .any(|c| c.variant == Variant::Demon);
        stuck && !demon_alive
    }

    fn decided(&self) -> bool {
        !self.maze.has_living_adventurers() || !self.maze.has_living_creatures()
    }

    fn start(&mut self) {
        tracing::info!(
            adventurers = self.maze.living_adventurers().len(),
            creatures = self.maze.living_creatures().len(),
            "Starting play..."
        );
        recorder::record_game(
            &mut self.events,
            self.turn,
            &self.maze,
            GameSubtype::Started,
            "game_started",
            None,
        );
        self.state = GameState::Running;
    }

    fn finish(&mut self) {
        self.state = GameState::Over;
        let outcome = self.current_outcome();
        tracing::info!(turns = self.turn, "The game ended after {} turns.", self.turn);
        match outcome {
            Outcome::AdventurersWon | Outcome::CreaturesWon => tracing::info!(
                "The {} won! Left standing are: {}",
                outcome.as_str(),
                self.survivor_names().join(", ")
            ),
            Outcome::NoWinner => tracing::info!("No team won! Everyone died!"),
        }
        recorder::record_game(
            &mut self.events,
            self.turn,
            &self.maze,
            GameSubtype::Ended,
            "one_faction_remaining",
            Some(outcome.as_str()),
        );
    }

    /// Plays one turn. Does nothing once the game is over.
    pub fn play_turn(&mut self, rng: &mut dyn RandomSource) {
        match self.state {
            GameState::Over => return,
            GameState::NotStarted => self.start(),
            GameState::Running => {}
        }
        if self.decided() {
            self.finish();
            return;
        }

        self.turn += 1;
        tracing::debug!(turn = self.turn, "Maze state:\n{}", self.maze);

        let mut pending = self.maze.living_characters();
        while !pending.is_empty() {
            let actor = pending.remove(rng.uniform_int(pending.len()));
            if self.scheduler.skip_dead_actors && !self.maze.is_alive(actor) {
                tracing::trace!(
                    turn = self.turn,
                    character = actor.0,
                    "Skipping character killed earlier this turn"
                );
                continue;
            }

            let action = decide(&self.maze, actor, &mut *rng);
            let mut ctx = TurnContext {
                maze: &mut self.maze,
                rng: &mut *rng,
                rules: &self.rules,
                events: &mut self.events,
                turn: self.turn,
            };
            execute(&mut ctx, actor, action);
        }

        recorder::record_game(
            &mut self.events,
            self.turn,
            &self.maze,
            GameSubtype::TurnCompleted,
            "turn_completed",
            None,
        );

        if self.decided() {
            self.finish();
        }
    }

    /// Plays turns until the game is over and returns the outcome.
    pub fn play(&mut self, rng: &mut dyn RandomSource) -> Outcome {
        while !self.is_over() {
            self.play_turn(rng);
        }
        self.current_outcome()
    }

    fn current_outcome(&self) -> Outcome {
        match (
            self.maze.has_living_adventurers(),
            self.maze.has_living_creatures(),
        ) {
            (true, false) => Outcome::AdventurersWon,
            (false, true) => Outcome::CreaturesWon,
            _ => Outcome::NoWinner,
        }
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| self.current_outcome())
    }

    /// The winning faction, if the game is over and one faction survived.
    pub fn winner(&self) -> Option<Faction> {
        self.outcome().and_then(|o| o.winner())
    }

    /// Names of the living characters, room by room.
    pub fn survivor_names(&self) -> Vec<String> {
        self.maze
            .living_characters()
            .into_iter()
            .filter_map(|id| self.maze.character(id))
            .map(|c| c.name.clone())
            .collect()
    }
}
