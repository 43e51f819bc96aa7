//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // polymorphia-events = { path = "../polymorphia-events", features = ["test-fixtures"] }
//!
//! use polymorphia_events::fixtures;
//!
//! let events = fixtures::sample_events();
//! let snapshot = fixtures::sample_snapshot();
//! ```

use crate::{Event, MazeSnapshot};

/// Returns sample events from the fixtures file.
///
/// Contains 10 events selected from a short game:
/// - 2 game lifecycle events (start, end)
/// - 3 movement events (two travels, one flee)
/// - 2 fights between the Demon and Gandalf
/// - 1 meal
/// - 2 deaths
pub fn sample_events() -> Vec<Event> {
    let jsonl = include_str!("../tests/fixtures/sample_events.jsonl");
    jsonl
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            Event::from_jsonl(l).unwrap_or_else(|e| {
                panic!("Failed to parse event line: {}\nError: {}", l, e)
            })
        })
        .collect()
}

/// Returns a sample end-of-game snapshot from the fixtures file.
///
/// Four rooms in a ring, four characters, one surviving knight.
pub fn sample_snapshot() -> MazeSnapshot {
    let json = include_str!("../tests/fixtures/sample_snapshot.json");
    serde_json::from_str(json).expect("Failed to parse sample_snapshot.json")
}

/// Returns a specific event by ID from the sample events.
pub fn get_event(event_id: &str) -> Option<Event> {
    sample_events().into_iter().find(|e| e.event_id == event_id)
}

/// Returns the Demon's attack on Gandalf.
pub fn fight_event() -> Event {
    get_event("evt_00000007").expect("Fight event should exist in fixtures")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventOutcome, EventType};

    #[test]
    fn test_sample_events_load() {
        let events = sample_events();
        assert_eq!(events.len(), 10, "Should have 10 sample events");

        assert!(events.iter().any(|e| e.event_type == EventType::Movement));
        assert!(events.iter().any(|e| e.event_type == EventType::Conflict));
        assert!(events.iter().any(|e| e.event_type == EventType::Consumption));
        assert!(events.iter().any(|e| e.event_type == EventType::Death));
    }

    #[test]
    fn test_subtypes_match_types() {
        for event in sample_events() {
            assert_eq!(event.subtype.event_type(), event.event_type);
        }
    }

    #[test]
    fn test_outcomes_parse_to_expected_shapes() {
        let events = sample_events();

        assert!(matches!(events[0].outcome, EventOutcome::Game(_)));
        assert!(matches!(events[1].outcome, EventOutcome::Movement(_)));
        assert!(matches!(events[2].outcome, EventOutcome::Consumption(_)));
        assert!(matches!(events[3].outcome, EventOutcome::Movement(_)));
        assert!(matches!(events[4].outcome, EventOutcome::General(_)));
        assert!(matches!(
            events[5].outcome,
            EventOutcome::Movement(ref m) if m.to.as_deref() == Some("Room 4")
        ));
        assert!(matches!(events[6].outcome, EventOutcome::Fight(_)));
    }

    #[test]
    fn test_fight_event_helper() {
        let event = fight_event();
        let actors = event.actors.as_ref().unwrap();
        assert_eq!(actors.primary.name, "Demon");
        assert_eq!(actors.secondary.as_ref().unwrap().name, "Gandalf");

        match event.outcome {
            EventOutcome::Fight(fight) => {
                assert_eq!(fight.bonus_damage, 4.0);
                assert_eq!(fight.damaged, Some(1));
            }
            other => panic!("expected fight outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_sample_snapshot_load() {
        let snapshot = sample_snapshot();

        assert_eq!(snapshot.rooms.len(), 4);
        assert_eq!(snapshot.characters.len(), 4);
        assert_eq!(snapshot.living_character_count(), 1);
        assert_eq!(snapshot.population.living_adventurers, 1);
        assert_eq!(snapshot.characters_in_room("Room 4").len(), 1);
        // Dead characters stay listed in their room
        assert_eq!(
            snapshot.find_room("Room 4").unwrap().occupants,
            vec!["Demon".to_string(), "Gandalf".to_string()]
        );
        assert_eq!(snapshot.find_room("Room 1").unwrap().occupants, vec!["Bilbo".to_string()]);
    }

    #[test]
    fn test_events_reference_snapshot_characters() {
        let snapshot = sample_snapshot();

        for event in sample_events() {
            if let Some(actors) = &event.actors {
                assert!(
                    snapshot.find_character(&actors.primary.name).is_some(),
                    "Character {} should exist in snapshot",
                    actors.primary.name
                );
            }
        }
    }
}
