//! Startup records for the store.

use std::collections::HashSet;

use anyhow::{bail, Result};
use mini_events_common::file_config::SeedConfig;
use mini_events_common::{Event, SeedEvent};

/// The three sample events the app ships with.
pub fn demo_events() -> Vec<Event> {
    [("1", "2025-01-01"), ("2", "2025-01-02"), ("3", "2025-01-03")]
        .into_iter()
        .map(|(id, date)| Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            date: date.to_string(),
            tags: Vec::new(),
            attendees: Vec::new(),
        })
        .collect()
}

/// Resolve the seed section of the file config into store records.
///
/// Explicit `[[seed.events]]` win over the demo data. Seeds are trusted
/// (no past-date check) but ids must be non-blank and unique.
pub fn seed_events(config: &SeedConfig) -> Result<Vec<Event>> {
    if config.events.is_empty() {
        return Ok(if config.demo_data {
            demo_events()
        } else {
            Vec::new()
        });
    }

    let mut seen = HashSet::new();
    let mut events = Vec::with_capacity(config.events.len());
    for seed in &config.events {
        let id = seed.id.trim();
        if id.is_empty() {
            bail!("seed event {:?} has a blank id", seed.title);
        }
        if !seen.insert(id.to_string()) {
            bail!("duplicate seed event id {id:?}");
        }
        events.push(from_seed(id, seed));
    }
    Ok(events)
}

fn from_seed(id: &str, seed: &SeedEvent) -> Event {
    Event {
        id: id.to_string(),
        title: seed.title.trim().to_string(),
        date: seed.date.trim().to_string(),
        tags: seed.tags.clone(),
        attendees: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use mini_events_common::Tag;

    use super::*;

    fn seed(id: &str) -> SeedEvent {
        SeedEvent {
            id: id.to_string(),
            title: "Launch".to_string(),
            date: "2999-01-01T10:00:00Z".to_string(),
            tags: vec![Tag {
                id: "t1".to_string(),
                name: "Internal".to_string(),
            }],
        }
    }

    #[test]
    fn demo_data_by_default() {
        let events = seed_events(&SeedConfig::default()).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(events.iter().all(|e| e.attendees.is_empty()));
    }

    #[test]
    fn demo_data_can_be_disabled() {
        let config = SeedConfig {
            demo_data: false,
            events: vec![],
        };
        assert!(seed_events(&config).unwrap().is_empty());
    }

    #[test]
    fn explicit_events_replace_demo_data() {
        let config = SeedConfig {
            demo_data: true,
            events: vec![seed("1")],
        };
        let events = seed_events(&config).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Launch");
        assert_eq!(events[0].tags.len(), 1);
    }

    #[test]
    fn rejects_duplicate_and_blank_ids() {
        let dup = SeedConfig {
            demo_data: false,
            events: vec![seed("1"), seed(" 1 ")],
        };
        assert!(seed_events(&dup).is_err());

        let blank = SeedConfig {
            demo_data: false,
            events: vec![seed("  ")],
        };
        assert!(seed_events(&blank).is_err());
    }
}
