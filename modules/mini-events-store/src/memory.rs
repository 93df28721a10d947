//! In-memory event store, shared process-wide.

use async_trait::async_trait;
use mini_events_common::{Attendee, Event};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::EventRepository;

/// Ordered `Vec<Event>` behind an async `RwLock`. Lookups are linear scans,
/// which is fine at demo scale.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the given records, kept in order.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventRepository for MemoryEventStore {
    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn find_event(&self, id: &str) -> StoreResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn append_event(&self, event: Event) -> StoreResult<()> {
        self.events.write().await.push(event);
        Ok(())
    }

    async fn append_attendee(&self, event_id: &str, attendee: Attendee) -> StoreResult<()> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;
        event.attendees.push(attendee);
        Ok(())
    }

    async fn remove_attendee(&self, event_id: &str, attendee_id: &str) -> StoreResult<Attendee> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| StoreError::EventNotFound(event_id.to_string()))?;
        let index = event
            .attendees
            .iter()
            .position(|a| a.id == attendee_id)
            .ok_or_else(|| StoreError::AttendeeNotFound {
                event_id: event_id.to_string(),
                attendee_id: attendee_id.to_string(),
            })?;
        Ok(event.attendees.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use mini_events_common::Rsvp;

    use super::*;

    fn event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {id}"),
            date: "2999-01-01".to_string(),
            tags: vec![],
            attendees: vec![],
        }
    }

    fn attendee(id: &str) -> Attendee {
        Attendee {
            id: id.to_string(),
            name: format!("Guest {id}"),
            email: None,
            rsvp: Rsvp::Maybe,
        }
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryEventStore::with_events(vec![event("b"), event("a")]);
        store.append_event(event("c")).await.unwrap();

        let ids: Vec<String> = store
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn find_event_misses_unknown_id() {
        let store = MemoryEventStore::with_events(vec![event("1")]);
        assert!(store.find_event("1").await.unwrap().is_some());
        assert!(store.find_event("2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn attendees_append_in_order_and_remove() {
        let store = MemoryEventStore::with_events(vec![event("1")]);
        store.append_attendee("1", attendee("x")).await.unwrap();
        store.append_attendee("1", attendee("y")).await.unwrap();
        store.append_attendee("1", attendee("z")).await.unwrap();

        let removed = store.remove_attendee("1", "y").await.unwrap();
        assert_eq!(removed.id, "y");

        let found = store.find_event("1").await.unwrap().unwrap();
        let ids: Vec<&str> = found.attendees.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "z"]);
    }

    #[tokio::test]
    async fn append_attendee_to_missing_event_fails() {
        let store = MemoryEventStore::new();
        let err = store.append_attendee("nope", attendee("x")).await.unwrap_err();
        assert!(matches!(err, StoreError::EventNotFound(id) if id == "nope"));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn remove_twice_reports_missing_attendee() {
        let store = MemoryEventStore::with_events(vec![event("1")]);
        store.append_attendee("1", attendee("x")).await.unwrap();
        store.remove_attendee("1", "x").await.unwrap();

        let err = store.remove_attendee("1", "x").await.unwrap_err();
        assert!(matches!(err, StoreError::AttendeeNotFound { .. }));

        let err = store.remove_attendee("2", "x").await.unwrap_err();
        assert!(matches!(err, StoreError::EventNotFound(_)));
    }
}
