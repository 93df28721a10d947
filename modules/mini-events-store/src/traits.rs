//! Repository trait for event storage.

use async_trait::async_trait;
use mini_events_common::{Attendee, Event};

use crate::error::StoreResult;

/// Capability set over the ordered event collection.
///
/// Implementations hold no business rules: ids arrive pre-assigned and
/// duplicate-email checks happen before `append_attendee` is called.
/// Callers that need check-then-write atomicity serialize their writes.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every event, in insertion order.
    async fn list_events(&self) -> StoreResult<Vec<Event>>;

    async fn find_event(&self, id: &str) -> StoreResult<Option<Event>>;

    /// Append at the end. The id must already be unique.
    async fn append_event(&self, event: Event) -> StoreResult<()>;

    /// Append to the named event's attendees.
    async fn append_attendee(&self, event_id: &str, attendee: Attendee) -> StoreResult<()>;

    /// Remove from the named event's attendees, returning the removed record.
    async fn remove_attendee(&self, event_id: &str, attendee_id: &str) -> StoreResult<Attendee>;
}
