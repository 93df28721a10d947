use async_graphql::*;
use mini_events_common::{Event, Tag};

use crate::graphql::attendees::types::GqlAttendee;

/// Represents a tag that can be associated with events (e.g., "Internal", "Public").
#[derive(SimpleObject, Clone)]
#[graphql(name = "Tag")]
pub struct GqlTag {
    /// Unique identifier for the tag
    pub id: ID,
    /// Name/label of the tag
    pub name: String,
}

impl From<Tag> for GqlTag {
    fn from(t: Tag) -> Self {
        Self {
            id: ID(t.id),
            name: t.name,
        }
    }
}

/// Represents an event in the system.
#[derive(SimpleObject, Clone)]
#[graphql(name = "Event")]
pub struct GqlEvent {
    /// Unique identifier for the event
    pub id: ID,
    /// Title of the event
    pub title: String,
    /// Date and time of the event (ISO 8601 format)
    pub date: String,
    /// Tags associated with the event
    pub tags: Vec<GqlTag>,
    /// List of attendees for the event
    pub attendees: Vec<GqlAttendee>,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: ID(e.id),
            title: e.title,
            date: e.date,
            tags: e.tags.into_iter().map(GqlTag::from).collect(),
            attendees: e.attendees.into_iter().map(GqlAttendee::from).collect(),
        }
    }
}

/// Input type for creating a new event.
#[derive(InputObject)]
pub struct CreateEventInput {
    /// Title of the event
    pub title: String,
    /// Date and time of the event (ISO 8601 format)
    pub date: String,
}

impl From<CreateEventInput> for mini_events_common::CreateEventInput {
    fn from(input: CreateEventInput) -> Self {
        Self {
            title: input.title,
            date: input.date,
        }
    }
}
