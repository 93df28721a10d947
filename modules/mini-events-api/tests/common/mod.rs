//! Shared fixtures for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Variables};
use mini_events_api::graphql::{build_schema, AppSchema};
use mini_events_api::service::EventService;
use mini_events_common::{Environment, Event, Limits};
use mini_events_store::MemoryEventStore;
use serde_json::Value;

pub fn launch_event() -> Event {
    Event {
        id: "1".to_string(),
        title: "Launch".to_string(),
        date: "2999-01-01T10:00:00Z".to_string(),
        tags: vec![],
        attendees: vec![],
    }
}

pub fn schema_with(events: Vec<Event>, environment: Environment) -> AppSchema {
    let store = Arc::new(MemoryEventStore::with_events(events));
    let service = Arc::new(EventService::new(store, Limits::default()));
    build_schema(service, environment)
}

/// Schema seeded with the single "Launch" event, id "1".
pub fn launch_schema() -> AppSchema {
    schema_with(vec![launch_event()], Environment::Test)
}

/// Execute and return the full response as JSON (`data` + `errors`).
pub async fn run(schema: &AppSchema, query: &str, variables: Value) -> Value {
    let request = Request::new(query).variables(Variables::from_json(variables));
    let response = schema.execute(request).await;
    serde_json::to_value(&response).expect("response serializes")
}

pub fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}

pub const EVENTS: &str = "{ events { id title date tags { id name } attendees { id name email rsvp } } }";

pub const EVENT: &str =
    "query GetEvent($id: ID!) { event(id: $id) { id title date attendees { id name email rsvp } } }";

pub const CREATE_EVENT: &str = "mutation CreateEvent($input: CreateEventInput!) {
    createEvent(input: $input) { id title date tags { id } attendees { id } }
}";

pub const ADD_ATTENDEE: &str = "mutation AddAttendee($input: AddAttendeeInput!) {
    addAttendee(input: $input) { id name email rsvp }
}";

pub const REMOVE_ATTENDEE: &str = "mutation RemoveAttendee($eventId: ID!, $attendeeId: ID!) {
    removeAttendee(eventId: $eventId, attendeeId: $attendeeId)
}";
