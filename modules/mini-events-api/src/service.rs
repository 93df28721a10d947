//! Event operations: validate, look up, assign ids, write.
//!
//! Mutations hold `write_lock` from the first read to the last write, so a
//! duplicate-email check can never race an insert into the same event.

use std::sync::Arc;

use chrono::Utc;
use mini_events_common::validation::{
    has_duplicate_email, validate_add_attendee, validate_create_event, validate_id,
};
use mini_events_common::{
    AddAttendeeInput, Attendee, CreateEventInput, Event, EventError, EventResult, Limits,
};
use mini_events_store::EventRepository;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

pub struct EventService {
    repo: Arc<dyn EventRepository>,
    limits: Limits,
    write_lock: Mutex<()>,
}

impl EventService {
    pub fn new(repo: Arc<dyn EventRepository>, limits: Limits) -> Self {
        Self {
            repo,
            limits,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list_events(&self) -> EventResult<Vec<Event>> {
        Ok(self.repo.list_events().await?)
    }

    pub async fn get_event(&self, id: &str) -> EventResult<Event> {
        let id = validate_id("Event ID", id)?;
        self.repo
            .find_event(&id)
            .await?
            .ok_or_else(|| EventError::not_found(format!("Event {id} not found")))
    }

    pub async fn create_event(&self, input: CreateEventInput) -> EventResult<Event> {
        let new_event = validate_create_event(&input, &self.limits, Utc::now())?;
        let event = new_event.into_event(new_id());

        let _guard = self.write_lock.lock().await;
        self.repo.append_event(event.clone()).await?;

        info!(event_id = %event.id, title = %event.title, "Event created");
        Ok(event)
    }

    pub async fn add_attendee(&self, input: AddAttendeeInput) -> EventResult<Attendee> {
        let new_attendee = validate_add_attendee(&input, &self.limits)?;

        let _guard = self.write_lock.lock().await;
        let event = self.get_event(&new_attendee.event_id).await?;
        if has_duplicate_email(new_attendee.email.as_deref(), event.attendee_emails()) {
            return Err(EventError::DuplicateEmail(format!(
                "An attendee with this email is already registered for event {}",
                event.id
            )));
        }

        let attendee = new_attendee.into_attendee(new_id());
        self.repo.append_attendee(&event.id, attendee.clone()).await?;

        info!(
            event_id = %event.id,
            attendee_id = %attendee.id,
            rsvp = %attendee.rsvp,
            "Attendee added"
        );
        Ok(attendee)
    }

    /// Always `Ok(true)` on success; a repeat call reports NOT_FOUND.
    pub async fn remove_attendee(&self, event_id: &str, attendee_id: &str) -> EventResult<bool> {
        let event_id = validate_id("Event ID", event_id)?;
        let attendee_id = validate_id("Attendee ID", attendee_id)?;

        let _guard = self.write_lock.lock().await;
        self.repo.remove_attendee(&event_id, &attendee_id).await?;

        info!(event_id = %event_id, attendee_id = %attendee_id, "Attendee removed");
        Ok(true)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
