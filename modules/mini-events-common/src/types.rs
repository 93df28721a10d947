use std::fmt;

use serde::{Deserialize, Serialize};

// --- Enums ---

/// Attendance response for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rsvp {
    Yes,
    No,
    Maybe,
}

impl Rsvp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Maybe => "MAYBE",
        }
    }
}

impl fmt::Display for Rsvp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Records ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    /// Stored trimmed and lower-cased.
    pub email: Option<String>,
    pub rsvp: Rsvp,
}

/// An event and the attendees it owns. Attendee order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// ISO-8601 string, kept exactly as accepted at creation.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl Event {
    pub fn find_attendee(&self, attendee_id: &str) -> Option<&Attendee> {
        self.attendees.iter().find(|a| a.id == attendee_id)
    }

    /// Emails of all attendees that have one, in attendee order.
    pub fn attendee_emails(&self) -> impl Iterator<Item = &str> {
        self.attendees.iter().filter_map(|a| a.email.as_deref())
    }
}

// --- Raw inputs (as received from callers, unvalidated) ---

#[derive(Debug, Clone, Default)]
pub struct CreateEventInput {
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct AddAttendeeInput {
    pub event_id: String,
    pub name: String,
    pub email: Option<String>,
    pub rsvp: Rsvp,
}

// --- Validated values ---

/// Output of create-event validation: trimmed, checked, ready for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
}

impl NewEvent {
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            tags: Vec::new(),
            attendees: Vec::new(),
        }
    }
}

/// Output of add-attendee validation. `email` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendee {
    pub event_id: String,
    pub name: String,
    pub email: Option<String>,
    pub rsvp: Rsvp,
}

impl NewAttendee {
    pub fn into_attendee(self, id: String) -> Attendee {
        Attendee {
            id,
            name: self.name,
            email: self.email,
            rsvp: self.rsvp,
        }
    }
}
