use async_graphql::*;
use mini_events_common::{Attendee, Rsvp};

/// Represents the RSVP status of an attendee for an event.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "RSVP")]
pub enum GqlRsvp {
    /// Attendee has confirmed attendance
    Yes,
    /// Attendee has declined attendance
    No,
    /// Attendee is unsure about attendance
    Maybe,
}

impl From<Rsvp> for GqlRsvp {
    fn from(r: Rsvp) -> Self {
        match r {
            Rsvp::Yes => GqlRsvp::Yes,
            Rsvp::No => GqlRsvp::No,
            Rsvp::Maybe => GqlRsvp::Maybe,
        }
    }
}

impl From<GqlRsvp> for Rsvp {
    fn from(r: GqlRsvp) -> Self {
        match r {
            GqlRsvp::Yes => Rsvp::Yes,
            GqlRsvp::No => Rsvp::No,
            GqlRsvp::Maybe => Rsvp::Maybe,
        }
    }
}

/// Represents an attendee of an event.
#[derive(SimpleObject, Clone)]
#[graphql(name = "Attendee")]
pub struct GqlAttendee {
    /// Unique identifier for the attendee
    pub id: ID,
    /// Full name of the attendee
    pub name: String,
    /// Optional email address of the attendee
    pub email: Option<String>,
    /// RSVP status of the attendee
    pub rsvp: GqlRsvp,
}

impl From<Attendee> for GqlAttendee {
    fn from(a: Attendee) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            email: a.email,
            rsvp: a.rsvp.into(),
        }
    }
}

/// Input type for adding an attendee to an event.
#[derive(InputObject)]
pub struct AddAttendeeInput {
    /// ID of the event to add the attendee to
    pub event_id: ID,
    /// Name of the attendee
    pub name: String,
    /// Optional email address of the attendee
    pub email: Option<String>,
    /// RSVP status of the attendee
    pub rsvp: GqlRsvp,
}

impl From<AddAttendeeInput> for mini_events_common::AddAttendeeInput {
    fn from(input: AddAttendeeInput) -> Self {
        Self {
            event_id: input.event_id.0,
            name: input.name,
            email: input.email,
            rsvp: input.rsvp.into(),
        }
    }
}
