use std::sync::Arc;

use async_graphql::*;

use super::types::{AddAttendeeInput, GqlAttendee};
use crate::graphql::error;
use crate::service::EventService;

#[derive(Default)]
pub struct AttendeeMutation;

#[Object]
impl AttendeeMutation {
    /// Add an attendee to an event
    async fn add_attendee(&self, ctx: &Context<'_>, input: AddAttendeeInput) -> Result<GqlAttendee> {
        let service = ctx.data_unchecked::<Arc<EventService>>();
        let attendee = service
            .add_attendee(input.into())
            .await
            .map_err(error::from_event_error)?;
        Ok(GqlAttendee::from(attendee))
    }

    /// Remove an attendee from an event
    async fn remove_attendee(&self, ctx: &Context<'_>, event_id: ID, attendee_id: ID) -> Result<bool> {
        let service = ctx.data_unchecked::<Arc<EventService>>();
        service
            .remove_attendee(&event_id, &attendee_id)
            .await
            .map_err(error::from_event_error)
    }
}
