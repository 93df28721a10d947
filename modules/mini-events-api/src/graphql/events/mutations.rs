use std::sync::Arc;

use async_graphql::*;

use super::types::{CreateEventInput, GqlEvent};
use crate::graphql::error;
use crate::service::EventService;

#[derive(Default)]
pub struct EventMutation;

#[Object]
impl EventMutation {
    /// Create a new event
    async fn create_event(&self, ctx: &Context<'_>, input: CreateEventInput) -> Result<GqlEvent> {
        let service = ctx.data_unchecked::<Arc<EventService>>();
        let event = service
            .create_event(input.into())
            .await
            .map_err(error::from_event_error)?;
        Ok(GqlEvent::from(event))
    }
}
