pub mod mutations;
pub mod types;

use std::sync::Arc;

use async_graphql::*;

use crate::graphql::error;
use crate::service::EventService;
use types::GqlEvent;

#[derive(Default)]
pub struct EventQuery;

#[Object]
impl EventQuery {
    /// Get all events
    async fn events(&self, ctx: &Context<'_>) -> Result<Vec<GqlEvent>> {
        let service = ctx.data_unchecked::<Arc<EventService>>();
        let events = service
            .list_events()
            .await
            .map_err(error::from_event_error)?;
        Ok(events.into_iter().map(GqlEvent::from).collect())
    }

    /// Get a specific event by ID
    ///
    /// The field is nullable in the schema, but an unknown id is reported
    /// as NOT_FOUND rather than `null`.
    async fn event(&self, ctx: &Context<'_>, id: ID) -> Result<Option<GqlEvent>> {
        let service = ctx.data_unchecked::<Arc<EventService>>();
        let event = service
            .get_event(&id)
            .await
            .map_err(error::from_event_error)?;
        Ok(Some(GqlEvent::from(event)))
    }
}
