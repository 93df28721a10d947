pub mod attendees;
pub mod error;
pub mod events;

use std::sync::Arc;

use async_graphql::*;
use mini_events_common::Environment;

use crate::service::EventService;

/// Merged query root composing all domain query modules.
#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(events::EventQuery);

/// Merged mutation root composing all domain mutation modules.
#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(
    events::mutations::EventMutation,
    attendees::mutations::AttendeeMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Schema without data attached. Enough for SDL export.
pub fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .limit_depth(10)
        .limit_complexity(1000)
}

pub fn build_schema(service: Arc<EventService>, environment: Environment) -> AppSchema {
    let mut builder = schema_builder().data(service);

    // Introspection is a development aid only.
    if !environment.is_development() {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
