use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use mini_events_common::file_config::ServerConfig;
use mini_events_common::Environment;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::Instrument;

use crate::graphql::{error, AppSchema};

const SERVER_HEADER: &str = "x-graphql-server";
const SERVER_NAME: &str = "mini-event-manager";
const DEV_CLIENT_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone)]
pub struct AppState {
    schema: AppSchema,
    environment: Environment,
    graphql_path: String,
}

pub fn build_router(schema: AppSchema, environment: Environment, server: &ServerConfig) -> Router {
    let graphql_path = server.graphql_path.clone();

    let graphql_route = if environment.is_development() {
        get(graphiql_handler).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(&graphql_path, graphql_route)
        .route("/health", get(health))
        .with_state(AppState {
            schema,
            environment,
            graphql_path: graphql_path.clone(),
        })
        .layer(cors_layer(environment, &server.allowed_origins))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(SERVER_HEADER),
            HeaderValue::from_static(SERVER_NAME),
        ))
        // Logging layer: method + path only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

fn cors_layer(environment: Environment, allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = if allowed_origins.is_empty() && environment.is_development() {
        vec![HeaderValue::from_static(DEV_CLIENT_ORIGIN)]
    } else {
        allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect()
    };

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true)
    }
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let mut response = state
        .schema
        .execute(req.into_inner())
        .instrument(tracing::info_span!("graphql_request"))
        .await;
    if !response.errors.is_empty() {
        tracing::warn!(errors = ?response.errors, "GraphQL errors");
        if state.environment.is_production() {
            error::mask_uncoded_errors(&mut response);
        }
    }
    response.into()
}

async fn graphiql_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&state.graphql_path).finish())
}

async fn health() -> &'static str {
    "ok"
}
