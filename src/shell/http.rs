use axum::{
    Extension, Router,
    http::StatusCode,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::modules::calendar::use_cases::create_event::inbound::http as create_http;
use crate::modules::calendar::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::calendar::use_cases::list_events::inbound::http as list_http;
use crate::modules::calendar::use_cases::update_event::inbound::http as update_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/create_event", post(create_http::handle))
        .route("/update_event", post(update_http::handle))
        .route("/delete_event", post(delete_http::handle))
        .route("/events_for_day", get(list_http::for_day))
        .route("/events_for_week", get(list_http::for_week))
        .route("/events_for_month", get(list_http::for_month))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
