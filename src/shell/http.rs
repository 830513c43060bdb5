use axum::{
    Extension, Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::schedule::use_cases::edit_schedule::inbound::http as edit_http;
use crate::modules::schedule::use_cases::list_activity::inbound::http as activity_http;
use crate::modules::schedule::use_cases::record_work_hours::inbound::http as hours_http;
use crate::modules::schedule::use_cases::view_calendar::inbound::http as calendar_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/calendar", get(calendar_http::calendar))
        .route("/work-days", get(calendar_http::list_work_days))
        .route("/work-hours", get(hours_http::list).post(hours_http::create))
        .route(
            "/work-hours/{id}",
            put(hours_http::update).delete(hours_http::delete),
        )
        .route("/schedule-sessions", post(edit_http::open))
        .route("/schedule-sessions/{id}", delete(edit_http::abandon))
        .route("/schedule-sessions/{id}/toggle", post(edit_http::toggle))
        .route("/schedule-sessions/{id}/template", post(edit_http::template))
        .route("/schedule-sessions/{id}/navigate", post(edit_http::navigate))
        .route("/schedule-sessions/{id}/commit", post(edit_http::commit))
        .route("/activity", get(activity_http::handle))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with request tracing and CORS.
pub fn app(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
