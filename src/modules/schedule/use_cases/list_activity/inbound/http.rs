use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::infrastructure::activity_log::ActivityFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListActivityParams {
    pub employee_id: Option<String>,
    pub action: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListActivityParams>,
) -> impl IntoResponse {
    let filter = ActivityFilter {
        employee_id: params.employee_id,
        action: params.action,
    };
    match state
        .activity
        .list(
            &filter,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(state.activity_page_size),
            params.sort_desc.unwrap_or(true),
        )
        .await
    {
        Ok(rows) => Json(rows).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
