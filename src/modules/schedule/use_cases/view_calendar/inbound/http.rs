use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::schedule::adapters::outbound::store::ScheduleFilter;
use crate::modules::schedule::core::calendar::check_pivot;
use crate::modules::schedule::use_cases::view_calendar::handler::{
    CalendarView, build_calendar_page,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CalendarParams {
    pub employee_id: String,
    pub pivot: Option<NaiveDate>,
    #[serde(default)]
    pub view: CalendarView,
}

pub async fn calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> impl IntoResponse {
    let Ok(pivot) = check_pivot(params.pivot.unwrap_or_else(|| state.clock.today())) else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    match build_calendar_page(
        state.queries.as_ref(),
        state.clock.as_ref(),
        &params.employee_id,
        pivot,
        params.view,
    )
    .await
    {
        Ok(page) => Json(page).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn list_work_days(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> impl IntoResponse {
    match state.queries.work_days(&filter).await {
        Ok(days) => Json(days).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
