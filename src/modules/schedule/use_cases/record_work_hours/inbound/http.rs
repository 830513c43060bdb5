use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tracing::warn;

use crate::modules::schedule::adapters::outbound::store::{ScheduleFilter, StoreError};
use crate::modules::schedule::use_cases::errors::ApplicationError;
use crate::modules::schedule::use_cases::record_work_hours::command::{
    DeleteWorkHours, RecordWorkHours,
};
use crate::shared::core::primitives::hh_mm;
use crate::shell::state::{Actor, AppState};

#[derive(Deserialize)]
pub struct WorkHoursBody {
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub break_minutes: u32,
    pub notes: Option<String>,
}

impl WorkHoursBody {
    fn into_command(self, requested_by: String) -> RecordWorkHours {
        RecordWorkHours {
            employee_id: self.employee_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            break_minutes: self.break_minutes,
            notes: self.notes,
            requested_by,
        }
    }
}

#[derive(Deserialize)]
pub struct DeleteWorkHoursParams {
    pub employee_id: String,
}

fn error_response(err: ApplicationError) -> Response {
    match err {
        ApplicationError::Domain(_) => StatusCode::CONFLICT.into_response(),
        ApplicationError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn refresh(state: &AppState) {
    if let Err(err) = state.refresh_cache().await {
        warn!(error = %err, "schedule cache refresh failed");
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ScheduleFilter>,
) -> impl IntoResponse {
    match state.queries.work_hours(&filter).await {
        Ok(entries) => Json(entries).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<WorkHoursBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = body.into_command(Actor::from_headers(&headers).0);

    match state.record_handler.register(command).await {
        Ok(entry) => {
            refresh(&state).await;
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<WorkHoursBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = body.into_command(Actor::from_headers(&headers).0);

    match state.record_handler.update(&id, command).await {
        Ok(entry) => {
            refresh(&state).await;
            Json(entry).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteWorkHoursParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let command = DeleteWorkHours {
        id,
        employee_id: params.employee_id,
        requested_by: Actor::from_headers(&headers).0,
    };

    match state.record_handler.delete(command).await {
        Ok(()) => {
            refresh(&state).await;
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(err),
    }
}
