use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use crate::modules::schedule::adapters::outbound::store::StoreError;
use crate::modules::schedule::core::calendar::Direction;
use crate::modules::schedule::core::session::SessionError;
use crate::modules::schedule::use_cases::edit_schedule::handler::EditError;
use crate::modules::schedule::use_cases::errors::ApplicationError;
use crate::shell::state::{Actor, AppState};

#[derive(Deserialize)]
pub struct OpenSessionBody {
    pub employee_id: String,
    pub month: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct ToggleBody {
    pub date: NaiveDate,
}

#[derive(Deserialize)]
pub struct TemplateBody {
    /// Sunday = 0.
    pub weekdays: Vec<u8>,
}

#[derive(Deserialize)]
pub struct NavigateBody {
    pub direction: Direction,
}

#[derive(Deserialize, Default)]
pub struct CommitBody {
    pub notes: Option<String>,
}

fn error_response(err: EditError) -> Response {
    let status = match err {
        EditError::UnknownSession(_) => StatusCode::NOT_FOUND,
        EditError::MissingEmployee | EditError::Weekday(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EditError::Session(SessionError::PastDate(_) | SessionError::NothingStaged) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EditError::Session(SessionError::NotEditing | SessionError::AlreadyCommitting) => {
            StatusCode::CONFLICT
        }
        EditError::Commit(ApplicationError::Domain(_)) => StatusCode::CONFLICT,
        EditError::Commit(ApplicationError::Store(StoreError::NotFound { .. })) => {
            StatusCode::NOT_FOUND
        }
        EditError::Commit(ApplicationError::Store(_)) | EditError::Queries(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    status.into_response()
}

pub async fn open(
    State(state): State<AppState>,
    body: Result<Json<OpenSessionBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.edit_handler.open(&body.employee_id, body.month).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ToggleBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.edit_handler.toggle(&id, body.date).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TemplateBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.edit_handler.template(&id, &body.weekdays).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<NavigateBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.edit_handler.navigate(&id, body.direction).await {
        Ok(view) => Json(view).into_response(),
        Err(err) => error_response(err),
    }
}

/// The body is optional; an empty one commits without notes.
pub async fn commit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = if body.is_empty() {
        CommitBody::default()
    } else {
        match serde_json::from_slice::<CommitBody>(&body) {
            Ok(b) => b,
            Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        }
    };
    let actor = Actor::from_headers(&headers);

    match state.edit_handler.commit(&id, body.notes, &actor.0).await {
        Ok(outcome) => {
            if let Err(err) = state.refresh_cache().await {
                warn!(error = %err, "schedule cache refresh failed");
            }
            let status = if outcome.summary.is_complete() {
                StatusCode::OK
            } else {
                StatusCode::MULTI_STATUS
            };
            (status, Json(outcome)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn abandon(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.edit_handler.abandon(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}
