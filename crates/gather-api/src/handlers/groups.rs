// ============================================================================
// Gather API - Group Handlers
// File: crates/gather-api/src/handlers/groups.rs
// ============================================================================
//! Groups resource handlers (index, new, show, edit, update, create, destroy)

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use gather_core::services::{GroupDetails, GroupEditForm};
use gather_shared::constants::{group_path, GROUPS_PATH};
use gather_shared::parse_entity_id;

use crate::dto::{GroupForm, GroupParams, IndexView, NewView};
use crate::error::ApiError;
use crate::extract::{Authenticated, ResponseFormat};
use crate::response::found;
use crate::state::AppState;

/// Ids that are not UUIDs cannot exist, so they get the not-found redirect.
fn group_id(raw: &str) -> Result<Uuid, ApiError> {
    parse_entity_id(raw).ok_or_else(|| ApiError::NotFound(format!("group {}", raw)))
}

fn params(payload: Result<Json<GroupParams>, JsonRejection>) -> Result<GroupParams, ApiError> {
    payload
        .map(|Json(params)| params)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// Index handler - GET /groups
pub async fn index(
    Authenticated(user): Authenticated,
    State(state): State<AppState>,
) -> Result<Json<IndexView>, ApiError> {
    let groups = state.groups.list(&user).await?;
    Ok(Json(IndexView { groups }))
}

/// New form handler - GET /groups/new
pub async fn new(Authenticated(_user): Authenticated) -> Json<NewView> {
    Json(NewView {
        group: GroupForm::default(),
    })
}

/// Show handler - GET /groups/{id}
pub async fn show(
    Authenticated(user): Authenticated,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GroupDetails>, ApiError> {
    let id = group_id(&id)?;
    Ok(Json(state.groups.show(&user, &id).await?))
}

/// Edit form handler - GET /groups/{id}/edit
pub async fn edit(
    Authenticated(user): Authenticated,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GroupEditForm>, ApiError> {
    let id = group_id(&id)?;
    Ok(Json(state.groups.edit(&user, &id).await?))
}

/// Update handler - PUT/PATCH /groups/{id}
pub async fn update(
    Authenticated(user): Authenticated,
    State(state): State<AppState>,
    format: ResponseFormat,
    Path(id): Path<String>,
    payload: Result<Json<GroupParams>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = group_id(&id)?;
    let changes = params(payload)?.group.into_changes();
    let group = state.groups.update(&user, &id, changes).await?;

    Ok(match format {
        ResponseFormat::Html => found(&group_path(&group.id)),
        ResponseFormat::Json => (StatusCode::OK, Json(group)).into_response(),
    })
}

/// Create handler - POST /groups
pub async fn create(
    Authenticated(user): Authenticated,
    State(state): State<AppState>,
    format: ResponseFormat,
    payload: Result<Json<GroupParams>, JsonRejection>,
) -> Result<Response, ApiError> {
    let input = params(payload)?.group.into_new_group();
    let group = state.groups.create(&user, input).await?;

    Ok(match format {
        ResponseFormat::Html => found(&group_path(&group.id)),
        ResponseFormat::Json => (StatusCode::CREATED, Json(group)).into_response(),
    })
}

/// Destroy handler - DELETE /groups/{id}
pub async fn destroy(
    Authenticated(user): Authenticated,
    State(state): State<AppState>,
    format: ResponseFormat,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = group_id(&id)?;
    state.groups.destroy(&user, &id).await?;

    Ok(match format {
        ResponseFormat::Html => found(GROUPS_PATH),
        ResponseFormat::Json => StatusCode::NO_CONTENT.into_response(),
    })
}
