//! Actor catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::{actor::Actor, EntityKind},
};

use super::{CreatedResponse, DeleteAllResponse, MessageResponse};

const KIND: EntityKind = EntityKind::Actor;

/// List all actors
#[utoipa::path(
    get,
    path = "/actors",
    tag = "actors",
    responses(
        (status = 200, description = "List of actors", body = Vec<Actor>)
    )
)]
pub async fn list_actors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Actor>>> {
    let actors = state.repository.fetch_all(KIND).await?;
    Ok(Json(actors))
}

/// Get actor by ID
#[utoipa::path(
    get,
    path = "/actors/{id}",
    tag = "actors",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor details", body = Actor),
        (status = 404, description = "Actor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_actor(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Actor>> {
    let actor = state
        .repository
        .fetch_one(KIND, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", KIND.label())))?;
    Ok(Json(actor))
}

/// Create a new actor
#[utoipa::path(
    post,
    path = "/actors",
    tag = "actors",
    request_body = crate::models::actor::CreateActor,
    responses(
        (status = 200, description = "Actor created", body = CreatedResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_actor(
    State(state): State<crate::AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<Json<CreatedResponse>> {
    let missing = KIND.missing_fields(&payload);
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let id = state.repository.insert(KIND, &payload).await?;

    Ok(Json(CreatedResponse {
        message: format!("{} added successfully!", KIND.label()),
        id,
    }))
}

/// Update an existing actor. Fields outside the writable set are dropped.
#[utoipa::path(
    put,
    path = "/actors/{id}",
    tag = "actors",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = crate::models::actor::UpdateActor,
    responses(
        (status = 200, description = "Actor updated", body = MessageResponse),
        (status = 400, description = "No fields provided for update", body = crate::error::ErrorResponse),
        (status = 404, description = "Actor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_actor(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.update(KIND, id, &payload).await?;

    Ok(Json(MessageResponse {
        message: format!("{} updated successfully!", KIND.label()),
    }))
}

/// Delete an actor
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    tag = "actors",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor deleted", body = MessageResponse),
        (status = 404, description = "Actor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_actor(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.delete(KIND, id).await?;

    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully!", KIND.label()),
    }))
}

/// Delete all actors
#[utoipa::path(
    delete,
    path = "/actors",
    tag = "actors",
    responses(
        (status = 200, description = "All actors deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_actors(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let deleted_count = state.repository.delete_all(KIND).await?;

    Ok(Json(DeleteAllResponse {
        message: format!("All {} deleted successfully!", KIND.plural()),
        deleted_count,
    }))
}
