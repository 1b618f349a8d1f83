//! Movie catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::{actor::ActorCredit, movie::Movie, EntityKind},
};

use super::{CreatedResponse, DeleteAllResponse, MessageResponse};

const KIND: EntityKind = EntityKind::Movie;

/// List all movies
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "List of movies", body = Vec<Movie>)
    )
)]
pub async fn list_movies(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.repository.fetch_all(KIND).await?;
    Ok(Json(movies))
}

/// Get movie by ID
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = Movie),
        (status = 404, description = "Movie not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .repository
        .fetch_one(KIND, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", KIND.label())))?;
    Ok(Json(movie))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = crate::models::movie::CreateMovie,
    responses(
        (status = 200, description = "Movie created", body = CreatedResponse),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_movie(
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

/// Update an existing movie. Fields outside the writable set are dropped.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = crate::models::movie::UpdateMovie,
    responses(
        (status = 200, description = "Movie updated", body = MessageResponse),
        (status = 400, description = "No fields provided for update", body = crate::error::ErrorResponse),
        (status = 404, description = "Movie not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.update(KIND, id, &payload).await?;

    Ok(Json(MessageResponse {
        message: format!("{} updated successfully!", KIND.label()),
    }))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Movie not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_movie(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.delete(KIND, id).await?;

    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully!", KIND.label()),
    }))
}

/// Delete all movies
#[utoipa::path(
    delete,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movies deleted", body = DeleteAllResponse)
    )
)]
pub async fn delete_all_movies(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DeleteAllResponse>> {
    let deleted_count = state.repository.delete_all(KIND).await?;

    Ok(Json(DeleteAllResponse {
        message: format!("All {} deleted successfully!", KIND.plural()),
        deleted_count,
    }))
}

/// List the actors credited in a movie.
///
/// A movie that exists with no associated actors yields an empty list;
/// only a missing movie is a 404.
#[utoipa::path(
    get,
    path = "/movies/{id}/actors",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Actors in the movie's cast", body = Vec<ActorCredit>),
        (status = 404, description = "Movie not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_movie_actors(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<ActorCredit>>> {
    let credits = state.repository.actors_for_movie(id).await?;
    Ok(Json(credits))
}

/// Add an actor to a movie's cast
#[utoipa::path(
    post,
    path = "/movies/{id}/actors/{actor_id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID"),
        ("actor_id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor added to the cast", body = MessageResponse),
        (status = 404, description = "Movie or actor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn link_actor(
    State(state): State<crate::AppState>,
    Path((movie_id, actor_id)): Path<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.link_actor(movie_id, actor_id).await?;

    Ok(Json(MessageResponse {
        message: "Actor added to movie successfully!".to_string(),
    }))
}

/// Remove an actor from a movie's cast
#[utoipa::path(
    delete,
    path = "/movies/{id}/actors/{actor_id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID"),
        ("actor_id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor removed from the cast", body = MessageResponse),
        (status = 404, description = "Association not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn unlink_actor(
    State(state): State<crate::AppState>,
    Path((movie_id, actor_id)): Path<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    state.repository.unlink_actor(movie_id, actor_id).await?;

    Ok(Json(MessageResponse {
        message: "Actor removed from movie successfully!".to_string(),
    }))
}
