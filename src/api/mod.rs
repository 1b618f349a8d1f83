//! API handlers for Cinelog REST endpoints

pub mod actors;
pub mod health;
pub mod movies;
pub mod openapi;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::AppState;

/// Confirmation response for update and delete operations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for create operations, carrying the generated id
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// Response for delete-all operations
#[derive(Serialize, ToSchema)]
pub struct DeleteAllResponse {
    pub message: String,
    pub deleted_count: u64,
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Movies
        .route("/movies", get(movies::list_movies))
        .route("/movies", post(movies::create_movie))
        .route("/movies", delete(movies::delete_all_movies))
        .route("/movies/:id", get(movies::get_movie))
        .route("/movies/:id", put(movies::update_movie))
        .route("/movies/:id", delete(movies::delete_movie))
        // Cast (movie <-> actor junction)
        .route("/movies/:id/actors", get(movies::get_movie_actors))
        .route("/movies/:id/actors/:actor_id", post(movies::link_actor))
        .route("/movies/:id/actors/:actor_id", delete(movies::unlink_actor))
        // Actors
        .route("/actors", get(actors::list_actors))
        .route("/actors", post(actors::create_actor))
        .route("/actors", delete(actors::delete_all_actors))
        .route("/actors/:id", get(actors::get_actor))
        .route("/actors/:id", put(actors::update_actor))
        .route("/actors/:id", delete(actors::delete_actor))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
