//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{actors, health, movies};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinelog API",
        version = "0.1.0",
        description = "Movie Catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Movies
        movies::list_movies,
        movies::get_movie,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        movies::delete_all_movies,
        movies::get_movie_actors,
        movies::link_actor,
        movies::unlink_actor,
        // Actors
        actors::list_actors,
        actors::get_actor,
        actors::create_actor,
        actors::update_actor,
        actors::delete_actor,
        actors::delete_all_actors,
    ),
    components(
        schemas(
            // Movies
            crate::models::movie::Movie,
            crate::models::movie::CreateMovie,
            crate::models::movie::UpdateMovie,
            // Actors
            crate::models::actor::Actor,
            crate::models::actor::ActorCredit,
            crate::models::actor::CreateActor,
            crate::models::actor::UpdateActor,
            // Responses
            crate::api::MessageResponse,
            crate::api::CreatedResponse,
            crate::api::DeleteAllResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "movies", description = "Movie catalog management"),
        (name = "actors", description = "Actor catalog management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
