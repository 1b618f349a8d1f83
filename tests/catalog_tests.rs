//! Repository-level tests for the catalog CRUD primitives

use cinelog_server::{
    models::{actor::Actor, movie::Movie, EntityKind},
    repository::Repository,
    AppError,
};
use serde_json::{json, Map, Value};
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory SQLite repository. A single connection so every statement
/// sees the same database.
async fn test_repository() -> Repository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    let repository = Repository::new(pool);
    repository
        .init_schema()
        .await
        .expect("Failed to initialize schema");
    repository
}

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("JSON object")
}

fn dune() -> Map<String, Value> {
    object(json!({
        "title": "Dune",
        "director": "Villeneuve",
        "year": 2021,
        "description": "Epic sci-fi"
    }))
}

#[tokio::test]
async fn init_schema_is_idempotent() {
    let repository = test_repository().await;
    repository
        .init_schema()
        .await
        .expect("Second init must be a no-op");
}

#[tokio::test]
async fn insert_then_fetch_one_round_trip() {
    let repository = test_repository().await;

    let id = repository
        .insert(EntityKind::Movie, &dune())
        .await
        .expect("insert");

    let movie: Movie = repository
        .fetch_one(EntityKind::Movie, id)
        .await
        .expect("fetch")
        .expect("row must exist");

    assert_eq!(movie.id, id);
    assert_eq!(movie.title, "Dune");
    assert_eq!(movie.director, "Villeneuve");
    assert_eq!(movie.year, 2021);
    assert_eq!(movie.description, "Epic sci-fi");
}

#[tokio::test]
async fn insert_assigns_unique_ids() {
    let repository = test_repository().await;

    let first = repository.insert(EntityKind::Movie, &dune()).await.unwrap();
    let second = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn insert_ignores_extra_fields() {
    let repository = test_repository().await;

    let mut payload = dune();
    payload.insert("rating".to_string(), json!(9.5));

    let id = repository
        .insert(EntityKind::Movie, &payload)
        .await
        .expect("extra fields must be ignored");

    let movie: Option<Movie> = repository.fetch_one(EntityKind::Movie, id).await.unwrap();
    assert!(movie.is_some());
}

#[tokio::test]
async fn insert_rejects_non_scalar_values() {
    let repository = test_repository().await;

    let mut payload = dune();
    payload.insert("title".to_string(), json!(["Dune", "Part One"]));

    let result = repository.insert(EntityKind::Movie, &payload).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn fetch_one_returns_none_for_unknown_id() {
    let repository = test_repository().await;

    let movie: Option<Movie> = repository.fetch_one(EntityKind::Movie, 999).await.unwrap();
    assert!(movie.is_none());
}

#[tokio::test]
async fn fetch_all_returns_empty_without_rows() {
    let repository = test_repository().await;

    let actors: Vec<Actor> = repository.fetch_all(EntityKind::Actor).await.unwrap();
    assert!(actors.is_empty());
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let repository = test_repository().await;
    let id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    repository
        .update(EntityKind::Movie, id, &object(json!({"year": 2024})))
        .await
        .expect("update");

    let movie: Movie = repository
        .fetch_one(EntityKind::Movie, id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(movie.year, 2024);
    assert_eq!(movie.title, "Dune");
    assert_eq!(movie.director, "Villeneuve");
    assert_eq!(movie.description, "Epic sci-fi");
}

#[tokio::test]
async fn update_drops_fields_outside_writable_set() {
    let repository = test_repository().await;
    let id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    repository
        .update(
            EntityKind::Movie,
            id,
            &object(json!({"year": 2024, "id": 777, "rating": 5})),
        )
        .await
        .expect("unwritable fields are dropped, not an error");

    let movie: Movie = repository
        .fetch_one(EntityKind::Movie, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(movie.id, id);
    assert_eq!(movie.year, 2024);
}

#[tokio::test]
async fn update_with_nothing_applicable_is_validation_error() {
    let repository = test_repository().await;
    let id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    let empty = repository
        .update(EntityKind::Movie, id, &object(json!({})))
        .await;
    assert!(matches!(empty, Err(AppError::Validation(_))));

    let filtered_out = repository
        .update(EntityKind::Movie, id, &object(json!({"rating": 5})))
        .await;
    assert!(matches!(filtered_out, Err(AppError::Validation(_))));

    let movie: Movie = repository
        .fetch_one(EntityKind::Movie, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(movie.year, 2021);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let repository = test_repository().await;

    let result = repository
        .update(EntityKind::Movie, 999, &object(json!({"year": 2024})))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_exactly_one_row() {
    let repository = test_repository().await;
    let keep = repository.insert(EntityKind::Movie, &dune()).await.unwrap();
    let gone = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    repository.delete(EntityKind::Movie, gone).await.unwrap();

    let remaining: Vec<Movie> = repository.fetch_all(EntityKind::Movie).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);

    let again = repository.delete(EntityKind::Movie, gone).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_all_reports_prior_row_count() {
    let repository = test_repository().await;
    for _ in 0..3 {
        repository.insert(EntityKind::Movie, &dune()).await.unwrap();
    }

    let count = repository.delete_all(EntityKind::Movie).await.unwrap();
    assert_eq!(count, 3);

    let movies: Vec<Movie> = repository.fetch_all(EntityKind::Movie).await.unwrap();
    assert!(movies.is_empty());

    let empty = repository.delete_all(EntityKind::Movie).await.unwrap();
    assert_eq!(empty, 0);
}

#[tokio::test]
async fn actors_for_movie_requires_the_movie() {
    let repository = test_repository().await;

    let result = repository.actors_for_movie(1).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn actors_for_movie_with_empty_cast_is_an_empty_list() {
    let repository = test_repository().await;
    let movie_id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    let credits = repository.actors_for_movie(movie_id).await.unwrap();
    assert!(credits.is_empty());
}

#[tokio::test]
async fn link_then_query_cast() {
    let repository = test_repository().await;
    let movie_id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();
    let actor_id = repository
        .insert(
            EntityKind::Actor,
            &object(json!({"name": "Timothee", "surname": "Chalamet"})),
        )
        .await
        .unwrap();

    repository.link_actor(movie_id, actor_id).await.unwrap();
    // Idempotent on repeat
    repository.link_actor(movie_id, actor_id).await.unwrap();

    let credits = repository.actors_for_movie(movie_id).await.unwrap();
    assert_eq!(credits.len(), 1);
    assert_eq!(credits[0].name, "Timothee");
    assert_eq!(credits[0].surname, "Chalamet");
}

#[tokio::test]
async fn link_requires_both_rows() {
    let repository = test_repository().await;
    let movie_id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();

    let no_actor = repository.link_actor(movie_id, 42).await;
    assert!(matches!(no_actor, Err(AppError::NotFound(_))));

    let no_movie = repository.link_actor(999, 42).await;
    assert!(matches!(no_movie, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn unlink_removes_the_association() {
    let repository = test_repository().await;
    let movie_id = repository.insert(EntityKind::Movie, &dune()).await.unwrap();
    let actor_id = repository
        .insert(
            EntityKind::Actor,
            &object(json!({"name": "Zendaya", "surname": "Coleman"})),
        )
        .await
        .unwrap();

    repository.link_actor(movie_id, actor_id).await.unwrap();
    repository.unlink_actor(movie_id, actor_id).await.unwrap();

    let credits = repository.actors_for_movie(movie_id).await.unwrap();
    assert!(credits.is_empty());

    let again = repository.unlink_actor(movie_id, actor_id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
}
