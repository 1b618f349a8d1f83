//! Cinelog Movie Catalog Server
//!
//! A Rust REST API server exposing a catalog of movies and actors,
//! with a many-to-many relation between them, backed by SQLite.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: repository::Repository,
}
