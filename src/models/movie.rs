//! Movie model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full movie row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i64,
    pub description: String,
}

/// Create movie request.
///
/// Documentation schema only: the handler accepts a free-form JSON object so
/// it can report every missing required field at once. Unknown fields are
/// silently ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovie {
    pub title: String,
    pub director: String,
    pub year: i64,
    pub description: String,
}

/// Update movie request. All fields optional; fields outside the writable
/// set are silently dropped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
    pub description: Option<String>,
}
