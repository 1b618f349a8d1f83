//! Actor model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full actor row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

/// Actor as credited in a movie's cast (join query result)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActorCredit {
    pub name: String,
    pub surname: String,
}

/// Create actor request (documentation schema; see `CreateMovie`)
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateActor {
    pub name: String,
    pub surname: String,
}

/// Update actor request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub surname: Option<String>,
}
