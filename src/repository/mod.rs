//! Repository layer for database operations

pub mod catalog;

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Create the catalog tables if they do not already exist.
    ///
    /// Runs at startup; safe to call against a database that already has
    /// the schema. Referential integrity on the junction table is declared
    /// but not enforced by application logic.
    pub async fn init_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movie (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                director TEXT NOT NULL,
                year INTEGER NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS actor (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                surname TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS movie_actor (
                movie_id INTEGER NOT NULL REFERENCES movie(id),
                actor_id INTEGER NOT NULL REFERENCES actor(id),
                PRIMARY KEY (movie_id, actor_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
