//! Catalog domain methods on Repository
//!
//! Generic CRUD primitives parameterized by `EntityKind` plus the
//! junction-table queries. Caller-supplied values are always bound as
//! query parameters; the only interpolated identifiers are table and
//! column names taken from the `EntityKind` allow-lists.

use serde_json::{Map, Value};
use sqlx::{
    query::Query,
    sqlite::{SqliteArguments, SqliteRow},
    Sqlite,
};

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{actor::ActorCredit, EntityKind},
};

/// Bind a scalar JSON value as the next query parameter. Arrays and
/// objects have no column representation and are rejected.
fn bind_scalar<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    field: &str,
    value: &'q Value,
) -> AppResult<Query<'q, Sqlite, SqliteArguments<'q>>> {
    match value {
        Value::Null => Ok(query.bind(None::<String>)),
        Value::Bool(b) => Ok(query.bind(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(query.bind(i))
            } else if let Some(f) = n.as_f64() {
                Ok(query.bind(f))
            } else {
                Err(AppError::Validation(format!(
                    "Field '{}' has an unsupported numeric value",
                    field
                )))
            }
        }
        Value::String(s) => Ok(query.bind(s.as_str())),
        Value::Array(_) | Value::Object(_) => Err(AppError::Validation(format!(
            "Field '{}' must be a scalar value",
            field
        ))),
    }
}

impl Repository {
    /// Fetch a single row by id; `None` when no row matches, so the
    /// caller decides the HTTP semantics.
    pub async fn fetch_one<T>(&self, kind: EntityKind, id: i64) -> AppResult<Option<T>>
    where
        T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let sql = format!("SELECT * FROM {} WHERE id = ?", kind.table());
        Ok(sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    /// Fetch every row of a kind, in database iteration order.
    pub async fn fetch_all<T>(&self, kind: EntityKind) -> AppResult<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let sql = format!("SELECT * FROM {}", kind.table());
        Ok(sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?)
    }

    /// Insert a new row from the payload's required fields and return the
    /// generated id. Presence of the required fields is checked by the
    /// HTTP layer before any write; extra payload fields are ignored here.
    pub async fn insert(&self, kind: EntityKind, payload: &Map<String, Value>) -> AppResult<i64> {
        let fields = kind.required_fields();
        let placeholders = vec!["?"; fields.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            kind.table(),
            fields.join(", "),
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for field in fields {
            let value = payload.get(*field).ok_or_else(|| {
                AppError::Validation(format!("Missing required fields: {}", field))
            })?;
            query = bind_scalar(query, field, value)?;
        }

        let result = query.execute(&self.pool).await?;
        Ok(result.last_insert_rowid())
    }

    /// Apply a partial update restricted to the writable field set.
    ///
    /// Fields outside the allow-list are dropped before this call; an
    /// empty surviving set is a validation error, and zero affected rows
    /// means the id has no matching row.
    pub async fn update(
        &self,
        kind: EntityKind,
        id: i64,
        updates: &Map<String, Value>,
    ) -> AppResult<()> {
        let fields: Vec<&'static str> = kind
            .writable_fields()
            .iter()
            .copied()
            .filter(|f| updates.contains_key(*f))
            .collect();

        if fields.is_empty() {
            return Err(AppError::Validation(
                "No fields provided for update".to_string(),
            ));
        }

        let assignments = fields
            .iter()
            .map(|f| format!("{} = ?", f))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", kind.table(), assignments);

        let mut query = sqlx::query(&sql);
        for field in &fields {
            query = bind_scalar(query, field, &updates[*field])?;
        }

        let result = query.bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} not found", kind.label())));
        }
        Ok(())
    }

    /// Delete a single row by id.
    pub async fn delete(&self, kind: EntityKind, id: i64) -> AppResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", kind.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("{} not found", kind.label())));
        }
        Ok(())
    }

    /// Delete every row of a kind, returning how many existed.
    pub async fn delete_all(&self, kind: EntityKind) -> AppResult<u64> {
        let sql = format!("DELETE FROM {}", kind.table());
        let result = sqlx::query(&sql).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Cast of a movie via the junction table.
    ///
    /// A missing movie is not-found; an existing movie with no associated
    /// actors yields an empty list.
    pub async fn actors_for_movie(&self, movie_id: i64) -> AppResult<Vec<ActorCredit>> {
        self.require_exists(EntityKind::Movie, movie_id).await?;

        let credits = sqlx::query_as::<_, ActorCredit>(
            r#"
            SELECT a.name, a.surname
            FROM movie_actor ma
            JOIN actor a ON a.id = ma.actor_id
            WHERE ma.movie_id = ?
            ORDER BY a.id
            "#,
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(credits)
    }

    /// Associate an actor with a movie. Idempotent; both rows must exist.
    /// The existence checks and the insert are not one transaction, so a
    /// concurrent delete can still orphan the association row.
    pub async fn link_actor(&self, movie_id: i64, actor_id: i64) -> AppResult<()> {
        self.require_exists(EntityKind::Movie, movie_id).await?;
        self.require_exists(EntityKind::Actor, actor_id).await?;

        sqlx::query("INSERT OR IGNORE INTO movie_actor (movie_id, actor_id) VALUES (?, ?)")
            .bind(movie_id)
            .bind(actor_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove an actor's association with a movie.
    pub async fn unlink_actor(&self, movie_id: i64, actor_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM movie_actor WHERE movie_id = ? AND actor_id = ?")
            .bind(movie_id)
            .bind(actor_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Actor is not in this movie's cast".to_string(),
            ));
        }
        Ok(())
    }

    async fn require_exists(&self, kind: EntityKind, id: i64) -> AppResult<()> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", kind.table());
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;

        match row {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("{} not found", kind.label()))),
        }
    }
}
