//! Data models and entity metadata

pub mod actor;
pub mod movie;

use serde_json::{Map, Value};

/// The closed set of catalog entity kinds.
///
/// Data-access primitives are parameterized by this type instead of being
/// duplicated per entity; each variant carries the metadata the generic
/// CRUD code consults (table name, display label, field allow-lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Movie,
    Actor,
}

impl EntityKind {
    /// Database table name. Only these fixed names ever enter SQL text.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Movie => "movie",
            EntityKind::Actor => "actor",
        }
    }

    /// Display label used in response messages ("Movie not found").
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Movie => "Movie",
            EntityKind::Actor => "Actor",
        }
    }

    /// Lowercase plural used in delete-all messages.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Movie => "movies",
            EntityKind::Actor => "actors",
        }
    }

    /// Fields that must be present in a create payload.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Movie => &["title", "director", "year", "description"],
            EntityKind::Actor => &["name", "surname"],
        }
    }

    /// Fields a partial update is permitted to change. Column names from
    /// this allow-list are the only caller-influenced text interpolated
    /// into queries; values are always bound.
    pub fn writable_fields(self) -> &'static [&'static str] {
        match self {
            EntityKind::Movie => &["title", "director", "year", "description"],
            EntityKind::Actor => &["name", "surname"],
        }
    }

    /// Required fields absent from a create payload, in declaration order.
    pub fn missing_fields(self, payload: &Map<String, Value>) -> Vec<&'static str> {
        self.required_fields()
            .iter()
            .copied()
            .filter(|f| !payload.contains_key(*f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_metadata() {
        assert_eq!(EntityKind::Movie.table(), "movie");
        assert_eq!(
            EntityKind::Movie.required_fields(),
            &["title", "director", "year", "description"]
        );
    }

    #[test]
    fn actor_metadata() {
        assert_eq!(EntityKind::Actor.table(), "actor");
        assert_eq!(EntityKind::Actor.writable_fields(), &["name", "surname"]);
    }

    #[test]
    fn missing_fields_enumerates_every_absent_field() {
        let payload = json!({"title": "Dune", "year": 2021})
            .as_object()
            .cloned()
            .unwrap();
        assert_eq!(
            EntityKind::Movie.missing_fields(&payload),
            vec!["director", "description"]
        );
    }

    #[test]
    fn missing_fields_empty_when_payload_complete() {
        let payload = json!({"name": "Timothee", "surname": "Chalamet", "extra": 1})
            .as_object()
            .cloned()
            .unwrap();
        assert!(EntityKind::Actor.missing_fields(&payload).is_empty());
    }
}
