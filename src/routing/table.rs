//! Path to transform table.

use thiserror::Error;

use crate::matrix::Transform;

/// A path the router cannot mount as a literal route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path `{0}` must start with `/`")]
    MissingSlash(String),

    #[error("route path `{0}` contains a capture or wildcard")]
    NotLiteral(String),
}

/// A single mounted route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub transform: Transform,
}

/// Immutable set of routes the server mounts.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from explicit entries.
    ///
    /// Paths must be literal and absolute. Later entries for an
    /// already-present path are ignored.
    pub fn new(
        entries: impl IntoIterator<Item = (String, Transform)>,
    ) -> Result<Self, RouteError> {
        let mut routes: Vec<Route> = Vec::new();
        for (path, transform) in entries {
            check_path(&path)?;
            if routes.iter().any(|r| r.path == path) {
                tracing::warn!(path = %path, "Duplicate route ignored");
                continue;
            }
            routes.push(Route { path, transform });
        }
        Ok(Self { routes })
    }

    /// Every transform mounted at `/<name>`.
    pub fn standard() -> Self {
        let routes = Transform::ALL
            .into_iter()
            .map(|transform| Route {
                path: format!("/{}", transform.name()),
                transform,
            })
            .collect();
        Self { routes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_path(path: &str) -> Result<(), RouteError> {
    if !path.starts_with('/') {
        return Err(RouteError::MissingSlash(path.to_string()));
    }
    // Axum reads these as captures and wildcards, not literal text.
    if path.contains(['{', '}', '*', ':']) {
        return Err(RouteError::NotLiteral(path.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(table: &RouteTable, path: &str) -> Option<Transform> {
        table.iter().find(|r| r.path == path).map(|r| r.transform)
    }

    #[test]
    fn test_standard_routes() {
        let table = RouteTable::standard();
        assert_eq!(table.iter().count(), 5);
        assert_eq!(lookup(&table, "/echo"), Some(Transform::Echo));
        assert_eq!(lookup(&table, "/invert"), Some(Transform::Invert));
        assert_eq!(lookup(&table, "/flatten"), Some(Transform::Flatten));
        assert_eq!(lookup(&table, "/sum"), Some(Transform::Sum));
        assert_eq!(lookup(&table, "/multiply"), Some(Transform::Multiply));
        assert_eq!(lookup(&table, "/divide"), None);
        assert_eq!(lookup(&table, "/Echo"), None); // Case sensitive
    }

    #[test]
    fn test_first_entry_wins() {
        let table = RouteTable::new([
            ("/calc".to_string(), Transform::Sum),
            ("/calc".to_string(), Transform::Multiply),
        ])
        .unwrap();
        assert_eq!(table.iter().count(), 1);
        assert_eq!(lookup(&table, "/calc"), Some(Transform::Sum));
    }

    #[test]
    fn test_rejects_relative_path() {
        let err = RouteTable::new([("sum".to_string(), Transform::Sum)]).unwrap_err();
        assert_eq!(err, RouteError::MissingSlash("sum".to_string()));

        let err = RouteTable::new([(String::new(), Transform::Echo)]).unwrap_err();
        assert_eq!(err, RouteError::MissingSlash(String::new()));
    }

    #[test]
    fn test_rejects_captures_and_wildcards() {
        for path in ["/{op}", "/files/*rest", "/:op"] {
            let err = RouteTable::new([(path.to_string(), Transform::Echo)]).unwrap_err();
            assert_eq!(err, RouteError::NotLiteral(path.to_string()));
        }
    }

    #[test]
    fn test_standard_paths_pass_check() {
        for route in RouteTable::standard().iter() {
            assert!(check_path(&route.path).is_ok());
        }
    }
}
