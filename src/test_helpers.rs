use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use crate::{routes::router, state::AppState};

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::MySql)
}

/// Builds a router sharing the given mock connection, so callers can still
/// inspect its transaction log afterwards. `DatabaseConnection` is not `Clone`
/// with the `mock` feature enabled, but the mock variant wraps an `Arc`.
pub fn test_router(db: &DatabaseConnection) -> Router {
    let db = match db {
        DatabaseConnection::MockDatabaseConnection(conn) => {
            DatabaseConnection::MockDatabaseConnection(Arc::clone(conn))
        }
        _ => panic!("test_router expects a mock database connection"),
    };
    router(AppState::new(db))
}
