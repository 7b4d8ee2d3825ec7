use sqlx::SqlitePool;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Storage handle. Every catalog and application call receives it explicitly.
    pub db: SqlitePool,
}
