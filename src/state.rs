//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup and cloned into every handler; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
