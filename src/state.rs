use sqlx::PgPool;

/// Shared application state, injected into handlers via `axum::extract::State`
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
