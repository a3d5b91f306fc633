use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::Services;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health check.
    pub pool: quizz_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// One CRUD service per resource.
    pub services: Services,
}
