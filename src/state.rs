use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::database::repository::ContentRepository;

/// Shared router state: the store handle and configuration are injected here
/// at startup and cloned per request. Connect once, fail fast on error, never
/// reconnect mid-request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: ContentRepository,
}

impl AppState {
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self {
            config: Arc::new(config),
            repository: ContentRepository::new(pool),
        }
    }
}
