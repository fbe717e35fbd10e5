//! Application state shared across request handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::{Config, ServerConfig};
use crate::db;
use crate::services::SearchService;

/// Shared application state: configuration plus the search service.
///
/// Cloned per request; everything inside is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_service: Arc<SearchService>,
}

impl AppState {
    /// Connect to Redis, provision the search indexes, and wire services.
    pub async fn new(config: Config) -> crate::Result<Self> {
        let redis = db::connect(&config.redis).await?;

        let mut conn = redis.clone();
        db::index::ensure_indexes(&mut conn).await;

        let search_service = Arc::new(SearchService::new(redis));

        Ok(Self {
            config: Arc::new(config),
            search_service,
        })
    }
}

impl FromRef<AppState> for ServerConfig {
    fn from_ref(state: &AppState) -> Self {
        state.config.server.clone()
    }
}
