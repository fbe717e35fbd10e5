//! Database layer - Redis connection and search index access.

pub mod index;
pub mod search;

use redis::aio::ConnectionManager;

use crate::config::RedisConfig;
use crate::Result;

/// Open a managed connection to Redis and verify it with a PING.
///
/// The returned [`ConnectionManager`] reconnects automatically and is a
/// cheap clone, shared across request handlers.
pub async fn connect(config: &RedisConfig) -> Result<ConnectionManager> {
    let client = redis::Client::open(config.url.as_str())?;
    let mut manager = ConnectionManager::new(client).await?;

    redis::cmd("PING")
        .query_async::<String>(&mut manager)
        .await?;

    tracing::info!("Connected to Redis");
    Ok(manager)
}
