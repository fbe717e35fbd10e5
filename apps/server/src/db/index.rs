//! Search index provisioning.
//!
//! Creates the full-text index of each collection at startup:
//! `FT.CREATE idx:<collection> ON hash PREFIX 1 <prefix> SCHEMA ...`.
//! Provisioning is idempotent: an "already exists" reply is success, and
//! any other failure is logged and skipped so the server still starts when
//! indexes are managed out of band.

use redis::aio::ConnectionManager;

use crate::models::Collection;

pub async fn ensure_indexes(conn: &mut ConnectionManager) {
    for collection in Collection::ALL {
        match create_index(conn, collection).await {
            Ok(()) => {
                tracing::info!(index = collection.index_name(), "Created search index");
            }
            Err(err) if index_exists(&err) => {
                tracing::debug!(
                    index = collection.index_name(),
                    "Search index already exists"
                );
            }
            Err(err) => {
                tracing::warn!(
                    index = collection.index_name(),
                    error = %err,
                    "Couldn't create search index"
                );
            }
        }
    }
}

async fn create_index(
    conn: &mut ConnectionManager,
    collection: Collection,
) -> redis::RedisResult<()> {
    let mut command = redis::cmd("FT.CREATE");
    command
        .arg(collection.index_name())
        .arg("ON")
        .arg("hash")
        .arg("PREFIX")
        .arg(1)
        .arg(collection.key_prefix())
        .arg("SCHEMA");

    for (field, kind) in collection.schema() {
        command.arg(*field).arg(*kind);
    }

    command.query_async::<()>(conn).await
}

fn index_exists(err: &redis::RedisError) -> bool {
    let msg = err.to_string().to_ascii_lowercase();
    msg.contains("index") && msg.contains("already exists")
}
