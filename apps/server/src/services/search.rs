//! Search service - collection listing over the search engine.
//!
//! Orchestrates one search round trip: build the query expression from
//! request parameters, execute `FT.SEARCH` against the collection's index,
//! decode the reply into typed records. The service itself holds no
//! request state; each call is independent.

use redis::aio::ConnectionManager;
use redis::Value;

use crate::db::search::{build_query, decode};
use crate::models::{Collection, DecodedResult};
use crate::Result;

pub struct SearchService {
    redis: ConnectionManager,
}

impl SearchService {
    pub fn new(redis: ConnectionManager) -> Self {
        Self { redis }
    }

    /// List one page of a collection.
    ///
    /// `search_term` requests a prefix match, `tag_filter` is a
    /// comma-separated ingredient-tag list (cocktails only), `fields` a
    /// comma-separated selection of record fields to return. All three
    /// may be empty. `offset`/`limit` are assumed already validated by
    /// the pagination layer.
    pub async fn list(
        &self,
        collection: Collection,
        search_term: &str,
        tag_filter: &str,
        fields: &str,
        offset: usize,
        limit: usize,
    ) -> Result<DecodedResult> {
        let query = build_query(collection, search_term, tag_filter, fields);

        tracing::debug!(
            index = collection.index_name(),
            expression = %query.expression,
            offset,
            limit,
            "Executing search"
        );

        let mut conn = self.redis.clone();
        let raw: Value = redis::cmd("FT.SEARCH")
            .arg(collection.index_name())
            .arg(&query.expression)
            .arg("LIMIT")
            .arg(offset)
            .arg(limit)
            .query_async(&mut conn)
            .await?;

        decode(&raw, &query.fields)
    }
}
