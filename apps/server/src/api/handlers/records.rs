//! Collection listing handlers.
//!
//! One shared implementation serves all three collections; the route table
//! binds each path to a thin wrapper that fixes the [`Collection`]. Only
//! three collections exist, so a closed enum beats any open dispatch.

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value as JsonValue};

use crate::{
    api::extractors::Pagination,
    models::{Collection, DecodedResult},
    state::AppState,
    Result,
};

/// Query parameters accepted by every collection route.
///
/// `ingredients` only has an effect on `/cocktails`; the query builder
/// ignores it elsewhere. Absent parameters default to empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Free-text term, prefix-matched against the collection's text fields.
    pub search: Option<String>,
    /// Comma-separated ingredient tag values (cocktails only).
    pub ingredients: Option<String>,
    /// Comma-separated selection of record fields to return.
    pub fields: Option<String>,
}

/// List ingredients (GET /ingredients)
pub async fn list_ingredients(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<ListParams>,
) -> Result<Json<JsonValue>> {
    handle_list(state, Collection::Ingredients, pagination, params).await
}

/// List alcohols (GET /alcohols)
pub async fn list_alcohols(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<ListParams>,
) -> Result<Json<JsonValue>> {
    handle_list(state, Collection::Alcohols, pagination, params).await
}

/// List cocktails (GET /cocktails), optionally filtered by ingredient tags.
pub async fn list_cocktails(
    State(state): State<AppState>,
    pagination: Pagination,
    Query(params): Query<ListParams>,
) -> Result<Json<JsonValue>> {
    handle_list(state, Collection::Cocktails, pagination, params).await
}

/// Common listing logic shared across all collection routes.
async fn handle_list(
    state: AppState,
    collection: Collection,
    pagination: Pagination,
    params: ListParams,
) -> Result<Json<JsonValue>> {
    let result = state
        .search_service
        .list(
            collection,
            params.search.as_deref().unwrap_or(""),
            params.ingredients.as_deref().unwrap_or(""),
            params.fields.as_deref().unwrap_or(""),
            pagination.offset,
            pagination.limit,
        )
        .await?;

    Ok(Json(envelope(collection, &result)))
}

/// Success payload: `{"count": <total>, "<collection>": [<record>, ...]}`.
fn envelope(collection: Collection, result: &DecodedResult) -> JsonValue {
    let mut body = Map::new();
    body.insert("count".to_string(), json!(result.count));
    body.insert(
        collection.response_key().to_string(),
        json!(&result.records),
    );
    JsonValue::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_envelope_keys_follow_collection() {
        let result = DecodedResult {
            count: 3,
            records: vec![Record::from([("name".to_string(), "Mojito".to_string())])],
        };

        let body = envelope(Collection::Cocktails, &result);
        assert_eq!(body["count"], 3);
        assert_eq!(body["cocktails"][0]["name"], "Mojito");
        assert!(body.get("ingredients").is_none());
    }

    #[test]
    fn test_envelope_count_is_independent_of_page() {
        let result = DecodedResult {
            count: 250,
            records: Vec::new(),
        };

        let body = envelope(Collection::Ingredients, &result);
        assert_eq!(body["count"], 250);
        assert_eq!(body["ingredients"], json!([]));
    }
}
