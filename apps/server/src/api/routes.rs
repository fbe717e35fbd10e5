//! API routes.
//!
//! One GET route per collection. All routes are read-only; the API never
//! writes to the index.

use axum::{routing::get, Router};

use crate::api::handlers::records;
use crate::state::AppState;

pub fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/ingredients", get(records::list_ingredients))
        .route("/alcohols", get(records::list_alcohols))
        .route("/cocktails", get(records::list_cocktails))
}
