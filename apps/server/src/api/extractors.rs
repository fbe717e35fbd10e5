//! Custom Axum extractors.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::config::ServerConfig;

/// Resolved pagination window, computed from `page`/`per_page` query
/// parameters before any handler logic runs.
///
/// `page` is 1-based and defaults to 1; `per_page` defaults to the
/// configured page size and is clamped to the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    fn resolve(page: usize, per_page: usize, max_page_size: usize) -> Self {
        let limit = per_page.min(max_page_size);
        Self {
            offset: (page - 1).saturating_mul(limit),
            limit,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PaginationQuery {
    page: Option<String>,
    per_page: Option<String>,
}

/// Error type for [`Pagination`] extraction failures.
pub struct PaginationRejection {
    message: String,
}

impl IntoResponse for PaginationRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
    ServerConfig: FromRef<S>,
{
    type Rejection = PaginationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let server = ServerConfig::from_ref(state);

        let Query(query) =
            Query::<PaginationQuery>::try_from_uri(&parts.uri).map_err(|err| {
                PaginationRejection {
                    message: format!("Invalid query string: {err}"),
                }
            })?;

        let page = parse_positive(query.page.as_deref(), "page")?.unwrap_or(1);
        let per_page =
            parse_positive(query.per_page.as_deref(), "per_page")?.unwrap_or(server.default_page_size);

        Ok(Self::resolve(page, per_page, server.max_page_size))
    }
}

fn parse_positive(
    raw: Option<&str>,
    name: &str,
) -> Result<Option<usize>, PaginationRejection> {
    match raw {
        None => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .ok()
            .filter(|parsed| *parsed >= 1)
            .map(Some)
            .ok_or_else(|| PaginationRejection {
                message: format!("Invalid {name} parameter: must be a positive integer"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn extract(uri: &str) -> Result<Pagination, String> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let server = ServerConfig::default();
        tokio_test::block_on(Pagination::from_request_parts(&mut parts, &server))
            .map_err(|rejection| rejection.message)
    }

    #[test]
    fn test_defaults_to_first_page() {
        assert_eq!(
            extract("/cocktails").unwrap(),
            Pagination {
                offset: 0,
                limit: 20
            }
        );
    }

    #[test]
    fn test_offset_grows_with_page() {
        assert_eq!(
            extract("/cocktails?page=3&per_page=10").unwrap(),
            Pagination {
                offset: 20,
                limit: 10
            }
        );
    }

    #[test]
    fn test_per_page_is_clamped_to_cap() {
        assert_eq!(extract("/cocktails?per_page=5000").unwrap().limit, 100);
    }

    #[test]
    fn test_offset_uses_clamped_limit() {
        assert_eq!(
            extract("/cocktails?page=2&per_page=5000").unwrap(),
            Pagination {
                offset: 100,
                limit: 100
            }
        );
    }

    #[test]
    fn test_zero_page_rejected() {
        assert!(extract("/cocktails?page=0").is_err());
    }

    #[test]
    fn test_non_numeric_per_page_rejected() {
        assert!(extract("/cocktails?per_page=lots").is_err());
    }

    #[test]
    fn test_unrelated_parameters_are_ignored() {
        assert!(extract("/cocktails?search=moj&fields=name").is_ok());
    }
}
