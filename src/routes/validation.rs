use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, Result};

/// `?page=N` query string
///
/// Kept as raw text: a value that is not an integer falls back to page 1.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Unwrap a JSON body, mapping any rejection (bad syntax, wrong content type,
/// mistyped field) to a bad request
pub fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::warn!("Rejected JSON body: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    })
}

/// Unwrap an integer path id; a non-integer id names no resource
pub fn path_id(id: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    id.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected path id: {}", rejection.body_text());
        AppError::NotFound
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
        }
    }

    #[test]
    fn test_page_defaults_to_one() {
        assert_eq!(query(None).page(), 1);
        assert_eq!(query(Some("abc")).page(), 1);
        assert_eq!(query(Some("")).page(), 1);
    }

    #[test]
    fn test_page_parses_integers() {
        assert_eq!(query(Some("3")).page(), 3);
        assert_eq!(query(Some("0")).page(), 0);
        assert_eq!(query(Some("-2")).page(), -2);
    }
}
