//! Query validation errors
//!
//! Every variant is detected at the boundary (parsing or alias lookup)
//! before any filtering happens, and maps to a client error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `year` missing or not integer-parseable
    #[error("invalid year: {0}")]
    InvalidYear(String),

    /// Column alias not present in the alias table
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// A predicate was supplied without a column to apply it to
    #[error("missing required parameter: column")]
    MissingColumn,

    /// Ordering predicate value does not parse as an integer
    #[error("invalid {param} value: {value}")]
    InvalidPredicateValue { param: &'static str, value: String },

    /// None of lt, gt, eq present
    #[error("no predicate supplied: expected one of lt, gt, eq")]
    NoPredicate,
}

impl QueryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::InvalidYear(_)
            | QueryError::UnknownColumn(_)
            | QueryError::MissingColumn
            | QueryError::InvalidPredicateValue { .. }
            | QueryError::NoPredicate => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<QueryError> for ErrorResponse {
    fn from(err: QueryError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
