//! Query string parsing
//!
//! Extracts the required year, the column alias, and exactly one
//! predicate from the request parameters. A parameter whose value is
//! the literal string "None" is treated as absent, which models
//! clients that serialize missing values that way.

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};
use super::predicate::{EqValue, Predicate};

/// A single parsed query: one year, one column alias, one predicate.
/// Constructed per request and discarded after the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearQuery {
    pub year: i64,
    pub column: String,
    pub predicate: Predicate,
}

impl YearQuery {
    /// Parse request parameters into a query.
    ///
    /// Predicate precedence is fixed: lt, then gt, then eq. The first
    /// one present wins; later ones are ignored even when supplied.
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        let year = match param(params, "year") {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| QueryError::InvalidYear(raw.to_string()))?,
            None => return Err(QueryError::InvalidYear("missing".to_string())),
        };

        let predicate = if let Some(raw) = param(params, "lt") {
            Predicate::LessThan(parse_bound("lt", raw)?)
        } else if let Some(raw) = param(params, "gt") {
            Predicate::GreaterThan(parse_bound("gt", raw)?)
        } else if let Some(raw) = param(params, "eq") {
            Predicate::EqualTo(EqValue::from_raw(raw))
        } else {
            return Err(QueryError::NoPredicate);
        };

        let column = param(params, "column")
            .ok_or(QueryError::MissingColumn)?
            .to_string();

        Ok(Self {
            year,
            column,
            predicate,
        })
    }
}

/// Fetch a parameter, treating the literal string "None" as absent.
fn param<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    match params.get(key).map(String::as_str) {
        None | Some("None") => None,
        Some(value) => Some(value),
    }
}

/// Parse an ordering bound, which must be an integer.
fn parse_bound(param: &'static str, raw: &str) -> QueryResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| QueryError::InvalidPredicateValue {
            param,
            value: raw.to_string(),
        })
}
