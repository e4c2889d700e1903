//! Query endpoint
//!
//! `GET /get?year=<int>&column=<alias>&lt=<int>|&gt=<int>|&eq=<value>`
//! returns the row-indexed JSON projection of the matching rows.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::dataset::Dataset;
use crate::observability::Logger;
use crate::query::{self, QueryError, YearQuery};

use super::response;

/// Create the query routes over a shared dataset
pub fn query_routes(dataset: Arc<Dataset>) -> Router {
    Router::new()
        .route("/get", get(get_handler))
        .with_state(dataset)
}

/// Query handler
async fn get_handler(
    State(dataset): State<Arc<Dataset>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, QueryError> {
    let parsed = YearQuery::parse(&params).map_err(rejected)?;
    let result = query::execute(&dataset, &parsed).map_err(rejected)?;

    Ok(Json(response::rows_by_index(&result)))
}

fn rejected(err: QueryError) -> QueryError {
    let reason = err.to_string();
    Logger::warn("QUERY_REJECTED", &[("reason", reason.as_str())]);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_routes_build() {
        let dataset = Arc::new(Dataset::new(Vec::new(), Vec::new()));
        let _router = query_routes(dataset);
    }
}
