//! Usage page and health endpoints
//!
//! The usage page is generated from the alias tables so it always
//! matches what the query endpoint accepts.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::query::aliases::{COLUMN_ALIASES, PREDICATE_ALIASES};

/// Create the documentation and health routes
pub fn docs_routes() -> Router {
    Router::new()
        .route("/", get(usage_handler))
        .route("/health", get(health_handler))
}

async fn usage_handler() -> Html<String> {
    Html(usage_page())
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Static usage page listing functions, columns, and worked examples.
fn usage_page() -> String {
    let mut page = String::from("<h1>Cops Data API</h1>");

    page.push_str("<h3>Usage:</h3>");

    page.push_str("<h4>Functions:</h4><ul>");
    for (name, code) in PREDICATE_ALIASES {
        page.push_str(&format!("<li>{} = {}</li>", code, name));
    }
    page.push_str("</ul>");

    page.push_str("<h4>Columns:</h4><ul>");
    for (alias, _, kind) in COLUMN_ALIASES {
        page.push_str(&format!("<li>{} : {}</li>", alias, kind));
    }
    page.push_str("</ul>");

    page.push_str("<h4>Example: /get?year=2010&column=unit&eq=Patrol Borough Bronx</h4>");
    page.push_str("<h4>Example: /get?year=2009&column=numComplaints&lt=250</h4>");

    page
}
