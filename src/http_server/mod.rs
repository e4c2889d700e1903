//! # copstat HTTP Server Module
//!
//! Axum-based HTTP surface for the query API. Bind address and CORS
//! policy come from the CLI configuration.
//!
//! # Endpoints
//!
//! - `/` - Usage page (columns, functions, examples)
//! - `/get` - Filtered query endpoint
//! - `/health` - Health check

pub mod docs_routes;
pub mod query_routes;
pub mod response;
pub mod server;

pub use server::HttpServer;
