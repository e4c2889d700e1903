//! copstat - HTTP API over NYPD complaint statistics
//!
//! Filters a static complaint statistics table by year and one
//! comparison predicate per request.

pub mod cli;
pub mod dataset;
pub mod http_server;
pub mod observability;
pub mod query;
