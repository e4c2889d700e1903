//! # Query resolution
//!
//! Maps a year, a column alias, and one comparison predicate onto the
//! dataset: parse, resolve, filter. All validation happens here, before
//! any row is touched.

pub mod aliases;
pub mod errors;
pub mod executor;
pub mod parser;
pub mod predicate;

pub use errors::{ErrorResponse, QueryError, QueryResult};
pub use executor::{execute, ResultSet};
pub use parser::YearQuery;
pub use predicate::{EqValue, Predicate};
