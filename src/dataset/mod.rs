//! # Dataset Store
//!
//! Loads the backing CSV once at startup and holds it as process-wide
//! read-only state for the lifetime of the server. There is no reload
//! and no write path.

pub mod errors;
pub mod loader;
pub mod table;

pub use errors::{DatasetError, DatasetResult};
pub use loader::load_dataset;
pub use table::{CellValue, Dataset, Row, YEAR_COLUMN};
