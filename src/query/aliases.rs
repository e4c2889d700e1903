//! Public alias tables for columns and predicate functions
//!
//! Fixed at compile time. The usage page is generated from these same
//! tables, so the documentation cannot drift from lookup behavior.

/// Public column alias, internal column label, and the value kind shown
/// on the usage page.
pub const COLUMN_ALIASES: &[(&str, &str, &str)] = &[
    ("rank", "Ranking", "integer"),
    ("unit", "Precinct/Unit", "string"),
    ("numComplaints", "Complaints Count", "integer"),
    ("numSubOfficers", "Number Of Subject Officers", "integer"),
];

/// Public predicate name -> short code used in query strings.
pub const PREDICATE_ALIASES: &[(&str, &str)] = &[
    ("lessThan", "lt"),
    ("greaterThan", "gt"),
    ("equalTo", "eq"),
];

/// Resolve a public column alias to the dataset's internal label.
pub fn resolve_column(alias: &str) -> Option<&'static str> {
    COLUMN_ALIASES
        .iter()
        .find(|(public, _, _)| *public == alias)
        .map(|(_, label, _)| *label)
}

/// Internal labels every loaded dataset must carry.
pub fn internal_labels() -> impl Iterator<Item = &'static str> {
    COLUMN_ALIASES.iter().map(|(_, label, _)| *label)
}
