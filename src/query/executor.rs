//! Query execution over the in-memory dataset
//!
//! Step 1 selects the year partition, step 2 resolves the column alias
//! and applies the predicate. The dataset is never mutated; every
//! query produces a fresh, independent result set.

use crate::dataset::{Dataset, Row};

use super::aliases;
use super::errors::{QueryError, QueryResult};
use super::parser::YearQuery;

/// Rows matching one query, keyed by their dataset position.
#[derive(Debug)]
pub struct ResultSet<'a> {
    pub rows: Vec<(usize, &'a Row)>,
}

impl ResultSet<'_> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Apply a query to the dataset.
///
/// A year with no rows yields an empty result set, not an error. An
/// unresolvable column alias fails before any filtering happens.
pub fn execute<'a>(dataset: &'a Dataset, query: &YearQuery) -> QueryResult<ResultSet<'a>> {
    let label = aliases::resolve_column(&query.column)
        .ok_or_else(|| QueryError::UnknownColumn(query.column.clone()))?;

    let rows = dataset
        .year_group(query.year)
        .into_iter()
        .filter(|(_, row)| {
            row.get(label)
                .map(|cell| query.predicate.matches(cell))
                .unwrap_or(false)
        })
        .collect();

    Ok(ResultSet { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;
    use crate::query::predicate::{EqValue, Predicate};

    fn dataset() -> Dataset {
        let columns = vec![
            "Year".to_string(),
            "Ranking".to_string(),
            "Precinct/Unit".to_string(),
            "Complaints Count".to_string(),
        ];

        let rows = vec![
            (2009, 1, "Patrol Borough Bronx", 420),
            (2009, 2, "Housing Bureau", 180),
            (2010, 1, "Patrol Borough Bronx", 398),
            (2010, 2, "Transit Bureau", 190),
        ]
        .into_iter()
        .map(|(year, rank, unit, complaints)| {
            let mut row = Row::new();
            row.insert("Year".to_string(), CellValue::Integer(year));
            row.insert("Ranking".to_string(), CellValue::Integer(rank));
            row.insert("Precinct/Unit".to_string(), CellValue::Text(unit.to_string()));
            row.insert(
                "Complaints Count".to_string(),
                CellValue::Integer(complaints),
            );
            row
        })
        .collect();

        Dataset::new(columns, rows)
    }

    fn query(year: i64, column: &str, predicate: Predicate) -> YearQuery {
        YearQuery {
            year,
            column: column.to_string(),
            predicate,
        }
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let dataset = dataset();
        let result = execute(
            &dataset,
            &query(2009, "numComplaints", Predicate::LessThan(250)),
        )
        .unwrap();

        // Only the 2009 Housing Bureau row is below the bound
        assert_eq!(result.len(), 1);
        let (index, row) = result.rows[0];
        assert_eq!(index, 1);
        assert_eq!(row.get("Complaints Count"), Some(&CellValue::Integer(180)));
    }

    #[test]
    fn test_year_partition_excludes_other_years() {
        let dataset = dataset();
        let result = execute(
            &dataset,
            &query(2010, "numComplaints", Predicate::GreaterThan(0)),
        )
        .unwrap();

        let indices: Vec<usize> = result.rows.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![2, 3]);
        for (_, row) in &result.rows {
            assert_eq!(row.get("Year"), Some(&CellValue::Integer(2010)));
        }
    }

    #[test]
    fn test_empty_year_is_not_an_error() {
        let dataset = dataset();
        let result = execute(
            &dataset,
            &query(9999, "numComplaints", Predicate::GreaterThan(0)),
        )
        .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_column_fails_before_filtering() {
        let dataset = dataset();
        let result = execute(&dataset, &query(2009, "salary", Predicate::GreaterThan(0)));
        assert_eq!(
            result.unwrap_err(),
            QueryError::UnknownColumn("salary".to_string())
        );
    }

    #[test]
    fn test_text_equality_on_aliased_column() {
        let dataset = dataset();
        let result = execute(
            &dataset,
            &query(
                2010,
                "unit",
                Predicate::EqualTo(EqValue::Text("Patrol Borough Bronx".to_string())),
            ),
        )
        .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.rows[0].0, 2);
    }
}
