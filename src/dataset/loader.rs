//! CSV loader for the complaint statistics table
//!
//! Runs exactly once at boot. A missing file, malformed CSV, or absent
//! required column is fatal: the process must not serve without its
//! dataset.

use std::path::Path;

use super::errors::{DatasetError, DatasetResult};
use super::table::{CellValue, Dataset, Row};

/// Load a dataset from `path`, verifying that the header carries every
/// column in `required_columns`.
pub fn load_dataset(path: &Path, required_columns: &[&str]) -> DatasetResult<Dataset> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    for column in required_columns {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut row = Row::new();
        for (idx, field) in record.iter().enumerate() {
            if let Some(label) = headers.get(idx) {
                row.insert(label.clone(), CellValue::from_raw(field.trim()));
            }
        }
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("stats.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_types_cells() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Year,Ranking,Precinct/Unit\n2009,1,Patrol Borough Bronx\n2010,2,\n",
        );

        let dataset = load_dataset(&path, &["Year", "Ranking", "Precinct/Unit"]).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), &["Year", "Ranking", "Precinct/Unit"]);

        let group = dataset.year_group(2009);
        assert_eq!(group.len(), 1);
        let (_, row) = group[0];
        assert_eq!(row.get("Ranking"), Some(&CellValue::Integer(1)));
        assert_eq!(
            row.get("Precinct/Unit"),
            Some(&CellValue::Text("Patrol Borough Bronx".to_string()))
        );

        let group = dataset.year_group(2010);
        let (_, row) = group[0];
        assert_eq!(row.get("Precinct/Unit"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Year,Ranking\n2009,1\n");

        let result = load_dataset(&path, &["Year", "Complaints Count"]);
        assert!(matches!(
            result,
            Err(DatasetError::MissingColumn { column, .. }) if column == "Complaints Count"
        ));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.csv");

        let result = load_dataset(&path, &["Year"]);
        assert!(matches!(result, Err(DatasetError::Read { .. })));
    }

    #[test]
    fn test_header_whitespace_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Year, Ranking\n2009, 4\n");

        let dataset = load_dataset(&path, &["Year", "Ranking"]).unwrap();
        let (_, row) = dataset.year_group(2009)[0];
        assert_eq!(row.get("Ranking"), Some(&CellValue::Integer(4)));
    }
}
