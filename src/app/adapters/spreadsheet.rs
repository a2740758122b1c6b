//! File-reading adapters for the import pipeline
//!
//! Turns delimited-text files into the raw cell matrix the pipeline
//! consumes, and loads the caller-side JSON artifacts: the reference
//! catalog, the optional batch context, pre-keyed row sequences, and alias
//! overlays. Binary spreadsheet decoding is out of scope; exports must be
//! saved as delimited text or structured JSON first.
//!
//! Cells read from delimited text stay textual: CSV carries no types, and
//! eagerly parsing digit strings into floats is exactly the corruption the
//! numeric repair exists to undo. Numeric cells only arrive through JSON
//! input, where the source spreadsheet already stored them as numbers.

use crate::app::models::{CellValue, ImportContext, RawRow, ReferenceCatalog};
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read a delimited-text file into a raw cell matrix
pub fn read_delimited_matrix(path: &Path, delimiter: u8) -> Result<Vec<Vec<CellValue>>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| {
            Error::csv_reading(
                path.display().to_string(),
                "failed to open input file",
                Some(e),
            )
        })?;

    let mut matrix = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            Error::csv_reading(path.display().to_string(), "malformed record", Some(e))
        })?;
        let cells: Vec<CellValue> = record.iter().map(parse_cell).collect();
        matrix.push(cells);
    }

    info!("read {} rows from {}", matrix.len(), path.display());
    Ok(matrix)
}

fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        CellValue::Empty
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Read a pre-keyed row sequence from a JSON array of objects
///
/// Column order inside each object is preserved as it appears in the
/// document.
pub fn read_keyed_rows(path: &Path) -> Result<Vec<RawRow>> {
    let content = read_file(path)?;
    let rows: Vec<RawRow> = serde_json::from_str(&content).map_err(|e| {
        Error::json_parsing(
            path.display().to_string(),
            "expected a JSON array of row objects",
            Some(e),
        )
    })?;
    debug!("read {} keyed rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the reference catalog fetched by the caller
///
/// An empty catalog is rejected here: detecting it before invocation is the
/// caller's responsibility, and running the resolver against nothing would
/// reject every row with a misleading diagnostic.
pub fn load_catalog(path: &Path) -> Result<ReferenceCatalog> {
    let content = read_file(path)?;
    let catalog: ReferenceCatalog = serde_json::from_str(&content).map_err(|e| {
        Error::json_parsing(
            path.display().to_string(),
            "expected {stages: [...], classes: [...]}",
            Some(e),
        )
    })?;

    if catalog.is_empty() {
        return Err(Error::catalog("catalog contains no stages"));
    }

    info!(
        "loaded catalog: {} stages, {} classes",
        catalog.stages.len(),
        catalog.classes.len()
    );
    Ok(catalog)
}

/// Load a batch context override
pub fn load_context(path: &Path) -> Result<ImportContext> {
    let content = read_file(path)?;
    let context: ImportContext = serde_json::from_str(&content).map_err(|e| {
        Error::json_parsing(path.display().to_string(), "invalid import context", Some(e))
    })?;
    Ok(context)
}

/// Read an alias overlay file's raw JSON for dictionary merging
pub fn read_alias_overlay(path: &Path) -> Result<String> {
    read_file(path)
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_delimited_matrix_keeps_cells_textual() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "اسم الطالب,النوع,الرقم القومي").unwrap();
        writeln!(file, "أحمد سمير,ذكر,01234567890123").unwrap();

        let matrix = read_delimited_matrix(file.path(), b',').unwrap();
        assert_eq!(matrix.len(), 2);
        // Leading zero survives because the cell stays text
        assert_eq!(
            matrix[1][2],
            CellValue::Text("01234567890123".to_string())
        );
    }

    #[test]
    fn test_read_delimited_matrix_handles_ragged_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a,b,c").unwrap();
        writeln!(file, "1,2").unwrap();

        let matrix = read_delimited_matrix(file.path(), b',').unwrap();
        assert_eq!(matrix[0].len(), 3);
        assert_eq!(matrix[1].len(), 2);
    }

    #[test]
    fn test_blank_cells_become_empty() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a,,c").unwrap();

        let matrix = read_delimited_matrix(file.path(), b',').unwrap();
        assert_eq!(matrix[0][1], CellValue::Empty);
    }

    #[test]
    fn test_missing_input_file_is_reported() {
        let result = read_delimited_matrix(Path::new("/nonexistent/students.csv"), b',');
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_load_catalog_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"stages":[{{"id":"s1","name":"الصف الأول الابتدائي"}}],
                "classes":[{{"id":"c1","name":"أ","stageId":"s1"}}]}}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.stages.len(), 1);
        assert_eq!(catalog.classes[0].stage_id, "s1");
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"stages":[],"classes":[]}}"#).unwrap();

        assert!(matches!(
            load_catalog(file.path()),
            Err(Error::Catalog { .. })
        ));
    }

    #[test]
    fn test_read_keyed_rows_preserves_column_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"اسم الطالب":"منى خالد","النوع":"أنثى","الرقم القومي":3.01e13}}]"#
        )
        .unwrap();

        let rows = read_keyed_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        let headers: Vec<&str> = rows[0].iter().map(|(h, _)| h).collect();
        assert_eq!(headers, vec!["اسم الطالب", "النوع", "الرقم القومي"]);
        assert_eq!(rows[0].get("الرقم القومي"), Some(&CellValue::Number(3.01e13)));
    }
}
